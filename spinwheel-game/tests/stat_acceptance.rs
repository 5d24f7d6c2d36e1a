use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use spinwheel_game::constants::{EDGE_MARGIN_DEG, MARGIN_THRESHOLD_DEG};
use spinwheel_game::{
    HistoryLog, MemoryStore, WheelConfiguration, WheelEngine, WheelEntry, pick_weighted,
    pointer_angle, segment_at_pointer, segments,
};
use std::convert::TryFrom;

const SAMPLE_SIZE: usize = 20_000;
const TOLERANCE: f64 = 0.015;

fn config(weights: &[f64]) -> WheelConfiguration {
    WheelConfiguration::new(
        weights
            .iter()
            .enumerate()
            .map(|(i, w)| WheelEntry::new(format!("E{i}"), *w))
            .collect(),
    )
}

fn rate(count: usize) -> f64 {
    f64::from(u32::try_from(count).expect("count fits"))
        / f64::from(u32::try_from(SAMPLE_SIZE).expect("sample size fits"))
}

#[test]
fn selection_frequency_tracks_weights() {
    let cfg = config(&[5.0, 5.0, 5.0, 85.0]);
    let mut rng = SmallRng::seed_from_u64(0xACED);
    let mut counts = [0usize; 4];
    for _ in 0..SAMPLE_SIZE {
        let idx = pick_weighted(cfg.entries(), &mut rng).expect("positive total");
        counts[idx] += 1;
    }
    let expected = [0.05, 0.05, 0.05, 0.85];
    for (count, want) in counts.iter().zip(expected) {
        let observed = rate(*count);
        assert!(
            (observed - want).abs() <= TOLERANCE,
            "frequency drifted: observed {observed:.4}, expected {want:.4}"
        );
    }
}

#[test]
fn zero_weight_entries_are_never_selected() {
    let cfg = config(&[0.0, 3.0, 0.0, 1.0, 0.0]);
    let mut rng = SmallRng::seed_from_u64(0xF00D);
    for _ in 0..SAMPLE_SIZE {
        let idx = pick_weighted(cfg.entries(), &mut rng).expect("positive total");
        assert!(idx == 1 || idx == 3, "zero-weight entry {idx} selected");
    }
}

#[test]
fn huge_weights_still_split_evenly() {
    let cfg = config(&[1e308, 1e308]);
    assert!(cfg.is_spinnable());
    let mut rng = SmallRng::seed_from_u64(1);
    let mut counts = [0usize; 2];
    for _ in 0..SAMPLE_SIZE {
        let idx = pick_weighted(cfg.entries(), &mut rng).expect("positive total");
        counts[idx] += 1;
    }
    for count in counts {
        let observed = rate(count);
        assert!(
            (observed - 0.5).abs() <= TOLERANCE,
            "frequency drifted: observed {observed:.4}, expected 0.5000"
        );
    }
}

#[test]
fn leading_weight_with_zero_tail_always_wins() {
    let mut engine = WheelEngine::new(WheelConfiguration::new(vec![
        WheelEntry::new("A", 1.0),
        WheelEntry::new("B", 0.0),
    ]));
    let history = HistoryLog::new(MemoryStore::new());
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..500 {
        engine.spin(&mut rng).expect("spinnable");
        let outcome = engine.on_animation_complete(&history).expect("in flight");
        assert_eq!(outcome.name, "A");
        engine.take_result();
    }
}

#[test]
fn segment_boundaries_ignore_weights() {
    for n in 2..=60 {
        let segs = segments(n);
        let step = 360.0 / f64::from(u32::try_from(n).expect("fits"));
        for seg in &segs {
            assert!((seg.width() - step).abs() < 1e-9, "n={n} seg={seg:?}");
        }
        for pair in segs.windows(2) {
            assert!((pair[1].start - pair[0].end).abs() < 1e-9);
        }
    }
}

#[test]
fn landing_is_strictly_inside_winning_segment() {
    let mut rng = SmallRng::seed_from_u64(0xBEEF);
    for n in [2usize, 3, 4, 7, 12, 36, 40, 90] {
        let weights: Vec<f64> = (0..n)
            .map(|i| 1.0 + f64::from(u32::try_from(i % 3).expect("fits")))
            .collect();
        let mut engine = WheelEngine::new(config(&weights));
        let history = HistoryLog::new(MemoryStore::new());
        for _ in 0..300 {
            let plan = engine.spin(&mut rng).expect("spinnable");
            let seg = engine.segments()[plan.winner_index];
            let under_pointer = pointer_angle(plan.target_rotation);
            assert!(
                seg.contains_strictly(under_pointer),
                "n={n} landing {under_pointer} outside {seg:?}"
            );
            if seg.width() > MARGIN_THRESHOLD_DEG {
                assert!(plan.landing_angle - seg.start >= EDGE_MARGIN_DEG - 1e-9);
                assert!(seg.end - plan.landing_angle >= EDGE_MARGIN_DEG - 1e-9);
            } else {
                assert!((plan.landing_angle - seg.mid()).abs() < 1e-9);
            }
            assert_eq!(
                segment_at_pointer(plan.target_rotation, n),
                Some(plan.winner_index)
            );
            engine.on_animation_complete(&history);
        }
    }
}

#[test]
fn rotation_never_decreases() {
    let mut engine = WheelEngine::new(config(&[1.0, 2.0, 3.0]));
    let history = HistoryLog::new(MemoryStore::new());
    let mut rng = SmallRng::seed_from_u64(99);
    let mut previous = engine.rotation();
    for _ in 0..1_000 {
        let plan = engine.spin(&mut rng).expect("spinnable");
        assert!(plan.target_rotation >= previous + 1800.0);
        assert!(plan.target_rotation < previous + 2160.0);
        previous = plan.target_rotation;
        engine.on_animation_complete(&history);
        // exercise the resolved -> spin path on odd draws
        if rng.r#gen::<bool>() {
            engine.take_result();
        }
    }
}
