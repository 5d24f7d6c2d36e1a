use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use spinwheel_game::{
    MemoryStore, SpinWheel, WheelConfiguration, WheelStatus, segment_at_pointer,
};

/// Inputs for one seeded batch of spins.
#[derive(Debug, Clone)]
pub struct SimulationPlan {
    pub config: WheelConfiguration,
    pub spins: usize,
    pub seed: u64,
}

/// Everything the scenario checks need from a batch run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub seed: u64,
    pub spins_requested: usize,
    pub spins_completed: usize,
    /// Completed spins that wrote a history record. Blank-named winners do not.
    pub spins_recorded: usize,
    pub status_ready: bool,
    /// Selection count per entry, in configuration order.
    pub counts: Vec<usize>,
    pub final_rotation: f64,
    pub rotation_monotonic: bool,
    /// Spins whose pointer segment disagreed with the winner or whose landing
    /// point broke the edge margin.
    pub landing_violations: usize,
    /// Spin requests made mid-flight that were wrongly accepted.
    pub reentrant_spins_accepted: usize,
    /// Completion signals that committed more than once.
    pub duplicate_commits: usize,
    pub history_len: usize,
    pub history_newest_id: Option<u64>,
    pub history_ids_descending: bool,
}

fn simulation_epoch() -> DateTime<Utc> {
    Utc.timestamp_opt(1_735_689_600, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Run `plan.spins` full spin cycles against an in-memory store.
pub fn run_simulation(plan: &SimulationPlan) -> SimulationSummary {
    let store = MemoryStore::new();
    let wheel = SpinWheel::new(store);
    wheel.config_store().save(plan.config.entries());
    let mut engine = wheel.create_engine();
    let mut rng = ChaCha20Rng::seed_from_u64(plan.seed);
    let epoch = simulation_epoch();

    let count = engine.config().len();
    let mut summary = SimulationSummary {
        seed: plan.seed,
        spins_requested: plan.spins,
        status_ready: engine.status() == WheelStatus::Ready,
        counts: vec![0; count],
        rotation_monotonic: true,
        ..SimulationSummary::default()
    };

    let mut previous_rotation = engine.rotation();
    for step in 0..plan.spins {
        let Some(spin) = engine.spin(&mut rng) else {
            break;
        };

        if engine.spin(&mut rng).is_some() {
            summary.reentrant_spins_accepted += 1;
        }

        if spin.target_rotation < previous_rotation {
            summary.rotation_monotonic = false;
        }
        previous_rotation = spin.target_rotation;

        let landed = segment_at_pointer(spin.target_rotation, count);
        let margin_ok = engine
            .segments()
            .get(spin.winner_index)
            .is_some_and(|seg| seg.contains_strictly(spin.landing_angle));
        if landed != Some(spin.winner_index) || !margin_ok {
            summary.landing_violations += 1;
        }

        let offset = Duration::milliseconds(i64::try_from(step).unwrap_or(i64::MAX));
        if let Some(outcome) = engine.on_animation_complete_at(wheel.history(), epoch + offset) {
            if let Some(slot) = summary.counts.get_mut(outcome.winner_index) {
                *slot += 1;
            }
            summary.spins_completed += 1;
            if outcome.recorded.is_some() {
                summary.spins_recorded += 1;
            }
        }
        if engine
            .on_animation_complete_at(wheel.history(), epoch + offset)
            .is_some()
        {
            summary.duplicate_commits += 1;
        }
        engine.take_result();
    }

    summary.final_rotation = engine.rotation();
    let history = wheel.history().load();
    summary.history_len = history.len();
    summary.history_newest_id = history.first().map(|e| e.id);
    summary.history_ids_descending = history.windows(2).all(|w| w[0].id > w[1].id);
    summary
}
