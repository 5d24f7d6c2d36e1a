//! Weighted random selection over wheel entries.
use rand::Rng;

use crate::entry::{WheelEntry, clamp_weight, total_weight};

/// Divisor applied to every weight before rolling.
///
/// 1 while the total is finite. Finite weights can still sum to `+inf`; those
/// are divided by the largest weight so the walk stays proportional.
fn weight_scale(entries: &[WheelEntry]) -> f64 {
    if total_weight(entries).is_finite() {
        return 1.0;
    }
    entries
        .iter()
        .map(|e| clamp_weight(e.weight()))
        .fold(1.0, f64::max)
}

/// Expected selection probability of each entry, in configuration order.
///
/// All zeros when the total weight is not positive.
#[must_use]
pub fn selection_shares(entries: &[WheelEntry]) -> Vec<f64> {
    let scale = weight_scale(entries);
    let scaled: Vec<f64> = entries
        .iter()
        .map(|e| clamp_weight(e.weight()) / scale)
        .collect();
    let total: f64 = scaled.iter().sum();
    if total.is_nan() || total <= 0.0 {
        return vec![0.0; scaled.len()];
    }
    scaled.into_iter().map(|w| w / total).collect()
}

/// Pick an entry index with probability proportional to its weight.
///
/// Returns `None` when the total weight is not positive.
#[must_use]
pub fn pick_weighted<R>(entries: &[WheelEntry], rng: &mut R) -> Option<usize>
where
    R: Rng + ?Sized,
{
    let scale = weight_scale(entries);
    let total: f64 = entries
        .iter()
        .map(|e| clamp_weight(e.weight()) / scale)
        .sum();
    if total.is_nan() || total <= 0.0 {
        return None;
    }
    let roll = rng.r#gen::<f64>() * total;
    walk(entries, roll, scale)
}

/// Resolve a roll in `[0, total_weight)` to the first entry whose running
/// weight exceeds it.
///
/// Zero-weight entries never win because the running sum does not move past
/// them. If rounding leaves the roll at or beyond the final sum, the last
/// positively weighted entry wins.
#[must_use]
pub fn pick_with_roll(entries: &[WheelEntry], roll: f64) -> Option<usize> {
    walk(entries, roll, 1.0)
}

fn walk(entries: &[WheelEntry], roll: f64, scale: f64) -> Option<usize> {
    let mut acc = 0.0_f64;
    let mut last_positive = None;
    for (idx, entry) in entries.iter().enumerate() {
        let weight = clamp_weight(entry.weight()) / scale;
        if weight <= 0.0 {
            continue;
        }
        acc += weight;
        last_positive = Some(idx);
        if roll < acc {
            return Some(idx);
        }
    }
    last_positive
}
