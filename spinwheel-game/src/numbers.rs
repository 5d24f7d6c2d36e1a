//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Convert a collection length or index to f64 in a single location.
#[must_use]
pub fn count_to_f64(value: usize) -> f64 {
    cast::<usize, f64>(value).unwrap_or(0.0)
}

/// Floor a non-negative f64 into an index below `len`, clamping overflow to the last slot.
///
/// Returns `None` when `len` is zero. NaN and negative values map to index 0.
#[must_use]
pub fn floor_to_index(value: f64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if !value.is_finite() || value <= 0.0 {
        return Some(0);
    }
    let floored = cast::<f64, usize>(value.floor()).unwrap_or(usize::MAX);
    Some(floored.min(len - 1))
}

/// Truncate a millisecond timestamp (as produced by `Date.now()`) to i64.
#[must_use]
pub fn millis_to_i64(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    cast::<f64, i64>(value.trunc()).unwrap_or(0)
}

/// Normalize an angle in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(crate::constants::FULL_TURN_DEG);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= crate::constants::FULL_TURN_DEG {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_conversion_is_exact_for_small_values() {
        assert!((count_to_f64(4) - 4.0).abs() < f64::EPSILON);
        assert!(count_to_f64(0).abs() < f64::EPSILON);
    }

    #[test]
    fn floor_to_index_clamps() {
        assert_eq!(floor_to_index(2.7, 4), Some(2));
        assert_eq!(floor_to_index(9.0, 4), Some(3));
        assert_eq!(floor_to_index(f64::NAN, 4), Some(0));
        assert_eq!(floor_to_index(-3.0, 4), Some(0));
        assert_eq!(floor_to_index(1.0, 0), None);
    }

    #[test]
    fn normalize_wraps_both_directions() {
        assert!((normalize_degrees(370.0) - 10.0).abs() < 1e-9);
        assert!((normalize_degrees(-90.0) - 270.0).abs() < 1e-9);
        assert!(normalize_degrees(720.0).abs() < 1e-9);
        assert!(normalize_degrees(-1e-20) < 360.0);
    }

    #[test]
    fn millis_handle_non_finite() {
        assert_eq!(millis_to_i64(f64::NAN), 0);
        assert_eq!(millis_to_i64(1_700_000_000_123.9), 1_700_000_000_123);
    }
}
