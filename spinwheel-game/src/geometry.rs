//! Segment layout and rotation math.
//!
//! The wheel is cut into `n` equal segments in configuration order. Segment
//! size never reflects weight; only the selection probability does.
use serde::{Deserialize, Serialize};

use crate::constants::{
    EDGE_MARGIN_DEG, FULL_TURN_DEG, MARGIN_THRESHOLD_DEG, MIN_FULL_TURNS, POINTER_ANGLE_DEG,
    SEGMENT_PALETTE,
};
use crate::numbers::{count_to_f64, floor_to_index, normalize_degrees};

/// One equal angular slice, in degrees clockwise from the wheel's zero mark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub index: usize,
    pub start: f64,
    pub end: f64,
}

impl Segment {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    #[must_use]
    pub fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// Whether `angle` lies strictly between the segment edges.
    #[must_use]
    pub fn contains_strictly(&self, angle: f64) -> bool {
        angle > self.start && angle < self.end
    }

    #[must_use]
    pub fn color(&self) -> &'static str {
        segment_color(self.index)
    }
}

/// Width of every segment on a wheel with `count` entries.
#[must_use]
pub fn segment_angle(count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    FULL_TURN_DEG / count_to_f64(count)
}

#[must_use]
pub fn segments(count: usize) -> Vec<Segment> {
    let angle = segment_angle(count);
    (0..count)
        .map(|index| Segment {
            index,
            start: count_to_f64(index) * angle,
            end: count_to_f64(index + 1) * angle,
        })
        .collect()
}

/// Offset of the landing point from the segment start.
///
/// Wide segments keep [`EDGE_MARGIN_DEG`] clear on both sides and place the
/// point by `unit` (a draw from `[0, 1)`); narrow ones use the midpoint.
#[must_use]
pub fn landing_offset(width: f64, unit: f64) -> f64 {
    if width > MARGIN_THRESHOLD_DEG {
        unit.mul_add(width - 2.0 * EDGE_MARGIN_DEG, EDGE_MARGIN_DEG)
    } else {
        width / 2.0
    }
}

#[must_use]
pub fn landing_angle(segment: &Segment, unit: f64) -> f64 {
    segment.start + landing_offset(segment.width(), unit)
}

/// Cumulative rotation after spinning from `previous` to land on `landing`.
///
/// Always adds [`MIN_FULL_TURNS`] full turns plus the forward delta in
/// `[0, 360)` that brings `landing` under the pointer, so the result never
/// decreases.
#[must_use]
pub fn next_rotation(previous: f64, landing: f64) -> f64 {
    let current = normalize_degrees(previous);
    let delta = normalize_degrees(POINTER_ANGLE_DEG - landing - current);
    previous + MIN_FULL_TURNS * FULL_TURN_DEG + delta
}

/// Wheel angle sitting under the pointer for a cumulative rotation.
#[must_use]
pub fn pointer_angle(rotation: f64) -> f64 {
    normalize_degrees(POINTER_ANGLE_DEG - rotation)
}

/// Index of the segment under the pointer for a cumulative rotation.
#[must_use]
pub fn segment_at_pointer(rotation: f64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    floor_to_index(pointer_angle(rotation) / segment_angle(count), count)
}

#[must_use]
pub fn segment_color(index: usize) -> &'static str {
    SEGMENT_PALETTE[index % SEGMENT_PALETTE.len()]
}

/// Stops for a CSS `conic-gradient`, e.g. `#f44336 0deg 90deg, ...`.
#[must_use]
pub fn conic_gradient(segments: &[Segment]) -> String {
    if segments.is_empty() {
        return "none".to_string();
    }
    segments
        .iter()
        .map(|seg| format!("{} {}deg {}deg", seg.color(), seg.start, seg.end))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Where a segment's label sits relative to the wheel centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelAnchor {
    pub x: f64,
    pub y: f64,
    pub rotate_deg: f64,
}

#[must_use]
pub fn label_anchor(segment: &Segment, radius: f64) -> LabelAnchor {
    let mid = segment.mid();
    let radians = (mid - 90.0).to_radians();
    LabelAnchor {
        x: radius * radians.cos(),
        y: radius * radians.sin(),
        rotate_deg: mid,
    }
}
