//! Centralized policy constants for the prize wheel.
//!
//! Storage keys, spin geometry and history limits live here so behaviour can
//! only change through reviewed code, never through persisted data.

// Storage keys -------------------------------------------------------------
/// Key holding the JSON array of `{name, weight}` entries.
pub const CONFIG_STORAGE_KEY: &str = "spinWheelConfig";
/// Key holding the JSON array of history records, newest first.
pub const HISTORY_STORAGE_KEY: &str = "spinWheelHistory";

// History ------------------------------------------------------------------
/// Maximum number of history records retained.
pub const HISTORY_CAP: usize = 50;

// Spin geometry ------------------------------------------------------------
pub const FULL_TURN_DEG: f64 = 360.0;
/// Angle of the pointer relative to the wheel's zero mark.
pub const POINTER_ANGLE_DEG: f64 = 0.0;
/// Full turns added to every spin before the alignment delta.
pub const MIN_FULL_TURNS: f64 = 5.0;
/// Distance kept from each segment edge when the segment is wide enough.
pub const EDGE_MARGIN_DEG: f64 = 5.0;
/// Segments at or below this width land on their midpoint.
pub const MARGIN_THRESHOLD_DEG: f64 = 10.0;

// Animation ----------------------------------------------------------------
pub const SPIN_DURATION_SECS: f64 = 3.5;

// Presentation -------------------------------------------------------------
/// Distance of segment labels from the wheel centre, in CSS pixels.
pub const LABEL_RADIUS_PX: f64 = 120.0;

pub const SEGMENT_PALETTE: [&str; 50] = [
    "#f44336", "#e91e63", "#9c27b0", "#673ab7", "#3f51b5", "#2196f3", "#03a9f4", "#00bcd4",
    "#009688", "#4caf50", "#8bc34a", "#cddc39", "#ffeb3b", "#ffc107", "#ff9800", "#ff5722",
    "#795548", "#607d8b", "#9e9e9e", "#ad1457", "#6a1b9a", "#283593", "#0277bd", "#00695c",
    "#2e7d32", "#558b2f", "#9e9d24", "#fbc02d", "#f57f17", "#e65100", "#bf360c", "#4e342e",
    "#424242", "#37474f", "#1de9b6", "#00e676", "#76ff03", "#c6ff00", "#ffea00", "#ffd600",
    "#ff9100", "#ff3d00", "#d50000", "#aa00ff", "#6200ea", "#304ffe", "#0091ea", "#00b8d4",
    "#00bfa5", "#64dd17",
];

// Editor -------------------------------------------------------------------
/// Weight given to a freshly added editor row.
pub const NEW_ENTRY_WEIGHT: f64 = 1.0;
