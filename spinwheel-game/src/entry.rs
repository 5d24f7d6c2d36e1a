//! Wheel entries and the ordered configuration they form.
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Clamp a weight to a finite, non-negative value.
#[must_use]
pub fn clamp_weight(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Coerce an arbitrary JSON value into a weight the way a numeric cast would.
///
/// Numbers pass through, numeric strings are parsed, booleans count as 1/0 and
/// everything else becomes 0. The result is always clamped.
#[must_use]
pub fn coerce_weight(value: &Value) -> f64 {
    let raw = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_weight_text(s),
        Value::Bool(true) => 1.0,
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => 0.0,
    };
    clamp_weight(raw)
}

/// Parse user-entered weight text; blank or unparsable text is 0.
#[must_use]
pub fn parse_weight_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    clamp_weight(trimmed.parse::<f64>().unwrap_or(0.0))
}

fn lenient_weight<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_weight(&value))
}

/// One named, weighted slice of the wheel.
///
/// The weight is clamped to `>= 0` whenever an entry is built, read back from
/// JSON or edited, so every `WheelEntry` in circulation holds a valid weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelEntry {
    pub name: String,
    #[serde(default, deserialize_with = "lenient_weight")]
    weight: f64,
}

impl WheelEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight: clamp_weight(weight),
        }
    }

    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = clamp_weight(weight);
    }

    /// Whether the entry has a non-blank name.
    #[must_use]
    pub fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Rebuild one entry from loosely typed JSON, repairing each field.
    ///
    /// A missing or non-string name becomes `Item {index + 1}`.
    #[must_use]
    pub fn repair(value: &Value, index: usize) -> Self {
        let name = value
            .get("name")
            .and_then(Value::as_str)
            .map_or_else(|| format!("Item {}", index + 1), str::to_string);
        let weight = value.get("weight").map_or(0.0, coerce_weight);
        Self::new(name, weight)
    }
}

/// Ordered sequence of entries. Order decides segment placement.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WheelConfiguration {
    entries: Vec<WheelEntry>,
}

impl WheelConfiguration {
    #[must_use]
    pub const fn new(entries: Vec<WheelEntry>) -> Self {
        Self { entries }
    }

    /// The built-in configuration used whenever nothing valid is stored.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            WheelEntry::new("เพิ่มไก่", 5.0),
            WheelEntry::new("เพิ่มน้ำพริก", 5.0),
            WheelEntry::new("เพิ่มผัก", 5.0),
            WheelEntry::new("Nothing", 85.0),
        ])
    }

    /// Repair a configuration from JSON text.
    ///
    /// Returns `None` when the text is not JSON or not an array; individual
    /// malformed elements are repaired rather than rejected.
    #[must_use]
    pub fn from_json_lenient(json: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(json).ok()?;
        Self::from_value(&value)
    }

    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let items = value.as_array()?;
        Some(Self::new(
            items
                .iter()
                .enumerate()
                .map(|(idx, item)| WheelEntry::repair(item, idx))
                .collect(),
        ))
    }

    #[must_use]
    pub fn entries(&self) -> &[WheelEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&WheelEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn total_weight(&self) -> f64 {
        total_weight(&self.entries)
    }

    /// At least two entries and a positive total weight.
    #[must_use]
    pub fn is_spinnable(&self) -> bool {
        self.entries.len() >= 2 && self.total_weight() > 0.0
    }
}

impl From<Vec<WheelEntry>> for WheelConfiguration {
    fn from(entries: Vec<WheelEntry>) -> Self {
        Self::new(entries)
    }
}

/// Sum of clamped weights.
#[must_use]
pub fn total_weight(entries: &[WheelEntry]) -> f64 {
    entries.iter().map(|e| clamp_weight(e.weight)).sum()
}
