//! Draft editing of the wheel configuration.
use crate::config_store::ConfigStore;
use crate::constants::NEW_ENTRY_WEIGHT;
use crate::entry::{WheelConfiguration, WheelEntry, parse_weight_text, total_weight};
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("at least two named entries are required (found {found})")]
    TooFewEntries { found: usize },
    #[error("at least one entry needs a weight above zero")]
    NoPositiveWeight,
}

/// Mutable draft of entries; nothing is persisted until [`WheelEditor::commit`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WheelEditor {
    drafts: Vec<WheelEntry>,
}

impl WheelEditor {
    #[must_use]
    pub fn from_config(config: &WheelConfiguration) -> Self {
        Self {
            drafts: config.entries().to_vec(),
        }
    }

    #[must_use]
    pub fn drafts(&self) -> &[WheelEntry] {
        &self.drafts
    }

    /// Append a blank row with the default weight.
    pub fn add_entry(&mut self) {
        self.drafts.push(WheelEntry::new("", NEW_ENTRY_WEIGHT));
    }

    pub fn remove_entry(&mut self, index: usize) {
        if index < self.drafts.len() {
            self.drafts.remove(index);
        }
    }

    pub fn set_name(&mut self, index: usize, value: &str) {
        if let Some(entry) = self.drafts.get_mut(index) {
            value.clone_into(&mut entry.name);
        }
    }

    /// Update a weight from raw input text; unparsable text becomes 0.
    pub fn set_weight(&mut self, index: usize, raw: &str) {
        if let Some(entry) = self.drafts.get_mut(index) {
            entry.set_weight(parse_weight_text(raw));
        }
    }

    #[must_use]
    pub fn total_weight(&self) -> f64 {
        total_weight(&self.drafts)
    }

    /// Trim names, drop blank rows and check the result can spin.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::TooFewEntries`] when fewer than two named rows
    /// remain and [`EditError::NoPositiveWeight`] when every weight is zero.
    pub fn validate(&self) -> Result<WheelConfiguration, EditError> {
        let cleaned: Vec<WheelEntry> = self
            .drafts
            .iter()
            .map(|e| WheelEntry::new(e.name.trim(), e.weight()))
            .filter(WheelEntry::is_named)
            .collect();
        if cleaned.len() < 2 {
            return Err(EditError::TooFewEntries {
                found: cleaned.len(),
            });
        }
        if cleaned.iter().all(|e| e.weight() <= 0.0) {
            return Err(EditError::NoPositiveWeight);
        }
        Ok(WheelConfiguration::new(cleaned))
    }

    /// Validate and persist the draft as a full replacement.
    ///
    /// # Errors
    ///
    /// Returns the validation error; nothing is written in that case.
    pub fn commit<S: KeyValueStore>(
        &self,
        store: &ConfigStore<S>,
    ) -> Result<WheelConfiguration, EditError> {
        let config = self.validate()?;
        store.save(config.entries());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn validate_trims_and_drops_blank_rows() {
        let mut editor = WheelEditor::default();
        editor.add_entry();
        editor.add_entry();
        editor.add_entry();
        editor.set_name(0, "  Chicken ");
        editor.set_name(1, "   ");
        editor.set_name(2, "Rice");
        let config = editor.validate().expect("two named rows");
        let names: Vec<&str> = config.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Chicken", "Rice"]);
    }

    #[test]
    fn validate_rejects_single_entry() {
        let mut editor = WheelEditor::default();
        editor.add_entry();
        editor.set_name(0, "Only");
        editor.add_entry();
        assert_eq!(
            editor.validate(),
            Err(EditError::TooFewEntries { found: 1 })
        );
    }

    #[test]
    fn validate_rejects_all_zero_weights() {
        let mut editor = WheelEditor::from_config(&WheelConfiguration::builtin());
        for idx in 0..editor.drafts().len() {
            editor.set_weight(idx, "0");
        }
        assert_eq!(editor.validate(), Err(EditError::NoPositiveWeight));
    }

    #[test]
    fn weight_text_is_clamped() {
        let mut editor = WheelEditor::from_config(&WheelConfiguration::builtin());
        editor.set_weight(0, "-5");
        editor.set_weight(1, "abc");
        editor.set_weight(2, "2.25");
        assert!((editor.total_weight() - 87.25).abs() < 1e-9);
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut editor = WheelEditor::from_config(&WheelConfiguration::builtin());
        editor.remove_entry(99);
        assert_eq!(editor.drafts().len(), 4);
        editor.remove_entry(0);
        assert_eq!(editor.drafts()[0].name, "เพิ่มน้ำพริก");
    }

    #[test]
    fn commit_persists_only_valid_drafts() {
        let mem = MemoryStore::new();
        let store = ConfigStore::new(mem.clone());
        let mut editor = WheelEditor::default();
        editor.add_entry();
        assert!(editor.commit(&store).is_err());
        assert!(!mem.contains(crate::constants::CONFIG_STORAGE_KEY));

        editor.set_name(0, "A");
        editor.add_entry();
        editor.set_name(1, "B");
        let saved = editor.commit(&store).expect("valid");
        assert_eq!(store.load(), saved);
    }
}
