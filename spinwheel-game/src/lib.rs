//! Spinwheel Game Engine
//!
//! Platform-agnostic core logic for the prize wheel: weighted selection,
//! equal-segment geometry, the spin state machine and the capped history log.
//! This crate has no UI or browser dependencies; storage is injected through
//! [`KeyValueStore`].

pub mod config_store;
pub mod constants;
pub mod editor;
pub mod engine;
pub mod entry;
pub mod geometry;
pub mod history;
pub mod numbers;
pub mod selection;
pub mod storage;

// Re-export commonly used types
pub use config_store::ConfigStore;
pub use editor::{EditError, WheelEditor};
pub use engine::{Easing, SpinOutcome, SpinPlan, SpinSession, SpinState, WheelEngine, WheelStatus};
pub use entry::{WheelConfiguration, WheelEntry, clamp_weight, coerce_weight};
pub use geometry::{
    LabelAnchor, Segment, conic_gradient, label_anchor, landing_angle, landing_offset,
    next_rotation, pointer_angle, segment_angle, segment_at_pointer, segments,
};
pub use history::{HistoryLog, SpinHistoryEntry, iso_timestamp};
pub use selection::{pick_weighted, pick_with_roll, selection_shares};
pub use storage::{KeyValueStore, MemoryStore, StorageError};

/// Bundles the configuration store and history log over one backing store.
pub struct SpinWheel<S>
where
    S: KeyValueStore + Clone,
{
    config: ConfigStore<S>,
    history: HistoryLog<S>,
}

impl<S> SpinWheel<S>
where
    S: KeyValueStore + Clone,
{
    /// Create a wheel backed by `store`.
    pub fn new(store: S) -> Self {
        Self {
            config: ConfigStore::new(store.clone()),
            history: HistoryLog::new(store),
        }
    }

    pub const fn config_store(&self) -> &ConfigStore<S> {
        &self.config
    }

    pub const fn history(&self) -> &HistoryLog<S> {
        &self.history
    }

    /// Load the configuration once and build an idle engine from it.
    #[must_use]
    pub fn create_engine(&self) -> WheelEngine {
        WheelEngine::new(self.config.load())
    }

    /// Start an editing draft from the stored configuration.
    #[must_use]
    pub fn create_editor(&self) -> WheelEditor {
        WheelEditor::from_config(&self.config.load())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn wheel_roundtrips_edits_into_engine() {
        let wheel = SpinWheel::new(MemoryStore::new());
        let mut editor = wheel.create_editor();
        assert_eq!(editor.drafts().len(), 4);
        editor.remove_entry(3);
        editor.set_weight(0, "0");
        editor.commit(wheel.config_store()).expect("valid edit");

        let mut engine = wheel.create_engine();
        assert_eq!(engine.config().len(), 3);
        let mut rng = ChaCha20Rng::seed_from_u64(0xABCD);
        for _ in 0..200 {
            let plan = engine.spin(&mut rng).expect("spinnable");
            assert_ne!(plan.winner_index, 0);
            engine.on_animation_complete(wheel.history());
            engine.take_result();
        }
        assert_eq!(wheel.history().load().len(), constants::HISTORY_CAP);
    }

    #[test]
    fn fresh_wheel_uses_builtin_config() {
        let wheel = SpinWheel::new(MemoryStore::new());
        let engine = wheel.create_engine();
        assert_eq!(engine.config(), &WheelConfiguration::builtin());
        assert_eq!(engine.status(), WheelStatus::Ready);
    }
}
