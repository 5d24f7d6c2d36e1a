//! Spin state machine reconciling selection, rotation and history.
//!
//! `spin()` picks the winner and the target rotation synchronously. The
//! caller animates the wheel and reports completion through
//! [`WheelEngine::on_animation_complete`], which is the only place a result is
//! committed to history.
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::SPIN_DURATION_SECS;
use crate::entry::WheelConfiguration;
use crate::geometry::{Segment, landing_angle, next_rotation, segments};
use crate::history::{HistoryLog, SpinHistoryEntry};
use crate::selection::pick_weighted;
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpinState {
    #[default]
    Idle,
    Spinning,
    Resolved,
}

/// Display status derived from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WheelStatus {
    Ready,
    /// Fewer than two entries or no positive weight; the wheel cannot spin.
    NotSpinnable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    EaseOut,
}

impl Easing {
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::EaseOut => "ease-out",
        }
    }
}

/// Instructions for the animation driver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinPlan {
    pub winner_index: usize,
    /// Wheel angle that ends up under the pointer.
    pub landing_angle: f64,
    /// Cumulative rotation to animate to.
    pub target_rotation: f64,
    pub duration_secs: f64,
    pub easing: Easing,
}

/// Ephemeral bookkeeping for the spin in flight or just resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinSession {
    winner_index: usize,
    target_rotation: f64,
    history_written: bool,
}

impl SpinSession {
    #[must_use]
    pub const fn winner_index(&self) -> usize {
        self.winner_index
    }

    #[must_use]
    pub const fn target_rotation(&self) -> f64 {
        self.target_rotation
    }

    #[must_use]
    pub const fn history_written(&self) -> bool {
        self.history_written
    }
}

/// Result handed back once the animation reports completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinOutcome {
    pub winner_index: usize,
    pub name: String,
    /// Stored history record; `None` when the winner has an empty name.
    pub recorded: Option<SpinHistoryEntry>,
}

#[derive(Debug, Clone)]
pub struct WheelEngine {
    config: WheelConfiguration,
    segments: Vec<Segment>,
    total_weight: f64,
    rotation: f64,
    state: SpinState,
    session: Option<SpinSession>,
    result: Option<String>,
}

impl WheelEngine {
    #[must_use]
    pub fn new(config: WheelConfiguration) -> Self {
        let segments = segments(config.len());
        let total_weight = config.total_weight();
        Self {
            config,
            segments,
            total_weight,
            rotation: 0.0,
            state: SpinState::Idle,
            session: None,
            result: None,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &WheelConfiguration {
        &self.config
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub const fn total_weight(&self) -> f64 {
        self.total_weight
    }

    #[must_use]
    pub fn status(&self) -> WheelStatus {
        if self.config.len() >= 2 && self.total_weight > 0.0 {
            WheelStatus::Ready
        } else {
            WheelStatus::NotSpinnable
        }
    }

    #[must_use]
    pub const fn current_state(&self) -> SpinState {
        self.state
    }

    #[must_use]
    pub const fn is_spinning(&self) -> bool {
        matches!(self.state, SpinState::Spinning)
    }

    /// Cumulative rotation in degrees. Never decreases.
    #[must_use]
    pub const fn rotation(&self) -> f64 {
        self.rotation
    }

    #[must_use]
    pub const fn session(&self) -> Option<&SpinSession> {
        self.session.as_ref()
    }

    /// Name of the last resolved winner, until the next spin starts.
    #[must_use]
    pub fn last_result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Start a spin. Returns `None` (and changes nothing) when the wheel is
    /// not spinnable or a spin is already in flight.
    pub fn spin<R>(&mut self, rng: &mut R) -> Option<SpinPlan>
    where
        R: Rng + ?Sized,
    {
        if self.is_spinning() || self.status() == WheelStatus::NotSpinnable {
            return None;
        }
        let winner_index = pick_weighted(self.config.entries(), rng)?;
        let segment = self.segments.get(winner_index)?;
        let landing = landing_angle(segment, rng.r#gen::<f64>());
        let target_rotation = next_rotation(self.rotation, landing);

        self.rotation = target_rotation;
        self.state = SpinState::Spinning;
        self.result = None;
        self.session = Some(SpinSession {
            winner_index,
            target_rotation,
            history_written: false,
        });

        let plan = SpinPlan {
            winner_index,
            landing_angle: landing,
            target_rotation,
            duration_secs: SPIN_DURATION_SECS,
            easing: Easing::EaseOut,
        };
        log::debug!("spin planned: {plan:?}");
        Some(plan)
    }

    /// Commit the in-flight spin, stamping the history record with the
    /// current time.
    pub fn on_animation_complete<S: KeyValueStore>(
        &mut self,
        history: &HistoryLog<S>,
    ) -> Option<SpinOutcome> {
        self.on_animation_complete_at(history, Utc::now())
    }

    /// Commit the in-flight spin. Signals arriving while no spin is in
    /// flight are ignored, so each spin is recorded at most once.
    pub fn on_animation_complete_at<S: KeyValueStore>(
        &mut self,
        history: &HistoryLog<S>,
        at: DateTime<Utc>,
    ) -> Option<SpinOutcome> {
        if !self.is_spinning() {
            return None;
        }
        let session = self.session.as_mut()?;
        let name = self
            .config
            .get(session.winner_index)
            .map(|e| e.name.clone())
            .unwrap_or_default();

        let recorded = if name.is_empty() || session.history_written {
            None
        } else {
            session.history_written = true;
            Some(history.append_at(&name, at))
        };

        self.state = SpinState::Resolved;
        self.result = Some(name.clone());
        Some(SpinOutcome {
            winner_index: session.winner_index,
            name,
            recorded,
        })
    }

    /// Acknowledge a resolved spin and return to idle.
    pub fn take_result(&mut self) -> Option<String> {
        if self.state != SpinState::Resolved {
            return None;
        }
        self.state = SpinState::Idle;
        self.session = None;
        self.result.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::WheelEntry;
    use crate::storage::MemoryStore;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn two_entry_engine() -> WheelEngine {
        WheelEngine::new(WheelConfiguration::new(vec![
            WheelEntry::new("A", 1.0),
            WheelEntry::new("B", 1.0),
        ]))
    }

    #[test]
    fn full_cycle_walks_idle_spinning_resolved_idle() {
        let mut engine = two_entry_engine();
        let history = HistoryLog::new(MemoryStore::new());
        let mut rng = ChaCha20Rng::seed_from_u64(7);

        assert_eq!(engine.current_state(), SpinState::Idle);
        let plan = engine.spin(&mut rng).expect("spinnable");
        assert_eq!(engine.current_state(), SpinState::Spinning);
        assert!(history.load().is_empty(), "no commit before completion");

        let outcome = engine.on_animation_complete(&history).expect("in flight");
        assert_eq!(outcome.winner_index, plan.winner_index);
        assert_eq!(engine.current_state(), SpinState::Resolved);
        assert_eq!(history.load().len(), 1);
        assert!(engine.session().is_some_and(SpinSession::history_written));

        assert_eq!(engine.take_result().as_deref(), Some(outcome.name.as_str()));
        assert_eq!(engine.current_state(), SpinState::Idle);
        assert!(engine.session().is_none());
    }

    #[test]
    fn completion_is_committed_once() {
        let mut engine = two_entry_engine();
        let history = HistoryLog::new(MemoryStore::new());
        let mut rng = ChaCha20Rng::seed_from_u64(8);
        engine.spin(&mut rng);
        assert!(engine.on_animation_complete(&history).is_some());
        assert!(engine.on_animation_complete(&history).is_none());
        assert_eq!(history.load().len(), 1);
    }

    #[test]
    fn spin_while_spinning_is_ignored() {
        let mut engine = two_entry_engine();
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        engine.spin(&mut rng).expect("first spin");
        let session = engine.session().copied();
        let rotation = engine.rotation();
        assert!(engine.spin(&mut rng).is_none());
        assert_eq!(engine.session().copied(), session);
        assert!((engine.rotation() - rotation).abs() < f64::EPSILON);
    }

    #[test]
    fn unspinnable_configuration_reports_status() {
        let mut engine = WheelEngine::new(WheelConfiguration::new(vec![WheelEntry::new(
            "Solo", 3.0,
        )]));
        let mut rng = ChaCha20Rng::seed_from_u64(10);
        assert_eq!(engine.status(), WheelStatus::NotSpinnable);
        assert!(engine.spin(&mut rng).is_none());
        assert_eq!(engine.current_state(), SpinState::Idle);
    }

    #[test]
    fn blank_winner_is_not_recorded() {
        let mut engine = WheelEngine::new(WheelConfiguration::new(vec![
            WheelEntry::new("", 1.0),
            WheelEntry::new("B", 0.0),
        ]));
        let history = HistoryLog::new(MemoryStore::new());
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        engine.spin(&mut rng).expect("spinnable");
        let outcome = engine.on_animation_complete(&history).expect("in flight");
        assert!(outcome.recorded.is_none());
        assert!(history.load().is_empty());
    }

    #[test]
    fn resolved_wheel_can_spin_again() {
        let mut engine = two_entry_engine();
        let history = HistoryLog::new(MemoryStore::new());
        let mut rng = ChaCha20Rng::seed_from_u64(12);
        engine.spin(&mut rng);
        engine.on_animation_complete(&history);
        assert!(engine.last_result().is_some());
        assert!(engine.spin(&mut rng).is_some());
        assert!(engine.last_result().is_none());
        assert!(engine.take_result().is_none());
    }
}
