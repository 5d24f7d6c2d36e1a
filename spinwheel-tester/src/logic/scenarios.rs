use spinwheel_game::constants::HISTORY_CAP;
use spinwheel_game::numbers::count_to_f64;
use spinwheel_game::{WheelConfiguration, selection_shares};

use super::simulation::SimulationSummary;

/// Inputs shared by every check.
#[derive(Debug, Clone)]
pub struct CheckContext<'a> {
    pub config: &'a WheelConfiguration,
    pub tolerance: f64,
}

pub type CheckFn = fn(&CheckContext<'_>, &SimulationSummary) -> Vec<String>;

#[derive(Clone)]
pub struct Scenario {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub check: CheckFn,
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("key", &self.key)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

pub fn catalog() -> Vec<Scenario> {
    vec![
        Scenario {
            key: "distribution",
            name: "Weighted Distribution",
            description: "Selection frequency tracks weight share; zero weights never win",
            check: check_distribution,
        },
        Scenario {
            key: "geometry",
            name: "Landing Geometry",
            description: "Pointer lands inside the winning segment and rotation never decreases",
            check: check_geometry,
        },
        Scenario {
            key: "history",
            name: "History Log",
            description: "History is capped, newest first, with increasing ids",
            check: check_history,
        },
        Scenario {
            key: "guards",
            name: "Spin Guards",
            description: "Mid-flight spins are ignored and completion commits exactly once",
            check: check_guards,
        },
    ]
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    catalog().iter().map(|s| (s.key, s.description)).collect()
}

pub fn get_scenario(key: &str) -> Option<Scenario> {
    catalog().into_iter().find(|s| s.key == key)
}

/// Expand `all` and drop duplicates, keeping first-seen order.
pub fn expand_scenarios(requested: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for key in requested {
        if key == "all" {
            for scenario in catalog() {
                if !out.iter().any(|k| k == scenario.key) {
                    out.push(scenario.key.to_string());
                }
            }
        } else if !out.contains(key) {
            out.push(key.clone());
        }
    }
    out
}

fn share(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        count_to_f64(part) / count_to_f64(whole)
    }
}

fn check_distribution(ctx: &CheckContext<'_>, summary: &SimulationSummary) -> Vec<String> {
    let mut failures = Vec::new();
    if !summary.status_ready {
        return vec!["configuration is not spinnable".to_string()];
    }
    let shares = selection_shares(ctx.config.entries());
    let observed_counts = ctx.config.entries().iter().zip(&summary.counts);
    for ((entry, count), expected) in observed_counts.zip(shares) {
        let observed = share(*count, summary.spins_completed);
        if entry.weight() <= 0.0 && *count > 0 {
            failures.push(format!(
                "zero-weight entry '{}' selected {count} times",
                entry.name
            ));
        } else if (observed - expected).abs() > ctx.tolerance {
            failures.push(format!(
                "'{}' observed {observed:.4}, expected {expected:.4} (±{:.4})",
                entry.name, ctx.tolerance
            ));
        }
    }
    failures
}

fn check_geometry(_ctx: &CheckContext<'_>, summary: &SimulationSummary) -> Vec<String> {
    let mut failures = Vec::new();
    if summary.landing_violations > 0 {
        failures.push(format!(
            "{} spins landed outside the winning segment",
            summary.landing_violations
        ));
    }
    if !summary.rotation_monotonic {
        failures.push("rotation decreased between spins".to_string());
    }
    failures
}

fn check_history(_ctx: &CheckContext<'_>, summary: &SimulationSummary) -> Vec<String> {
    let mut failures = Vec::new();
    let expected_len = summary.spins_recorded.min(HISTORY_CAP);
    if summary.history_len != expected_len {
        failures.push(format!(
            "history holds {} records, expected {expected_len}",
            summary.history_len
        ));
    }
    let expected_newest = u64::try_from(summary.spins_recorded)
        .ok()
        .filter(|n| *n > 0);
    if summary.history_newest_id != expected_newest {
        failures.push(format!(
            "newest history id {:?}, expected {expected_newest:?}",
            summary.history_newest_id
        ));
    }
    if !summary.history_ids_descending {
        failures.push("history is not ordered newest first".to_string());
    }
    failures
}

fn check_guards(_ctx: &CheckContext<'_>, summary: &SimulationSummary) -> Vec<String> {
    let mut failures = Vec::new();
    if summary.reentrant_spins_accepted > 0 {
        failures.push(format!(
            "{} spins were accepted while another was in flight",
            summary.reentrant_spins_accepted
        ));
    }
    if summary.duplicate_commits > 0 {
        failures.push(format!(
            "{} completion signals committed twice",
            summary.duplicate_commits
        ));
    }
    failures
}
