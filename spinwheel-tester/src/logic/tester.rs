use colored::Colorize;
use serde::{Deserialize, Serialize};
use spinwheel_game::WheelConfiguration;
use std::time::{Duration, Instant};

use super::scenarios::{CheckContext, Scenario};
use super::simulation::{SimulationPlan, run_simulation};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: u64,
    pub passed: bool,
    pub spins_requested: usize,
    pub spins_completed: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub duration: Duration,
}

pub struct LogicTester {
    config: WheelConfiguration,
    spins: usize,
    tolerance: f64,
    verbose: bool,
}

impl LogicTester {
    pub const fn new(
        config: WheelConfiguration,
        spins: usize,
        tolerance: f64,
        verbose: bool,
    ) -> Self {
        Self {
            config,
            spins,
            tolerance,
            verbose,
        }
    }

    pub fn run_scenario(&self, scenario: &Scenario, seeds: &[u64]) -> Vec<ScenarioResult> {
        seeds
            .iter()
            .map(|&seed| {
                if self.verbose {
                    println!(
                        "🧪 Testing scenario: {} (seed: {seed}, spins: {})",
                        scenario.name.bright_white(),
                        self.spins
                    );
                }
                self.run_single(scenario, seed)
            })
            .collect()
    }

    fn run_single(&self, scenario: &Scenario, seed: u64) -> ScenarioResult {
        let start = Instant::now();
        let plan = SimulationPlan {
            config: self.config.clone(),
            spins: self.spins,
            seed,
        };
        let summary = run_simulation(&plan);
        let ctx = CheckContext {
            config: &self.config,
            tolerance: self.tolerance,
        };
        let failures = (scenario.check)(&ctx, &summary);
        let duration = start.elapsed();

        if self.verbose {
            if failures.is_empty() {
                println!(
                    "  ✅ passed ({duration:?}) completed:{} rotation:{:.1}",
                    summary.spins_completed, summary.final_rotation
                );
            } else {
                for failure in &failures {
                    println!("  ❌ {}", failure.clone().red());
                }
            }
        }

        ScenarioResult {
            scenario_name: scenario.name.to_string(),
            seed,
            passed: failures.is_empty(),
            spins_requested: summary.spins_requested,
            spins_completed: summary.spins_completed,
            failures,
            duration,
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u128::deserialize(deserializer)?;
        Ok(Duration::from_millis(u64::try_from(millis).unwrap_or(0)))
    }
}
