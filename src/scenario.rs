//! Scenario runner for batch and what-if projections
//!
//! Holds one engine and runs many members or input variants against it. Each projection
//! is independent, so batches are spread across threads with rayon.

use log::{info, warn};
use rayon::prelude::*;

use crate::error::ProjectionError;
use crate::member::{MemberRecord, PensionCalculatorInput};
use crate::projection::{PensionProjectionResult, ProjectionConfig, ProjectionEngine};
use crate::Assumptions;

/// Outcome of projecting one member in a batch
#[derive(Debug, Clone)]
pub struct MemberOutcome {
    pub member_id: String,
    pub result: Result<PensionProjectionResult, ProjectionError>,
}

/// One point of a retirement-age sweep
#[derive(Debug, Clone)]
pub struct SweepPoint {
    pub retirement_age: u32,
    pub result: Result<PensionProjectionResult, ProjectionError>,
}

/// Pre-built runner for efficient batch projections
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_csv()?;
///
/// for point in runner.sweep_retirement_ages(&input, &[55, 60, 65]) {
///     println!("{}: {:?}", point.retirement_age, point.result.map(|r| r.benefit_estimate.readiness_label));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create runner with default in-memory assumptions
    pub fn new() -> Self {
        Self {
            engine: ProjectionEngine::default(),
        }
    }

    /// Create runner by loading assumptions from CSV files
    pub fn from_csv() -> Result<Self, crate::error::LoadError> {
        Ok(Self::with_assumptions(Assumptions::from_csv()?, ProjectionConfig::default()))
    }

    /// Create runner from specific assumptions directory
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self, crate::error::LoadError> {
        Ok(Self::with_assumptions(Assumptions::from_csv_path(path)?, ProjectionConfig::default()))
    }

    /// Create runner with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions, config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(assumptions, config),
        }
    }

    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }

    /// Run a single projection
    pub fn run(&self, input: &PensionCalculatorInput) -> Result<PensionProjectionResult, ProjectionError> {
        self.engine.project(input)
    }

    /// Project every member in parallel, preserving input order
    pub fn run_batch(&self, members: &[MemberRecord]) -> Vec<MemberOutcome> {
        let outcomes: Vec<MemberOutcome> = members
            .par_iter()
            .map(|member| MemberOutcome {
                member_id: member.member_id.clone(),
                result: self.engine.project(&member.input),
            })
            .collect();

        let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
        for outcome in &outcomes {
            if let Err(err) = &outcome.result {
                warn!("member {} not projected: {}", outcome.member_id, err);
            }
        }
        info!("projected {} members ({} rejected)", outcomes.len() - failed, failed);

        outcomes
    }

    /// Run several input variants, e.g. different contribution or growth assumptions
    pub fn run_scenarios(
        &self,
        inputs: &[PensionCalculatorInput],
    ) -> Vec<Result<PensionProjectionResult, ProjectionError>> {
        inputs.par_iter().map(|input| self.engine.project(input)).collect()
    }

    /// Project the same member at each candidate retirement age
    ///
    /// Ages the member cannot retire at (out of range or below the current age) come
    /// back as validation errors rather than being dropped.
    pub fn sweep_retirement_ages(&self, input: &PensionCalculatorInput, ages: &[u32]) -> Vec<SweepPoint> {
        ages.par_iter()
            .map(|&retirement_age| SweepPoint {
                retirement_age,
                result: self.engine.project(&input.with_retirement_age(retirement_age)),
            })
            .collect()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str, current_age: u32) -> MemberRecord {
        MemberRecord {
            member_id: id.to_string(),
            input: PensionCalculatorInput {
                current_age,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_scenario_runner_batch() {
        let runner = ScenarioRunner::new();
        let members = vec![member("a", 30), member("b", 17), member("c", 45)];

        let outcomes = runner.run_batch(&members);
        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].member_id, "a");
        assert!(outcomes[0].result.is_ok());
        assert_eq!(outcomes[1].result.as_ref().unwrap_err().field(), Some("currentAge"));
        assert_eq!(outcomes[2].result.as_ref().unwrap().years(), 16);
    }

    #[test]
    fn test_higher_tier3_contribution_gives_larger_fund() {
        let runner = ScenarioRunner::new();
        let inputs: Vec<_> = [0.0, 5.0, 10.0]
            .iter()
            .map(|&pct| PensionCalculatorInput {
                tier3_contribution_percent: pct,
                ..Default::default()
            })
            .collect();

        let results = runner.run_scenarios(&inputs);
        let funds: Vec<f64> = results
            .iter()
            .map(|r| r.as_ref().unwrap().benefit_estimate.tier3_total_fund_value)
            .collect();

        assert_eq!(funds[0], 0.0);
        assert!(funds[1] > funds[0]);
        assert!(funds[2] > funds[1]);
    }

    #[test]
    fn test_sweep_retirement_ages() {
        let runner = ScenarioRunner::new();
        let input = PensionCalculatorInput {
            current_age: 50,
            ..Default::default()
        };

        let points = runner.sweep_retirement_ages(&input, &[49, 55, 60, 65, 70]);
        assert_eq!(points.len(), 5);
        assert!(points[0].result.is_err());
        assert!(points[4].result.is_err());

        let fund_at = |idx: usize| {
            points[idx].result.as_ref().unwrap().benefit_estimate.tier2_total_fund_value
        };
        assert!(fund_at(1) < fund_at(2));
        assert!(fund_at(2) < fund_at(3));
        assert_eq!(points[2].result.as_ref().unwrap().years(), 11);
    }
}
