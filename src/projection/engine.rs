//! Core projection engine: salary growth, DC accumulation and benefit estimation

use log::debug;

use crate::assumptions::{Assumptions, Tier1Context};
use crate::error::ProjectionError;
use crate::member::PensionCalculatorInput;
use super::readiness::{ReadinessLabel, WarningFlags};
use super::results::{BenefitEstimate, PensionProjectionResult, ProjectionYear};
use super::state::ProjectionState;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Tier 1 history below this many months raises an advisory warning
    pub min_qualifying_months: u32,

    /// Replacement ratio (percent) below which income is flagged as low
    pub low_replacement_threshold: f64,

    /// Whether to keep the year-by-year series in the result
    pub include_schedule: bool,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            min_qualifying_months: 180,
            low_replacement_threshold: 50.0,
            include_schedule: true,
        }
    }
}

/// Compound `salary` once per year for `years` years
///
/// The entry year is not grown, so a member retiring at their current age keeps
/// today's salary.
pub fn project_final_salary(salary: f64, annual_growth_percent: f64, years: u32) -> f64 {
    let growth = 1.0 + annual_growth_percent / 100.0;
    let mut projected = salary;
    for _ in 0..years {
        projected *= growth;
    }
    projected
}

/// Total monthly retirement income as a percentage of final salary
pub fn replacement_ratio(total_monthly_income: f64, final_salary: f64) -> Result<f64, ProjectionError> {
    let final_salary = ensure_finite("finalProjectedSalary", final_salary)?;
    if final_salary <= 0.0 {
        return Err(ProjectionError::ZeroFinalSalary(final_salary));
    }
    ensure_finite("replacementRatioPercent", total_monthly_income / final_salary * 100.0)
}

/// Reject amounts that overflowed to infinity or became NaN
fn ensure_finite(quantity: &'static str, value: f64) -> Result<f64, ProjectionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ProjectionError::NonFiniteResult { quantity, value })
    }
}

/// Main projection engine
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    assumptions: Assumptions,
    config: ProjectionConfig,
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::new(Assumptions::default_ssnit(), ProjectionConfig::default())
    }
}

impl ProjectionEngine {
    /// Create a new projection engine with given assumptions and config
    pub fn new(assumptions: Assumptions, config: ProjectionConfig) -> Self {
        Self { assumptions, config }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run the projection for one member
    ///
    /// Inputs are validated first; no result is produced for invalid inputs.
    pub fn project(&self, input: &PensionCalculatorInput) -> Result<PensionProjectionResult, ProjectionError> {
        input.validate()?;

        let final_salary = ensure_finite(
            "finalProjectedSalary",
            project_final_salary(
                input.current_monthly_salary,
                input.annual_salary_growth_rate,
                input.years_to_retirement(),
            ),
        )?;

        let tier1_monthly_pension = ensure_finite(
            "tier1MonthlyPension",
            self.assumptions.tier1.monthly_pension(&Tier1Context {
                current_age: input.current_age,
                retirement_age: input.retirement_age,
                final_salary,
                months_contributed: input.months_contributed,
            }),
        )?;

        let (state, schedule) = self.accumulate(input);

        let tier2_total = ensure_finite("tier2TotalFundValue", state.tier2.fund_value)?;
        let tier3_total = ensure_finite("tier3TotalFundValue", state.tier3.fund_value)?;
        ensure_finite("totalContributions", state.cumulative_contributions())?;
        let tier2_monthly_annuity = ensure_finite(
            "tier2MonthlyAnnuity",
            self.assumptions.annuity.monthly_income(tier2_total),
        )?;
        let tier3_monthly_annuity = ensure_finite(
            "tier3MonthlyAnnuity",
            self.assumptions.annuity.monthly_income(tier3_total),
        )?;

        let total_income = ensure_finite(
            "totalMonthlyRetirementIncome",
            tier1_monthly_pension + tier2_monthly_annuity + tier3_monthly_annuity,
        )?;
        let ratio = replacement_ratio(total_income, final_salary)?;
        let readiness_label = ReadinessLabel::from_ratio(ratio);

        let warning_flags = WarningFlags {
            below_minimum_contribution_months: input.months_contributed < self.config.min_qualifying_months,
            low_replacement_income: ratio < self.config.low_replacement_threshold,
        };
        let warnings = warning_flags.messages(
            self.config.min_qualifying_months,
            self.config.low_replacement_threshold,
        );

        debug!(
            "projected ages {}..={} ({} years): final salary {:.2}, tier2 {:.2}, tier3 {:.2}, ratio {:.2}% ({}), tier1={} annuity={}",
            input.current_age,
            input.retirement_age,
            state.years_elapsed,
            final_salary,
            tier2_total,
            tier3_total,
            ratio,
            readiness_label,
            self.assumptions.tier1.name(),
            self.assumptions.annuity.name(),
        );

        Ok(PensionProjectionResult {
            benefit_estimate: BenefitEstimate {
                tier1_monthly_pension,
                tier2_total_fund_value: tier2_total,
                tier2_lump_sum: tier2_total,
                tier2_monthly_annuity,
                tier3_total_fund_value: tier3_total,
                tier3_lump_sum: tier3_total,
                tier3_monthly_annuity,
                final_projected_salary: final_salary,
                total_monthly_retirement_income: total_income,
                replacement_ratio_percent: ratio,
                readiness_label,
                total_contributions: state.cumulative_contributions(),
                total_investment_gains: state.cumulative_gains(),
            },
            yearly_projection: schedule,
            warning_flags,
            warnings,
        })
    }

    /// Step both DC tiers from the current age to retirement inclusive
    fn accumulate(&self, input: &PensionCalculatorInput) -> (ProjectionState, Vec<ProjectionYear>) {
        let mut state = ProjectionState::from_input(input);
        let capacity = if self.config.include_schedule {
            (input.years_to_retirement() + 1) as usize
        } else {
            0
        };
        let mut schedule = Vec::with_capacity(capacity);

        for age in input.current_age..=input.retirement_age {
            state.advance_year(age);

            if self.config.include_schedule {
                schedule.push(ProjectionYear {
                    year: age,
                    projected_salary: state.salary,
                    tier2_fund_value: state.tier2.fund_value,
                    tier3_fund_value: state.tier3.fund_value,
                    cumulative_contributions: state.cumulative_contributions(),
                    cumulative_investment_gains: state.cumulative_gains(),
                });
            }
        }

        (state, schedule)
    }
}
