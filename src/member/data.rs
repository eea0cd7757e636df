//! Calculator inputs for one member and their validation ranges

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Inclusive bounds for a numeric input field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    const fn new(field: &'static str, min: f64, max: f64) -> Self {
        Self { field, min, max }
    }

    /// Check a value against the range, rejecting NaN and infinities
    pub fn check(&self, value: f64) -> Result<(), ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::new(self.field, value, "must be a finite number"));
        }
        if value < self.min || value > self.max {
            return Err(ValidationError::new(
                self.field,
                value,
                format!("must be between {} and {}", self.min, self.max),
            ));
        }
        Ok(())
    }
}

pub const CURRENT_AGE: FieldRange = FieldRange::new("currentAge", 18.0, 55.0);
pub const MONTHS_CONTRIBUTED: FieldRange = FieldRange::new("monthsContributed", 0.0, 450.0);
pub const SALARY_GROWTH: FieldRange = FieldRange::new("annualSalaryGrowthRate", 0.0, 10.0);
pub const TIER2_CONTRIBUTION: FieldRange = FieldRange::new("tier2ContributionPercent", 8.0, 13.5);
pub const TIER3_CONTRIBUTION: FieldRange = FieldRange::new("tier3ContributionPercent", 0.0, 10.0);
pub const TIER2_GROWTH: FieldRange = FieldRange::new("tier2InvestmentGrowthRate", 5.0, 15.0);
pub const TIER3_GROWTH: FieldRange = FieldRange::new("tier3InvestmentGrowthRate", 7.0, 20.0);
pub const RETIREMENT_AGE: FieldRange = FieldRange::new("retirementAge", 55.0, 65.0);

/// User-supplied inputs for a single calculation run
///
/// Percent fields are expressed in percentage points (`8.0` means 8%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PensionCalculatorInput {
    /// Age today, in whole years
    pub current_age: u32,

    /// Gross monthly salary today (GHS)
    pub current_monthly_salary: f64,

    /// Tier 1 contribution history already on record
    pub months_contributed: u32,

    pub annual_salary_growth_rate: f64,

    /// Mandatory occupational scheme contribution, % of salary
    pub tier2_contribution_percent: f64,

    /// Voluntary provident fund contribution, % of salary
    pub tier3_contribution_percent: f64,

    pub tier2_investment_growth_rate: f64,
    pub tier3_investment_growth_rate: f64,

    /// Planned retirement age, in whole years
    pub retirement_age: u32,
}

impl PensionCalculatorInput {
    /// Validate every field against its documented range
    ///
    /// Fields are checked in declaration order and the first failure is returned.
    pub fn validate(&self) -> Result<(), ValidationError> {
        CURRENT_AGE.check(self.current_age as f64)?;

        let salary = self.current_monthly_salary;
        if !salary.is_finite() || salary <= 0.0 {
            return Err(ValidationError::new(
                "currentMonthlySalary",
                salary,
                "must be a finite amount greater than zero",
            ));
        }

        MONTHS_CONTRIBUTED.check(self.months_contributed as f64)?;
        SALARY_GROWTH.check(self.annual_salary_growth_rate)?;
        TIER2_CONTRIBUTION.check(self.tier2_contribution_percent)?;
        TIER3_CONTRIBUTION.check(self.tier3_contribution_percent)?;
        TIER2_GROWTH.check(self.tier2_investment_growth_rate)?;
        TIER3_GROWTH.check(self.tier3_investment_growth_rate)?;
        RETIREMENT_AGE.check(self.retirement_age as f64)?;

        // Unreachable while the age ranges meet at 55; kept for range changes
        if self.retirement_age < self.current_age {
            return Err(ValidationError::new(
                "retirementAge",
                self.retirement_age as f64,
                format!("must not be below currentAge ({})", self.current_age),
            ));
        }

        Ok(())
    }

    /// Number of salary growth steps between today and retirement
    pub fn years_to_retirement(&self) -> u32 {
        self.retirement_age.saturating_sub(self.current_age)
    }

    /// Copy of these inputs with a different retirement age
    pub fn with_retirement_age(&self, retirement_age: u32) -> Self {
        Self {
            retirement_age,
            ..self.clone()
        }
    }
}

impl Default for PensionCalculatorInput {
    /// Calculator defaults shown before the member edits anything
    fn default() -> Self {
        Self {
            current_age: 30,
            current_monthly_salary: 5000.0,
            months_contributed: 0,
            annual_salary_growth_rate: 3.0,
            tier2_contribution_percent: 8.0,
            tier3_contribution_percent: 5.0,
            tier2_investment_growth_rate: 10.0,
            tier3_investment_growth_rate: 12.0,
            retirement_age: 60,
        }
    }
}
