//! Output structures for projections

use serde::{Deserialize, Serialize};

use super::readiness::{ReadinessLabel, WarningFlags};

/// Round a currency figure to the nearest whole unit (half away from zero)
pub fn round_currency(value: f64) -> f64 {
    value.round()
}

/// Round a percentage to one decimal place
pub fn round_percent(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// A single year of the projection time series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionYear {
    /// Member's age in this projection year
    pub year: u32,
    pub projected_salary: f64,
    pub tier2_fund_value: f64,
    pub tier3_fund_value: f64,
    /// Tier 2 plus Tier 3 contributions to date
    pub cumulative_contributions: f64,
    /// Combined fund value less contributions to date, floored at zero
    pub cumulative_investment_gains: f64,
}

impl ProjectionYear {
    pub fn total_fund_value(&self) -> f64 {
        self.tier2_fund_value + self.tier3_fund_value
    }

    fn rounded(&self) -> Self {
        Self {
            year: self.year,
            projected_salary: round_currency(self.projected_salary),
            tier2_fund_value: round_currency(self.tier2_fund_value),
            tier3_fund_value: round_currency(self.tier3_fund_value),
            cumulative_contributions: round_currency(self.cumulative_contributions),
            cumulative_investment_gains: round_currency(self.cumulative_investment_gains),
        }
    }
}

/// Benefit figures at retirement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitEstimate {
    pub tier1_monthly_pension: f64,

    pub tier2_total_fund_value: f64,
    pub tier2_lump_sum: f64,
    pub tier2_monthly_annuity: f64,

    pub tier3_total_fund_value: f64,
    pub tier3_lump_sum: f64,
    pub tier3_monthly_annuity: f64,

    pub final_projected_salary: f64,
    pub total_monthly_retirement_income: f64,
    pub replacement_ratio_percent: f64,
    pub readiness_label: ReadinessLabel,

    /// Tier 2 plus Tier 3 contributions over the whole projection
    pub total_contributions: f64,
    pub total_investment_gains: f64,
}

impl BenefitEstimate {
    fn rounded(&self) -> Self {
        Self {
            tier1_monthly_pension: round_currency(self.tier1_monthly_pension),
            tier2_total_fund_value: round_currency(self.tier2_total_fund_value),
            tier2_lump_sum: round_currency(self.tier2_lump_sum),
            tier2_monthly_annuity: round_currency(self.tier2_monthly_annuity),
            tier3_total_fund_value: round_currency(self.tier3_total_fund_value),
            tier3_lump_sum: round_currency(self.tier3_lump_sum),
            tier3_monthly_annuity: round_currency(self.tier3_monthly_annuity),
            final_projected_salary: round_currency(self.final_projected_salary),
            total_monthly_retirement_income: round_currency(self.total_monthly_retirement_income),
            replacement_ratio_percent: round_percent(self.replacement_ratio_percent),
            // Label is always derived from the unrounded ratio
            readiness_label: self.readiness_label,
            total_contributions: round_currency(self.total_contributions),
            total_investment_gains: round_currency(self.total_investment_gains),
        }
    }
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PensionProjectionResult {
    pub benefit_estimate: BenefitEstimate,

    /// One row per year of age from today to retirement inclusive
    pub yearly_projection: Vec<ProjectionYear>,

    pub warning_flags: WarningFlags,

    /// Display messages for the raised warning flags
    pub warnings: Vec<String>,
}

impl PensionProjectionResult {
    /// Presentation copy with currency rounded to whole units and the ratio to one decimal
    ///
    /// The engine never rounds; call this only at the display boundary.
    pub fn rounded(&self) -> Self {
        Self {
            benefit_estimate: self.benefit_estimate.rounded(),
            yearly_projection: self.yearly_projection.iter().map(ProjectionYear::rounded).collect(),
            warning_flags: self.warning_flags,
            warnings: self.warnings.clone(),
        }
    }

    pub fn years(&self) -> usize {
        self.yearly_projection.len()
    }

    /// Final row of the time series
    pub fn retirement_year(&self) -> Option<&ProjectionYear> {
        self.yearly_projection.last()
    }
}
