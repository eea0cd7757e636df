//! Tier 1 (SSNIT) monthly pension formulas
//!
//! The statutory benefit rule is jurisdiction-specific and is not fixed by this crate.
//! Both formulas below carry PLACEHOLDER coefficients pending confirmation against the
//! authoritative SSNIT actuarial rules; swap in a different [`Tier1Formula`] to change them.

/// Inputs available to a Tier 1 benefit formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier1Context {
    pub current_age: u32,
    pub retirement_age: u32,
    /// Monthly salary in the retirement year, after growth
    pub final_salary: f64,
    /// Contribution history already on record
    pub months_contributed: u32,
}

impl Tier1Context {
    /// Recorded months plus the months still to be contributed before retirement
    pub fn total_months_at_retirement(&self) -> u32 {
        let future = self.retirement_age.saturating_sub(self.current_age) * 12;
        self.months_contributed + future
    }
}

/// Strategy computing the Tier 1 monthly pension
pub trait Tier1Formula: Send + Sync {
    /// Short code used in parameter files and logs
    fn name(&self) -> &'static str;

    /// Monthly pension payable from retirement (GHS, non-negative)
    fn monthly_pension(&self, ctx: &Tier1Context) -> f64;
}

/// Maximum contribution months credited by the Tier 1 scheme (37.5 years)
pub const MAX_CONTRIBUTION_MONTHS: u32 = 450;

/// Pension proportional to final salary and a capped contribution-months factor
///
/// `pension = final_salary * max_accrual_rate * min(months, max_months) / max_months`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CappedMonthsFormula {
    /// Accrual rate earned at the cap (placeholder: 60%)
    pub max_accrual_rate: f64,
    pub max_months: u32,
}

impl Default for CappedMonthsFormula {
    fn default() -> Self {
        Self {
            max_accrual_rate: 0.60,
            max_months: MAX_CONTRIBUTION_MONTHS,
        }
    }
}

impl CappedMonthsFormula {
    /// Fraction of the maximum accrual earned, in [0, 1]
    pub fn months_factor(&self, ctx: &Tier1Context) -> f64 {
        if self.max_months == 0 {
            return 0.0;
        }
        let months = ctx.total_months_at_retirement().min(self.max_months);
        months as f64 / self.max_months as f64
    }
}

impl Tier1Formula for CappedMonthsFormula {
    fn name(&self) -> &'static str {
        "capped_months"
    }

    fn monthly_pension(&self, ctx: &Tier1Context) -> f64 {
        (ctx.final_salary * self.max_accrual_rate * self.months_factor(ctx)).max(0.0)
    }
}

/// Stepwise accrual: a base rate at the qualifying period plus an increment per extra year
///
/// Placeholder coefficients: 37.5% at 180 months, +1.125% per further full 12 months,
/// capped at 60%. Below the qualifying period the base rate is pro-rated rather than
/// withheld; the shortfall is reported as an advisory warning by the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SsnitAccrualFormula {
    pub qualifying_months: u32,
    pub base_rate: f64,
    pub rate_per_extra_year: f64,
    pub max_rate: f64,
    pub max_months: u32,
}

impl Default for SsnitAccrualFormula {
    fn default() -> Self {
        Self {
            qualifying_months: 180,
            base_rate: 0.375,
            rate_per_extra_year: 0.01125,
            max_rate: 0.60,
            max_months: MAX_CONTRIBUTION_MONTHS,
        }
    }
}

impl SsnitAccrualFormula {
    /// Accrual rate earned for the capped contribution months
    pub fn accrual_rate(&self, ctx: &Tier1Context) -> f64 {
        let months = ctx.total_months_at_retirement().min(self.max_months);

        if months < self.qualifying_months {
            if self.qualifying_months == 0 {
                return 0.0;
            }
            return self.base_rate * months as f64 / self.qualifying_months as f64;
        }

        let extra_years = (months - self.qualifying_months) / 12;
        (self.base_rate + self.rate_per_extra_year * extra_years as f64).min(self.max_rate)
    }
}

impl Tier1Formula for SsnitAccrualFormula {
    fn name(&self) -> &'static str {
        "ssnit_accrual"
    }

    fn monthly_pension(&self, ctx: &Tier1Context) -> f64 {
        (ctx.final_salary * self.accrual_rate(ctx)).max(0.0)
    }
}
