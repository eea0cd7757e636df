//! Conversion of a defined-contribution lump sum into monthly retirement income
//!
//! The same formula is applied to Tier 2 and Tier 3 balances. Default horizons and rates
//! are PLACEHOLDERS pending the authoritative annuity basis.

/// Strategy turning a fund balance at retirement into a monthly income
pub trait AnnuityFormula: Send + Sync {
    /// Short code used in parameter files and logs
    fn name(&self) -> &'static str;

    /// Monthly income bought by `fund_value` (GHS, non-negative)
    fn monthly_income(&self, fund_value: f64) -> f64;
}

/// Straight division of the balance over a fixed number of months
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTermAnnuity {
    /// Payout horizon in months (placeholder: 240, i.e. 20 years)
    pub payout_months: u32,
}

impl Default for FixedTermAnnuity {
    fn default() -> Self {
        Self { payout_months: 240 }
    }
}

impl AnnuityFormula for FixedTermAnnuity {
    fn name(&self) -> &'static str {
        "fixed_term"
    }

    fn monthly_income(&self, fund_value: f64) -> f64 {
        if self.payout_months == 0 || fund_value <= 0.0 {
            return 0.0;
        }
        fund_value / self.payout_months as f64
    }
}

/// Level monthly payment that exhausts the balance over `payout_years`
/// while the remainder keeps earning `annual_rate` (compounded monthly)
///
/// `PMT = PV * i / (1 - (1 + i)^-n)` with `i = annual_rate / 12`, `n = 12 * payout_years`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelPaymentAnnuity {
    /// Decimal annual rate, e.g. 0.05
    pub annual_rate: f64,
    pub payout_years: u32,
}

impl Default for LevelPaymentAnnuity {
    fn default() -> Self {
        Self {
            annual_rate: 0.05,
            payout_years: 20,
        }
    }
}

impl LevelPaymentAnnuity {
    /// Present value of 1 per month for the payout term
    pub fn annuity_factor(&self) -> f64 {
        let n = (self.payout_years * 12) as f64;
        let i = self.annual_rate / 12.0;
        if i.abs() < 1e-12 {
            n
        } else {
            (1.0 - (1.0 + i).powf(-n)) / i
        }
    }
}

impl AnnuityFormula for LevelPaymentAnnuity {
    fn name(&self) -> &'static str {
        "level_payment"
    }

    fn monthly_income(&self, fund_value: f64) -> f64 {
        let factor = self.annuity_factor();
        if factor <= 0.0 || fund_value <= 0.0 {
            return 0.0;
        }
        fund_value / factor
    }
}
