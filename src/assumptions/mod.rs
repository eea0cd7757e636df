//! Actuarial assumptions: Tier 1 benefit formula and DC annuitization basis

mod annuity;
mod tier1;
pub mod loader;

pub use annuity::{AnnuityFormula, FixedTermAnnuity, LevelPaymentAnnuity};
pub use loader::LoadedAssumptions;
pub use tier1::{
    CappedMonthsFormula, SsnitAccrualFormula, Tier1Context, Tier1Formula,
    MAX_CONTRIBUTION_MONTHS,
};

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::LoadError;

/// Container for the pluggable actuarial strategies used by a projection
#[derive(Clone)]
pub struct Assumptions {
    pub tier1: Arc<dyn Tier1Formula>,
    pub annuity: Arc<dyn AnnuityFormula>,
}

impl fmt::Debug for Assumptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Assumptions")
            .field("tier1", &self.tier1.name())
            .field("annuity", &self.annuity.name())
            .finish()
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_ssnit()
    }
}

impl Assumptions {
    /// Capped-months Tier 1 formula with a 20-year fixed-term annuity
    pub fn default_ssnit() -> Self {
        Self {
            tier1: Arc::new(CappedMonthsFormula::default()),
            annuity: Arc::new(FixedTermAnnuity::default()),
        }
    }

    /// Build from explicit strategies
    pub fn new(tier1: impl Tier1Formula + 'static, annuity: impl AnnuityFormula + 'static) -> Self {
        Self {
            tier1: Arc::new(tier1),
            annuity: Arc::new(annuity),
        }
    }

    /// Load assumptions from CSV files in the default location (data/assumptions/)
    pub fn from_csv() -> Result<Self, LoadError> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load assumptions from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, LoadError> {
        let loaded = LoadedAssumptions::load_from(path)?;
        Self::from_loaded(&loaded)
    }

    /// Select and parameterise strategies from a loaded parameter table
    ///
    /// Missing numeric parameters fall back to each strategy's defaults.
    pub fn from_loaded(loaded: &LoadedAssumptions) -> Result<Self, LoadError> {
        let tier1: Arc<dyn Tier1Formula> = match loaded.text("tier1_formula").unwrap_or("capped_months") {
            "capped_months" => {
                let defaults = CappedMonthsFormula::default();
                Arc::new(CappedMonthsFormula {
                    max_accrual_rate: loaded.number("max_accrual_rate")?.unwrap_or(defaults.max_accrual_rate),
                    max_months: loaded.count("max_contribution_months")?.unwrap_or(defaults.max_months),
                })
            }
            "ssnit_accrual" => {
                let defaults = SsnitAccrualFormula::default();
                Arc::new(SsnitAccrualFormula {
                    qualifying_months: loaded.count("qualifying_months")?.unwrap_or(defaults.qualifying_months),
                    base_rate: loaded.number("base_accrual_rate")?.unwrap_or(defaults.base_rate),
                    rate_per_extra_year: loaded.number("accrual_per_extra_year")?.unwrap_or(defaults.rate_per_extra_year),
                    max_rate: loaded.number("max_accrual_rate")?.unwrap_or(defaults.max_rate),
                    max_months: loaded.count("max_contribution_months")?.unwrap_or(defaults.max_months),
                })
            }
            other => {
                return Err(LoadError::UnknownStrategy {
                    kind: "tier1",
                    name: other.to_string(),
                })
            }
        };

        let annuity: Arc<dyn AnnuityFormula> = match loaded.text("annuity_formula").unwrap_or("fixed_term") {
            "fixed_term" => Arc::new(FixedTermAnnuity {
                payout_months: loaded
                    .count("payout_months")?
                    .unwrap_or(FixedTermAnnuity::default().payout_months),
            }),
            "level_payment" => {
                let annual_rate = loaded
                    .number("annuity_rate")?
                    .ok_or(LoadError::MissingParameter("annuity_rate"))?;
                Arc::new(LevelPaymentAnnuity {
                    annual_rate,
                    payout_years: loaded
                        .count("payout_years")?
                        .unwrap_or(LevelPaymentAnnuity::default().payout_years),
                })
            }
            other => {
                return Err(LoadError::UnknownStrategy {
                    kind: "annuity",
                    name: other.to_string(),
                })
            }
        };

        Ok(Self { tier1, annuity })
    }
}
