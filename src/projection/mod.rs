//! Projection engine for single-member pension projections

mod state;
mod engine;
mod readiness;
mod results;

pub use state::{DcFund, ProjectionState};
pub use engine::{project_final_salary, replacement_ratio, ProjectionConfig, ProjectionEngine};
pub use readiness::{ReadinessLabel, WarningFlags};
pub use results::{
    round_currency, round_percent, BenefitEstimate, PensionProjectionResult, ProjectionYear,
};
