//! Pension System - multi-tier pension benefit projection engine
//!
//! This library provides:
//! - Salary growth projection to retirement
//! - Tier 2 (mandatory) and Tier 3 (voluntary) defined-contribution fund accumulation
//! - Pluggable Tier 1 (SSNIT) pension and DC annuitization formulas
//! - Replacement ratio, readiness classification and advisory warnings
//! - Batch and retirement-age sweep runs, plus a JSON-over-HTTP endpoint
//!
//! # Example
//!
//! ```
//! use pension_system::{calculate_pension_projection, PensionCalculatorInput};
//!
//! let input = PensionCalculatorInput {
//!     current_age: 30,
//!     current_monthly_salary: 5000.0,
//!     months_contributed: 0,
//!     annual_salary_growth_rate: 3.0,
//!     tier2_contribution_percent: 8.0,
//!     tier3_contribution_percent: 5.0,
//!     tier2_investment_growth_rate: 10.0,
//!     tier3_investment_growth_rate: 12.0,
//!     retirement_age: 60,
//! };
//!
//! let result = calculate_pension_projection(&input).unwrap();
//! assert_eq!(result.yearly_projection.len(), 31);
//! assert!(result.warning_flags.below_minimum_contribution_months);
//! ```

pub mod api;
pub mod assumptions;
pub mod error;
pub mod member;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use assumptions::{AnnuityFormula, Assumptions, Tier1Context, Tier1Formula};
pub use error::{LoadError, ProjectionError, ValidationError};
pub use member::{load_members, MemberRecord, PensionCalculatorInput};
pub use projection::{
    BenefitEstimate, PensionProjectionResult, ProjectionConfig, ProjectionEngine, ProjectionYear,
    ReadinessLabel, WarningFlags,
};
pub use scenario::ScenarioRunner;

/// Project one member with the default assumptions and configuration
pub fn calculate_pension_projection(
    input: &PensionCalculatorInput,
) -> Result<PensionProjectionResult, ProjectionError> {
    ProjectionEngine::default().project(input)
}
