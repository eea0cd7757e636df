//! Member inputs and batch loading

mod data;
pub mod loader;

pub use data::{
    FieldRange, PensionCalculatorInput, CURRENT_AGE, MONTHS_CONTRIBUTED, RETIREMENT_AGE,
    SALARY_GROWTH, TIER2_CONTRIBUTION, TIER2_GROWTH, TIER3_CONTRIBUTION, TIER3_GROWTH,
};
pub use loader::{load_members, load_members_from_reader, MemberRecord};
