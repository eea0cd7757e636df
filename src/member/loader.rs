//! Load member batches from CSV

use super::PensionCalculatorInput;
use crate::error::LoadError;
use csv::Reader;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Raw CSV row matching the members file columns
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "MemberID")]
    member_id: String,
    #[serde(rename = "CurrentAge")]
    current_age: u32,
    #[serde(rename = "CurrentMonthlySalary")]
    current_monthly_salary: f64,
    #[serde(rename = "MonthsContributed")]
    months_contributed: u32,
    #[serde(rename = "AnnualSalaryGrowthRate")]
    annual_salary_growth_rate: f64,
    #[serde(rename = "Tier2ContributionPercent")]
    tier2_contribution_percent: f64,
    #[serde(rename = "Tier3ContributionPercent")]
    tier3_contribution_percent: f64,
    #[serde(rename = "Tier2InvestmentGrowthRate")]
    tier2_investment_growth_rate: f64,
    #[serde(rename = "Tier3InvestmentGrowthRate")]
    tier3_investment_growth_rate: f64,
    #[serde(rename = "RetirementAge")]
    retirement_age: u32,
}

impl CsvRow {
    fn into_record(self) -> MemberRecord {
        MemberRecord {
            member_id: self.member_id,
            input: PensionCalculatorInput {
                current_age: self.current_age,
                current_monthly_salary: self.current_monthly_salary,
                months_contributed: self.months_contributed,
                annual_salary_growth_rate: self.annual_salary_growth_rate,
                tier2_contribution_percent: self.tier2_contribution_percent,
                tier3_contribution_percent: self.tier3_contribution_percent,
                tier2_investment_growth_rate: self.tier2_investment_growth_rate,
                tier3_investment_growth_rate: self.tier3_investment_growth_rate,
                retirement_age: self.retirement_age,
            },
        }
    }
}

/// One member's identifier and calculator inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRecord {
    pub member_id: String,
    pub input: PensionCalculatorInput,
}

/// Load members from a CSV file
///
/// Ranges are not checked here; each member is validated when projected.
pub fn load_members(path: &Path) -> Result<Vec<MemberRecord>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_members_from_reader(file)
}

/// Load members from any CSV source
pub fn load_members_from_reader<R: Read>(reader: R) -> Result<Vec<MemberRecord>, LoadError> {
    let mut rdr = Reader::from_reader(reader);
    let mut members = Vec::new();

    for result in rdr.deserialize() {
        let row: CsvRow = result?;
        members.push(row.into_record());
    }

    Ok(members)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "MemberID,CurrentAge,CurrentMonthlySalary,MonthsContributed,AnnualSalaryGrowthRate,Tier2ContributionPercent,Tier3ContributionPercent,Tier2InvestmentGrowthRate,Tier3InvestmentGrowthRate,RetirementAge";

    #[test]
    fn test_load_members_from_reader() {
        let data = format!(
            "{HEADER}\nM-001,30,5000,0,3,8,5,10,12,60\nM-002,45,12000.50,240,2.5,13.5,0,7,9,60\n"
        );
        let members = load_members_from_reader(data.as_bytes()).unwrap();

        assert_eq!(members.len(), 2);
        assert_eq!(members[0].member_id, "M-001");
        assert_eq!(members[0].input, PensionCalculatorInput::default());
        assert_eq!(members[1].input.months_contributed, 240);
        assert_eq!(members[1].input.current_monthly_salary, 12000.50);
        assert_eq!(members[1].input.tier3_contribution_percent, 0.0);
    }

    #[test]
    fn test_out_of_range_rows_still_load() {
        let data = format!("{HEADER}\nM-003,17,5000,0,3,8,5,10,12,60\n");
        let members = load_members_from_reader(data.as_bytes()).unwrap();
        assert_eq!(members[0].input.current_age, 17);
        assert!(members[0].input.validate().is_err());
    }

    #[test]
    fn test_malformed_row_is_a_csv_error() {
        let data = format!("{HEADER}\nM-004,thirty,5000,0,3,8,5,10,12,60\n");
        let err = load_members_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_members(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
