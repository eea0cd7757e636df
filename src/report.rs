//! CSV and console rendering of projection results

use serde::Serialize;
use std::io::Write;

use crate::projection::{PensionProjectionResult, ProjectionYear};
use crate::scenario::MemberOutcome;

#[derive(Debug, Serialize)]
struct ScheduleRow {
    #[serde(rename = "Year")]
    year: u32,
    #[serde(rename = "ProjectedSalary")]
    projected_salary: String,
    #[serde(rename = "Tier2Fund")]
    tier2_fund: String,
    #[serde(rename = "Tier3Fund")]
    tier3_fund: String,
    #[serde(rename = "CumulativeContributions")]
    cumulative_contributions: String,
    #[serde(rename = "CumulativeGains")]
    cumulative_gains: String,
}

impl From<&ProjectionYear> for ScheduleRow {
    fn from(row: &ProjectionYear) -> Self {
        Self {
            year: row.year,
            projected_salary: format!("{:.2}", row.projected_salary),
            tier2_fund: format!("{:.2}", row.tier2_fund_value),
            tier3_fund: format!("{:.2}", row.tier3_fund_value),
            cumulative_contributions: format!("{:.2}", row.cumulative_contributions),
            cumulative_gains: format!("{:.2}", row.cumulative_investment_gains),
        }
    }
}

/// Write the year-by-year schedule as CSV
pub fn write_schedule_csv<W: Write>(writer: W, result: &PensionProjectionResult) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in &result.yearly_projection {
        wtr.serialize(ScheduleRow::from(row))?;
    }
    wtr.flush()?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    #[serde(rename = "MemberID")]
    member_id: &'a str,
    #[serde(rename = "Status")]
    status: &'static str,
    #[serde(rename = "FinalSalary")]
    final_salary: Option<f64>,
    #[serde(rename = "Tier1Pension")]
    tier1_pension: Option<f64>,
    #[serde(rename = "Tier2LumpSum")]
    tier2_lump_sum: Option<f64>,
    #[serde(rename = "Tier2Annuity")]
    tier2_annuity: Option<f64>,
    #[serde(rename = "Tier3LumpSum")]
    tier3_lump_sum: Option<f64>,
    #[serde(rename = "Tier3Annuity")]
    tier3_annuity: Option<f64>,
    #[serde(rename = "ReplacementRatio")]
    replacement_ratio: Option<f64>,
    #[serde(rename = "Readiness")]
    readiness: &'a str,
    #[serde(rename = "Message")]
    message: String,
}

/// Write one summary line per member, rounded for display
///
/// Rejected members keep their row with the error message and empty figures.
pub fn write_batch_summary_csv<W: Write>(writer: W, outcomes: &[MemberOutcome]) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);

    for outcome in outcomes {
        let row = match &outcome.result {
            Ok(result) => {
                let e = result.rounded().benefit_estimate;
                SummaryRow {
                    member_id: &outcome.member_id,
                    status: "ok",
                    final_salary: Some(e.final_projected_salary),
                    tier1_pension: Some(e.tier1_monthly_pension),
                    tier2_lump_sum: Some(e.tier2_lump_sum),
                    tier2_annuity: Some(e.tier2_monthly_annuity),
                    tier3_lump_sum: Some(e.tier3_lump_sum),
                    tier3_annuity: Some(e.tier3_monthly_annuity),
                    replacement_ratio: Some(e.replacement_ratio_percent),
                    readiness: e.readiness_label.as_str(),
                    message: result.warnings.join("; "),
                }
            }
            Err(err) => SummaryRow {
                member_id: &outcome.member_id,
                status: "rejected",
                final_salary: None,
                tier1_pension: None,
                tier2_lump_sum: None,
                tier2_annuity: None,
                tier3_lump_sum: None,
                tier3_annuity: None,
                replacement_ratio: None,
                readiness: "",
                message: err.to_string(),
            },
        };
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Human-readable summary for terminal output
pub fn format_summary(result: &PensionProjectionResult) -> String {
    let e = &result.rounded().benefit_estimate;
    let mut out = String::new();

    out.push_str(&format!("Final projected salary:   GHS {:>14.0}\n", e.final_projected_salary));
    out.push_str(&format!("Tier 1 monthly pension:   GHS {:>14.0}\n", e.tier1_monthly_pension));
    out.push_str(&format!(
        "Tier 2 lump sum:          GHS {:>14.0}  (monthly annuity {:.0})\n",
        e.tier2_lump_sum, e.tier2_monthly_annuity
    ));
    out.push_str(&format!(
        "Tier 3 lump sum:          GHS {:>14.0}  (monthly annuity {:.0})\n",
        e.tier3_lump_sum, e.tier3_monthly_annuity
    ));
    out.push_str(&format!("Total monthly income:     GHS {:>14.0}\n", e.total_monthly_retirement_income));
    out.push_str(&format!(
        "Replacement ratio:        {:>18.1}%  ({})\n",
        e.replacement_ratio_percent, e.readiness_label
    ));

    for warning in &result.warnings {
        out.push_str(&format!("warning: {warning}\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::PensionCalculatorInput;
    use crate::projection::ProjectionEngine;

    fn scenario() -> PensionProjectionResult {
        ProjectionEngine::default()
            .project(&PensionCalculatorInput::default())
            .unwrap()
    }

    #[test]
    fn test_schedule_csv_has_one_line_per_year() {
        let mut buf = Vec::new();
        write_schedule_csv(&mut buf, &scenario()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 32);
        assert_eq!(
            lines[0],
            "Year,ProjectedSalary,Tier2Fund,Tier3Fund,CumulativeContributions,CumulativeGains"
        );
        assert!(lines[1].starts_with("30,5000.00,400.00,250.00,650.00,0.00"));
    }

    #[test]
    fn test_batch_summary_keeps_rejected_members() {
        let outcomes = vec![
            MemberOutcome {
                member_id: "ok-1".to_string(),
                result: Ok(scenario()),
            },
            MemberOutcome {
                member_id: "bad-1".to_string(),
                result: ProjectionEngine::default().project(&PensionCalculatorInput {
                    current_age: 17,
                    ..Default::default()
                }),
            },
        ];

        let mut buf = Vec::new();
        write_batch_summary_csv(&mut buf, &outcomes).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("ok-1,ok,"));
        assert!(lines[2].starts_with("bad-1,rejected,,"));
        assert!(lines[2].contains("currentAge"));
    }

    #[test]
    fn test_format_summary_mentions_label_and_warnings() {
        let text = format_summary(&scenario());
        assert!(text.contains("Replacement ratio"));
        assert!(text.contains("warning:"));
    }
}
