//! Readiness classification and advisory warnings

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative label bucketed from the replacement ratio (inclusive lower bounds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadinessLabel {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl ReadinessLabel {
    pub const EXCELLENT_FROM: f64 = 80.0;
    pub const GOOD_FROM: f64 = 60.0;
    pub const FAIR_FROM: f64 = 40.0;

    /// Classify a replacement ratio given in percent
    pub fn from_ratio(ratio_percent: f64) -> Self {
        if ratio_percent >= Self::EXCELLENT_FROM {
            ReadinessLabel::Excellent
        } else if ratio_percent >= Self::GOOD_FROM {
            ReadinessLabel::Good
        } else if ratio_percent >= Self::FAIR_FROM {
            ReadinessLabel::Fair
        } else {
            ReadinessLabel::NeedsImprovement
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReadinessLabel::Excellent => "Excellent",
            ReadinessLabel::Good => "Good",
            ReadinessLabel::Fair => "Fair",
            ReadinessLabel::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl fmt::Display for ReadinessLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-blocking advisory flags attached to every result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarningFlags {
    /// Tier 1 history on record is below the minimum qualifying period
    pub below_minimum_contribution_months: bool,
    /// Projected income replaces less than the configured share of final salary
    pub low_replacement_income: bool,
}

impl WarningFlags {
    pub fn any(&self) -> bool {
        self.below_minimum_contribution_months || self.low_replacement_income
    }

    /// Messages for display, in a fixed order
    pub fn messages(&self, min_qualifying_months: u32, low_replacement_threshold: f64) -> Vec<String> {
        let mut messages = Vec::new();
        if self.below_minimum_contribution_months {
            messages.push(format!(
                "Fewer than {min_qualifying_months} months of Tier 1 contributions on record; \
                 the minimum qualifying period for a SSNIT pension is not yet met"
            ));
        }
        if self.low_replacement_income {
            messages.push(format!(
                "Projected retirement income replaces less than {low_replacement_threshold}% of final salary"
            ));
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_boundaries() {
        assert_eq!(ReadinessLabel::from_ratio(80.0), ReadinessLabel::Excellent);
        assert_eq!(ReadinessLabel::from_ratio(79.999), ReadinessLabel::Good);
        assert_eq!(ReadinessLabel::from_ratio(60.0), ReadinessLabel::Good);
        assert_eq!(ReadinessLabel::from_ratio(59.999), ReadinessLabel::Fair);
        assert_eq!(ReadinessLabel::from_ratio(40.0), ReadinessLabel::Fair);
        assert_eq!(ReadinessLabel::from_ratio(39.999), ReadinessLabel::NeedsImprovement);
        assert_eq!(ReadinessLabel::from_ratio(0.0), ReadinessLabel::NeedsImprovement);
        assert_eq!(ReadinessLabel::from_ratio(250.0), ReadinessLabel::Excellent);
    }

    #[test]
    fn test_labels_serialize_as_display_text() {
        assert_eq!(
            serde_json::to_string(&ReadinessLabel::NeedsImprovement).unwrap(),
            "\"Needs Improvement\""
        );
        assert_eq!(serde_json::to_string(&ReadinessLabel::Good).unwrap(), "\"Good\"");
        assert_eq!(ReadinessLabel::Fair.to_string(), "Fair");
    }

    #[test]
    fn test_warning_messages_follow_flags() {
        let none = WarningFlags::default();
        assert!(!none.any());
        assert!(none.messages(180, 50.0).is_empty());

        let both = WarningFlags {
            below_minimum_contribution_months: true,
            low_replacement_income: true,
        };
        let messages = both.messages(180, 50.0);
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("180 months"));
        assert!(messages[1].contains("50%"));
    }
}
