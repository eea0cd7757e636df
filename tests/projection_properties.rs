use approx::assert_relative_eq;
use pension_system::assumptions::{FixedTermAnnuity, SsnitAccrualFormula};
use pension_system::{
    calculate_pension_projection, Assumptions, PensionCalculatorInput, ProjectionConfig,
    ProjectionEngine, ProjectionError, ReadinessLabel,
};
use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

fn scenario_input() -> PensionCalculatorInput {
    PensionCalculatorInput {
        current_age: 30,
        current_monthly_salary: 5000.0,
        months_contributed: 0,
        annual_salary_growth_rate: 3.0,
        tier2_contribution_percent: 8.0,
        tier3_contribution_percent: 5.0,
        tier2_investment_growth_rate: 10.0,
        tier3_investment_growth_rate: 12.0,
        retirement_age: 60,
    }
}

#[test]
fn thirty_year_scenario() {
    let result = calculate_pension_projection(&scenario_input()).unwrap();

    assert_eq!(result.yearly_projection.len(), 31);
    assert!(result.warning_flags.below_minimum_contribution_months);
    assert!(result.benefit_estimate.tier2_total_fund_value > 0.0);
    assert!(result.benefit_estimate.tier3_total_fund_value > 0.0);
    assert_eq!(result.yearly_projection[0].tier2_fund_value, 400.0);
    assert_relative_eq!(
        result.benefit_estimate.final_projected_salary,
        5000.0 * 1.03f64.powi(30),
        max_relative = 1e-12
    );
}

#[test]
fn retiring_at_current_age_gives_single_year() {
    let input = PensionCalculatorInput {
        retirement_age: 30,
        ..scenario_input()
    };
    // 30 is below the retirement-age floor; the single-year case needs both ages at 55
    assert!(calculate_pension_projection(&input).is_err());

    let input = PensionCalculatorInput {
        current_age: 55,
        retirement_age: 55,
        ..scenario_input()
    };
    let result = calculate_pension_projection(&input).unwrap();

    assert_eq!(result.yearly_projection.len(), 1);
    assert_eq!(result.benefit_estimate.final_projected_salary, 5000.0);
    assert_eq!(result.benefit_estimate.tier2_total_fund_value, 400.0);
    assert_eq!(result.yearly_projection[0].cumulative_investment_gains, 0.0);
}

#[test]
fn zero_tier3_contribution_gives_empty_tier3() {
    let input = PensionCalculatorInput {
        tier3_contribution_percent: 0.0,
        ..scenario_input()
    };
    let estimate = calculate_pension_projection(&input).unwrap().benefit_estimate;

    assert_eq!(estimate.tier3_total_fund_value, 0.0);
    assert_eq!(estimate.tier3_lump_sum, 0.0);
    assert_eq!(estimate.tier3_monthly_annuity, 0.0);
}

#[test]
fn zero_salary_growth_keeps_salary_flat() {
    let input = PensionCalculatorInput {
        annual_salary_growth_rate: 0.0,
        ..scenario_input()
    };
    let result = calculate_pension_projection(&input).unwrap();

    assert_eq!(result.benefit_estimate.final_projected_salary, 5000.0);
    assert!(result.yearly_projection.iter().all(|y| y.projected_salary == 5000.0));
}

#[test]
fn degenerate_salary_is_rejected_at_input() {
    for salary in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let input = PensionCalculatorInput {
            current_monthly_salary: salary,
            ..scenario_input()
        };
        match calculate_pension_projection(&input) {
            Err(ProjectionError::Validation(err)) => assert_eq!(err.field, "currentMonthlySalary"),
            other => panic!("salary {salary} should be rejected, got {other:?}"),
        }
    }
}

#[test]
fn tiny_salary_does_not_crash() {
    let input = PensionCalculatorInput {
        current_monthly_salary: 1e-9,
        ..scenario_input()
    };
    let result = calculate_pension_projection(&input).unwrap();
    assert!(result.benefit_estimate.replacement_ratio_percent.is_finite());
}

#[test]
fn alternative_strategies_plug_in() {
    let engine = ProjectionEngine::new(
        Assumptions::new(SsnitAccrualFormula::default(), FixedTermAnnuity { payout_months: 120 }),
        ProjectionConfig::default(),
    );
    let default = calculate_pension_projection(&scenario_input()).unwrap();
    let custom = engine.project(&scenario_input()).unwrap();

    // Same accumulation, different benefit rules
    assert_eq!(
        custom.benefit_estimate.tier2_total_fund_value,
        default.benefit_estimate.tier2_total_fund_value
    );
    assert_relative_eq!(
        custom.benefit_estimate.tier2_monthly_annuity,
        default.benefit_estimate.tier2_monthly_annuity * 2.0,
        max_relative = 1e-12
    );
    assert_ne!(
        custom.benefit_estimate.tier1_monthly_pension,
        default.benefit_estimate.tier1_monthly_pension
    );
}

#[test]
fn rounded_presentation_keeps_label_from_raw_ratio() {
    let result = calculate_pension_projection(&scenario_input()).unwrap();
    let rounded = result.rounded();

    assert_eq!(rounded.benefit_estimate.readiness_label, result.benefit_estimate.readiness_label);
    assert_eq!(
        rounded.benefit_estimate.readiness_label,
        ReadinessLabel::from_ratio(result.benefit_estimate.replacement_ratio_percent)
    );
    for year in &rounded.yearly_projection {
        assert_eq!(year.tier2_fund_value, year.tier2_fund_value.round());
    }
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(64))]

    #[test]
    fn prop_projection_invariants(
        current_age in 18u32..=55,
        retirement_offset in 0u32..=47,
        salary_cents in 1u32..5_000_000,
        months_contributed in 0u32..=450,
        salary_growth_bp in 0u32..=1000,
        tier2_bp in 800u32..=1350,
        tier3_bp in 0u32..=1000,
        tier2_growth_bp in 500u32..=1500,
        tier3_growth_bp in 700u32..=2000
    ) {
        let retirement_age = (current_age + retirement_offset).clamp(55, 65);

        let input = PensionCalculatorInput {
            current_age,
            current_monthly_salary: salary_cents as f64 / 100.0,
            months_contributed,
            annual_salary_growth_rate: salary_growth_bp as f64 / 100.0,
            tier2_contribution_percent: tier2_bp as f64 / 100.0,
            tier3_contribution_percent: tier3_bp as f64 / 100.0,
            tier2_investment_growth_rate: tier2_growth_bp as f64 / 100.0,
            tier3_investment_growth_rate: tier3_growth_bp as f64 / 100.0,
            retirement_age,
        };

        let first = calculate_pension_projection(&input).unwrap();
        let second = calculate_pension_projection(&input).unwrap();
        prop_assert_eq!(&first, &second);

        let years = &first.yearly_projection;
        prop_assert_eq!(years.len() as u32, retirement_age - current_age + 1);

        let estimate = &first.benefit_estimate;
        prop_assert!(estimate.tier1_monthly_pension >= 0.0);
        prop_assert!(estimate.tier2_total_fund_value >= 0.0);
        prop_assert!(estimate.tier3_total_fund_value >= 0.0);
        prop_assert!(estimate.tier2_monthly_annuity >= 0.0);
        prop_assert!(estimate.tier3_monthly_annuity >= 0.0);
        prop_assert!(estimate.replacement_ratio_percent.is_finite());
        prop_assert_eq!(estimate.readiness_label, ReadinessLabel::from_ratio(estimate.replacement_ratio_percent));
        prop_assert_eq!(
            first.warning_flags.below_minimum_contribution_months,
            months_contributed < 180
        );

        if salary_growth_bp > 0 && retirement_age > current_age {
            prop_assert!(estimate.final_projected_salary > input.current_monthly_salary);
        } else {
            prop_assert_eq!(estimate.final_projected_salary, input.current_monthly_salary);
        }

        for pair in years.windows(2) {
            prop_assert!(pair[1].year == pair[0].year + 1);
            prop_assert!(pair[1].tier2_fund_value >= pair[0].tier2_fund_value);
            prop_assert!(pair[1].tier3_fund_value >= pair[0].tier3_fund_value);
            prop_assert!(pair[1].cumulative_contributions >= pair[0].cumulative_contributions);
        }
        for year in years {
            prop_assert!(year.cumulative_investment_gains >= 0.0);
        }
    }
}
