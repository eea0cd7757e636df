//! Running state of a member's projection, one step per year of age

use crate::member::PensionCalculatorInput;

/// Balance and contribution totals of one defined-contribution tier
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DcFund {
    /// Contribution rate as a decimal
    pub contribution_rate: f64,
    /// Annual investment growth as a decimal
    pub growth_rate: f64,
    pub fund_value: f64,
    pub cumulative_contributions: f64,
}

impl DcFund {
    pub fn new(contribution_percent: f64, growth_percent: f64) -> Self {
        Self {
            contribution_rate: contribution_percent / 100.0,
            growth_rate: growth_percent / 100.0,
            fund_value: 0.0,
            cumulative_contributions: 0.0,
        }
    }

    /// Apply one year's contribution and growth
    ///
    /// In the entry year the balance is just the contribution. Afterwards the
    /// contribution joins the balance before that year's growth is applied.
    pub fn step(&mut self, salary: f64, entry_year: bool) {
        let contribution = salary * self.contribution_rate;
        self.cumulative_contributions += contribution;

        self.fund_value = if entry_year {
            contribution
        } else {
            (self.fund_value + contribution) * (1.0 + self.growth_rate)
        };
    }

    /// Investment growth earned so far
    pub fn gains(&self) -> f64 {
        self.fund_value - self.cumulative_contributions
    }
}

/// State of a member at a point in time during projection
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Age in the entry year
    pub start_age: u32,

    /// Salary in the current projection year (monthly, as entered)
    pub salary: f64,

    /// Annual salary growth as a decimal
    pub salary_growth: f64,

    pub tier2: DcFund,
    pub tier3: DcFund,

    /// Number of years stepped so far
    pub years_elapsed: u32,
}

impl ProjectionState {
    /// Initialize state before the entry year has been stepped
    pub fn from_input(input: &PensionCalculatorInput) -> Self {
        Self {
            start_age: input.current_age,
            salary: input.current_monthly_salary,
            salary_growth: input.annual_salary_growth_rate / 100.0,
            tier2: DcFund::new(input.tier2_contribution_percent, input.tier2_investment_growth_rate),
            tier3: DcFund::new(input.tier3_contribution_percent, input.tier3_investment_growth_rate),
            years_elapsed: 0,
        }
    }

    /// Advance to the given age: grow salary (except in the entry year) and step both tiers
    pub fn advance_year(&mut self, age: u32) {
        let entry_year = age == self.start_age;
        if !entry_year {
            self.salary *= 1.0 + self.salary_growth;
        }

        self.tier2.step(self.salary, entry_year);
        self.tier3.step(self.salary, entry_year);
        self.years_elapsed += 1;
    }

    pub fn total_fund_value(&self) -> f64 {
        self.tier2.fund_value + self.tier3.fund_value
    }

    pub fn cumulative_contributions(&self) -> f64 {
        self.tier2.cumulative_contributions + self.tier3.cumulative_contributions
    }

    /// Combined investment gains, floored at zero
    pub fn cumulative_gains(&self) -> f64 {
        (self.total_fund_value() - self.cumulative_contributions()).max(0.0)
    }
}
