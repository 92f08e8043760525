//! Household profile data structures
//!
//! Plain value records describing the household's current finances. Nothing
//! here is derived; every computed figure comes from the calculators, which
//! re-derive from the profile on each call.

use serde::{Deserialize, Serialize};

/// Planning track the household has picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Track {
    /// Faster debt payoff and higher contribution levels
    Aggressive,
    /// Slower, lower-contribution variant of the same plan
    Moderate,
}

impl Track {
    pub fn as_str(&self) -> &'static str {
        match self {
            Track::Aggressive => "aggressive",
            Track::Moderate => "moderate",
        }
    }
}

/// Annual salaries of the two earners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomeProfile {
    pub primary_income: f64,
    pub secondary_income: f64,
}

impl IncomeProfile {
    pub fn total(&self) -> f64 {
        self.primary_income + self.secondary_income
    }
}

/// Retirement contribution elections
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementElections {
    /// Pre-tax 401(k) contribution as percent of the primary salary
    pub pretax_contribution_pct: f64,

    /// Annual Roth IRA contribution in dollars (after-tax)
    pub roth_contribution: f64,
}

impl RetirementElections {
    /// Dollar amount of the pre-tax contribution, rounded to whole dollars
    pub fn pretax_amount(&self, primary_income: f64) -> f64 {
        (primary_income * self.pretax_contribution_pct / 100.0).round()
    }
}

/// One outstanding debt balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtAccount {
    pub name: String,
    pub balance: f64,
    /// Free-form rate description ("0% (6 mo left)", "8%", ...)
    pub rate_note: String,
}

/// Total balance across all debts
pub fn total_debt(debts: &[DebtAccount]) -> f64 {
    debts.iter().map(|d| d.balance).sum()
}

/// Current and target state of a coverage line's deductible choice
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanPair {
    pub current_deductible: f64,
    pub current_premium: f64,
    pub higher_deductible: f64,
    pub higher_premium: f64,
}

/// Insurance-related inputs for the coverage review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceInputs {
    /// Household is still on the low-deductible plans
    pub using_low_deductible: bool,
    pub auto: PlanPair,
    pub home: PlanPair,

    pub health_deductible: f64,
    pub has_hsa: bool,

    /// Current life coverage on the primary earner
    pub primary_life_coverage: f64,

    pub has_boat_insurance: bool,
    pub boat_value: f64,

    pub has_umbrella_policy: bool,

    /// Auto and home are already placed with one carrier
    pub policies_bundled: bool,
}

/// Full household financial profile, the single input to a plan evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdProfile {
    pub track: Track,
    pub income: IncomeProfile,
    pub retirement: RetirementElections,
    pub insurance: InsuranceInputs,
    pub debts: Vec<DebtAccount>,

    pub emergency_fund: f64,
    pub emergency_fund_goal: f64,

    /// Simplified net worth estimate used for the umbrella threshold check
    pub net_worth: f64,
}

impl HouseholdProfile {
    /// Profile the plan started from (Chad & Katie, aggressive track)
    pub fn sample() -> Self {
        Self {
            track: Track::Aggressive,
            income: IncomeProfile { primary_income: 80_000.0, secondary_income: 73_265.0 },
            retirement: RetirementElections {
                pretax_contribution_pct: 4.0,
                roth_contribution: 3_000.0,
            },
            insurance: InsuranceInputs {
                using_low_deductible: true,
                auto: PlanPair {
                    current_deductible: 500.0,
                    current_premium: 4_059.0,
                    higher_deductible: 1_000.0,
                    higher_premium: 3_247.0,
                },
                home: PlanPair {
                    current_deductible: 1_000.0,
                    current_premium: 3_564.0,
                    higher_deductible: 2_500.0,
                    higher_premium: 2_850.0,
                },
                health_deductible: 3_000.0,
                has_hsa: false,
                primary_life_coverage: 80_000.0,
                has_boat_insurance: false,
                boat_value: 80_000.0,
                has_umbrella_policy: false,
                policies_bundled: false,
            },
            debts: vec![
                DebtAccount { name: "Credit Card 1".into(), balance: 9_000.0, rate_note: "0% (6 mo left)".into() },
                DebtAccount { name: "Credit Card 2".into(), balance: 4_000.0, rate_note: "Low".into() },
                DebtAccount { name: "Credit Card 3".into(), balance: 3_000.0, rate_note: "High".into() },
                DebtAccount { name: "Furniture Loan".into(), balance: 3_500.0, rate_note: "0% (3 mo left)".into() },
                DebtAccount { name: "Truck Loan".into(), balance: 25_000.0, rate_note: "6%".into() },
                DebtAccount { name: "Jeep Loan".into(), balance: 14_000.0, rate_note: "4%".into() },
                DebtAccount { name: "Boat Loan".into(), balance: 65_000.0, rate_note: "8%".into() },
                DebtAccount { name: "Mortgage".into(), balance: 405_000.0, rate_note: "Low".into() },
                DebtAccount { name: "Student Loans".into(), balance: 15_000.0, rate_note: "Average".into() },
            ],
            emergency_fund: 4_000.0,
            emergency_fund_goal: 10_000.0,
            net_worth: 50_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_income_total() {
        let income = IncomeProfile { primary_income: 80_000.0, secondary_income: 73_265.0 };
        assert_eq!(income.total(), 153_265.0);
    }

    #[test]
    fn test_pretax_amount_rounds() {
        let elections = RetirementElections {
            pretax_contribution_pct: 4.0,
            roth_contribution: 0.0,
        };
        assert_eq!(elections.pretax_amount(80_000.0), 3_200.0);

        let odd = RetirementElections {
            pretax_contribution_pct: 3.0,
            roth_contribution: 0.0,
        };
        // 73265 * 3% = 2197.95, rounds up
        assert_eq!(odd.pretax_amount(73_265.0), 2_198.0);
    }

    #[test]
    fn test_total_debt() {
        let profile = HouseholdProfile::sample();
        assert_eq!(total_debt(&profile.debts), 543_500.0);
    }

    #[test]
    fn test_sample_profile_shape() {
        let profile = HouseholdProfile::sample();
        assert_eq!(profile.track, Track::Aggressive);
        assert!(profile.insurance.using_low_deductible);
        assert_eq!(profile.debts.len(), 9);
    }
}
