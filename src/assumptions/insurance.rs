//! Insurance heuristic factors
//!
//! Rules of thumb used by the coverage review. All of these are rough
//! planning figures, not actuarial rates, so they live in configuration
//! where they can be adjusted without touching the calculators.

use serde::{Deserialize, Serialize};

/// Tunable factors behind the insurance recommendations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceFactors {
    /// Boat premium as a fraction of hull value (approximation, not a quote)
    pub boat_premium_rate: f64,

    /// Multi-line bundling discount applied to the summed premiums
    pub bundle_discount_rate: f64,

    /// Net worth above which an umbrella policy is suggested
    pub umbrella_net_worth_threshold: f64,

    /// Health plan deductible above which the plan is treated as HSA-eligible
    pub hsa_eligible_deductible_floor: f64,

    /// Recommended life insurance coverage as a multiple of salary
    pub life_coverage_multiple: f64,

    /// Emergency fund target that unlocks higher deductibles
    pub emergency_fund_goal: f64,
}

impl Default for InsuranceFactors {
    fn default() -> Self {
        Self {
            boat_premium_rate: 0.0125,
            bundle_discount_rate: 0.12,
            umbrella_net_worth_threshold: 500_000.0,
            hsa_eligible_deductible_floor: 1_500.0,
            life_coverage_multiple: 5.0,
            emergency_fund_goal: 10_000.0,
        }
    }
}
