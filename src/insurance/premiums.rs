//! Premium and coverage heuristics
//!
//! Rule-of-thumb estimates, not actuarial pricing. Each rate and threshold
//! comes from [`InsuranceFactors`] so it can be retuned without touching
//! the formulas.

use crate::assumptions::InsuranceFactors;

/// Estimated annual boat premium from hull value, rounded to whole dollars
pub fn boat_premium(boat_value: f64, factors: &InsuranceFactors) -> f64 {
    (boat_value * factors.boat_premium_rate).round()
}

/// Annual savings from bundling the given premiums with one carrier
pub fn bundle_savings(premium_sum: f64, factors: &InsuranceFactors) -> f64 {
    (premium_sum * factors.bundle_discount_rate).round()
}

/// Net worth is high enough that an umbrella policy is worth carrying.
/// Strictly greater than the threshold.
pub fn umbrella_recommended(net_worth: f64, factors: &InsuranceFactors) -> bool {
    net_worth > factors.umbrella_net_worth_threshold
}

/// Recommended life coverage as a multiple of salary
pub fn recommended_life_coverage(salary: f64, factors: &InsuranceFactors) -> f64 {
    salary * factors.life_coverage_multiple
}

/// Deductible is high enough for the plan to qualify as HSA-eligible
pub fn hsa_eligible(health_deductible: f64, factors: &InsuranceFactors) -> bool {
    health_deductible > factors.hsa_eligible_deductible_floor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boat_premium_reference_value() {
        let factors = InsuranceFactors::default();
        assert_eq!(boat_premium(80_000.0, &factors), 1_000.0);
    }

    #[test]
    fn test_boat_premium_rounds() {
        let factors = InsuranceFactors::default();
        // 45321 * 1.25% = 566.5125
        assert_eq!(boat_premium(45_321.0, &factors), 567.0);
    }

    #[test]
    fn test_bundle_savings() {
        let factors = InsuranceFactors::default();
        // (4059 + 3564) * 12% = 914.76
        assert_eq!(bundle_savings(4_059.0 + 3_564.0, &factors), 915.0);
    }

    #[test]
    fn test_umbrella_threshold_strict() {
        let factors = InsuranceFactors::default();
        assert!(!umbrella_recommended(500_000.0, &factors));
        assert!(umbrella_recommended(500_001.0, &factors));
    }

    #[test]
    fn test_life_coverage_multiple() {
        let factors = InsuranceFactors::default();
        assert_eq!(recommended_life_coverage(80_000.0, &factors), 400_000.0);
    }

    #[test]
    fn test_hsa_eligibility_floor_strict() {
        let factors = InsuranceFactors::default();
        assert!(!hsa_eligible(1_500.0, &factors));
        assert!(hsa_eligible(3_000.0, &factors));
    }
}
