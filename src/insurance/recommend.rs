//! Coverage review recommendation list
//!
//! Every check runs unconditionally and appends in a fixed order, so the
//! output reads the same way on every run: boat, life insurance,
//! deductibles, umbrella, HSA, bundling.

use log::debug;

use crate::assumptions::InsuranceFactors;
use crate::household::HouseholdProfile;

use super::deductible::{plan_savings, ready_for_higher_deductibles};
use super::premiums::{
    bundle_savings, hsa_eligible, recommended_life_coverage, umbrella_recommended,
};

/// Build the ordered recommendation list for a household's coverage
pub fn recommendations(profile: &HouseholdProfile, factors: &InsuranceFactors) -> Vec<String> {
    let insurance = &profile.insurance;
    let mut recs = Vec::new();

    if !insurance.has_boat_insurance && insurance.boat_value > 0.0 {
        recs.push(format!(
            "Add boat insurance to protect your ${:.0} boat investment.",
            insurance.boat_value
        ));
    }

    let recommended_life =
        recommended_life_coverage(profile.income.primary_income, factors);
    if insurance.primary_life_coverage < recommended_life {
        recs.push(format!(
            "Increase life insurance from ${:.0} to at least ${:.0} ({:.0}x salary).",
            insurance.primary_life_coverage, recommended_life, factors.life_coverage_multiple
        ));
    }

    let total_savings = plan_savings(&insurance.auto, insurance.using_low_deductible)
        + plan_savings(&insurance.home, insurance.using_low_deductible);
    if ready_for_higher_deductibles(profile.emergency_fund, profile.emergency_fund_goal)
        && insurance.using_low_deductible
    {
        recs.push(format!(
            "Consider raising deductibles to save ${total_savings:.0} annually."
        ));
    }

    if umbrella_recommended(profile.net_worth, factors) && !insurance.has_umbrella_policy {
        recs.push("Add umbrella policy for additional liability protection.".to_string());
    }

    if !insurance.has_hsa && hsa_eligible(insurance.health_deductible, factors) {
        recs.push(
            "Consider opening an HSA account for tax advantages on medical expenses."
                .to_string(),
        );
    }

    if !insurance.policies_bundled {
        let savings = bundle_savings(
            insurance.auto.current_premium + insurance.home.current_premium,
            factors,
        );
        recs.push(format!(
            "Bundle auto and home insurance with one carrier to save roughly ${savings:.0} per year."
        ));
    }

    debug!("coverage review produced {} recommendations", recs.len());
    recs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (HouseholdProfile, InsuranceFactors) {
        (HouseholdProfile::sample(), InsuranceFactors::default())
    }

    #[test]
    fn test_sample_profile_recommendations() {
        let (profile, factors) = sample();
        let recs = recommendations(&profile, &factors);

        // Boat uninsured, life underinsured, on low deductibles but the
        // emergency fund is short, net worth under the umbrella threshold,
        // no HSA with a qualifying deductible, policies unbundled
        assert_eq!(recs.len(), 4);
        assert!(recs[0].contains("boat insurance"));
        assert!(recs[1].contains("life insurance"));
        assert!(recs[2].contains("HSA"));
        assert!(recs[3].contains("Bundle"));
    }

    #[test]
    fn test_ordering_with_all_checks_firing() {
        let (mut profile, factors) = sample();
        profile.emergency_fund = 12_000.0;
        profile.net_worth = 600_000.0;
        let recs = recommendations(&profile, &factors);

        assert_eq!(recs.len(), 6);
        assert!(recs[0].contains("boat"));
        assert!(recs[1].contains("life insurance"));
        assert!(recs[2].contains("deductibles"));
        assert!(recs[3].contains("umbrella"));
        assert!(recs[4].contains("HSA"));
        assert!(recs[5].contains("Bundle"));
    }

    #[test]
    fn test_fully_optimized_profile_is_quiet() {
        let (mut profile, factors) = sample();
        profile.insurance.has_boat_insurance = true;
        profile.insurance.primary_life_coverage = 400_000.0;
        profile.insurance.using_low_deductible = false;
        profile.insurance.has_umbrella_policy = true;
        profile.insurance.has_hsa = true;
        profile.insurance.policies_bundled = true;

        assert!(recommendations(&profile, &factors).is_empty());
    }

    #[test]
    fn test_deductible_rec_quotes_combined_savings() {
        let (mut profile, factors) = sample();
        profile.emergency_fund = 10_000.0;
        let recs = recommendations(&profile, &factors);

        // auto 812 + home 714
        assert!(recs.iter().any(|r| r.contains("$1526")));
    }
}
