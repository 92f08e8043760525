//! Plan runner for evaluating household profiles
//!
//! Pre-loads assumptions once, then evaluates any number of profiles
//! without re-reading CSV files.

use log::info;
use serde::{Deserialize, Serialize};

use crate::assumptions::{Assumptions, AssumptionsError};
use crate::household::{total_debt, HouseholdProfile};
use crate::insurance::recommendations;
use crate::milestones::{default_milestones, Milestone};
use crate::tax::{optimize_elections, DeductionSet, TaxOptimization, TaxSummary};

/// Everything a plan evaluation derives from one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanReport {
    pub tax: TaxSummary,
    pub tax_suggestions: TaxOptimization,
    pub insurance_recommendations: Vec<String>,
    pub milestones: Vec<Milestone>,
    pub total_debt: f64,
    pub emergency_fund_progress_pct: f64,
}

/// Pre-loaded plan runner
///
/// # Example
/// ```ignore
/// let runner = PlanRunner::from_csv()?;
/// let report = runner.evaluate(&profile);
/// ```
#[derive(Debug, Clone)]
pub struct PlanRunner {
    base_assumptions: Assumptions,
}

impl PlanRunner {
    /// Create runner with compiled-in default assumptions
    pub fn new() -> Self {
        Self { base_assumptions: Assumptions::default_2023() }
    }

    /// Create runner by loading assumptions from the default CSV directory
    pub fn from_csv() -> Result<Self, AssumptionsError> {
        Ok(Self { base_assumptions: Assumptions::from_csv()? })
    }

    /// Create runner from a specific assumptions directory
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self, AssumptionsError> {
        Ok(Self { base_assumptions: Assumptions::from_csv_path(path)? })
    }

    /// Create runner with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self { base_assumptions: assumptions }
    }

    /// Derive the full plan report for one profile
    pub fn evaluate(&self, profile: &HouseholdProfile) -> PlanReport {
        let assumptions = &self.base_assumptions;

        let mut deductions = DeductionSet::standard_only(assumptions.limits.standard_deduction);
        deductions.retirement_contribution =
            profile.retirement.pretax_amount(profile.income.primary_income);
        if profile.insurance.has_hsa {
            deductions.hsa_contribution = Some(assumptions.limits.hsa_cap_family);
        }

        let tax = TaxSummary::compute(
            &profile.income,
            &deductions,
            profile.retirement.roth_contribution,
            assumptions,
        );

        let tax_suggestions = optimize_elections(
            &profile.retirement,
            profile.insurance.has_hsa,
            &assumptions.limits,
        );

        let emergency_fund_progress_pct = if profile.emergency_fund_goal > 0.0 {
            (profile.emergency_fund / profile.emergency_fund_goal * 100.0).min(100.0)
        } else {
            100.0
        };

        let insurance_recommendations = recommendations(profile, &assumptions.insurance);

        info!(
            "evaluated {} track profile: net income {:.0}, {} insurance recommendations",
            profile.track.as_str(),
            tax.net_income,
            insurance_recommendations.len()
        );

        PlanReport {
            tax,
            tax_suggestions,
            insurance_recommendations,
            milestones: default_milestones(profile.track),
            total_debt: total_debt(&profile.debts),
            emergency_fund_progress_pct,
        }
    }

    /// Evaluate several profiles against the same assumptions
    pub fn evaluate_batch(&self, profiles: &[HouseholdProfile]) -> Vec<PlanReport> {
        profiles.iter().map(|p| self.evaluate(p)).collect()
    }

    /// Base assumptions for inspection
    pub fn assumptions(&self) -> &Assumptions {
        &self.base_assumptions
    }

    /// Mutable base assumptions for customization
    pub fn assumptions_mut(&mut self) -> &mut Assumptions {
        &mut self.base_assumptions
    }
}

impl Default for PlanRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::household::Track;
    use approx::assert_relative_eq;

    #[test]
    fn test_evaluate_sample_profile() {
        let runner = PlanRunner::new();
        let report = runner.evaluate(&HouseholdProfile::sample());

        assert_relative_eq!(report.tax.total_income, 153_265.0, max_relative = 1e-12);
        assert_eq!(report.total_debt, 543_500.0);
        assert_relative_eq!(report.emergency_fund_progress_pct, 40.0, max_relative = 1e-12);
        assert!(!report.insurance_recommendations.is_empty());
        assert_eq!(report.milestones.len(), 5);
    }

    #[test]
    fn test_suggestions_for_sample_profile() {
        let runner = PlanRunner::new();
        let report = runner.evaluate(&HouseholdProfile::sample());

        // No HSA, 4% pre-tax, Roth below the cap: all three suggestions fire
        assert!(report.tax_suggestions.enable_hsa);
        assert_eq!(report.tax_suggestions.raise_pretax_pct_to, Some(12.0));
        assert_eq!(report.tax_suggestions.raise_roth_to, Some(6_500.0));
    }

    #[test]
    fn test_track_changes_milestones_only() {
        let runner = PlanRunner::new();
        let mut profile = HouseholdProfile::sample();
        let aggressive = runner.evaluate(&profile);

        profile.track = Track::Moderate;
        let moderate = runner.evaluate(&profile);

        assert_eq!(aggressive.tax, moderate.tax);
        assert_ne!(aggressive.milestones, moderate.milestones);
    }

    #[test]
    fn test_evaluate_batch() {
        let runner = PlanRunner::new();
        let profiles = vec![HouseholdProfile::sample(), HouseholdProfile::sample()];
        let reports = runner.evaluate_batch(&profiles);

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0], reports[1]);
    }

    #[test]
    fn test_hsa_election_lowers_tax() {
        let runner = PlanRunner::new();
        let mut profile = HouseholdProfile::sample();
        let without = runner.evaluate(&profile);

        profile.insurance.has_hsa = true;
        let with = runner.evaluate(&profile);

        assert!(with.tax.federal_tax < without.tax.federal_tax);
    }
}
