//! Tax calculators: deductions, federal brackets, state flat rate, and the
//! combined household summary

mod deductions;
mod federal;
mod state;
mod summary;

pub use deductions::{taxable_income, DeductionSet};
pub use federal::federal_tax;
pub use state::state_tax;
pub use summary::TaxSummary;

use serde::{Deserialize, Serialize};

use crate::assumptions::ContributionLimits;
use crate::household::RetirementElections;

/// Pre-tax contribution percentage the optimizer raises to
const TARGET_PRETAX_PCT: f64 = 12.0;

/// Suggested changes from the tax optimizer. Each field is `Some`/true only
/// when the corresponding input is below its recommended level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxOptimization {
    /// Turn the HSA election on
    pub enable_hsa: bool,
    /// Raise the pre-tax 401(k) percentage to this level
    pub raise_pretax_pct_to: Option<f64>,
    /// Raise the Roth IRA contribution to the annual cap
    pub raise_roth_to: Option<f64>,
}

impl TaxOptimization {
    pub fn is_noop(&self) -> bool {
        !self.enable_hsa && self.raise_pretax_pct_to.is_none() && self.raise_roth_to.is_none()
    }
}

/// Evaluate the optimizer's three checks against current elections
pub fn optimize_elections(
    elections: &RetirementElections,
    hsa_in_use: bool,
    limits: &ContributionLimits,
) -> TaxOptimization {
    TaxOptimization {
        enable_hsa: !hsa_in_use,
        raise_pretax_pct_to: (elections.pretax_contribution_pct < TARGET_PRETAX_PCT)
            .then_some(TARGET_PRETAX_PCT),
        raise_roth_to: (elections.roth_contribution < limits.roth_ira_cap)
            .then_some(limits.roth_ira_cap),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimizer_raises_low_elections() {
        let limits = ContributionLimits::default_2023();
        let elections = RetirementElections {
            pretax_contribution_pct: 4.0,
            roth_contribution: 3_000.0,
        };

        let opt = optimize_elections(&elections, false, &limits);
        assert!(opt.enable_hsa);
        assert_eq!(opt.raise_pretax_pct_to, Some(12.0));
        assert_eq!(opt.raise_roth_to, Some(6_500.0));
    }

    #[test]
    fn test_optimizer_noop_when_already_optimal() {
        let limits = ContributionLimits::default_2023();
        let elections = RetirementElections {
            pretax_contribution_pct: 15.0,
            roth_contribution: 6_500.0,
        };

        let opt = optimize_elections(&elections, true, &limits);
        assert!(opt.is_noop());
    }
}
