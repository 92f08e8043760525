//! Contribution limits and standard deduction defaults
//!
//! These caps are informational; no computation rejects an over-cap entry.
//! Each table carries an
//! explicit snapshot date because tax-law figures drift year to year.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Annual contribution limits and deduction defaults for one tax year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionLimits {
    /// Date the figures were taken from published tables
    pub snapshot_date: NaiveDate,

    /// Standard deduction, married filing jointly
    pub standard_deduction: f64,

    /// HSA contribution cap, individual coverage
    pub hsa_cap_individual: f64,

    /// HSA contribution cap, family coverage
    pub hsa_cap_family: f64,

    /// Roth IRA annual contribution cap
    pub roth_ira_cap: f64,

    /// Student loan interest deduction cap
    pub student_loan_interest_cap: f64,

    /// Educator expense deduction cap (per educator)
    pub educator_expense_cap: f64,
}

impl ContributionLimits {
    /// Figures the plan shipped with (2023 caps, with the plan's own
    /// standard-deduction assumption)
    pub fn default_2023() -> Self {
        Self {
            snapshot_date: NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date"),
            standard_deduction: 29_600.0,
            hsa_cap_individual: 3_850.0,
            hsa_cap_family: 7_750.0,
            roth_ira_cap: 6_500.0,
            student_loan_interest_cap: 2_500.0,
            educator_expense_cap: 300.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = ContributionLimits::default_2023();

        assert_eq!(limits.hsa_cap_individual, 3_850.0);
        assert_eq!(limits.hsa_cap_family, 7_750.0);
        assert_eq!(limits.roth_ira_cap, 6_500.0);
        assert_eq!(limits.snapshot_date.format("%Y").to_string(), "2023");
    }
}
