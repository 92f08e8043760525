//! Deduction aggregation and taxable income

use serde::{Deserialize, Serialize};

/// Deduction elections for one filing year.
///
/// The HSA field is an `Option` rather than a flag-plus-amount pair: when
/// the household is not using an HSA there is no amount at all, so a stale
/// figure cannot leak back in if the election toggles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeductionSet {
    pub standard_deduction: f64,
    /// HSA contribution, present only while the HSA election is on
    pub hsa_contribution: Option<f64>,
    pub student_loan_interest: f64,
    pub charitable_contributions: f64,
    pub educator_expenses: f64,
    pub additional_deductions: f64,
    /// Pre-tax retirement contribution (401(k) dollars)
    pub retirement_contribution: f64,
}

impl DeductionSet {
    /// Standard deduction only, everything else zero
    pub fn standard_only(standard_deduction: f64) -> Self {
        Self {
            standard_deduction,
            hsa_contribution: None,
            student_loan_interest: 0.0,
            charitable_contributions: 0.0,
            educator_expenses: 0.0,
            additional_deductions: 0.0,
            retirement_contribution: 0.0,
        }
    }

    /// Sum of all present deduction fields
    pub fn total(&self) -> f64 {
        self.standard_deduction
            + self.hsa_contribution.unwrap_or(0.0)
            + self.student_loan_interest
            + self.charitable_contributions
            + self.educator_expenses
            + self.additional_deductions
            + self.retirement_contribution
    }
}

/// Taxable income: gross income less deductions, floored at zero
pub fn taxable_income(total_income: f64, total_deductions: f64) -> f64 {
    (total_income - total_deductions).max(0.0)
}
