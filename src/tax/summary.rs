//! Full tax derivation for a household
//!
//! Chains the deduction, federal, and state calculators into the figures the
//! dashboard displays. Fully derived, never mutated after construction;
//! recomputed from current inputs on every evaluation.

use serde::{Deserialize, Serialize};

use crate::assumptions::Assumptions;
use crate::household::IncomeProfile;

use super::deductions::{taxable_income, DeductionSet};
use super::federal::federal_tax;
use super::state::state_tax;

/// Derived tax figures for one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxSummary {
    pub total_income: f64,
    pub total_deductions: f64,
    pub taxable_income: f64,
    pub federal_tax: f64,
    pub state_tax: f64,
    pub total_tax: f64,
    /// Take-home after taxes and all retirement contributions
    pub net_income: f64,
    pub monthly_income: f64,
    /// Total tax as a fraction of gross income (0 when income is 0)
    pub effective_rate: f64,
}

impl TaxSummary {
    /// Derive the full summary.
    ///
    /// `deductions.retirement_contribution` must already hold the pre-tax
    /// 401(k) dollars; it reduces taxable income here and, together with the
    /// after-tax `roth_contribution`, is also withheld from net income.
    pub fn compute(
        income: &IncomeProfile,
        deductions: &DeductionSet,
        roth_contribution: f64,
        assumptions: &Assumptions,
    ) -> Self {
        let total_income = income.total();
        let total_deductions = deductions.total();
        let taxable = taxable_income(total_income, total_deductions);

        let federal = federal_tax(taxable, &assumptions.federal_brackets);
        let state = state_tax(taxable, assumptions.state_flat_rate_pct);
        let total_tax = federal + state;

        let net_income =
            total_income - total_tax - deductions.retirement_contribution - roth_contribution;
        let monthly_income = (net_income / 12.0).round();
        let effective_rate = if total_income > 0.0 { total_tax / total_income } else { 0.0 };

        Self {
            total_income,
            total_deductions,
            taxable_income: taxable,
            federal_tax: federal,
            state_tax: state,
            total_tax,
            net_income,
            monthly_income,
            effective_rate,
        }
    }
}
