//! Federal income tax via marginal bracket accumulation

use crate::assumptions::BracketTable;

/// Compute federal tax owed on `taxable_income` under a progressive bracket
/// table. Each bracket taxes only the slice of income between the previous
/// bound and its own; the total is the sum across occupied brackets, rounded
/// to whole dollars.
///
/// Total over `taxable_income >= 0`. Callers clamp negative taxable income
/// to zero before calling (deductions may legally exceed income).
pub fn federal_tax(taxable_income: f64, brackets: &BracketTable) -> f64 {
    if taxable_income <= 0.0 {
        return 0.0;
    }

    let mut tax = 0.0;
    let mut lower_bound = 0.0;

    for bracket in brackets.brackets() {
        let slice = match bracket.upper_bound {
            Some(upper) => (taxable_income.min(upper) - lower_bound).max(0.0),
            None => (taxable_income - lower_bound).max(0.0),
        };
        tax += slice * bracket.rate;

        match bracket.upper_bound {
            Some(upper) if taxable_income > upper => lower_bound = upper,
            _ => break,
        }
    }

    tax.round()
}
