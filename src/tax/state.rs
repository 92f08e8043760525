//! Flat-rate state income tax

/// State tax under a flat-rate model: `taxable * rate%`, rounded to whole
/// dollars. The rate is configuration (Kentucky's 4% in the shipped
/// defaults), not a constant.
pub fn state_tax(taxable_income: f64, flat_rate_pct: f64) -> f64 {
    (taxable_income * flat_rate_pct / 100.0).round()
}
