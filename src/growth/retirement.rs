//! Roth vs Traditional retirement account comparison
//!
//! Both paths compound through the same projector; the only difference is
//! when tax is taken. Traditional defers tax to withdrawal, Roth pays it
//! before the money ever compounds.

use serde::{Deserialize, Serialize};

use super::projector::{Compounding, GrowthError, GrowthParams};

/// Which account type the rate comparison favors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice {
    Roth,
    Traditional,
    Either,
}

impl Choice {
    pub fn display_text(&self) -> &'static str {
        match self {
            Choice::Roth => {
                "Roth favored: your tax rate is expected to be higher in retirement, \
                 so paying tax now locks in the lower rate."
            }
            Choice::Traditional => {
                "Traditional favored: your tax rate is expected to be lower in \
                 retirement, so deferring tax until withdrawal keeps more invested."
            }
            Choice::Either => {
                "Either works: with the same tax rate now and in retirement, \
                 both accounts end with the same after-tax value."
            }
        }
    }
}

/// After-tax outcome of the two tax-timing paths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementComparison {
    /// Traditional balance after the withdrawal tax is taken
    pub traditional_ending_value: f64,
    pub roth_ending_value: f64,
    /// Tax owed on the Traditional balance at withdrawal
    pub tax_paid_at_withdrawal: f64,
    pub recommendation: Choice,
}

/// Compare the after-tax ending values of a Traditional and a Roth account
/// funded with the same gross annual contribution.
///
/// Traditional compounds the full contribution and is taxed once at
/// `retirement_tax_rate_pct` on withdrawal. Roth taxes the contribution at
/// `current_tax_rate_pct` first, then compounds the remainder tax-free.
/// Both paths use monthly compounding from a zero starting balance.
pub fn compare_roth_vs_traditional(
    annual_contribution: f64,
    years: u32,
    annual_rate_pct: f64,
    current_tax_rate_pct: f64,
    retirement_tax_rate_pct: f64,
) -> Result<RetirementComparison, GrowthError> {
    for (field, value) in [
        ("current_tax_rate_pct", current_tax_rate_pct),
        ("retirement_tax_rate_pct", retirement_tax_rate_pct),
    ] {
        if !value.is_finite() {
            return Err(GrowthError::NonFinite { field });
        }
    }

    let traditional = GrowthParams::new(
        0.0,
        annual_contribution / 12.0,
        annual_rate_pct,
        years,
        Compounding::Monthly,
    )?;
    let traditional_pretax = traditional.ending_value();
    let tax_paid_at_withdrawal = traditional_pretax * retirement_tax_rate_pct / 100.0;

    let roth_contribution = annual_contribution * (1.0 - current_tax_rate_pct / 100.0);
    let roth = GrowthParams::new(
        0.0,
        roth_contribution / 12.0,
        annual_rate_pct,
        years,
        Compounding::Monthly,
    )?;

    let recommendation = if current_tax_rate_pct < retirement_tax_rate_pct {
        Choice::Roth
    } else if current_tax_rate_pct > retirement_tax_rate_pct {
        Choice::Traditional
    } else {
        Choice::Either
    };

    Ok(RetirementComparison {
        traditional_ending_value: traditional_pretax - tax_paid_at_withdrawal,
        roth_ending_value: roth.ending_value(),
        tax_paid_at_withdrawal,
        recommendation,
    })
}
