//! Compound growth projection engine
//!
//! Produces a year-by-year account value series from a principal, periodic
//! contribution, and compounding schedule. Pure function of its inputs:
//! identical parameters always yield an identical series.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How many times per year interest is credited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compounding {
    Annually,
    SemiAnnually,
    Quarterly,
    Monthly,
}

impl Compounding {
    /// Crediting periods per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Compounding::Annually => 1,
            Compounding::SemiAnnually => 2,
            Compounding::Quarterly => 4,
            Compounding::Monthly => 12,
        }
    }
}

/// Invalid projection parameters
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GrowthError {
    #[error("projection horizon must be at least one year")]
    ZeroYears,

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
}

/// Parameters for one growth projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthParams {
    pub principal: f64,
    pub monthly_contribution: f64,
    pub annual_rate_pct: f64,
    pub years: u32,
    pub compounding: Compounding,
}

impl GrowthParams {
    /// Validate and build projection parameters.
    ///
    /// Non-finite inputs are rejected here rather than coerced to zero; a
    /// NaN that slips into the compounding loop would silently corrupt
    /// every subsequent year. A negative rate is allowed (drawdown
    /// scenarios), a zero-year horizon is not.
    pub fn new(
        principal: f64,
        monthly_contribution: f64,
        annual_rate_pct: f64,
        years: u32,
        compounding: Compounding,
    ) -> Result<Self, GrowthError> {
        if years == 0 {
            return Err(GrowthError::ZeroYears);
        }
        for (field, value) in [
            ("principal", principal),
            ("monthly_contribution", monthly_contribution),
            ("annual_rate_pct", annual_rate_pct),
        ] {
            if !value.is_finite() {
                return Err(GrowthError::NonFinite { field });
            }
        }

        Ok(Self { principal, monthly_contribution, annual_rate_pct, years, compounding })
    }

    /// Run the projection, producing exactly `years` points
    pub fn project(&self) -> Vec<GrowthPoint> {
        let n = self.compounding.periods_per_year();
        let period_rate = self.annual_rate_pct / 100.0 / n as f64;
        // Contributions arrive monthly; under coarser compounding they pool
        // into one deposit per crediting period (quarterly = 3 months' worth)
        let period_contribution = self.monthly_contribution * (12.0 / n as f64);

        let mut balance = self.principal;
        let mut contributions = self.principal;
        let mut series = Vec::with_capacity(self.years as usize);

        for year in 1..=self.years {
            for _period in 0..n {
                balance = balance * (1.0 + period_rate) + period_contribution;
            }
            contributions += period_contribution * n as f64;

            series.push(GrowthPoint {
                year,
                total_value: balance,
                cumulative_contributions: contributions,
                cumulative_interest: balance - contributions,
            });
        }

        series
    }

    /// Ending balance after the full horizon
    pub fn ending_value(&self) -> f64 {
        self.project().last().map(|p| p.total_value).unwrap_or(self.principal)
    }
}

/// One year-end snapshot of a growth projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub year: u32,
    pub total_value: f64,
    /// Principal plus every contribution made through this year
    pub cumulative_contributions: f64,
    /// `total_value - cumulative_contributions`, negative only under
    /// negative-rate inputs
    pub cumulative_interest: f64,
}
