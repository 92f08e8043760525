//! Short-horizon savings goal tracking
//!
//! Month-by-month balance path toward a fixed dollar target, typically an
//! emergency fund parked in a high-yield savings account.

use serde::{Deserialize, Serialize};

use super::projector::GrowthError;

/// Default high-yield savings APY, percent
pub const DEFAULT_HYSA_RATE_PCT: f64 = 4.35;

/// A fixed-target savings goal funded by level monthly deposits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub starting_balance: f64,
    pub monthly_deposit: f64,
    pub target: f64,
    pub annual_rate_pct: f64,
}

/// One month on the path to the goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalPoint {
    pub month: u32,
    pub balance: f64,
    pub progress_pct: f64,
}

impl SavingsGoal {
    pub fn new(
        starting_balance: f64,
        monthly_deposit: f64,
        target: f64,
        annual_rate_pct: f64,
    ) -> Result<Self, GrowthError> {
        for (field, value) in [
            ("starting_balance", starting_balance),
            ("monthly_deposit", monthly_deposit),
            ("target", target),
            ("annual_rate_pct", annual_rate_pct),
        ] {
            if !value.is_finite() {
                return Err(GrowthError::NonFinite { field });
            }
        }
        Ok(Self { starting_balance, monthly_deposit, target, annual_rate_pct })
    }

    /// Percent of target reached by `balance`, capped at 100.
    /// A zero or negative target reads as already met.
    pub fn progress_pct(&self, balance: f64) -> f64 {
        if self.target <= 0.0 {
            return 100.0;
        }
        (balance / self.target * 100.0).min(100.0)
    }

    /// Monthly balance path over `months`, interest credited monthly
    /// then the deposit added
    pub fn series(&self, months: u32) -> Vec<GoalPoint> {
        let monthly_rate = self.annual_rate_pct / 100.0 / 12.0;
        let mut balance = self.starting_balance;
        let mut series = Vec::with_capacity(months as usize);

        for month in 1..=months {
            balance = balance * (1.0 + monthly_rate) + self.monthly_deposit;
            series.push(GoalPoint { month, balance, progress_pct: self.progress_pct(balance) });
        }

        series
    }

    /// First month the balance reaches the target, or `None` if the goal
    /// is unreachable (no deposits, no growth)
    pub fn months_to_goal(&self) -> Option<u32> {
        if self.starting_balance >= self.target {
            return Some(0);
        }
        if self.monthly_deposit <= 0.0 && self.annual_rate_pct <= 0.0 {
            return None;
        }

        let monthly_rate = self.annual_rate_pct / 100.0 / 12.0;
        let mut balance = self.starting_balance;

        // 100 years is far past any household savings horizon
        for month in 1..=1200 {
            balance = balance * (1.0 + monthly_rate) + self.monthly_deposit;
            if balance >= self.target {
                return Some(month);
            }
        }
        None
    }
}
