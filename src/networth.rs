//! Net-worth comparison across the two planning tracks
//!
//! Component-level year-10 balances for the aggressive and moderate tracks,
//! with totals, the absolute gap, and the percent advantage of the
//! aggressive track.

use serde::{Deserialize, Serialize};

/// One account's projected balance under each track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetWorthComponent {
    pub category: String,
    pub aggressive: f64,
    pub moderate: f64,
}

impl NetWorthComponent {
    pub fn new(category: impl Into<String>, aggressive: f64, moderate: f64) -> Self {
        Self { category: category.into(), aggressive, moderate }
    }
}

/// Track totals and the aggressive track's edge over moderate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetWorthSummary {
    pub components: Vec<NetWorthComponent>,
    pub aggressive_total: f64,
    pub moderate_total: f64,
    pub difference: f64,
    /// Whole-percent advantage of aggressive over moderate, 0 when the
    /// moderate total is 0
    pub advantage_pct: f64,
}

impl NetWorthSummary {
    pub fn from_components(components: Vec<NetWorthComponent>) -> Self {
        let aggressive_total: f64 = components.iter().map(|c| c.aggressive).sum();
        let moderate_total: f64 = components.iter().map(|c| c.moderate).sum();
        let advantage_pct = if moderate_total > 0.0 {
            ((aggressive_total / moderate_total - 1.0) * 100.0).round()
        } else {
            0.0
        };

        Self {
            components,
            aggressive_total,
            moderate_total,
            difference: aggressive_total - moderate_total,
            advantage_pct,
        }
    }
}

/// Year-10 component balances the plan projects for each track
pub fn default_components() -> Vec<NetWorthComponent> {
    vec![
        NetWorthComponent::new("Retirement", 251_892.0, 122_035.0),
        NetWorthComponent::new("529 Plan", 30_561.0, 30_561.0),
        NetWorthComponent::new("Baby Fund", 11_767.0, 13_660.0),
        NetWorthComponent::new("Lake Fund", 93_464.0, 29_988.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_totals() {
        let summary = NetWorthSummary::from_components(default_components());

        assert_relative_eq!(summary.aggressive_total, 387_684.0, max_relative = 1e-12);
        assert_relative_eq!(summary.moderate_total, 196_244.0, max_relative = 1e-12);
        assert_relative_eq!(summary.difference, 191_440.0, max_relative = 1e-12);
    }

    #[test]
    fn test_advantage_pct_rounds_to_whole() {
        let summary = NetWorthSummary::from_components(default_components());
        // 387684 / 196244 - 1 = 97.55...%
        assert_relative_eq!(summary.advantage_pct, 98.0, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_moderate_total_guard() {
        let summary = NetWorthSummary::from_components(vec![NetWorthComponent::new(
            "Retirement",
            100_000.0,
            0.0,
        )]);
        assert_relative_eq!(summary.advantage_pct, 0.0, epsilon = 1e-12);
    }
}
