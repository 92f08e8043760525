//! Deductible choice evaluation
//!
//! Savings from moving a coverage line to its higher-deductible plan, and
//! the emergency-fund readiness gate for making that move.

use crate::household::PlanPair;

/// Annual premium saved by switching this line to the higher deductible.
///
/// Only counted while the household is still on the low-deductible plan;
/// once switched the savings are realized, not available.
pub fn plan_savings(pair: &PlanPair, using_low_deductible: bool) -> f64 {
    if using_low_deductible {
        pair.current_premium - pair.higher_premium
    } else {
        0.0
    }
}

/// The emergency fund can absorb the larger out-of-pocket hit
pub fn ready_for_higher_deductibles(emergency_fund: f64, threshold: f64) -> bool {
    emergency_fund >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auto_pair() -> PlanPair {
        PlanPair {
            current_deductible: 500.0,
            current_premium: 4_059.0,
            higher_deductible: 1_000.0,
            higher_premium: 3_247.0,
        }
    }

    #[test]
    fn test_savings_while_on_low_deductible() {
        assert_eq!(plan_savings(&auto_pair(), true), 812.0);
    }

    #[test]
    fn test_no_savings_after_switching() {
        assert_eq!(plan_savings(&auto_pair(), false), 0.0);
    }

    #[test]
    fn test_readiness_threshold_inclusive() {
        assert!(ready_for_higher_deductibles(10_000.0, 10_000.0));
        assert!(ready_for_higher_deductibles(12_000.0, 10_000.0));
        assert!(!ready_for_higher_deductibles(9_999.0, 10_000.0));
    }
}
