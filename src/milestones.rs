//! Plan milestone tracking

use serde::{Deserialize, Serialize};

use crate::household::Track;

/// A dollar target with a target year on the plan timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub name: String,
    pub current: f64,
    pub target: f64,
    /// Plan year the milestone should be reached by
    pub year: u32,
}

impl Milestone {
    pub fn new(name: impl Into<String>, current: f64, target: f64, year: u32) -> Self {
        Self { name: name.into(), current, target, year }
    }

    /// Percent complete, capped at 100. A zero target reads as 0 rather
    /// than dividing by zero.
    pub fn progress_pct(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }
        (self.current / self.target * 100.0).min(100.0)
    }

    pub fn is_complete(&self) -> bool {
        self.target > 0.0 && self.current >= self.target
    }
}

/// Starting milestone set for a track. The aggressive track fronts larger
/// targets on shorter deadlines; moderate stretches the same goals out.
pub fn default_milestones(track: Track) -> Vec<Milestone> {
    match track {
        Track::Aggressive => vec![
            Milestone::new("Emergency Fund", 4_000.0, 10_000.0, 1),
            Milestone::new("Debt Free", 5_000.0, 15_000.0, 2),
            Milestone::new("Baby Fund", 1_800.0, 12_500.0, 3),
            Milestone::new("Lake Fund", 0.0, 100_000.0, 10),
            Milestone::new("Retirement $100K", 0.0, 100_000.0, 7),
        ],
        Track::Moderate => vec![
            Milestone::new("Emergency Fund", 4_000.0, 5_000.0, 2),
            Milestone::new("Debt Free", 5_000.0, 15_000.0, 3),
            Milestone::new("Baby Fund", 1_200.0, 12_500.0, 5),
            Milestone::new("Lake Fund", 0.0, 100_000.0, 10),
            Milestone::new("Retirement $100K", 0.0, 100_000.0, 9),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_progress_pct() {
        let ms = Milestone::new("Emergency Fund", 4_000.0, 10_000.0, 1);
        assert_relative_eq!(ms.progress_pct(), 40.0, max_relative = 1e-12);
        assert!(!ms.is_complete());
    }

    #[test]
    fn test_progress_capped() {
        let ms = Milestone::new("Emergency Fund", 15_000.0, 10_000.0, 1);
        assert_relative_eq!(ms.progress_pct(), 100.0, max_relative = 1e-12);
        assert!(ms.is_complete());
    }

    #[test]
    fn test_zero_target_reads_as_zero() {
        let ms = Milestone::new("Unset", 500.0, 0.0, 1);
        assert_relative_eq!(ms.progress_pct(), 0.0, epsilon = 1e-12);
        assert!(!ms.is_complete());
    }

    #[test]
    fn test_track_defaults_differ() {
        let aggressive = default_milestones(Track::Aggressive);
        let moderate = default_milestones(Track::Moderate);

        assert_eq!(aggressive.len(), 5);
        assert_eq!(moderate.len(), 5);
        // Aggressive fronts a larger emergency fund on a shorter deadline
        assert_eq!(aggressive[0].target, 10_000.0);
        assert_eq!(aggressive[0].year, 1);
        assert_eq!(moderate[0].target, 5_000.0);
        assert_eq!(moderate[0].year, 2);
    }
}
