//! Account growth projections: compound interest series, savings-goal
//! paths, and the Roth vs Traditional comparison built on top of them.

pub mod goal;
pub mod projector;
pub mod retirement;

pub use goal::{GoalPoint, SavingsGoal, DEFAULT_HYSA_RATE_PCT};
pub use projector::{Compounding, GrowthError, GrowthParams, GrowthPoint};
pub use retirement::{compare_roth_vs_traditional, Choice, RetirementComparison};
