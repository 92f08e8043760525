//! Insurance coverage review: deductible deltas, premium heuristics, and
//! the ordered recommendation list built from them.

pub mod deductible;
pub mod premiums;
pub mod recommend;

pub use deductible::{plan_savings, ready_for_higher_deductibles};
pub use premiums::{
    boat_premium, bundle_savings, hsa_eligible, recommended_life_coverage,
    umbrella_recommended,
};
pub use recommend::recommendations;
