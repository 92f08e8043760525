//! Household Planner - Financial planning engine for household tax, savings
//! growth, and insurance optimization
//!
//! This library provides:
//! - Federal (marginal bracket) and flat state tax calculations
//! - Deduction aggregation and a combined household tax summary
//! - Compound growth projections and savings-goal paths
//! - Roth vs Traditional retirement comparison
//! - Insurance deductible and premium heuristics with a recommendation list
//! - Budget shares, milestone tracking, and track net-worth comparison

pub mod assumptions;
pub mod budget;
pub mod growth;
pub mod household;
pub mod insurance;
pub mod milestones;
pub mod networth;
pub mod scenario;
pub mod tax;

// Re-export commonly used types
pub use assumptions::{Assumptions, AssumptionsError, BracketTable, InsuranceFactors};
pub use growth::{compare_roth_vs_traditional, Compounding, GrowthParams, RetirementComparison};
pub use household::HouseholdProfile;
pub use scenario::{PlanReport, PlanRunner};
pub use tax::TaxSummary;
