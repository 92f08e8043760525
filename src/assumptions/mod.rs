//! Planning assumptions: tax tables, contribution limits, and insurance factors

mod brackets;
mod insurance;
mod limits;
pub mod loader;

pub use brackets::{BracketTable, TaxBracket};
pub use insurance::InsuranceFactors;
pub use limits::ContributionLimits;
pub use loader::LoadedAssumptions;

use std::path::Path;

use thiserror::Error;

/// Failures while loading or validating assumption tables
#[derive(Debug, Error)]
pub enum AssumptionsError {
    #[error("failed to read assumptions file")]
    Io(#[from] std::io::Error),

    #[error("failed to parse assumptions CSV")]
    Csv(#[from] csv::Error),

    #[error("{file}: malformed numeric value")]
    Malformed { file: &'static str },

    #[error("{file}: missing required key '{key}'")]
    MissingKey { file: &'static str, key: &'static str },

    #[error("{file}: invalid value for '{key}'")]
    InvalidValue { file: &'static str, key: &'static str },

    #[error("bracket table has no rows")]
    EmptyBracketTable,

    #[error("bracket {index}: {detail}")]
    BracketOrder { index: usize, detail: &'static str },
}

/// Container for all planning assumptions
#[derive(Debug, Clone)]
pub struct Assumptions {
    pub federal_brackets: BracketTable,
    pub limits: ContributionLimits,
    pub insurance: InsuranceFactors,
    /// Flat state income tax rate in percent (4.0 = 4%)
    pub state_flat_rate_pct: f64,
}

impl Assumptions {
    /// Create assumptions with the compiled-in 2023 defaults
    pub fn default_2023() -> Self {
        Self {
            federal_brackets: BracketTable::default_2023_mfj(),
            limits: ContributionLimits::default_2023(),
            insurance: InsuranceFactors::default(),
            state_flat_rate_pct: 4.0,
        }
    }

    /// Load assumptions from CSV files in the default location (data/assumptions/)
    pub fn from_csv() -> Result<Self, AssumptionsError> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load assumptions from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, AssumptionsError> {
        let loaded = LoadedAssumptions::load_from(path)?;

        Ok(Self {
            federal_brackets: loaded.federal_brackets,
            limits: loaded.contribution_limits,
            insurance: loaded.insurance_factors,
            state_flat_rate_pct: loaded.state_flat_rate_pct,
        })
    }
}
