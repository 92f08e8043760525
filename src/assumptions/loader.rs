//! CSV-based assumption loader
//!
//! Loads planning assumptions from CSV files in data/assumptions/

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;

use super::brackets::{BracketTable, TaxBracket};
use super::insurance::InsuranceFactors;
use super::limits::ContributionLimits;
use super::AssumptionsError;

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

/// Load the federal bracket table from CSV
///
/// Columns: upper_bound,rate. One row per bracket in ascending order, with
/// an empty upper_bound on the final (unbounded) row.
pub fn load_federal_brackets(path: &Path) -> Result<BracketTable, AssumptionsError> {
    let file_name = "federal_brackets.csv";
    let file = File::open(path.join(file_name))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut brackets = Vec::new();

    for result in reader.records() {
        let record = result?;
        let bound_field = record.get(0).unwrap_or("").trim();
        let upper_bound = if bound_field.is_empty() {
            None
        } else {
            Some(parse_value(file_name, bound_field)?)
        };
        let rate = parse_value(file_name, record.get(1).unwrap_or("").trim())?;
        brackets.push(TaxBracket { upper_bound, rate });
    }

    BracketTable::new(brackets)
}

/// Load contribution limits from CSV
///
/// Columns: key,value. `snapshot_date` is an ISO date, everything else a
/// dollar amount.
pub fn load_contribution_limits(path: &Path) -> Result<ContributionLimits, AssumptionsError> {
    let file_name = "contribution_limits.csv";
    let entries = load_key_value_rows(path, file_name)?;

    let snapshot_raw = entries
        .get("snapshot_date")
        .ok_or(AssumptionsError::MissingKey { file: file_name, key: "snapshot_date" })?;
    let snapshot_date = NaiveDate::parse_from_str(snapshot_raw, "%Y-%m-%d")
        .map_err(|_| AssumptionsError::InvalidValue { file: file_name, key: "snapshot_date" })?;

    Ok(ContributionLimits {
        snapshot_date,
        standard_deduction: require_value(&entries, file_name, "standard_deduction")?,
        hsa_cap_individual: require_value(&entries, file_name, "hsa_cap_individual")?,
        hsa_cap_family: require_value(&entries, file_name, "hsa_cap_family")?,
        roth_ira_cap: require_value(&entries, file_name, "roth_ira_cap")?,
        student_loan_interest_cap: require_value(&entries, file_name, "student_loan_interest_cap")?,
        educator_expense_cap: require_value(&entries, file_name, "educator_expense_cap")?,
    })
}

/// Load insurance heuristic factors from CSV (key,value rows)
pub fn load_insurance_factors(path: &Path) -> Result<InsuranceFactors, AssumptionsError> {
    let file_name = "insurance_factors.csv";
    let entries = load_key_value_rows(path, file_name)?;

    Ok(InsuranceFactors {
        boat_premium_rate: require_value(&entries, file_name, "boat_premium_rate")?,
        bundle_discount_rate: require_value(&entries, file_name, "bundle_discount_rate")?,
        umbrella_net_worth_threshold: require_value(
            &entries,
            file_name,
            "umbrella_net_worth_threshold",
        )?,
        hsa_eligible_deductible_floor: require_value(
            &entries,
            file_name,
            "hsa_eligible_deductible_floor",
        )?,
        life_coverage_multiple: require_value(&entries, file_name, "life_coverage_multiple")?,
        emergency_fund_goal: require_value(&entries, file_name, "emergency_fund_goal")?,
    })
}

/// Load the flat state tax rate (percent) from CSV
pub fn load_state_tax_rate(path: &Path) -> Result<f64, AssumptionsError> {
    let file_name = "state_tax.csv";
    let entries = load_key_value_rows(path, file_name)?;
    require_value(&entries, file_name, "flat_rate_pct")
}

fn load_key_value_rows(
    path: &Path,
    file_name: &'static str,
) -> Result<HashMap<String, String>, AssumptionsError> {
    let file = File::open(path.join(file_name))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut entries = HashMap::new();
    for result in reader.records() {
        let record = result?;
        let key = record.get(0).unwrap_or("").trim().to_string();
        let value = record.get(1).unwrap_or("").trim().to_string();
        entries.insert(key, value);
    }

    Ok(entries)
}

fn require_value(
    entries: &HashMap<String, String>,
    file: &'static str,
    key: &'static str,
) -> Result<f64, AssumptionsError> {
    let raw = entries
        .get(key)
        .ok_or(AssumptionsError::MissingKey { file, key })?;
    let value = parse_value(file, raw)?;
    if !value.is_finite() {
        return Err(AssumptionsError::InvalidValue { file, key });
    }
    Ok(value)
}

fn parse_value(file: &'static str, raw: &str) -> Result<f64, AssumptionsError> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(AssumptionsError::Malformed { file }),
    }
}

/// All assumption tables loaded from one directory
#[derive(Debug, Clone)]
pub struct LoadedAssumptions {
    pub federal_brackets: BracketTable,
    pub contribution_limits: ContributionLimits,
    pub insurance_factors: InsuranceFactors,
    pub state_flat_rate_pct: f64,
}

impl LoadedAssumptions {
    /// Load all assumptions from the default path
    pub fn load_default() -> Result<Self, AssumptionsError> {
        Self::load_from(Path::new(DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load all assumptions from a specific path
    pub fn load_from(path: &Path) -> Result<Self, AssumptionsError> {
        Ok(Self {
            federal_brackets: load_federal_brackets(path)?,
            contribution_limits: load_contribution_limits(path)?,
            insurance_factors: load_insurance_factors(path)?,
            state_flat_rate_pct: load_state_tax_rate(path)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_assumptions() {
        let result = LoadedAssumptions::load_default();
        assert!(result.is_ok(), "Failed to load assumptions: {:?}", result.err());

        let loaded = result.unwrap();

        assert_eq!(loaded.federal_brackets.brackets().len(), 7);
        assert_eq!(loaded.contribution_limits.roth_ira_cap, 6_500.0);
        assert_eq!(loaded.insurance_factors.bundle_discount_rate, 0.12);
        assert_eq!(loaded.state_flat_rate_pct, 4.0);
    }

    #[test]
    fn test_loaded_matches_compiled_defaults() {
        let loaded = LoadedAssumptions::load_default().unwrap();

        assert_eq!(loaded.federal_brackets, BracketTable::default_2023_mfj());
        assert_eq!(loaded.contribution_limits, ContributionLimits::default_2023());
        assert_eq!(loaded.insurance_factors, InsuranceFactors::default());
    }

    #[test]
    fn test_missing_directory_errors() {
        let result = LoadedAssumptions::load_from(Path::new("data/does_not_exist"));
        assert!(matches!(result, Err(AssumptionsError::Io(_))));
    }
}
