//! Progressive tax bracket tables

use serde::{Deserialize, Serialize};

use super::AssumptionsError;

/// A single marginal bracket: income up to `upper_bound` (None = unbounded)
/// is taxed at `rate` for the portion above the previous bracket's bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Upper income bound for this bracket, None for the top bracket
    pub upper_bound: Option<f64>,
    /// Marginal rate as a fraction (0.10 = 10%)
    pub rate: f64,
}

/// Ordered progressive bracket table for one filing status and tax year.
///
/// Invariants enforced at construction: upper bounds strictly increasing,
/// rates strictly increasing, exactly one unbounded bracket and it is last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketTable {
    brackets: Vec<TaxBracket>,
}

impl BracketTable {
    /// Build a validated table from bracket rows
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, AssumptionsError> {
        if brackets.is_empty() {
            return Err(AssumptionsError::EmptyBracketTable);
        }

        let mut prev_bound = 0.0;
        let mut prev_rate = 0.0;
        for (i, bracket) in brackets.iter().enumerate() {
            if !bracket.rate.is_finite() || bracket.rate <= prev_rate {
                return Err(AssumptionsError::BracketOrder {
                    index: i,
                    detail: "rates must be finite and strictly increasing",
                });
            }
            prev_rate = bracket.rate;

            match bracket.upper_bound {
                Some(bound) => {
                    if i == brackets.len() - 1 {
                        return Err(AssumptionsError::BracketOrder {
                            index: i,
                            detail: "last bracket must be unbounded",
                        });
                    }
                    if !bound.is_finite() || bound <= prev_bound {
                        return Err(AssumptionsError::BracketOrder {
                            index: i,
                            detail: "upper bounds must be finite and strictly increasing",
                        });
                    }
                    prev_bound = bound;
                }
                None => {
                    if i != brackets.len() - 1 {
                        return Err(AssumptionsError::BracketOrder {
                            index: i,
                            detail: "only the last bracket may be unbounded",
                        });
                    }
                }
            }
        }

        Ok(Self { brackets })
    }

    /// 2023 federal brackets, married filing jointly
    pub fn default_2023_mfj() -> Self {
        Self::new(vec![
            TaxBracket { upper_bound: Some(22_000.0), rate: 0.10 },
            TaxBracket { upper_bound: Some(89_450.0), rate: 0.12 },
            TaxBracket { upper_bound: Some(190_750.0), rate: 0.22 },
            TaxBracket { upper_bound: Some(364_200.0), rate: 0.24 },
            TaxBracket { upper_bound: Some(462_500.0), rate: 0.32 },
            TaxBracket { upper_bound: Some(693_750.0), rate: 0.35 },
            TaxBracket { upper_bound: None, rate: 0.37 },
        ])
        .expect("default bracket table is valid")
    }

    /// Bracket rows in ascending order
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Marginal rate applying to the last dollar of `taxable_income`
    pub fn marginal_rate(&self, taxable_income: f64) -> f64 {
        for bracket in &self.brackets {
            match bracket.upper_bound {
                Some(bound) if taxable_income > bound => continue,
                _ => return bracket.rate,
            }
        }
        // Unreachable: last bracket is unbounded
        self.brackets.last().map(|b| b.rate).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_valid() {
        let table = BracketTable::default_2023_mfj();
        assert_eq!(table.brackets().len(), 7);
        assert_eq!(table.brackets()[0].rate, 0.10);
        assert!(table.brackets().last().unwrap().upper_bound.is_none());
    }

    #[test]
    fn test_marginal_rate_lookup() {
        let table = BracketTable::default_2023_mfj();

        assert_eq!(table.marginal_rate(0.0), 0.10);
        assert_eq!(table.marginal_rate(22_000.0), 0.10);
        assert_eq!(table.marginal_rate(22_001.0), 0.12);
        assert_eq!(table.marginal_rate(150_000.0), 0.22);
        assert_eq!(table.marginal_rate(1_000_000.0), 0.37);
    }

    #[test]
    fn test_rejects_unsorted_bounds() {
        let result = BracketTable::new(vec![
            TaxBracket { upper_bound: Some(50_000.0), rate: 0.10 },
            TaxBracket { upper_bound: Some(20_000.0), rate: 0.12 },
            TaxBracket { upper_bound: None, rate: 0.22 },
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_bounded_last_bracket() {
        let result = BracketTable::new(vec![
            TaxBracket { upper_bound: Some(20_000.0), rate: 0.10 },
            TaxBracket { upper_bound: Some(50_000.0), rate: 0.12 },
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_non_increasing_rates() {
        let result = BracketTable::new(vec![
            TaxBracket { upper_bound: Some(20_000.0), rate: 0.12 },
            TaxBracket { upper_bound: None, rate: 0.10 },
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_empty_table() {
        assert!(BracketTable::new(vec![]).is_err());
    }
}
