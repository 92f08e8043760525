//! Zero-based monthly budget
//!
//! Category amounts with whole-percent shares of the total. Shares are
//! recomputed from scratch whenever the list changes; they are display
//! values and may not sum to exactly 100 after rounding.

use serde::{Deserialize, Serialize};

/// One monthly spending category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    pub category: String,
    pub amount: f64,
    /// Whole-percent share of the budget total
    pub percentage: u32,
}

impl BudgetItem {
    pub fn new(category: impl Into<String>, amount: f64) -> Self {
        Self { category: category.into(), amount, percentage: 0 }
    }
}

/// Monthly sum across all categories
pub fn total_budget(items: &[BudgetItem]) -> f64 {
    items.iter().map(|i| i.amount).sum()
}

/// Recompute every category's share of the total, rounded to whole percent.
/// A zero total leaves every share at 0.
pub fn update_percentages(items: &mut [BudgetItem]) {
    let total = total_budget(items);
    for item in items.iter_mut() {
        item.percentage = if total > 0.0 {
            (item.amount / total * 100.0).round() as u32
        } else {
            0
        };
    }
}

/// Default monthly budget the plan starts from
pub fn default_budget() -> Vec<BudgetItem> {
    let mut items = vec![
        BudgetItem::new("Housing", 2_500.0),
        BudgetItem::new("Transportation", 800.0),
        BudgetItem::new("Food", 1_000.0),
        BudgetItem::new("Insurance", 500.0),
        BudgetItem::new("Utilities", 400.0),
        BudgetItem::new("Debt Payments", 1_500.0),
        BudgetItem::new("Savings", 1_800.0),
        BudgetItem::new("Entertainment", 500.0),
        BudgetItem::new("Other", 1_000.0),
    ];
    update_percentages(&mut items);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_budget_total() {
        assert_eq!(total_budget(&default_budget()), 10_000.0);
    }

    #[test]
    fn test_default_budget_shares() {
        let items = default_budget();
        assert_eq!(items[0].percentage, 25); // Housing 2500 / 10000
        assert_eq!(items[6].percentage, 18); // Savings 1800 / 10000
    }

    #[test]
    fn test_percentages_track_edits() {
        let mut items = default_budget();
        items[0].amount = 5_000.0;
        update_percentages(&mut items);

        // 5000 / 12500 = 40%
        assert_eq!(items[0].percentage, 40);
    }

    #[test]
    fn test_zero_total_leaves_zero_shares() {
        let mut items = vec![BudgetItem::new("Housing", 0.0)];
        update_percentages(&mut items);
        assert_eq!(items[0].percentage, 0);
    }

    #[test]
    fn test_share_rounds_to_whole_percent() {
        let mut items = vec![
            BudgetItem::new("A", 1.0),
            BudgetItem::new("B", 2.0),
        ];
        update_percentages(&mut items);
        assert_eq!(items[0].percentage, 33);
        assert_eq!(items[1].percentage, 67);
    }
}
