//! Spending entries
//!
//! Outflows the caller hands in for dashboard insights. They are never stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::CategoryId;
use super::money::Money;

/// A single spend against a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendingEntry {
    pub category_id: CategoryId,
    pub amount: Money,
    pub date: NaiveDate,
}

impl SpendingEntry {
    pub fn new(category_id: CategoryId, amount: Money, date: NaiveDate) -> Self {
        Self {
            category_id,
            amount,
            date,
        }
    }
}
