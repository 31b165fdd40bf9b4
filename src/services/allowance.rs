//! Allowance and balance calculations
//!
//! Pure functions from the current balance, the loan amount and the calendar
//! to the numbers the dashboard shows.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::Money;

/// Whether the balance behind an allowance is still positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowanceStatus {
    Normal,
    /// The balance is already below zero; the amount is negative too
    NegativeBalance,
}

/// How much can be spent per remaining day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyAllowance {
    pub amount: Money,
    pub status: AllowanceStatus,
}

impl DailyAllowance {
    pub fn is_overdrawn(&self) -> bool {
        self.status == AllowanceStatus::NegativeBalance
    }
}

/// Whole days from `today` until `end_date`, never negative.
///
/// Any date on or after the end date yields 0.
pub fn days_left(end_date: NaiveDate, today: NaiveDate) -> u32 {
    let days = (end_date - today).num_days();
    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}

/// Spread the balance evenly over the remaining days.
///
/// With no days left the whole balance is available today.
pub fn daily_allowance(current_balance: Money, days_left: u32) -> DailyAllowance {
    let status = if current_balance.is_negative() {
        AllowanceStatus::NegativeBalance
    } else {
        AllowanceStatus::Normal
    };

    DailyAllowance {
        amount: current_balance.split_evenly(days_left),
        status,
    }
}

/// Share of the loan still in hand, clamped to [0, 1]; 0 when the loan is 0
pub fn balance_progress(current_balance: Money, total_loan_amount: Money) -> f64 {
    current_balance
        .ratio_to(total_loan_amount)
        .map(|r| r.clamp(0.0, 1.0))
        .unwrap_or(0.0)
}
