//! Pure aggregation over record snapshots.
//!
//! Everything here is a referentially transparent function of its
//! inputs: no store access, no side effects. Screens feed these from
//! whatever snapshot their listener last delivered.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::records::FinancialRecord;

/// Sum of `amount` over a record slice. Empty yields zero.
pub fn total_of(records: &[FinancialRecord]) -> Decimal {
    records.iter().map(|r| r.amount).sum()
}

/// Income total minus expense total.
pub fn balance(incomes: &[FinancialRecord], expenses: &[FinancialRecord]) -> Decimal {
    total_of(incomes) - total_of(expenses)
}

/// Share of income spent, as a whole percentage clamped into [0, 100].
///
/// Zero or negative income yields 0 rather than dividing; overspending
/// caps at 100 (a gauge, not a ratio).
pub fn percent_spent(income: Decimal, expense: Decimal) -> i32 {
    if income <= Decimal::ZERO {
        return 0;
    }
    let pct = (expense / income * Decimal::ONE_HUNDRED).round();
    pct.to_i32().unwrap_or(100).clamp(0, 100)
}

/// Progress of a savings amount toward its target, in [0.0, 1.0].
///
/// The target is floored at 1 so an unset or zero target cannot divide
/// by zero; amounts beyond the target clamp at full.
pub fn progress_ratio(amount: Decimal, target: Decimal) -> f32 {
    let floored_target = target.max(Decimal::ONE);
    let ratio = (amount / floored_target).to_f32().unwrap_or(0.0);
    ratio.clamp(0.0, 1.0)
}

/// Derived figures for the finances overview screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
    pub percent_spent: i32,
}

impl FinanceSummary {
    pub fn from_records(incomes: &[FinancialRecord], expenses: &[FinancialRecord]) -> Self {
        let total_income = total_of(incomes);
        let total_expense = total_of(expenses);
        Self {
            total_income,
            total_expense,
            balance: total_income - total_expense,
            percent_spent: percent_spent(total_income, total_expense),
        }
    }
}
