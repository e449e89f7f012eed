//! Aggregate totals derived from an owner's transactions.
//!
//! The summary is recomputed from the full transaction set on every cache
//! miss. There is no running total anywhere, and no time window: the totals
//! cover every transaction the owner has.

use serde::{Deserialize, Serialize};

use super::types::{Transaction, TransactionKind};

/// Totals for one owner. Never stored; always derivable from transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_income: i64,
    pub total_expense: i64,
    pub net_balance: i64,
}

impl Summary {
    pub fn new(total_income: i64, total_expense: i64) -> Self {
        Self {
            total_income,
            total_expense,
            net_balance: total_income.saturating_sub(total_expense),
        }
    }
}

/// Folds transactions into income, expense and net balance totals.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let (income, expense) =
        transactions
            .iter()
            .fold((0i64, 0i64), |(income, expense), t| match t.kind {
                TransactionKind::Income => (income.saturating_add(t.amount), expense),
                TransactionKind::Expense => (income, expense.saturating_add(t.amount)),
            });

    Summary::new(income, expense)
}
