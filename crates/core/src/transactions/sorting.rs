use std::cmp::Reverse;

use super::types::Transaction;

/// Sorts transactions most recent first.
///
/// The sort is stable: transactions with equal timestamps keep their
/// incoming (store) order, so repeated reads of unchanged data agree.
pub fn sort_by_most_recent(transactions: &mut [Transaction]) {
    transactions.sort_by_key(|t| Reverse(t.timestamp));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transactions::OwnerId;
    use chrono::{TimeZone, Utc};

    fn at(day: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_sorts_descending_by_timestamp() {
        let owner = OwnerId::new("user-1").unwrap();
        let mut transactions = vec![
            Transaction::income(owner.clone(), 1).with_timestamp(at(1)),
            Transaction::income(owner.clone(), 3).with_timestamp(at(3)),
            Transaction::income(owner, 2).with_timestamp(at(2)),
        ];

        sort_by_most_recent(&mut transactions);

        let amounts: Vec<i64> = transactions.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![3, 2, 1]);
    }

    #[test]
    fn test_ties_keep_incoming_order() {
        let owner = OwnerId::new("user-1").unwrap();
        let mut transactions = vec![
            Transaction::expense(owner.clone(), 10).with_timestamp(at(5)),
            Transaction::expense(owner.clone(), 20).with_timestamp(at(5)),
            Transaction::expense(owner.clone(), 30).with_timestamp(at(6)),
            Transaction::expense(owner, 40).with_timestamp(at(5)),
        ];

        sort_by_most_recent(&mut transactions);

        let amounts: Vec<i64> = transactions.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![30, 10, 20, 40]);
    }

    #[test]
    fn test_empty_slice() {
        let mut transactions: Vec<Transaction> = Vec::new();
        sort_by_most_recent(&mut transactions);
        assert!(transactions.is_empty());
    }
}
