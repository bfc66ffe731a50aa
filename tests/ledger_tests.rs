// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use spendlog::ledger::{self, LedgerError};
use spendlog::models::Expense;

fn seeded() -> Vec<Expense> {
    let mut records = Vec::new();
    ledger::add(&mut records, "50", "Food", "2024-01-01", "groceries").unwrap();
    ledger::add(&mut records, "30", "Food", "2024-01-02", "").unwrap();
    ledger::add(&mut records, "20", "Travel", "2024-01-01", "bus").unwrap();
    records
}

#[test]
fn add_appends_exactly_one() {
    let mut records = seeded();
    ledger::add(&mut records, "12.50", "Bills", "2024-03-04", "power").unwrap();
    assert_eq!(records.len(), 4);
    let last = records.last().unwrap();
    assert_eq!(last.amount, "12.50".parse::<Decimal>().unwrap());
    assert_eq!(last.category, "Bills");
    assert_eq!(last.date.to_string(), "2024-03-04");
    assert_eq!(last.description, "power");
}

#[test]
fn blank_category_falls_back_to_miscellaneous() {
    let mut records = Vec::new();
    let added = ledger::add(&mut records, "5", "   ", "2024-01-01", "").unwrap();
    assert_eq!(added.category, "Miscellaneous");
}

#[test]
fn non_numeric_amount_never_mutates() {
    let mut records = seeded();
    let err = ledger::add(&mut records, "abc", "Food", "2024-01-01", "").unwrap_err();
    assert!(matches!(err, LedgerError::InvalidAmount(_)));
    assert_eq!(records.len(), 3);
}

#[test]
fn non_positive_amount_never_mutates() {
    let mut records = seeded();
    for raw in ["0", "-3.50"] {
        let err = ledger::add(&mut records, raw, "Food", "2024-01-01", "").unwrap_err();
        assert!(matches!(err, LedgerError::NonPositiveAmount(_)));
    }
    assert_eq!(records.len(), 3);
}

#[test]
fn malformed_date_never_mutates() {
    let mut records = seeded();
    for raw in ["2024/01/01", "01-01-2024", "2024-13-01", "yesterday"] {
        let err = ledger::add(&mut records, "5", "Food", raw, "").unwrap_err();
        assert!(matches!(err, LedgerError::InvalidDate(_)));
    }
    assert_eq!(records.len(), 3);
}

#[test]
fn remove_middle_keeps_survivors_in_order() {
    let mut records = seeded();
    let removed = ledger::remove_at(&mut records, 1).unwrap();
    assert_eq!(removed.date.to_string(), "2024-01-02");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].description, "groceries");
    assert_eq!(records[1].description, "bus");
}

#[test]
fn remove_out_of_range_never_mutates() {
    let mut records = seeded();
    let err = ledger::remove_at(&mut records, 3).unwrap_err();
    assert!(matches!(
        err,
        LedgerError::IndexOutOfRange { index: 3, len: 3 }
    ));
    assert_eq!(records.len(), 3);
}
