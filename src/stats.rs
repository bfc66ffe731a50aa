// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::ledger::LedgerError;
use crate::models::Expense;

pub fn total_spent(records: &[Expense]) -> Decimal {
    records.iter().map(|e| e.amount).sum()
}

/// Share of the budget limit consumed by total spend, as a percentage
/// capped at 100. A non-positive limit is rejected instead of divided by.
pub fn budget_progress(records: &[Expense], budget_limit: Decimal) -> Result<Decimal, LedgerError> {
    if budget_limit <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveBudget(budget_limit));
    }
    let pct = total_spent(records) * Decimal::ONE_HUNDRED / budget_limit;
    Ok(pct.min(Decimal::ONE_HUNDRED))
}

/// Category totals in first-insertion order of the categories encountered.
pub fn by_category(records: &[Expense]) -> Vec<(String, Decimal)> {
    let mut sums: Vec<(String, Decimal)> = Vec::new();
    for exp in records {
        match sums.iter_mut().find(|(cat, _)| *cat == exp.category) {
            Some((_, total)) => *total += exp.amount,
            None => sums.push((exp.category.clone(), exp.amount)),
        }
    }
    sums
}

/// Per-day totals; BTreeMap iteration gives ascending date order.
pub fn by_date(records: &[Expense]) -> BTreeMap<NaiveDate, Decimal> {
    let mut sums = BTreeMap::new();
    for exp in records {
        *sums.entry(exp.date).or_insert(Decimal::ZERO) += exp.amount;
    }
    sums
}
