// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::Store;
use crate::utils::pretty_table;
use anyhow::Result;
use rust_decimal::Decimal;

pub fn handle(store: &Store) -> Result<()> {
    let records = store.load()?;
    let today = chrono::Local::now().date_naive();
    let mut rows = Vec::new();

    for (i, exp) in records.iter().enumerate() {
        if exp.amount <= Decimal::ZERO {
            rows.push(vec![
                "non_positive_amount".into(),
                format!("#{} {} {}", i + 1, exp.date, exp.amount),
            ]);
        }
        if exp.category.trim().is_empty() {
            rows.push(vec!["blank_category".into(), format!("#{} {}", i + 1, exp.date)]);
        }
        if exp.date > today {
            rows.push(vec!["future_date".into(), format!("#{} {}", i + 1, exp.date)]);
        }
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
