// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One logged expense. Field order matches the on-disk layout:
/// amount (number), category, date (YYYY-MM-DD), description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(with = "rust_decimal::serde::float")]
    pub budget_limit: Decimal,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            budget_limit: Decimal::ONE_THOUSAND,
        }
    }
}
