// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::stats;
use crate::store::Store;
use crate::utils::{fmt_amount, maybe_print_json, parse_decimal, pretty_table, progress_bar};
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
pub struct StatsReport {
    pub budget_limit: String,
    pub total_spent: String,
    pub progress_pct: String,
    pub by_category: Vec<Vec<String>>,
    pub by_date: Vec<Vec<String>>,
}

pub fn handle(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let records = store.load()?;

    let budget_limit = match sub.get_one::<String>("budget") {
        Some(raw) => parse_decimal(raw.trim())?,
        None => store.load_settings()?.budget_limit,
    };

    let progress = stats::budget_progress(&records, budget_limit)?;
    let total = stats::total_spent(&records);

    let category_rows: Vec<Vec<String>> = stats::by_category(&records)
        .into_iter()
        .map(|(cat, sum)| vec![cat, fmt_amount(&sum)])
        .collect();
    let date_rows: Vec<Vec<String>> = stats::by_date(&records)
        .into_iter()
        .map(|(date, sum)| vec![date.to_string(), fmt_amount(&sum)])
        .collect();

    let report = StatsReport {
        budget_limit: fmt_amount(&budget_limit),
        total_spent: fmt_amount(&total),
        progress_pct: format!("{:.1}", progress),
        by_category: category_rows,
        by_date: date_rows,
    };
    if maybe_print_json(json_flag, jsonl_flag, &report)? {
        return Ok(());
    }

    println!(
        "Budget progress: {} {:.1}% ({} of {})",
        progress_bar(&progress, 40),
        progress,
        fmt_amount(&total),
        fmt_amount(&budget_limit)
    );
    println!(
        "{}",
        pretty_table(&["Category", "Total"], report.by_category)
    );
    println!("{}", pretty_table(&["Date", "Total"], report.by_date));
    Ok(())
}
