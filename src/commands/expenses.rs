// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger;
use crate::store::Store;
use crate::utils::{fmt_amount, maybe_print_json, parse_month, pretty_table};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

pub fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let mut records = store.load()?;

    let amount = sub.get_one::<String>("amount").unwrap();
    let category = sub
        .get_one::<String>("category")
        .map(|s| s.as_str())
        .unwrap_or("");
    let today = chrono::Local::now().date_naive().to_string();
    let date = sub
        .get_one::<String>("date")
        .map(|s| s.as_str())
        .unwrap_or(&today);
    let description = sub
        .get_one::<String>("description")
        .map(|s| s.as_str())
        .unwrap_or("");

    let added = ledger::add(&mut records, amount, category, date, description)?;
    let line = format!(
        "Logged {} on {} under '{}'",
        fmt_amount(&added.amount),
        added.date,
        added.category
    );
    store.save(&records)?;
    println!("{}", line);
    Ok(())
}

pub fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        if data.is_empty() {
            println!("No expenses logged");
            return Ok(());
        }
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.position.to_string(),
                    r.date.clone(),
                    r.amount.clone(),
                    r.category.clone(),
                    r.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["#", "Date", "Amount", "Category", "Description"], rows)
        );
    }
    Ok(())
}

pub fn rm(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let position = *sub.get_one::<usize>("index").unwrap();
    let mut records = store.load()?;

    if position == 0 || position > records.len() {
        println!(
            "No expense at position {} (ledger holds {})",
            position,
            records.len()
        );
        return Ok(());
    }
    if !sub.get_flag("yes") && !confirm(&format!("Delete expense {}?", position))? {
        println!("Aborted");
        return Ok(());
    }

    let removed = ledger::remove_at(&mut records, position - 1)?;
    store.save(&records)?;
    println!(
        "Deleted {} on {} under '{}'",
        fmt_amount(&removed.amount),
        removed.date,
        removed.category
    );
    Ok(())
}

#[derive(Serialize)]
pub struct ExpenseRow {
    pub position: usize,
    pub date: String,
    pub amount: String,
    pub category: String,
    pub description: String,
}

/// Rows as displayed: 1-based position, formatted amount, optional
/// month/category filters applied.
pub fn query_rows(store: &Store, sub: &clap::ArgMatches) -> Result<Vec<ExpenseRow>> {
    let records = store.load()?;
    let month = match sub.get_one::<String>("month") {
        Some(m) => Some(parse_month(m.trim())?),
        None => None,
    };
    let category = sub.get_one::<String>("category");

    let mut data = Vec::new();
    for (i, exp) in records.iter().enumerate() {
        if let Some(ref m) = month {
            if exp.date.format("%Y-%m").to_string() != *m {
                continue;
            }
        }
        if let Some(cat) = category {
            if &exp.category != cat {
                continue;
            }
        }
        data.push(ExpenseRow {
            position: i + 1,
            date: exp.date.to_string(),
            amount: fmt_amount(&exp.amount),
            category: exp.category.clone(),
            description: exp.description.clone(),
        });
    }
    Ok(data)
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}
