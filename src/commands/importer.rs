// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger;
use crate::store::Store;
use anyhow::{Context, Result};
use csv::ReaderBuilder;

/// Appends rows from a headered CSV (date,amount,category,description).
/// Every row is validated first; one bad row rejects the whole import and
/// nothing is saved.
pub fn handle(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let mut records = store.load()?;
    let before = records.len();

    for result in rdr.records() {
        let rec = result?;
        let row = records.len() - before + 1;
        let date = rec.get(0).context("date missing")?.trim();
        let amount = rec.get(1).context("amount missing")?.trim();
        let category = rec.get(2).unwrap_or("").trim();
        let description = rec.get(3).unwrap_or("").trim();
        ledger::add(&mut records, amount, category, date, description)
            .with_context(|| format!("CSV row {} rejected", row))?;
    }

    store.save(&records)?;
    println!("Imported {} expenses from {}", records.len() - before, path);
    Ok(())
}
