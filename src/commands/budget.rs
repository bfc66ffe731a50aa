// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::Store;
use crate::utils::{fmt_amount, parse_decimal};
use anyhow::{Result, bail};
use rust_decimal::Decimal;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(store, sub)?,
        Some(("show", _)) => show(store)?,
        _ => {}
    }
    Ok(())
}

fn set(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap().trim())?;
    if amount <= Decimal::ZERO {
        bail!("Budget limit must be greater than zero, got {}", amount);
    }
    let mut settings = store.load_settings()?;
    settings.budget_limit = amount;
    store.save_settings(&settings)?;
    println!("Budget limit set to {}", fmt_amount(&amount));
    Ok(())
}

fn show(store: &Store) -> Result<()> {
    let settings = store.load_settings()?;
    println!("Budget limit is {}", fmt_amount(&settings.budget_limit));
    Ok(())
}
