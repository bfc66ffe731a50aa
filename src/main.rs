// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use spendlog::{cli, commands, store::Store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let store = match matches.get_one::<String>("file") {
        Some(path) => Store::at(path),
        None => Store::open_default()?,
    };

    match matches.subcommand() {
        Some(("init", _)) => {
            let records = store.load()?;
            store.save(&records)?;
            println!("Expense file at {}", store.path().display());
        }
        Some(("add", sub)) => commands::expenses::add(&store, sub)?,
        Some(("list", sub)) => commands::expenses::list(&store, sub)?,
        Some(("rm", sub)) => commands::expenses::rm(&store, sub)?,
        Some(("stats", sub)) => commands::stats::handle(&store, sub)?,
        Some(("budget", sub)) => commands::budget::handle(&store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("import", sub)) => commands::importer::handle(&store, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&store)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
