// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use spendlog::store::Store;
use spendlog::{cli, commands, ledger};
use tempfile::tempdir;

fn seeded_store(dir: &std::path::Path) -> Store {
    let store = Store::at(dir.join("expenses.json"));
    let mut records = Vec::new();
    ledger::add(&mut records, "50", "Food", "2024-01-01", "groceries").unwrap();
    ledger::add(&mut records, "20.25", "Travel", "2024-01-02", "bus").unwrap();
    store.save(&records).unwrap();
    store
}

fn export(store: &Store, format: &str, out: &str) {
    let matches =
        cli::build_cli().get_matches_from(["spendlog", "export", "--format", format, "--out", out]);
    if let Some(("export", sub)) = matches.subcommand() {
        commands::exporter::handle(store, sub).unwrap();
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn csv_export_writes_header_and_rows() {
    let dir = tempdir().unwrap();
    let store = seeded_store(dir.path());
    let out = dir.path().join("out.csv");
    export(&store, "csv", out.to_str().unwrap());

    let raw = std::fs::read_to_string(&out).unwrap();
    let mut lines = raw.lines();
    assert_eq!(lines.next().unwrap(), "date,amount,category,description");
    assert_eq!(lines.next().unwrap(), "2024-01-01,50,Food,groceries");
    assert_eq!(lines.next().unwrap(), "2024-01-02,20.25,Travel,bus");
}

#[test]
fn json_export_matches_store_layout() {
    let dir = tempdir().unwrap();
    let store = seeded_store(dir.path());
    let out = dir.path().join("out.json");
    export(&store, "json", out.to_str().unwrap());

    // the export is byte-compatible with the store file, so it loads back
    let reloaded = Store::at(&out).load().unwrap();
    assert_eq!(reloaded, store.load().unwrap());
}
