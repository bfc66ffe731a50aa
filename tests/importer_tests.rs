// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use spendlog::store::Store;
use spendlog::{cli, commands};
use std::io::Write;
use tempfile::{NamedTempFile, tempdir};

fn import(store: &Store, path: &str) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from(["spendlog", "import", "--path", path]);
    if let Some(("import", sub)) = matches.subcommand() {
        commands::importer::handle(store, sub)
    } else {
        panic!("no import subcommand");
    }
}

#[test]
fn importer_appends_rows_in_order() {
    let dir = tempdir().unwrap();
    let store = Store::at(dir.path().join("expenses.json"));

    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "date,amount,category,description\n2024-01-01,50, Food ,groceries\n2024-01-02,30,Food,\n2024-01-01,20,Travel,bus"
    )
    .unwrap();
    file.flush().unwrap();

    import(&store, file.path().to_str().unwrap()).unwrap();

    let records = store.load().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].category, "Food");
    assert_eq!(records[0].description, "groceries");
    assert_eq!(records[2].category, "Travel");
}

#[test]
fn importer_trims_cli_path_argument() {
    let dir = tempdir().unwrap();
    let store = Store::at(dir.path().join("expenses.json"));

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "date,amount,category,description\n2024-01-01,5,,").unwrap();
    file.flush().unwrap();

    let padded = format!("  {}  ", file.path().to_str().unwrap());
    import(&store, &padded).unwrap();

    let records = store.load().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].category, "Miscellaneous");
}

#[test]
fn importer_rejects_whole_file_on_bad_row() {
    let dir = tempdir().unwrap();
    let store = Store::at(dir.path().join("expenses.json"));

    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "date,amount,category,description\n2024-01-01,50,Food,\n2024-13-01,30,Food,\n2024-01-03,20,Travel,"
    )
    .unwrap();
    file.flush().unwrap();

    let err = import(&store, file.path().to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("CSV row 2 rejected"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn importer_rejects_non_positive_amount() {
    let dir = tempdir().unwrap();
    let store = Store::at(dir.path().join("expenses.json"));
    let mut existing = Vec::new();
    spendlog::ledger::add(&mut existing, "9", "Bills", "2023-12-31", "").unwrap();
    store.save(&existing).unwrap();

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "date,amount,category,description\n2024-01-01,-5,Food,").unwrap();
    file.flush().unwrap();

    let err = import(&store, file.path().to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("CSV row 1 rejected"));
    // untouched prior state
    assert_eq!(store.load().unwrap(), existing);
}
