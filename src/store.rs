// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{Expense, Settings};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Spendlog", "spendlog"));

pub fn data_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("expenses.json"))
}

/// Flat-file store: the whole expense sequence lives in one JSON array and is
/// rewritten wholesale on every mutation.
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn open_default() -> Result<Self> {
        Ok(Self { path: data_path()? })
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn settings_path(&self) -> PathBuf {
        self.path.with_file_name("settings.json")
    }

    /// A missing file is an empty ledger; a malformed file fails the load.
    pub fn load(&self) -> Result<Vec<Expense>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Read expense file {}", self.path.display()))?;
        let records: Vec<Expense> = serde_json::from_str(&raw)
            .with_context(|| format!("Malformed expense file {}", self.path.display()))?;
        Ok(records)
    }

    pub fn save(&self, records: &[Expense]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Create data dir {}", dir.display()))?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(records)?)
            .with_context(|| format!("Write expense file {}", self.path.display()))?;
        Ok(())
    }

    pub fn load_settings(&self) -> Result<Settings> {
        let path = self.settings_path();
        if !path.exists() {
            return Ok(Settings::default());
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Read settings file {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&raw)
            .with_context(|| format!("Malformed settings file {}", path.display()))?;
        Ok(settings)
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        let path = self.settings_path();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Create data dir {}", dir.display()))?;
        }
        fs::write(&path, serde_json::to_string_pretty(settings)?)
            .with_context(|| format!("Write settings file {}", path.display()))?;
        Ok(())
    }
}
