//! cangjie6-core
//!
//! Frequency ranking, curated priority overrides and raw-table transforms
//! for building the Cangjie6 input-method code table. One run loads the two
//! corpus frequency tables once, derives the table projections from the raw
//! source table, and produces up to four differently-ranked tables from the
//! same candidate list.
//!
//! Public API:
//! - `FreqTable` / `FreqTables` - corpus frequency lookups
//! - `RawRecord` / `Tables` / `transform` - raw-table projections
//! - `Scheme` - the four ranking schemes
//! - `OverrideMode` / `apply_overrides` - curated rank fixes for
//!   shape-collision characters
//! - `sort_table` - deterministic per-code candidate ordering
//! - `Config` - generator file layout

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub mod candidate;
pub use candidate::{Candidate, CodeGroup};

pub mod freq;
pub use freq::{FreqTable, FreqTables};

pub mod table;
pub use table::{
    parse_raw_table, to_tsv, transform, write_tsv, RawRecord, TableLine, Tables, PLACEHOLDER,
    PUA_BASE,
};

pub mod score;
pub use score::Scheme;

pub mod priority;
pub use priority::{apply_overrides, OverrideMode};

pub mod sort;
pub use sort::{group_by_code, sort_table};

/// File layout for a generator run.
///
/// Defaults mirror the historical repository layout, so running the
/// generator from a checkout needs no configuration file at all.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Raw source table (char, internal code, display code, ...).
    pub raw_table: PathBuf,
    /// Simplified-script frequency table.
    pub simplified_freq: PathBuf,
    /// Traditional (Hong Kong) frequency table.
    pub traditional_freq: PathBuf,
    /// Directory holding the static symbol tables.
    pub symbols_dir: PathBuf,
    /// Directory holding the Rime template trees.
    pub template_dir: PathBuf,
    /// Directory the dated bundles are written into.
    pub output_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            raw_table: PathBuf::from("cangjie6_sharp.tsv"),
            simplified_freq: PathBuf::from("freq_files/简体字频表.txt"),
            traditional_freq: PathBuf::from("freq_files/香港字频表.txt"),
            symbols_dir: PathBuf::from("symbols"),
            template_dir: PathBuf::from("rime_template"),
            output_root: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("write config {}", path.as_ref().display()))?;
        Ok(())
    }
}
