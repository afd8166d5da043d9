//! Character frequency tables.
//!
//! The ranking pipeline is driven by two corpus frequency files: a
//! simplified-script table and a traditional (Hong Kong) table. Each line is
//! tab-delimited with the character at field index 1 and a decimal frequency
//! at field index 3. Both tables are loaded once per run and read-only
//! afterwards; a character may appear in either table, both, or neither.
//!
//! Malformed frequency data is a configuration error, not a transient fault:
//! a short line or a non-numeric frequency aborts the load so a corrupted
//! table can never silently mis-rank candidates.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;
use anyhow::{bail, Context, Result};
use tracing::debug;

/// A char -> frequency mapping, immutable after load.
#[derive(Debug, Clone, Default)]
pub struct FreqTable {
    map: AHashMap<char, f64>,
}

impl FreqTable {
    pub fn new() -> Self {
        Self {
            map: AHashMap::new(),
        }
    }

    /// Load a frequency file.
    ///
    /// Only single-character entries participate in ranking; rows whose
    /// character field holds more than one char are ignored.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("open frequency file {}", path.display()))?;
        let mut map = AHashMap::new();
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < 4 {
                bail!(
                    "{}:{}: expected at least 4 tab-delimited fields, got {}",
                    path.display(),
                    idx + 1,
                    fields.len()
                );
            }
            let freq: f64 = fields[3].parse().with_context(|| {
                format!(
                    "{}:{}: frequency field {:?} is not numeric",
                    path.display(),
                    idx + 1,
                    fields[3]
                )
            })?;
            let mut chars = fields[1].chars();
            if let (Some(ch), None) = (chars.next(), chars.next()) {
                map.insert(ch, freq);
            }
        }
        debug!(path = %path.display(), entries = map.len(), "loaded frequency table");
        Ok(Self { map })
    }

    pub fn insert(&mut self, ch: char, freq: f64) {
        self.map.insert(ch, freq);
    }

    pub fn get(&self, ch: char) -> Option<f64> {
        self.map.get(&ch).copied()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.map.contains_key(&ch)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl FromIterator<(char, f64)> for FreqTable {
    fn from_iter<I: IntoIterator<Item = (char, f64)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

/// The two frequency tables every scoring scheme consumes.
///
/// Held by value and passed by reference into scoring so the engine stays
/// trivially testable with synthetic tables.
#[derive(Debug, Clone, Default)]
pub struct FreqTables {
    pub simplified: FreqTable,
    pub traditional: FreqTable,
}

impl FreqTables {
    pub fn new(simplified: FreqTable, traditional: FreqTable) -> Self {
        Self {
            simplified,
            traditional,
        }
    }

    /// Load both tables. Either file failing to parse fails the whole load.
    pub fn load<P: AsRef<Path>>(simplified: P, traditional: P) -> Result<Self> {
        Ok(Self {
            simplified: FreqTable::load(simplified)?,
            traditional: FreqTable::load(traditional)?,
        })
    }
}
