//! Raw code-table parsing and the derived table projections.
//!
//! The raw table is tab-delimited: field 0 is the character (possibly several
//! characters when the glyph is not encoded in Unicode, or blank), field 1 is
//! the internal code, field 2 is the display code; further fields are
//! ignored. `transform` derives the three projections the generator needs:
//!
//! - `numeral`: internal-code table with unencodable glyphs replaced by the
//!   `□` placeholder,
//! - `code_only`: the (character, display code) candidate table the sorter
//!   consumes,
//! - `substituted`: a private-use-area substituted table used to verify that
//!   every code resolves a unique glyph. This is a diagnostic artifact, never
//!   the user-facing code table.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Placeholder shown for glyphs that need composition to render.
pub const PLACEHOLDER: char = '□';

/// First code point handed out by the uniqueness substitution counter.
pub const PUA_BASE: u32 = 0xF0000;

/// One row of the raw source table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub glyph: String,
    pub inner_code: String,
    pub code: String,
}

/// One `<glyph>\t<code>` row of a generated table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableLine {
    pub glyph: char,
    pub code: String,
}

impl TableLine {
    pub fn new(glyph: char, code: impl Into<String>) -> Self {
        Self {
            glyph,
            code: code.into(),
        }
    }
}

/// The three projections derived from one raw table.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub numeral: Vec<TableLine>,
    pub code_only: Vec<TableLine>,
    pub substituted: Vec<TableLine>,
}

/// Parse the raw source table.
///
/// Lines are lowercased before splitting, matching the historical source
/// files where codes appear in mixed case. Empty lines are skipped; a line
/// with fewer than three fields aborts the parse.
pub fn parse_raw_table<R: BufRead>(reader: R) -> Result<Vec<RawRecord>> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let line = line.to_lowercase();
        let mut fields = line.split('\t');
        let (glyph, inner_code, code) = match (fields.next(), fields.next(), fields.next()) {
            (Some(g), Some(i), Some(c)) => (g, i, c),
            _ => bail!(
                "raw table line {}: expected at least 3 tab-delimited fields",
                idx + 1
            ),
        };
        records.push(RawRecord {
            glyph: glyph.to_string(),
            inner_code: inner_code.to_string(),
            code: code.to_string(),
        });
    }
    Ok(records)
}

/// Derive the three table projections from the raw records.
///
/// Records with a blank glyph field are skipped. A record whose glyph holds
/// more than one character, or whose internal code carries the reserved
/// `ffyp1`/`ffyp2` prefix, is assigned the next private-use code point in the
/// substituted table; the extra display-code row for internal codes
/// containing a digit keeps that table a true 1:1 mapping even when one
/// rendered form resolves two codes.
pub fn transform(records: &[RawRecord]) -> Tables {
    let mut tables = Tables::default();
    let mut next_pua = PUA_BASE;

    for rec in records {
        let mut chars = rec.glyph.chars();
        let first = match chars.next() {
            Some(c) => c,
            None => continue,
        };
        let multi = chars.next().is_some();

        if multi {
            tables
                .numeral
                .push(TableLine::new(PLACEHOLDER, &*rec.inner_code));
        } else {
            tables.numeral.push(TableLine::new(first, &*rec.inner_code));
            tables.code_only.push(TableLine::new(first, &*rec.code));
        }

        let glyph = if multi || has_reserved_prefix(&rec.inner_code) {
            // Plane-15/16 private-use scalars; from_u32 only fails past U+10FFFF.
            let ch = char::from_u32(next_pua).unwrap_or(PLACEHOLDER);
            next_pua += 1;
            ch
        } else {
            first
        };
        tables
            .substituted
            .push(TableLine::new(glyph, &*rec.inner_code));
        if rec.inner_code.chars().any(|c| c.is_ascii_digit()) {
            tables.substituted.push(TableLine::new(glyph, &*rec.code));
        }
    }

    tables
}

fn has_reserved_prefix(inner_code: &str) -> bool {
    inner_code.starts_with("ffyp1") || inner_code.starts_with("ffyp2")
}

/// Write a table as `<glyph>\t<code>` lines.
pub fn write_tsv<W: Write>(lines: &[TableLine], mut w: W) -> io::Result<()> {
    for line in lines {
        writeln!(w, "{}\t{}", line.glyph, line.code)?;
    }
    Ok(())
}

/// Render a table to an in-memory string.
pub fn to_tsv(lines: &[TableLine]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push(line.glyph);
        out.push('\t');
        out.push_str(&line.code);
        out.push('\n');
    }
    out
}
