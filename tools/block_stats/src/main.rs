//! Census of the Unicode blocks a finished code table covers.
//!
//! Reads a `<glyph>\t<code>` table and reports, per named block, how many
//! distinct characters the table encodes, plus which characters of the CJK
//! Unified Ideographs block are missing entirely. Compatibility-ideograph
//! hits are flagged individually since they usually indicate a source-data
//! mistake.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

const NOT_IN_UNICODE: &str = "Not encoded in Unicode";
const OTHER: &str = "Other characters";

const COMPAT: &str = "CJK Compatibility Ideographs";
const COMPAT_SUPPLEMENT: &str = "CJK Compatibility Ideographs Supplement";

const BLOCKS: &[(u32, u32, &str)] = &[
    (0x4E00, 0x9FFF, "CJK Unified Ideographs"),
    (0x3400, 0x4DBF, "CJK Extension A"),
    (0x20000, 0x2A6DF, "CJK Extension B"),
    (0x2A700, 0x2B739, "CJK Extension C"),
    (0x2B740, 0x2B81D, "CJK Extension D"),
    (0x2B820, 0x2CEAD, "CJK Extension E"),
    (0x2CEB0, 0x2EBE0, "CJK Extension F"),
    (0x30000, 0x3134A, "CJK Extension G"),
    (0x31350, 0x323AF, "CJK Extension H"),
    (0x2EBF0, 0x2EE5D, "CJK Extension I"),
    (0x323B0, 0x33479, "CJK Extension J"),
    (0xF900, 0xFAFF, COMPAT),
    (0x2F800, 0x2FA1F, COMPAT_SUPPLEMENT),
    (0x2F00, 0x2FDF, "Kangxi Radicals"),
    (0x2E80, 0x2EFF, "CJK Radicals Supplement"),
    (0x31C0, 0x31EF, "CJK Strokes"),
    (0x2FF0, 0x2FFF, "Ideographic Description Characters"),
    (0x3040, 0x309F, "Hiragana"),
    (0x30A0, 0x30FF, "Katakana"),
    (0xE000, 0xF8FF, "Private Use Area"),
    (0xF0000, 0xFFFFD, "Private Use Area"),
    (0x100000, 0x10FFFD, "Private Use Area"),
];

/// Report which Unicode blocks a code table draws its characters from.
#[derive(Parser)]
struct Args {
    /// Code table to inspect, one `<glyph>\t<code>` pair per line.
    table: PathBuf,
}

fn block_name(ch: char) -> Option<&'static str> {
    let cp = ch as u32;
    BLOCKS
        .iter()
        .find(|&&(lower, upper, _)| (lower..=upper).contains(&cp))
        .map(|&(_, _, name)| name)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let file = File::open(&args.table)
        .with_context(|| format!("open table {}", args.table.display()))?;

    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    counts.insert(NOT_IN_UNICODE, 0);
    counts.insert(OTHER, 0);
    let mut seen: HashSet<char> = HashSet::new();
    let mut missing_unified: BTreeSet<char> = (0x4E00..=0x9FFF).filter_map(char::from_u32).collect();

    for line in BufReader::new(file).lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let glyph = line.split('\t').next().unwrap_or("").trim();
        if glyph.is_empty() {
            continue;
        }
        let mut chars = glyph.chars();
        let ch = match (chars.next(), chars.next()) {
            (Some(ch), None) => ch,
            _ => {
                *counts.entry(NOT_IN_UNICODE).or_insert(0) += 1;
                continue;
            }
        };
        if seen.contains(&ch) {
            continue;
        }
        match block_name(ch) {
            Some(name) => {
                *counts.entry(name).or_insert(0) += 1;
                if name == COMPAT || name == COMPAT_SUPPLEMENT {
                    println!("compatibility-block character present: {ch}");
                }
                missing_unified.remove(&ch);
                seen.insert(ch);
            }
            None => {
                *counts.entry(OTHER).or_insert(0) += 1;
            }
        }
    }

    println!("\n=== Block counts (by block name) ===");
    println!("| Unicode block | characters |");
    println!("| :---: | :---: |");
    for (name, count) in &counts {
        println!("| {name} | {count} |");
    }

    println!("\n=== CJK Unified Ideographs coverage ===");
    if missing_unified.is_empty() {
        println!("No missing CJK Unified Ideographs.");
    } else {
        let preview: String = missing_unified.iter().collect();
        println!(
            "Missing {} CJK Unified Ideographs: {preview}",
            missing_unified.len()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::block_name;

    #[test]
    fn classifies_representative_characters() {
        assert_eq!(block_name('中'), Some("CJK Unified Ideographs"));
        assert_eq!(block_name('㐀'), Some("CJK Extension A"));
        assert_eq!(block_name('あ'), Some("Hiragana"));
        assert_eq!(block_name('\u{F0000}'), Some("Private Use Area"));
        assert_eq!(block_name('a'), None);
    }

    #[test]
    fn compatibility_block_is_distinguished() {
        assert_eq!(block_name('\u{F900}'), Some(super::COMPAT));
        assert_eq!(block_name('\u{2F800}'), Some(super::COMPAT_SUPPLEMENT));
    }
}
