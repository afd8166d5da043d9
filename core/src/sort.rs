//! Deterministic per-code candidate ordering.
//!
//! The sorter groups (glyph, code) lines by code, scores every glyph with
//! the selected scheme, optionally applies the curated overrides, and
//! stable-sorts each group descending by score. Ties keep raw-table order
//! and code groups keep the first-appearance order of their codes, so a
//! re-run over identical input produces byte-identical output.

use std::cmp::Ordering;

use ahash::AHashMap;
use tracing::debug;

use crate::candidate::{Candidate, CodeGroup};
use crate::freq::FreqTables;
use crate::priority::{apply_overrides, OverrideMode};
use crate::score::Scheme;
use crate::table::TableLine;

/// Group table lines by code, scoring each glyph.
///
/// Codes appear in first-appearance order; candidates inside a group keep
/// the raw-table order.
pub fn group_by_code(lines: &[TableLine], scheme: Scheme, tables: &FreqTables) -> Vec<CodeGroup> {
    let mut slots: AHashMap<&str, usize> = AHashMap::new();
    let mut groups: Vec<CodeGroup> = Vec::new();

    for line in lines {
        let slot = *slots.entry(line.code.as_str()).or_insert_with(|| {
            groups.push(CodeGroup::new(line.code.clone()));
            groups.len() - 1
        });
        groups[slot]
            .candidates
            .push(Candidate::new(line.glyph, scheme.score(line.glyph, tables)));
    }

    groups
}

/// Produce the ordered table for one scheme/mode selection.
pub fn sort_table(
    lines: &[TableLine],
    scheme: Scheme,
    mode: Option<OverrideMode>,
    tables: &FreqTables,
) -> Vec<TableLine> {
    let mut groups = group_by_code(lines, scheme, tables);
    if let Some(mode) = mode {
        groups = apply_overrides(groups, mode);
    }

    let mut out = Vec::with_capacity(lines.len());
    for group in &mut groups {
        // sort_by is stable: equal scores keep raw-table order.
        group
            .candidates
            .sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        for cand in &group.candidates {
            out.push(TableLine::new(cand.glyph, group.code.as_str()));
        }
    }

    debug!(?scheme, codes = groups.len(), lines = out.len(), "sorted table");
    out
}
