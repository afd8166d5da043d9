//! Curated rank overrides for visually confusable characters.
//!
//! A handful of characters are graphically near-identical at small render
//! sizes and collide under the same code; frequency data alone ranks them
//! wrong for users. Each override mode carries a curated list of rules, a
//! rule being the exact character subset that collides plus the order users
//! should see. Rules are checked in declaration order and the first rule
//! whose characters are all present under a code wins; the remaining rules
//! are skipped for that code.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::candidate::{Candidate, CodeGroup};

/// Score given to a matched rule's first character; later characters count
/// down from here. Far above any frequency-derived score, so overridden and
/// untouched candidates still sort consistently in one descending pass.
const OVERRIDE_CEILING: f64 = 999_999.0;

/// Selects which curated rule list applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverrideMode {
    Traditional,
    Simplified,
    General,
    /// The minimal fallback list.
    Basic,
}

const TRADITIONAL_RULES: &[&[char]] = &[
    &['己', '已'],
    &['犬', '义', '庆'],
    &['久', '欠', '飞'],
    &['文', '头', '达'],
    &['皮', '板'],
    &['尹', '刃', '区'],
];

const SIMPLIFIED_RULES: &[&[char]] = &[
    &['己', '已'],
    &['犬', '义', '庆'],
    &['久', '欠', '飞'],
    &['文', '头', '达'],
    &['皮', '板'],
];

const GENERAL_RULES: &[&[char]] = &[
    &['犬', '义', '庆'],
    &['不', '灭', '灰'],
    &['己', '已'],
    &['双', '汉'],
    &['区', '尹', '刃'],
    &['久', '欠', '飞'],
    &['汤', '溺'],
    &['吗', '叼'],
    &['怀', '恢'],
    &['扫', '韦'],
    &['击', '扎'],
    &['麦', '扳'],
    &['皮', '板'],
    &['荚', '莽'],
    &['骞', '寒'],
    &['难', '淮'],
];

const BASIC_RULES: &[&[char]] = &[&['己', '已']];

impl OverrideMode {
    /// Parse a mode tag. Unknown tags fall back to `Basic`.
    pub fn parse(name: &str) -> OverrideMode {
        match name {
            "Traditional" => OverrideMode::Traditional,
            "Simplified" => OverrideMode::Simplified,
            "General" => OverrideMode::General,
            _ => OverrideMode::Basic,
        }
    }

    fn rules(self) -> &'static [&'static [char]] {
        match self {
            OverrideMode::Traditional => TRADITIONAL_RULES,
            OverrideMode::Simplified => SIMPLIFIED_RULES,
            OverrideMode::General => GENERAL_RULES,
            OverrideMode::Basic => BASIC_RULES,
        }
    }
}

/// Apply the selected rule list to every code group.
///
/// A rule matches a group when all of its characters are candidates of that
/// group. Matched characters get `OVERRIDE_CEILING - rank`; everything else
/// in the group keeps its computed score.
pub fn apply_overrides(groups: Vec<CodeGroup>, mode: OverrideMode) -> Vec<CodeGroup> {
    let rules = mode.rules();
    let mut matched = 0usize;

    let groups = groups
        .into_iter()
        .map(|group| {
            let rule = rules
                .iter()
                .find(|rule| rule.iter().all(|&ch| group.contains_glyph(ch)));
            let rule = match rule {
                Some(rule) => rule,
                None => return group,
            };
            matched += 1;
            let candidates = group
                .candidates
                .into_iter()
                .map(|c| match rule.iter().position(|&ch| ch == c.glyph) {
                    Some(rank) => Candidate::new(c.glyph, OVERRIDE_CEILING - rank as f64),
                    None => c,
                })
                .collect();
            CodeGroup {
                code: group.code,
                candidates,
            }
        })
        .collect();

    debug!(?mode, matched, "applied priority overrides");
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(code: &str, glyphs: &[(char, f64)]) -> CodeGroup {
        CodeGroup {
            code: code.into(),
            candidates: glyphs.iter().map(|&(g, s)| Candidate::new(g, s)).collect(),
        }
    }

    #[test]
    fn parse_falls_back_to_basic() {
        assert_eq!(OverrideMode::parse("General"), OverrideMode::General);
        assert_eq!(OverrideMode::parse("Tradional"), OverrideMode::Basic);
    }

    #[test]
    fn matched_rule_forces_declared_order() {
        // Frequency ranked 已 ahead; the rule says 己 comes first.
        let groups = vec![group("su", &[('已', 9.0), ('己', 1.0)])];
        let out = apply_overrides(groups, OverrideMode::Basic);
        let scores: Vec<(char, f64)> = out[0]
            .candidates
            .iter()
            .map(|c| (c.glyph, c.score))
            .collect();
        assert_eq!(scores, vec![('已', 999_998.0), ('己', 999_999.0)]);
    }

    #[test]
    fn partial_subset_does_not_match() {
        let groups = vec![group("hk", &[('犬', 3.0), ('义', 2.0)])];
        let out = apply_overrides(groups, OverrideMode::General);
        assert_eq!(out[0].candidates[0].score, 3.0);
        assert_eq!(out[0].candidates[1].score, 2.0);
    }

    #[test]
    fn non_participants_keep_their_scores() {
        let groups = vec![group("su", &[('己', 1.0), ('已', 2.0), ('中', 7.5)])];
        let out = apply_overrides(groups, OverrideMode::Basic);
        let zhong = out[0]
            .candidates
            .iter()
            .find(|c| c.glyph == '中')
            .unwrap();
        assert_eq!(zhong.score, 7.5);
    }

    #[test]
    fn first_matching_rule_wins() {
        // Both 己/已 and 皮/板 are fully present; 己/已 is declared first in
        // the Simplified list, so 皮/板 must stay untouched.
        let groups = vec![group(
            "x",
            &[('己', 1.0), ('已', 2.0), ('皮', 3.0), ('板', 4.0)],
        )];
        let out = apply_overrides(groups, OverrideMode::Simplified);
        let pi = out[0].candidates.iter().find(|c| c.glyph == '皮').unwrap();
        assert_eq!(pi.score, 3.0);
        let ji = out[0].candidates.iter().find(|c| c.glyph == '己').unwrap();
        assert_eq!(ji.score, 999_999.0);
    }
}
