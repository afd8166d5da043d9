//! The four ranking schemes.
//!
//! Every scheme maps a character to a priority score given the two frequency
//! tables; higher scores sort first. A character absent from both tables
//! scores the negative of its code point, which keeps unknown characters in
//! a stable total order strictly below every frequency-attested character.
//!
//! The general schemes blend corpus frequency with a traditional-script
//! bonus; the additive variant nudges traditional characters up a little,
//! the multiplicative variant weights the bonus an order of magnitude more
//! aggressively. The categorical schemes exist for products where one script
//! family must always outrank the other regardless of relative frequency.

use serde::{Deserialize, Serialize};

use crate::freq::{FreqTable, FreqTables};

/// Additive general scheme: traditional bonus weight.
const ADDITIVE_ALPHA: f64 = 0.05;
/// Multiplicative general scheme: traditional bonus weight.
const MULTIPLICATIVE_ALPHA: f64 = 10.0;
/// Normalized-frequency weight shared by both general schemes.
const BETA: f64 = 0.1;

/// A ranking scheme, selectable per generated table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scheme {
    /// Frequency plus a small additive traditional bonus (historical tag "A").
    GeneralAdditive,
    /// Frequency scaled by a large traditional bonus (historical tag "B").
    GeneralMultiplicative,
    /// Traditional characters always outrank the rest (historical tag "C").
    TraditionalFirst,
    /// Simplified characters always outrank the rest (historical tag "D").
    SimplifiedFirst,
}

impl Scheme {
    /// Parse a historical one-letter scheme tag.
    ///
    /// Unknown tags fall back to `GeneralMultiplicative`, the production
    /// default.
    pub fn parse(name: &str) -> Scheme {
        match name {
            "A" => Scheme::GeneralAdditive,
            "B" => Scheme::GeneralMultiplicative,
            "C" => Scheme::TraditionalFirst,
            "D" => Scheme::SimplifiedFirst,
            _ => Scheme::GeneralMultiplicative,
        }
    }

    /// Score one character. Higher sorts first.
    pub fn score(self, ch: char, tables: &FreqTables) -> f64 {
        match self {
            Scheme::GeneralAdditive | Scheme::GeneralMultiplicative => {
                general_score(self, ch, tables)
            }
            Scheme::TraditionalFirst => {
                categorical_score(ch, &tables.traditional, &tables.simplified)
            }
            Scheme::SimplifiedFirst => {
                categorical_score(ch, &tables.simplified, &tables.traditional)
            }
        }
    }
}

fn general_score(scheme: Scheme, ch: char, tables: &FreqTables) -> f64 {
    let simplified = tables.simplified.get(ch);
    let traditional = tables.traditional.get(ch);
    let freq = match (simplified, traditional) {
        (Some(s), Some(t)) => s.max(t),
        (Some(s), None) => s,
        (None, Some(t)) => t,
        (None, None) => -(ch as u32 as f64),
    };
    if freq <= 0.0 {
        // Already negative (or zero): sorts below every normalized score.
        return freq;
    }

    let normalized = (1.0 + freq).ln();
    let bonus = if traditional.is_some() { 1.0 } else { 0.0 };
    match scheme {
        Scheme::GeneralAdditive => ADDITIVE_ALPHA * bonus + BETA * normalized,
        _ => (1.0 + MULTIPLICATIVE_ALPHA * bonus) * (BETA * normalized),
    }
}

fn categorical_score(ch: char, preferred: &FreqTable, other: &FreqTable) -> f64 {
    if let Some(freq) = preferred.get(ch) {
        freq
    } else if other.contains(ch) {
        // Mid-priority: behind every preferred character, ahead of unknowns.
        0.0
    } else {
        -(ch as u32 as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::FreqTable;

    fn tables(simplified: &[(char, f64)], traditional: &[(char, f64)]) -> FreqTables {
        FreqTables::new(
            simplified.iter().copied().collect::<FreqTable>(),
            traditional.iter().copied().collect::<FreqTable>(),
        )
    }

    #[test]
    fn parse_accepts_tags_and_defaults_to_multiplicative() {
        assert_eq!(Scheme::parse("A"), Scheme::GeneralAdditive);
        assert_eq!(Scheme::parse("B"), Scheme::GeneralMultiplicative);
        assert_eq!(Scheme::parse("C"), Scheme::TraditionalFirst);
        assert_eq!(Scheme::parse("D"), Scheme::SimplifiedFirst);
        assert_eq!(Scheme::parse("Z"), Scheme::GeneralMultiplicative);
    }

    #[test]
    fn unknown_characters_order_by_descending_codepoint() {
        let empty = tables(&[], &[]);
        for scheme in [
            Scheme::GeneralAdditive,
            Scheme::GeneralMultiplicative,
            Scheme::TraditionalFirst,
            Scheme::SimplifiedFirst,
        ] {
            let low = scheme.score('一', &empty); // U+4E00
            let high = scheme.score('丁', &empty); // U+4E01
            assert!(low > high, "{scheme:?}: lower code point must sort first");
            assert_eq!(low, -(0x4E00 as f64));
        }
    }

    #[test]
    fn general_uses_max_of_both_tables() {
        let t = tables(&[('中', 100.0)], &[('中', 40.0)]);
        let expected = (1.0 + MULTIPLICATIVE_ALPHA) * (BETA * (1.0 + 100.0_f64).ln());
        assert_eq!(Scheme::GeneralMultiplicative.score('中', &t), expected);
    }

    #[test]
    fn multiplicative_bonus_dominates_additive() {
        // Two characters with the same frequency, one traditional-attested:
        // scheme B must separate them further than scheme A does.
        let t = tables(&[('测', 50.0)], &[('測', 50.0)]);
        let a_gap =
            Scheme::GeneralAdditive.score('測', &t) - Scheme::GeneralAdditive.score('测', &t);
        let b_gap = Scheme::GeneralMultiplicative.score('測', &t)
            - Scheme::GeneralMultiplicative.score('测', &t);
        assert!(a_gap > 0.0);
        assert!(b_gap > a_gap);
    }

    #[test]
    fn categorical_prefers_its_table_unconditionally() {
        let t = tables(&[('测', 1.0)], &[('測', 900.0)]);
        // Simplified-first: a tiny simplified frequency still beats the
        // mid-priority slot traditional-only characters get.
        assert!(
            Scheme::SimplifiedFirst.score('测', &t) > Scheme::SimplifiedFirst.score('測', &t)
        );
        assert_eq!(Scheme::SimplifiedFirst.score('測', &t), 0.0);
        // Mirror for traditional-first.
        assert_eq!(Scheme::TraditionalFirst.score('测', &t), 0.0);
        assert_eq!(Scheme::TraditionalFirst.score('測', &t), 900.0);
    }

    #[test]
    fn zero_frequency_skips_normalization() {
        let t = tables(&[('中', 0.0)], &[]);
        assert_eq!(Scheme::GeneralMultiplicative.score('中', &t), 0.0);
    }
}
