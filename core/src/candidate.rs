//! Candidate types for table ranking.

use serde::{Deserialize, Serialize};

/// A single scored character. Higher scores sort first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub glyph: char,
    pub score: f64,
}

impl Candidate {
    pub fn new(glyph: char, score: f64) -> Self {
        Self { glyph, score }
    }
}

/// All candidates reachable through one code.
///
/// Rebuilt per sort invocation; the candidate order is raw-table order until
/// the sorter ranks the group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeGroup {
    pub code: String,
    pub candidates: Vec<Candidate>,
}

impl CodeGroup {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            candidates: Vec::new(),
        }
    }

    /// The containment test used by override rules.
    pub fn contains_glyph(&self, glyph: char) -> bool {
        self.candidates.iter().any(|c| c.glyph == glyph)
    }
}
