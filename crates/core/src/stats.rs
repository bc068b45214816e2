use serde::Serialize;
use std::fmt;

use crate::glossary::Glossary;

/// Headline numbers for a computed glossary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlossaryStats {
    /// Number of keys.
    pub entries: usize,
    /// Total `/`-delimited meaning tokens across all values. An empty
    /// value still counts as one meaning.
    pub meanings: usize,
    /// Meanings per entry, rounded to one decimal; 0.0 when empty.
    pub avg_meanings: f64,
}

impl GlossaryStats {
    pub fn compute(glossary: &Glossary) -> Self {
        let entries = glossary.len();
        let meanings: usize = glossary.iter().map(|(_, v)| v.split('/').count()).sum();
        let avg_meanings = if entries > 0 {
            (meanings as f64 / entries as f64 * 10.0).round() / 10.0
        } else {
            0.0
        };
        Self {
            entries,
            meanings,
            avg_meanings,
        }
    }
}

impl fmt::Display for GlossaryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} entries, {} meanings, {:.1} avg meanings/entry",
            self.entries, self.meanings, self.avg_meanings
        )
    }
}
