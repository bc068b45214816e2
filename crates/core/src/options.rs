use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Per-source parsing configuration.
///
/// `split` and `join` are independent so two sources can use different
/// internal delimiters yet normalize to the same join character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Minimum key length (in chars) for a line to be admitted.
    pub min_key_len: usize,
    /// Delimiter that splits an incoming meanings field into tokens.
    pub split: char,
    /// Delimiter used to re-join deduplicated tokens.
    pub join: char,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            min_key_len: 1,
            split: '/',
            join: '/',
        }
    }
}

impl ParseOptions {
    /// Conventional defaults for the secondary source of a merge: meanings
    /// arrive delimited with `¦` but still join with `/`.
    pub fn secondary() -> Self {
        Self {
            split: '¦',
            ..Self::default()
        }
    }
}

/// Precedence policy for combining two glossaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergeOption {
    /// Main value wins; secondary fills gaps.
    Main,
    /// Secondary value wins; main fills gaps.
    Secondary,
    /// Union of meanings, main tokens first.
    #[default]
    MainSecondary,
    /// Union of meanings, secondary tokens first.
    SecondaryMain,
}

impl MergeOption {
    pub const fn as_str(self) -> &'static str {
        match self {
            MergeOption::Main => "main",
            MergeOption::Secondary => "secondary",
            MergeOption::MainSecondary => "main-secondary",
            MergeOption::SecondaryMain => "secondary-main",
        }
    }
}

impl fmt::Display for MergeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown merge option '{0}', expected main, secondary, main-secondary or secondary-main")]
pub struct MergeOptionParseError(String);

impl FromStr for MergeOption {
    type Err = MergeOptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(MergeOption::Main),
            "secondary" => Ok(MergeOption::Secondary),
            "main-secondary" => Ok(MergeOption::MainSecondary),
            "secondary-main" => Ok(MergeOption::SecondaryMain),
            other => Err(MergeOptionParseError(other.to_string())),
        }
    }
}
