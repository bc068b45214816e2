//! Core pipeline for glossary files (`key=meaning1/meaning2/...`).
//!
//! Four pure functions do all the real work:
//! - [`parse_lines`]: raw text to a canonical key→meanings mapping
//! - [`merge`]: two mappings combined under a precedence policy
//! - [`filter_title_case`]: raw text reduced to proper-noun-looking entries
//! - [`sort_for_display`]: the one ordering every output goes through
//!
//! They are synchronous, never fail on malformed data (bad lines are
//! skipped, never fatal), and share the dedup/join primitive that defines
//! the meanings-value format. Everything else in the workspace is glue
//! around these.

pub mod glossary;
pub mod options;
pub mod stats;

mod dedup;
mod filter;
mod merge;
mod parse;
mod sort;

pub use filter::filter_title_case;
pub use glossary::{Entry, Glossary};
pub use merge::merge;
pub use options::{MergeOption, MergeOptionParseError, ParseOptions};
pub use parse::parse_lines;
pub use sort::{render_lines, sort_for_display};
pub use stats::GlossaryStats;
