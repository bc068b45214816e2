//! Line-oriented search and navigation over rendered glossary text.
//!
//! Searches run against display text (which the user may have edited), not
//! against the underlying mapping, so matches always reflect what is on
//! screen. The [`Navigator`] is a wraparound cursor for stepping through a
//! fixed match list.

mod matches;
mod navigator;

pub use matches::{find_matches, LineMatch, MatchKind, SearchQuery};
pub use navigator::Navigator;
