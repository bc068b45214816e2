use once_cell::sync::Lazy;
use regex::Regex;

use crate::dedup::dedup_join;
use crate::glossary::Glossary;
use crate::options::ParseOptions;

/// Anything outside Unicode letters and whitespace disqualifies a token.
static NON_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\s]").expect("valid regex"));

/// Parses raw glossary text keeping only lines whose first `/`-delimited
/// meaning looks like a capitalized proper-noun phrase.
///
/// Line handling and accumulation are identical to
/// [`parse_lines`](crate::parse_lines); the extra admission test looks at
/// the first token of the RAW line value (always split on `/`, before any
/// accumulation with a previously stored value). A failing token drops the
/// whole line, so a later line for an existing key extends the mapping
/// only if that line's own first token passes.
pub fn filter_title_case(text: &str, opts: &ParseOptions) -> Glossary {
    let mut glossary = Glossary::new();
    let mut dropped = 0usize;

    for line in text.lines() {
        let line = line.trim();
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        if key.chars().count() < opts.min_key_len {
            continue;
        }
        let first_token = value.split('/').next().unwrap_or("");
        if !is_title_case(first_token) || NON_LETTER.is_match(first_token) {
            dropped += 1;
            continue;
        }
        let stored = match glossary.get(key) {
            Some(existing) => {
                let combined = format!("{existing}{}{value}", opts.split);
                dedup_join(&combined, opts.split, opts.join)
            }
            None => dedup_join(value, opts.split, opts.join),
        };
        glossary.insert(key.to_string(), stored);
    }

    log::debug!(
        "filter kept {} entries ({} lines rejected)",
        glossary.len(),
        dropped
    );
    glossary
}

/// Every space-separated word must start with its own uppercase form and
/// continue in its own lowercase form. Empty words (runs of spaces) and
/// caseless scripts pass trivially.
fn is_title_case(token: &str) -> bool {
    token.split(' ').all(|word| {
        let mut chars = word.chars();
        match chars.next() {
            None => true,
            Some(first) => {
                let rest = chars.as_str();
                first.to_string() == first.to_uppercase().to_string()
                    && rest == rest.to_lowercase()
            }
        }
    })
}
