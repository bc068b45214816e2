use crate::dedup::dedup_join;
use crate::glossary::Glossary;
use crate::options::ParseOptions;

/// Parses raw glossary text into a key→meanings mapping.
///
/// Each line is trimmed, then split on its FIRST `=`: the left side is the
/// key, everything after is the value verbatim (values may themselves
/// contain `=`). Lines without `=` and lines whose key is shorter than
/// `min_key_len` are skipped silently; one bad line never discards the
/// rest of the file. A later line for an existing key extends that key's
/// meanings (existing tokens first) rather than replacing them.
pub fn parse_lines(text: &str, opts: &ParseOptions) -> Glossary {
    let mut glossary = Glossary::new();
    let mut skipped = 0usize;

    for line in text.lines() {
        let line = line.trim();
        let Some((key, value)) = line.split_once('=') else {
            if !line.is_empty() {
                skipped += 1;
            }
            continue;
        };
        if key.chars().count() < opts.min_key_len {
            skipped += 1;
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
        "parsed {} entries ({} lines skipped)",
        glossary.len(),
        skipped
    );
    glossary
}
