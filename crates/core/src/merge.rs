use std::collections::BTreeSet;

use crate::dedup::dedup_join;
use crate::glossary::Glossary;
use crate::options::MergeOption;

/// Combines two glossaries under a precedence policy.
///
/// The result key set is the union of both inputs; a key missing from one
/// side reads as an empty value, so present-but-empty and absent behave
/// identically. The combining options tokenize on the literal `/` join
/// marker regardless of which split markers the sources were parsed with.
/// Each key is resolved independently, so map iteration order never leaks
/// into the result.
pub fn merge(main: &Glossary, secondary: &Glossary, option: MergeOption) -> Glossary {
    let keys: BTreeSet<&str> = main.keys().chain(secondary.keys()).collect();

    let mut result = Glossary::new();
    for key in keys {
        let main_value = main.get(key).unwrap_or("");
        let secondary_value = secondary.get(key).unwrap_or("");
        let merged = match option {
            MergeOption::Main => pick(main_value, secondary_value),
            MergeOption::Secondary => pick(secondary_value, main_value),
            MergeOption::MainSecondary => combine(main_value, secondary_value),
            MergeOption::SecondaryMain => combine(secondary_value, main_value),
        };
        result.insert(key.to_string(), merged);
    }

    log::debug!(
        "merged {} + {} entries into {} under '{option}'",
        main.len(),
        secondary.len(),
        result.len()
    );
    result
}

fn pick(preferred: &str, fallback: &str) -> String {
    if preferred.is_empty() { fallback } else { preferred }.to_string()
}

/// Token union of both sides, `first`'s tokens leading. When only one side
/// is non-empty its raw value passes through untouched, duplicates and all
/// (long-standing behavior; see DESIGN.md).
fn combine(first: &str, second: &str) -> String {
    if first.is_empty() || second.is_empty() {
        return pick(first, second);
    }
    dedup_join(&format!("{first}/{second}"), '/', '/')
}
