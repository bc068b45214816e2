use crate::glossary::{Entry, Glossary};

/// Orders a glossary for display: fewest whitespace-separated key words
/// first, ties broken by code-point comparison of the key. Keys are
/// unique, so this is a total order.
pub fn sort_for_display(glossary: &Glossary) -> Vec<Entry> {
    let mut entries: Vec<Entry> = glossary
        .iter()
        .map(|(key, value)| Entry {
            key: key.to_string(),
            value: value.to_string(),
        })
        .collect();
    entries.sort_by(|a, b| {
        let a_words = a.key.split_whitespace().count();
        let b_words = b.key.split_whitespace().count();
        a_words.cmp(&b_words).then_with(|| a.key.cmp(&b.key))
    });
    entries
}

/// Canonical serialized form of a sorted glossary: `key=value` lines
/// joined by newline, no trailing newline. Re-parsing the rendered text
/// with the same markers reproduces the glossary exactly.
pub fn render_lines(entries: &[Entry]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}={}", entry.key, entry.value))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn glossary(pairs: &[(&str, &str)]) -> Glossary {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn keys(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.key.as_str()).collect()
    }

    #[test]
    fn sorts_by_word_count_then_lexicographically() {
        let sorted = sort_for_display(&glossary(&[("a b", "1"), ("c", "2"), ("ab", "3")]));
        assert_eq!(keys(&sorted), vec!["ab", "c", "a b"]);
    }

    #[test]
    fn word_count_dominates_key_length() {
        let sorted = sort_for_display(&glossary(&[("z", "1"), ("a a a", "2"), ("m m", "3")]));
        assert_eq!(keys(&sorted), vec!["z", "m m", "a a a"]);
    }

    #[test]
    fn renders_sorted_key_value_lines() {
        let sorted = sort_for_display(&glossary(&[("b", "2"), ("a", "1")]));
        assert_eq!(render_lines(&sorted), "a=1\nb=2");
    }

    #[test]
    fn renders_empty_glossary_as_empty_string() {
        assert_eq!(render_lines(&sort_for_display(&Glossary::new())), "");
    }
}
