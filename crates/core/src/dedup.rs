/// Splits `value` on `split`, drops exact duplicates keeping the first
/// occurrence, and re-joins the survivors with `join`.
///
/// Meaning lists are short, so a linear scan beats a hash set here.
pub(crate) fn dedup_join(value: &str, split: char, join: char) -> String {
    let mut tokens: Vec<&str> = Vec::new();
    for token in value.split(split) {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens.join(join.to_string().as_str())
}
