use serde::Serialize;

/// One search request; every term is optional and empty strings count as
/// absent. An all-empty query matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Case-insensitive substring matched against the key side of a line.
    pub key: Option<String>,
    /// Case-insensitive substring matched against everything after the
    /// first `=`.
    pub meaning: Option<String>,
    /// 1-based line number lookup.
    pub line: Option<usize>,
}

impl SearchQuery {
    pub fn is_empty(&self) -> bool {
        self.key.as_deref().map_or(true, str::is_empty)
            && self.meaning.as_deref().map_or(true, str::is_empty)
            && self.line.is_none()
    }
}

/// Which part of a line a query term hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Key,
    Meaning,
    Line,
}

impl MatchKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            MatchKind::Key => "key",
            MatchKind::Meaning => "meaning",
            MatchKind::Line => "line",
        }
    }
}

/// One matching line of the searched text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineMatch {
    /// 1-based line number.
    pub line: usize,
    pub content: String,
    pub kinds: Vec<MatchKind>,
}

impl LineMatch {
    /// `+`-joined kind label, e.g. `key+meaning`.
    pub fn label(&self) -> String {
        self.kinds
            .iter()
            .map(|kind| kind.as_str())
            .collect::<Vec<_>>()
            .join("+")
    }
}

/// Finds matching lines in rendered text.
///
/// A line-number hit short-circuits content search; a missing or
/// out-of-range line number falls back to it. Content search only looks
/// at lines containing `=`, splitting on the first one.
pub fn find_matches(text: &str, query: &SearchQuery) -> Vec<LineMatch> {
    if query.is_empty() {
        return Vec::new();
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let mut matches = Vec::new();

    if let Some(number) = query.line {
        if number >= 1 && number <= lines.len() {
            matches.push(LineMatch {
                line: number,
                content: lines[number - 1].to_string(),
                kinds: vec![MatchKind::Line],
            });
        }
    }

    if query.line.is_none() || matches.is_empty() {
        let key_term = term(query.key.as_deref());
        let meaning_term = term(query.meaning.as_deref());

        for (index, line) in lines.iter().enumerate() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let mut kinds = Vec::new();
            if let Some(term) = &key_term {
                if key.to_lowercase().contains(term) {
                    kinds.push(MatchKind::Key);
                }
            }
            if let Some(term) = &meaning_term {
                if value.to_lowercase().contains(term) {
                    kinds.push(MatchKind::Meaning);
                }
            }
            if !kinds.is_empty() {
                matches.push(LineMatch {
                    line: index + 1,
                    content: line.to_string(),
                    kinds,
                });
            }
        }
    }

    log::debug!("search found {} matches", matches.len());
    matches
}

fn term(raw: Option<&str>) -> Option<String> {
    raw.filter(|s| !s.is_empty()).map(str::to_lowercase)
}
