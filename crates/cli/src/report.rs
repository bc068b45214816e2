use glosskit_core::GlossaryStats;
use glosskit_search::LineMatch;

pub(crate) fn render_stats(stats: &GlossaryStats) -> String {
    let mut out = String::new();
    out.push_str(&format!("Entries:          {}\n", stats.entries));
    out.push_str(&format!("Meanings:         {}\n", stats.meanings));
    out.push_str(&format!("Avg meanings/key: {:.1}\n", stats.avg_meanings));
    out
}

pub(crate) fn render_matches(matches: &[LineMatch]) -> String {
    let mut out = String::new();
    for m in matches {
        out.push_str(&format!("line {}: {} [{}]\n", m.line, m.content, m.label()));
    }
    out.push_str(&format!(
        "{} match{}\n",
        matches.len(),
        if matches.len() == 1 { "" } else { "es" }
    ));
    out
}
