use std::fmt;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};
use glosskit_core::{
    filter_title_case, merge, parse_lines, render_lines, sort_for_display, Entry, Glossary,
    GlossaryStats, MergeOption, ParseOptions,
};
use glosskit_search::{find_matches, LineMatch, Navigator, SearchQuery};

use crate::error::{Result, SessionError};
use crate::input::Input;

/// The three tools; each owns one result slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Parse,
    Merge,
    Filter,
}

impl Tool {
    pub const fn as_str(self) -> &'static str {
        match self {
            Tool::Parse => "parse",
            Tool::Merge => "merge",
            Tool::Filter => "filter",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored search over a slot's current text.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub matches: Vec<LineMatch>,
    pub navigator: Navigator,
}

#[derive(Debug, Default)]
struct ResultSlot {
    glossary: Glossary,
    original_text: String,
    edited: Option<String>,
    search: Option<SearchState>,
    source_name: Option<String>,
}

impl ResultSlot {
    fn text(&self) -> &str {
        self.edited.as_deref().unwrap_or(&self.original_text)
    }
}

/// Explicit owner of what used to be ambient page state: the current
/// mapping, the original rendered result, any user edits, and search
/// navigation, per tool.
#[derive(Debug, Default)]
pub struct Session {
    parse: Option<ResultSlot>,
    merge: Option<ResultSlot>,
    filter: Option<ResultSlot>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the parser over one source and replaces the parse slot.
    pub fn run_parse(&mut self, input: &Input, opts: &ParseOptions) -> Result<GlossaryStats> {
        let resolved = input.resolve("primary")?;
        let glossary = parse_lines(&resolved.content, opts);
        Ok(self.store(Tool::Parse, glossary, resolved.source_name))
    }

    /// Parses both sources (each with its own markers), merges them under
    /// `option`, and replaces the merge slot. Export naming follows the
    /// main source.
    pub fn run_merge(
        &mut self,
        main: &Input,
        secondary: &Input,
        main_opts: &ParseOptions,
        secondary_opts: &ParseOptions,
        option: MergeOption,
    ) -> Result<GlossaryStats> {
        let main_resolved = main.resolve("main")?;
        let secondary_resolved = secondary.resolve("secondary")?;
        let main_glossary = parse_lines(&main_resolved.content, main_opts);
        let secondary_glossary = parse_lines(&secondary_resolved.content, secondary_opts);
        let merged = merge(&main_glossary, &secondary_glossary, option);
        let source_name = main_resolved.source_name.or(secondary_resolved.source_name);
        Ok(self.store(Tool::Merge, merged, source_name))
    }

    /// Runs the title-case filter over one source and replaces the filter
    /// slot.
    pub fn run_filter(&mut self, input: &Input, opts: &ParseOptions) -> Result<GlossaryStats> {
        let resolved = input.resolve("primary")?;
        let glossary = filter_title_case(&resolved.content, opts);
        Ok(self.store(Tool::Filter, glossary, resolved.source_name))
    }

    fn store(&mut self, tool: Tool, glossary: Glossary, source_name: Option<String>) -> GlossaryStats {
        let stats = GlossaryStats::compute(&glossary);
        let original_text = render_lines(&sort_for_display(&glossary));
        log::info!("{tool}: {stats}");
        *self.slot_mut(tool) = Some(ResultSlot {
            glossary,
            original_text,
            edited: None,
            search: None,
            source_name,
        });
        stats
    }

    pub fn glossary(&self, tool: Tool) -> Option<&Glossary> {
        self.slot(tool).as_ref().map(|slot| &slot.glossary)
    }

    /// Sorted entries of the slot's glossary; empty when the slot is.
    pub fn entries(&self, tool: Tool) -> Vec<Entry> {
        self.slot(tool)
            .as_ref()
            .map(|slot| sort_for_display(&slot.glossary))
            .unwrap_or_default()
    }

    /// Current display text: the user's edit if one exists, else the
    /// original rendered result. Empty string for an empty slot.
    pub fn text(&self, tool: Tool) -> &str {
        self.slot(tool).as_ref().map(ResultSlot::text).unwrap_or("")
    }

    /// Replaces the editable display text. The underlying glossary is
    /// untouched; edits only exist on the rendered surface.
    pub fn set_text(&mut self, tool: Tool, text: String) -> Result<()> {
        let slot = self
            .slot_mut(tool)
            .as_mut()
            .ok_or(SessionError::EmptyResult(tool))?;
        slot.edited = Some(text);
        Ok(())
    }

    pub fn is_modified(&self, tool: Tool) -> bool {
        self.slot(tool).as_ref().is_some_and(|slot| {
            slot.edited
                .as_deref()
                .is_some_and(|edited| edited != slot.original_text)
        })
    }

    /// Drops edits, re-displaying the original computed result.
    pub fn reset(&mut self, tool: Tool) {
        if let Some(slot) = self.slot_mut(tool).as_mut() {
            slot.edited = None;
        }
    }

    /// Empties the slot entirely.
    pub fn clear(&mut self, tool: Tool) {
        *self.slot_mut(tool) = None;
    }

    /// Searches the slot's current text and stores the match list with a
    /// fresh navigation cursor.
    pub fn search(&mut self, tool: Tool, query: &SearchQuery) -> Result<&SearchState> {
        let slot = self
            .slot_mut(tool)
            .as_mut()
            .ok_or(SessionError::EmptyResult(tool))?;
        let text = slot.edited.as_deref().unwrap_or(&slot.original_text);
        if text.trim().is_empty() {
            return Err(SessionError::EmptyResult(tool));
        }
        let matches = find_matches(text, query);
        let navigator = Navigator::new(matches.len());
        Ok(slot.search.insert(SearchState { matches, navigator }))
    }

    pub fn current_match(&self, tool: Tool) -> Option<&LineMatch> {
        let state = self.slot(tool).as_ref()?.search.as_ref()?;
        state.matches.get(state.navigator.current()?)
    }

    pub fn next_match(&mut self, tool: Tool) -> Option<&LineMatch> {
        let state = self.slot_mut(tool).as_mut()?.search.as_mut()?;
        let index = state.navigator.next()?;
        state.matches.get(index)
    }

    pub fn prev_match(&mut self, tool: Tool) -> Option<&LineMatch> {
        let state = self.slot_mut(tool).as_mut()?.search.as_mut()?;
        let index = state.navigator.prev()?;
        state.matches.get(index)
    }

    /// Export name for a slot: `<source stem>_<YYYYMMDDHHMMSS>.txt`, with
    /// `glossary` standing in for inline sources. The clock is injected so
    /// callers (and tests) control the timestamp.
    pub fn export_filename(&self, tool: Tool, now: DateTime<Local>) -> String {
        let stem = self
            .slot(tool)
            .as_ref()
            .and_then(|slot| slot.source_name.as_deref())
            .unwrap_or("glossary");
        format!("{stem}_{}.txt", now.format("%Y%m%d%H%M%S"))
    }

    /// Writes the slot's current text to `path` exactly as displayed.
    pub fn export(&self, tool: Tool, path: &Path) -> Result<()> {
        let text = self.text(tool);
        if text.trim().is_empty() {
            return Err(SessionError::EmptyResult(tool));
        }
        fs::write(path, text)?;
        log::info!("{tool}: exported {} bytes to {}", text.len(), path.display());
        Ok(())
    }

    fn slot(&self, tool: Tool) -> &Option<ResultSlot> {
        match tool {
            Tool::Parse => &self.parse,
            Tool::Merge => &self.merge,
            Tool::Filter => &self.filter,
        }
    }

    fn slot_mut(&mut self, tool: Tool) -> &mut Option<ResultSlot> {
        match tool {
            Tool::Parse => &mut self.parse,
            Tool::Merge => &mut self.merge,
            Tool::Filter => &mut self.filter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glosskit_search::MatchKind;
    use pretty_assertions::assert_eq;

    fn inline(text: &str) -> Input {
        Input::Inline(text.to_string())
    }

    fn parsed_session(text: &str) -> Session {
        let mut session = Session::new();
        session
            .run_parse(&inline(text), &ParseOptions::default())
            .expect("parse");
        session
    }

    #[test]
    fn run_parse_fills_the_slot_with_sorted_text() {
        let session = parsed_session("b=2\na=1\na b=3");
        assert_eq!(session.text(Tool::Parse), "a=1\nb=2\na b=3");
        assert_eq!(session.entries(Tool::Parse).len(), 3);
        assert!(session.text(Tool::Merge).is_empty());
    }

    #[test]
    fn run_parse_reports_stats() {
        let mut session = Session::new();
        let stats = session
            .run_parse(&inline("a=x/y\nb=z"), &ParseOptions::default())
            .expect("parse");
        assert_eq!(stats.entries, 2);
        assert_eq!(stats.meanings, 3);
    }

    #[test]
    fn missing_inline_input_is_an_error() {
        let mut session = Session::new();
        let err = session
            .run_parse(&inline("   "), &ParseOptions::default())
            .unwrap_err();
        assert!(matches!(err, SessionError::MissingInput("primary")));
    }

    #[test]
    fn run_merge_uses_secondary_markers_for_the_secondary_source() {
        let mut session = Session::new();
        session
            .run_merge(
                &inline("k=a/b"),
                &inline("k=b¦c"),
                &ParseOptions::default(),
                &ParseOptions::secondary(),
                MergeOption::MainSecondary,
            )
            .expect("merge");
        assert_eq!(session.text(Tool::Merge), "k=a/b/c");
    }

    #[test]
    fn rerunning_a_tool_replaces_the_slot_wholesale() {
        let mut session = parsed_session("a=1");
        session.set_text(Tool::Parse, "a=1\nedited=yes".to_string()).expect("set");
        session
            .run_parse(&inline("b=2"), &ParseOptions::default())
            .expect("parse");
        assert_eq!(session.text(Tool::Parse), "b=2");
        assert!(!session.is_modified(Tool::Parse));
    }

    #[test]
    fn edits_overlay_the_original_until_reset() {
        let mut session = parsed_session("a=1");
        assert!(!session.is_modified(Tool::Parse));
        session.set_text(Tool::Parse, "a=1/2".to_string()).expect("set");
        assert!(session.is_modified(Tool::Parse));
        assert_eq!(session.text(Tool::Parse), "a=1/2");
        session.reset(Tool::Parse);
        assert!(!session.is_modified(Tool::Parse));
        assert_eq!(session.text(Tool::Parse), "a=1");
    }

    #[test]
    fn setting_text_equal_to_original_is_not_a_modification() {
        let mut session = parsed_session("a=1");
        session.set_text(Tool::Parse, "a=1".to_string()).expect("set");
        assert!(!session.is_modified(Tool::Parse));
    }

    #[test]
    fn set_text_on_an_empty_slot_fails() {
        let mut session = Session::new();
        let err = session.set_text(Tool::Parse, "x=y".to_string()).unwrap_err();
        assert!(matches!(err, SessionError::EmptyResult(Tool::Parse)));
    }

    #[test]
    fn clear_empties_the_slot() {
        let mut session = parsed_session("a=1");
        session.clear(Tool::Parse);
        assert!(session.text(Tool::Parse).is_empty());
        assert!(session.glossary(Tool::Parse).is_none());
    }

    #[test]
    fn search_stores_matches_and_navigation_wraps() {
        let mut session = parsed_session("anh=x\nanh em=y\nem=z");
        let query = SearchQuery {
            key: Some("anh".to_string()),
            ..SearchQuery::default()
        };
        let state = session.search(Tool::Parse, &query).expect("search");
        assert_eq!(state.matches.len(), 2);

        let first = session.current_match(Tool::Parse).expect("current").line;
        let second = session.next_match(Tool::Parse).expect("next").line;
        let wrapped = session.next_match(Tool::Parse).expect("wrap").line;
        assert_ne!(first, second);
        assert_eq!(first, wrapped);
        let back = session.prev_match(Tool::Parse).expect("prev").line;
        assert_eq!(back, second);
    }

    #[test]
    fn search_runs_over_edited_text() {
        let mut session = parsed_session("a=1");
        session
            .set_text(Tool::Parse, "a=1\nzebra=stripes".to_string())
            .expect("set");
        let query = SearchQuery {
            key: Some("zebra".to_string()),
            ..SearchQuery::default()
        };
        let state = session.search(Tool::Parse, &query).expect("search");
        assert_eq!(state.matches.len(), 1);
        assert_eq!(state.matches[0].line, 2);
        assert_eq!(state.matches[0].kinds, vec![MatchKind::Key]);
    }

    #[test]
    fn search_on_an_empty_slot_fails() {
        let mut session = Session::new();
        let err = session
            .search(Tool::Merge, &SearchQuery::default())
            .unwrap_err();
        assert!(matches!(err, SessionError::EmptyResult(Tool::Merge)));
    }

    #[test]
    fn export_filename_uses_stem_and_timestamp() {
        use chrono::TimeZone;
        let session = parsed_session("a=1");
        let now = Local.with_ymd_and_hms(2026, 8, 30, 14, 5, 9).unwrap();
        assert_eq!(
            session.export_filename(Tool::Parse, now),
            "glossary_20260830140509.txt"
        );
    }
}
