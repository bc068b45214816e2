use std::fs;
use std::path::PathBuf;

use crate::error::{Result, SessionError};

/// Where a tool's raw text comes from. The core pipeline never sees the
/// difference; only export naming remembers the file stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    File(PathBuf),
    Inline(String),
}

pub(crate) struct ResolvedInput {
    pub content: String,
    pub source_name: Option<String>,
}

impl Input {
    /// Reads the text, remembering the file stem for export naming.
    /// Inline text is trimmed; inline text that trims to nothing is a
    /// missing input, same as supplying neither file nor text.
    pub(crate) fn resolve(&self, slot: &'static str) -> Result<ResolvedInput> {
        match self {
            Input::File(path) => {
                let content = fs::read_to_string(path)?;
                let source_name = path
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(str::to_string);
                log::debug!("read {} bytes from {}", content.len(), path.display());
                Ok(ResolvedInput {
                    content,
                    source_name,
                })
            }
            Input::Inline(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Err(SessionError::MissingInput(slot));
                }
                Ok(ResolvedInput {
                    content: trimmed.to_string(),
                    source_name: None,
                })
            }
        }
    }
}
