use thiserror::Error;

use crate::session::Tool;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Error, Debug)]
pub enum SessionError {
    /// A required input slot had neither a file nor inline text. Raised by
    /// the resolver before the pipeline runs, never by the core functions.
    #[error("no input supplied for the {0} source (expected a file or inline text)")]
    MissingInput(&'static str),

    #[error("the {0} tool has no result to work with")]
    EmptyResult(Tool),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
