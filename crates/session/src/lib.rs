//! Session state for the glossary tools.
//!
//! A [`Session`] owns one result slot per tool (parse, merge, filter) and
//! everything the presentation layer needs around the core pipeline:
//! input resolution, the editable display text, search state, and export
//! naming. Slots are replaced wholesale on each run; the only "undo" is
//! re-displaying the original computed result.

mod error;
mod input;
mod session;

pub use error::{Result, SessionError};
pub use input::Input;
pub use session::{SearchState, Session, Tool};
