//! # notelinks-index
//!
//! In-memory reference index for notelinks.
//!
//! Maintains a derived cache of note mentions, rebuilt from collaborator
//! output whenever a note is parsed, edited or removed:
//! - [`ReferenceIndex`] answers relation and backlink queries
//! - [`NotebookSession`] owns one index per open notebook and applies
//!   per-note updates

pub mod reference;
pub mod session;

pub use reference::{IndexStats, ReferenceIndex};
pub use session::NotebookSession;
