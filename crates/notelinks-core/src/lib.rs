//! # notelinks-core
//!
//! Core types shared by the notelinks crates:
//! - [`Occurrence`]: one textual mention of a note inside another note
//! - [`NotebookConfig`]: per-notebook settings
//! - Error hierarchy ([`NotelinksError`], [`ConfigError`])

pub mod config;
pub mod error;
pub mod occurrence;

pub use config::NotebookConfig;
pub use error::{ConfigError, NotelinksError, Result};
pub use occurrence::Occurrence;
