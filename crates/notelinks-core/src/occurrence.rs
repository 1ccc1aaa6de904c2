//! Occurrence type: one concrete mention of a note inside another note.

use serde::{Deserialize, Serialize};

/// A single textual mention of `source_note_path` found inside
/// `mentioning_note_path`.
///
/// `N` is the parser's syntax-node handle. It is carried through the index
/// untouched, so the parsing collaborator can later re-render or highlight
/// the exact spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Occurrence<N> {
    /// The note being referenced (the target of the link).
    pub source_note_path: String,

    /// The note whose content contains the link text.
    pub mentioning_note_path: String,

    /// Literal substring that constitutes the mention (e.g. `[[project]]`).
    pub matched_text: String,

    /// Resolved link destination extracted from the mention.
    pub link_target: String,

    /// Syntax node enclosing the mention.
    pub containing_node: N,

    /// Syntax node of the mention itself.
    pub matched_node: N,
}

impl<N> Occurrence<N> {
    /// True when the mention points back at the note it was found in.
    pub fn is_self_mention(&self) -> bool {
        self.source_note_path == self.mentioning_note_path
    }
}
