//! Notebook session: owns the reference index of one open notebook.
//!
//! Opening a notebook creates a session with an empty index; closing it
//! drops the index. Sessions are independent, so several notebooks can be
//! held at once.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, info, warn};

use notelinks_core::{NotebookConfig, Occurrence};

use crate::reference::ReferenceIndex;

/// An open notebook and its derived reference index.
#[derive(Debug)]
pub struct NotebookSession<N> {
    config: NotebookConfig,
    index: ReferenceIndex<N>,
    /// mentioner -> notes it currently mentions
    outgoing: HashMap<String, BTreeSet<String>>,
}

impl<N> NotebookSession<N> {
    /// Open a notebook with an empty index.
    pub fn open(config: NotebookConfig) -> Self {
        info!(notebook = %config.name, "notebook session opened");
        Self {
            config,
            index: ReferenceIndex::new(),
            outgoing: HashMap::new(),
        }
    }

    pub fn config(&self) -> &NotebookConfig {
        &self.config
    }

    /// Read access to the index for backlink and relation queries.
    pub fn index(&self) -> &ReferenceIndex<N> {
        &self.index
    }

    /// Replace everything `mentioner` mentions with `occurrences`.
    ///
    /// Previously recorded mentions from `mentioner` are retracted first,
    /// then each occurrence is indexed under its `source_note_path`.
    /// Records belonging to another mentioner are skipped. Returns the
    /// number of occurrences indexed.
    pub fn apply_note<I>(&mut self, mentioner: &str, occurrences: I) -> usize
    where
        I: IntoIterator<Item = Occurrence<N>>,
    {
        self.remove_note(mentioner);

        let mut targets = BTreeSet::new();
        let mut indexed = 0;
        for occurrence in occurrences {
            if occurrence.mentioning_note_path != mentioner {
                warn!(
                    mentioner,
                    found = %occurrence.mentioning_note_path,
                    "skipping occurrence recorded for a different note"
                );
                continue;
            }
            if occurrence.is_self_mention() {
                continue;
            }
            let target = occurrence.source_note_path.clone();
            self.index.add_reference(&target, mentioner, occurrence);
            targets.insert(target);
            indexed += 1;
        }

        if !targets.is_empty() {
            self.outgoing.insert(mentioner.to_string(), targets);
        }
        debug!(mentioner, indexed, "note applied");
        indexed
    }

    /// Retract every mention `path` makes of other notes.
    ///
    /// Mentions of `path` made by other notes stay, since their text is
    /// unchanged. Returns the number of occurrences removed.
    pub fn remove_note(&mut self, path: &str) -> usize {
        let Some(targets) = self.outgoing.remove(path) else {
            return 0;
        };
        let removed: usize = targets
            .iter()
            .map(|target| self.index.delete_references(target, path))
            .sum();
        debug!(note = path, removed, "note retracted");
        removed
    }

    /// Notes `mentioner` currently mentions, sorted by path.
    pub fn outgoing<'a>(&'a self, mentioner: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.outgoing
            .get(mentioner)
            .into_iter()
            .flat_map(|targets| targets.iter().map(String::as_str))
    }

    /// Close the notebook, discarding its index.
    pub fn close(self) {
        info!(
            notebook = %self.config.name,
            occurrences = self.index.occurrence_count(),
            "notebook session closed"
        );
    }
}
