//! In-memory reference index: which notes mention which, and where.
//!
//! Layout is `source -> (mentioner -> occurrences)`. The inner map is a
//! `BTreeMap` so backlink panels enumerate mentioners in a stable order.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use tracing::debug;

use notelinks_core::Occurrence;

type Mentions<N> = BTreeMap<String, Vec<Occurrence<N>>>;

/// Bidirectional mention mapping for one notebook.
///
/// Every operation is total: unknown paths read as "no references" and
/// self-mentions are silently ignored.
#[derive(Debug, Clone)]
pub struct ReferenceIndex<N> {
    map: HashMap<String, Mentions<N>>,
}

/// Size summary of a [`ReferenceIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub referenced_notes: usize,
    pub pairs: usize,
    pub occurrences: usize,
}

impl<N> Default for ReferenceIndex<N> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
        }
    }
}

impl<N> ReferenceIndex<N> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `mentioner` mentions `source` at `occurrence`.
    ///
    /// Appends to the pair's existing occurrences. A note mentioning itself
    /// is never recorded.
    pub fn add_reference(&mut self, source: &str, mentioner: &str, occurrence: Occurrence<N>) {
        if source == mentioner {
            debug!(note = source, "ignoring self-reference");
            return;
        }
        let occurrences = self
            .map
            .entry(source.to_string())
            .or_default()
            .entry(mentioner.to_string())
            .or_default();
        occurrences.push(occurrence);
        debug!(
            source,
            mentioner,
            count = occurrences.len(),
            "reference added"
        );
    }

    /// Drop every occurrence of `mentioner` mentioning `source`.
    ///
    /// Returns how many occurrences were removed; absent pairs remove 0.
    /// The source entry itself goes away once its last mentioner does.
    pub fn delete_references(&mut self, source: &str, mentioner: &str) -> usize {
        if source == mentioner {
            return 0;
        }
        let Some(mentions) = self.map.get_mut(source) else {
            return 0;
        };
        let removed = mentions.remove(mentioner).map_or(0, |occ| occ.len());
        if mentions.is_empty() {
            self.map.remove(source);
        }
        if removed > 0 {
            debug!(source, mentioner, removed, "references deleted");
        }
        removed
    }

    /// True if either note mentions the other, or both are the same note.
    pub fn has_relation(&self, a: &str, b: &str) -> bool {
        a == b || self.contains_pair(a, b) || self.contains_pair(b, a)
    }

    /// Occurrences of `mentioner` mentioning `source`, in insertion order.
    pub fn get_references(&self, source: &str, mentioner: &str) -> &[Occurrence<N>] {
        self.map
            .get(source)
            .and_then(|mentions| mentions.get(mentioner))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// True if at least one other note mentions `path`.
    pub fn note_has_references(&self, path: &str) -> bool {
        self.map
            .get(path)
            .is_some_and(|mentions| !mentions.is_empty())
    }

    /// Notes mentioning `source`, sorted by path.
    pub fn mentioners<'a>(&'a self, source: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.map
            .get(source)
            .into_iter()
            .flat_map(|mentions| mentions.keys().map(String::as_str))
    }

    /// Backlinks of `source`: each mentioner with its occurrences, sorted by
    /// mentioner path.
    pub fn backlinks<'a>(
        &'a self,
        source: &str,
    ) -> impl Iterator<Item = (&'a str, &'a [Occurrence<N>])> + 'a {
        self.map.get(source).into_iter().flat_map(|mentions| {
            mentions
                .iter()
                .map(|(mentioner, occ)| (mentioner.as_str(), occ.as_slice()))
        })
    }

    /// Every note that currently has at least one mentioner.
    pub fn referenced_notes(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    /// Number of distinct (source, mentioner) pairs.
    pub fn pair_count(&self) -> usize {
        self.map.values().map(BTreeMap::len).sum()
    }

    /// Total number of stored occurrences.
    pub fn occurrence_count(&self) -> usize {
        self.map
            .values()
            .flat_map(BTreeMap::values)
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            referenced_notes: self.map.len(),
            pairs: self.pair_count(),
            occurrences: self.occurrence_count(),
        }
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    fn contains_pair(&self, source: &str, mentioner: &str) -> bool {
        self.map
            .get(source)
            .is_some_and(|mentions| mentions.contains_key(mentioner))
    }
}
