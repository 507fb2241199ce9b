//! Word and n-gram frequency tables.
//!
//! [`FrequencyTable`] counts keys while remembering the order in which each key
//! was first seen. Its "most common" view is a stable sort on descending count,
//! so keys with equal counts keep their first-seen order and the output is
//! identical on every run over the same input.

use super::normalize::content_tokens;
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::hash::Hash;
use tracing::debug;

/// An ordered tuple of contiguous tokens.
pub type Ngram = Vec<String>;

/// Something that can be shown as a single term in listings and charts.
pub trait TermKey {
    /// Human-readable form of the key; n-grams are space-joined.
    fn term(&self) -> String;
}

impl TermKey for String {
    fn term(&self) -> String {
        self.clone()
    }
}

impl TermKey for Ngram {
    fn term(&self) -> String {
        self.join(" ")
    }
}

/// Occurrence counts keyed by token or n-gram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<K: Eq + Hash> {
    /// Position of each key in `entries`.
    index: HashMap<K, usize>,
    /// `(key, count)` in first-seen order.
    entries: Vec<(K, usize)>,
}

impl<K: Eq + Hash> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> FrequencyTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `key`.
    pub fn add(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    #[cfg(test)]
    pub fn get(&self, key: &K) -> usize {
        self.index.get(key).map_or(0, |&i| self.entries[i].1)
    }

    #[cfg(test)]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Entries sorted by descending count, ties in first-seen order.
    ///
    /// `limit` caps the number of entries returned; `None` returns all of them.
    pub fn most_common(&self, limit: Option<usize>) -> Vec<(&K, usize)> {
        let mut ranked: Vec<(&K, usize)> = self.entries.iter().map(|(k, c)| (k, *c)).collect();
        // sort_by is stable, which keeps first-seen order among equal counts
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        ranked
    }
}

impl<K: Eq + Hash + Clone + TermKey> FrequencyTable<K> {
    /// The top entries as plain `(term, count)` pairs for presentation.
    pub fn top_terms(&self, limit: usize) -> Vec<(String, usize)> {
        self.most_common(Some(limit))
            .into_iter()
            .map(|(key, count)| (key.term(), count))
            .collect()
    }

    /// Every key as a display term, counts discarded.
    pub fn vocabulary(&self) -> BTreeSet<String> {
        self.keys().map(TermKey::term).collect()
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for FrequencyTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();
        for key in iter {
            table.add(key);
        }
        table
    }
}

/// Serializes as a sequence of `[key, count]` pairs in most-common order.
impl<K: Eq + Hash + Clone + Serialize> Serialize for FrequencyTable<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let ranked = self.most_common(None);
        let mut seq = serializer.serialize_seq(Some(ranked.len()))?;
        for entry in &ranked {
            seq.serialize_element(entry)?;
        }
        seq.end()
    }
}

/// Builds frequency tables from a title collection, filtering a stopword set.
#[derive(Debug, Clone, Copy)]
pub struct FrequencyAnalyzer<'a> {
    stopwords: &'a HashSet<String>,
}

impl<'a> FrequencyAnalyzer<'a> {
    pub fn new(stopwords: &'a HashSet<String>) -> Self {
        Self { stopwords }
    }

    /// Count every non-stopword token across `titles`.
    pub fn word_counts<S: AsRef<str>>(&self, titles: &[S]) -> FrequencyTable<String> {
        let table: FrequencyTable<String> =
            content_tokens(titles, self.stopwords).into_iter().collect();
        debug!(distinct = table.len(), total = table.total(), "Counted words");
        table
    }

    /// Count overlapping windows of `n` tokens.
    ///
    /// Stopwords are removed before windowing. `n == 0` yields an empty table.
    pub fn ngram_counts<S: AsRef<str>>(&self, titles: &[S], n: usize) -> FrequencyTable<Ngram> {
        if n == 0 {
            return FrequencyTable::new();
        }
        let tokens = content_tokens(titles, self.stopwords);
        let table: FrequencyTable<Ngram> = tokens.windows(n).map(<[String]>::to_vec).collect();
        debug!(n, distinct = table.len(), total = table.total(), "Counted n-grams");
        table
    }
}
