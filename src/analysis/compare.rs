//! Three-way vocabulary comparison.
//!
//! Frequency tables are reduced to plain vocabularies (counts discarded) and
//! compared as sets: the words every source uses, the words only one source
//! uses, and the sizes of all seven regions of a three-set Venn diagram.

use super::frequency::{FrequencyTable, TermKey};
use serde::Serialize;
use std::collections::BTreeSet;
use std::hash::Hash;

/// Result of comparing three vocabularies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    /// Display labels, in input order.
    pub labels: [String; 3],
    /// Terms present in all three vocabularies, sorted.
    pub common: BTreeSet<String>,
    /// For each source, terms absent from both other sources.
    pub exclusive: [BTreeSet<String>; 3],
}

/// Sizes of the seven regions of a three-set Venn diagram.
///
/// Field names list which sets the region belongs to, e.g. `ab` holds terms in
/// the first and second set but not the third.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VennRegions {
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub ab: usize,
    pub ac: usize,
    pub bc: usize,
    pub abc: usize,
}

impl VennRegions {
    pub fn from_sets(a: &BTreeSet<String>, b: &BTreeSet<String>, c: &BTreeSet<String>) -> Self {
        let mut regions = VennRegions {
            a: 0,
            b: 0,
            c: 0,
            ab: 0,
            ac: 0,
            bc: 0,
            abc: 0,
        };
        for term in a.union(b).chain(c.iter()).collect::<BTreeSet<_>>() {
            match (a.contains(term), b.contains(term), c.contains(term)) {
                (true, true, true) => regions.abc += 1,
                (true, true, false) => regions.ab += 1,
                (true, false, true) => regions.ac += 1,
                (false, true, true) => regions.bc += 1,
                (true, false, false) => regions.a += 1,
                (false, true, false) => regions.b += 1,
                (false, false, true) => regions.c += 1,
                (false, false, false) => {}
            }
        }
        regions
    }
}

/// Compare three vocabularies given as plain term sets.
pub fn compare_vocabularies(
    vocabularies: [&BTreeSet<String>; 3],
    labels: [&str; 3],
) -> Comparison {
    let [a, b, c] = vocabularies;

    let common = a
        .iter()
        .filter(|term| b.contains(*term) && c.contains(*term))
        .cloned()
        .collect();

    let only = |own: &BTreeSet<String>, x: &BTreeSet<String>, y: &BTreeSet<String>| {
        own.iter()
            .filter(|term| !x.contains(*term) && !y.contains(*term))
            .cloned()
            .collect::<BTreeSet<String>>()
    };

    Comparison {
        labels: labels.map(str::to_string),
        common,
        exclusive: [only(a, b, c), only(b, a, c), only(c, a, b)],
    }
}

/// Compare the vocabularies of three frequency tables.
pub fn compare_tables<K>(tables: [&FrequencyTable<K>; 3], labels: [&str; 3]) -> Comparison
where
    K: Eq + Hash + Clone + TermKey,
{
    let [a, b, c] = tables.map(FrequencyTable::vocabulary);
    compare_vocabularies([&a, &b, &c], labels)
}
