//! Headline text analysis.
//!
//! - [`normalize`]: shared tokenization (lowercase, punctuation removal, split)
//! - [`frequency`]: word and n-gram [`FrequencyTable`]s built by [`FrequencyAnalyzer`]
//! - [`compare`]: three-way vocabulary comparison

pub mod compare;
pub mod frequency;
pub mod normalize;

pub use compare::{Comparison, VennRegions, compare_tables};
pub use frequency::{FrequencyAnalyzer, FrequencyTable, Ngram};
