//! Headline text normalization.
//!
//! Both the unigram and the n-gram counters start from the same token
//! sequence:
//!
//! 1. all titles joined with a single space and lowercased,
//! 2. every character that is neither alphanumeric (letters and all Unicode
//!    numerals such as `²`) nor `_` nor whitespace removed,
//! 3. the result split on whitespace.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Matches anything that is not alphanumeric, `_` or whitespace.
///
/// Alphanumeric is `Alphabetic` plus every `Number` category, so `²`, `₂`
/// and `½` survive while combining marks and other connector punctuation go.
static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{Alphabetic}\p{N}_\s]").unwrap());

/// Turn a title collection into its lowercase, punctuation-free token sequence.
///
/// # Examples
///
/// ```ignore
/// let tokens = tokenize(&["Sejm: głosowanie!".to_string()]);
/// assert_eq!(tokens, vec!["sejm", "głosowanie"]);
/// ```
pub fn tokenize<S: AsRef<str>>(titles: &[S]) -> Vec<String> {
    let joined = titles
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    PUNCTUATION
        .replace_all(&joined, "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Token sequence with every stopword removed, order preserved.
///
/// N-grams are windowed over this filtered sequence, so two words separated
/// only by stopwords in the original headline become adjacent here.
pub fn content_tokens<S: AsRef<str>>(titles: &[S], stopwords: &HashSet<String>) -> Vec<String> {
    tokenize(titles)
        .into_iter()
        .filter(|token| !stopwords.contains(token))
        .collect()
}
