//! Headline extraction from listing pages.

use scraper::{Html, Selector};
use std::error::Error;
use tracing::debug;

/// Headlines must be strictly longer than this many characters.
pub const MIN_TITLE_CHARS: usize = 35;

/// Selects headline elements from a listing page and keeps the long ones.
///
/// The selector is parsed once when the extractor is built, so an invalid
/// selector surfaces as a configuration error rather than an empty page.
#[derive(Debug, Clone)]
pub struct TitleExtractor {
    selector: Selector,
}

impl TitleExtractor {
    pub fn new(selector: &str) -> Result<Self, Box<dyn Error>> {
        let selector = Selector::parse(selector)
            .map_err(|e| format!("invalid title selector {selector:?}: {e}"))?;
        Ok(Self { selector })
    }

    /// Return the text of every matching element longer than
    /// [`MIN_TITLE_CHARS`], in document order.
    ///
    /// Text nodes are concatenated as-is, then every whitespace run (inside a
    /// node or across a node boundary) collapses to a single space and the ends
    /// are trimmed. Adjacent inline elements with no whitespace between them
    /// run together. Nodes are not stripped one by one, so whitespace at a node
    /// edge still separates words. The length gate applies to the collapsed
    /// text. Malformed HTML or no matches yields an empty vector.
    pub fn extract(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        let titles: Vec<String> = document
            .select(&self.selector)
            .map(|element| {
                element
                    .text()
                    .collect::<String>()
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .filter(|title| title.chars().count() > MIN_TITLE_CHARS)
            .collect();

        debug!(count = titles.len(), "Extracted titles");
        titles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(headlines: &[&str], tag: &str) -> String {
        let items: String = headlines
            .iter()
            .map(|h| format!("<{tag}>{h}</{tag}>"))
            .collect();
        format!("<html><body>{items}</body></html>")
    }

    #[test]
    fn test_extract_length_boundary() {
        let len_35 = "a".repeat(35);
        let len_36 = "b".repeat(36);
        let html = page(&[len_35.as_str(), len_36.as_str()], "h2");
        let extractor = TitleExtractor::new("h2").unwrap();
        assert_eq!(extractor.extract(&html), vec![len_36]);
    }

    #[test]
    fn test_extract_counts_characters_not_bytes() {
        // 30 characters but more than 35 bytes
        let short = "Test tytuł artykułu o polityce";
        assert_eq!(short.chars().count(), 30);
        let html = page(&[short], "h2");
        let extractor = TitleExtractor::new("h2").unwrap();
        assert!(extractor.extract(&html).is_empty());
    }

    #[test]
    fn test_extract_collapses_whitespace_and_nested_text() {
        let html = r#"<h3>
            <a href="/a">Minister   zapowiada
            <span>nowe</span> przepisy dotyczące rolnictwa</a>
        </h3>"#;
        let extractor = TitleExtractor::new("h3").unwrap();
        assert_eq!(
            extractor.extract(html),
            vec!["Minister zapowiada nowe przepisy dotyczące rolnictwa".to_string()]
        );
    }

    #[test]
    fn test_extract_node_boundaries_keep_their_whitespace() {
        let html = "<h2><b>Rząd</b><i>owy</i> projekt <b>ustawy </b><i> o podatkach</i> dochodowych</h2>";
        let extractor = TitleExtractor::new("h2").unwrap();
        assert_eq!(
            extractor.extract(html),
            vec!["Rządowy projekt ustawy o podatkach dochodowych".to_string()]
        );
    }

    #[test]
    fn test_extract_preserves_document_order() {
        let first = "Pierwszy nagłówek na stronie z wiadomościami";
        let second = "Drugi nagłówek na stronie z wiadomościami dnia";
        let html = page(&[first, second], "h2");
        let extractor = TitleExtractor::new("h2").unwrap();
        assert_eq!(extractor.extract(&html), vec![first, second]);
    }

    #[test]
    fn test_extract_only_matching_selector() {
        let html = format!(
            "<h2>{}</h2><h3>{}</h3>",
            "Nagłówek drugiego poziomu wystarczająco długi",
            "Nagłówek trzeciego poziomu wystarczająco długi"
        );
        let extractor = TitleExtractor::new("h3").unwrap();
        assert_eq!(
            extractor.extract(&html),
            vec!["Nagłówek trzeciego poziomu wystarczająco długi"]
        );
    }

    #[test]
    fn test_extract_empty_and_garbage_documents() {
        let extractor = TitleExtractor::new("h2").unwrap();
        assert!(extractor.extract("").is_empty());
        assert!(extractor.extract("<<<not html at all>>>").is_empty());
    }

    #[test]
    fn test_invalid_selector_is_an_error() {
        assert!(TitleExtractor::new("h2[").is_err());
        assert!(TitleExtractor::new("::::").is_err());
    }
}
