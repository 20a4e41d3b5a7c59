//! # Documents
//!
//! A [`Document`] is one raw phext string plus the delimiters used to read it.
//! It is a value: edits never patch the string in place. Each edit partitions
//! the current text, swaps the affected scroll in the coordinate index and
//! serializes a brand-new string, because changing one scroll's length shifts
//! every boundary after it.
//!
//! Re-serialization is canonical, so an edit also drops empty structural
//! scrolls elsewhere in the document. Their positions are preserved through
//! the delimiters of the scrolls that follow them.

use crate::coordinate::Coordinate;
use crate::delimiter::DelimiterSet;
use crate::error::{PhextError, Result};
use crate::partition::{self, Partition, Scroll};
use crate::serialize::serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    raw: String,
    delimiters: DelimiterSet,
}

impl Document {
    pub fn new(raw: impl Into<String>) -> Self {
        Self::with_delimiters(raw, DelimiterSet::STANDARD)
    }

    pub fn with_delimiters(raw: impl Into<String>, delimiters: DelimiterSet) -> Self {
        Self {
            raw: raw.into(),
            delimiters,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn into_raw(self) -> String {
        self.raw
    }

    pub fn delimiters(&self) -> &DelimiterSet {
        &self.delimiters
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn partition(&self) -> Partition<'_> {
        partition::partition(&self.raw, &self.delimiters)
    }

    /// Non-empty scrolls in document order.
    pub fn scrolls(&self) -> Vec<Scroll<'_>> {
        self.partition().scrolls
    }

    /// Text at `coordinate`. `Some("")` for a scroll that exists but is
    /// empty, `None` when the document has no such position.
    pub fn select(&self, coordinate: Coordinate) -> Option<&str> {
        partition::locate(&self.raw, &self.delimiters, coordinate).located
    }

    /// Overwrites the scroll at `coordinate`. Empty text removes it.
    pub fn replace(&self, coordinate: Coordinate, text: &str) -> Result<Document> {
        self.check_text(text)?;
        let mut cells = self.cells();
        if text.is_empty() {
            cells.remove(&coordinate);
        } else {
            cells.insert(coordinate, text);
        }
        Ok(self.rebuild(cells))
    }

    /// Appends `text` to the scroll at `coordinate`, creating it if needed.
    pub fn append(&self, coordinate: Coordinate, text: &str) -> Result<Document> {
        self.check_text(text)?;
        let existing = self.select(coordinate).unwrap_or_default();
        let combined = format!("{}{}", existing, text);
        self.replace(coordinate, &combined)
    }

    pub fn remove(&self, coordinate: Coordinate) -> Document {
        let mut cells = self.cells();
        cells.remove(&coordinate);
        self.rebuild(cells)
    }

    /// Canonical form of this document: same scrolls, minimal delimiters.
    pub fn normalize(&self) -> Document {
        self.rebuild(self.cells())
    }

    fn cells(&self) -> BTreeMap<Coordinate, &str> {
        self.partition().to_map()
    }

    fn rebuild(&self, cells: BTreeMap<Coordinate, &str>) -> Document {
        Document::with_delimiters(serialize(cells, &self.delimiters), self.delimiters)
    }

    fn check_text(&self, text: &str) -> Result<()> {
        match self.delimiters.find_reserved(text) {
            Some(c) => Err(PhextError::ReservedDelimiter(c)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delimiter::*;

    fn c(s: &str) -> Coordinate {
        Coordinate::from_address(s)
    }

    #[test]
    fn test_select_reads_target_scroll() {
        let doc = Document::new(format!("{0}{0}Third Scroll Content", SCROLL_BREAK));
        assert_eq!(
            doc.select(c("1.1.1/1.1.1/1.1.3")),
            Some("Third Scroll Content")
        );
        assert_eq!(doc.select(c("1.1.1/1.1.1/1.1.2")), Some(""));
        assert_eq!(doc.select(c("1.1.1/1.1.1/1.1.4")), None);
    }

    #[test]
    fn test_append_to_empty_document() {
        let doc = Document::default();
        let updated = doc.append(c("1.1.1/1.1.1/1.1.2"), "Hello World!").unwrap();
        assert_eq!(updated.raw(), format!("{}Hello World!", SCROLL_BREAK));
        assert!(doc.is_empty());
    }

    #[test]
    fn test_append_at_out_of_range_coordinate_stays_small() {
        let target = c("1.1.1/1.1.1/1.1.50000000");
        let updated = Document::default().append(target, "x").unwrap();
        assert_eq!(updated.raw(), "x");

        let last = Coordinate::ORIGIN.with(crate::coordinate::Axis::Scroll, 50_000_000);
        let updated = Document::default().append(last, "x").unwrap();
        assert_eq!(updated.raw().len(), 999);
    }

    #[test]
    fn test_append_extends_existing_text() {
        let doc = Document::new("Hello");
        let updated = doc.append(Coordinate::ORIGIN, ", World").unwrap();
        assert_eq!(updated.raw(), "Hello, World");
    }

    #[test]
    fn test_replace_rewrites_single_scroll() {
        let original = format!("{}{}{}Third Scroll Original", SCROLL_BREAK, SECTION_BREAK, SCROLL_BREAK);
        let doc = Document::new(original.clone());
        let updated = doc
            .replace(c("1.1.1/1.1.1/1.2.2"), "Full Rewrite at 1.2.2")
            .unwrap();
        assert_eq!(
            updated.select(c("1.1.1/1.1.1/1.2.2")),
            Some("Full Rewrite at 1.2.2")
        );
        assert_eq!(updated.scrolls().len(), 1);
        assert_eq!(doc.raw(), original);
    }

    #[test]
    fn test_replace_keeps_neighbours() {
        let doc = Document::new(format!("a{}b{}c", SCROLL_BREAK, SCROLL_BREAK));
        let updated = doc.replace(c("1.1.1/1.1.1/1.1.2"), "longer middle").unwrap();
        let texts: Vec<&str> = updated.scrolls().iter().map(|s| s.text).collect();
        assert_eq!(texts, vec!["a", "longer middle", "c"]);
    }

    #[test]
    fn test_replace_with_empty_text_removes_scroll() {
        let doc = Document::new(format!("a{}b", SCROLL_BREAK));
        let updated = doc.replace(c("1.1.1/1.1.1/1.1.2"), "").unwrap();
        assert_eq!(updated.raw(), "a");
        assert_eq!(doc.remove(c("1.1.1/1.1.1/1.1.2")), updated);
    }

    #[test]
    fn test_remove_missing_scroll_normalizes_only() {
        let doc = Document::new(format!("{}x", SCROLL_BREAK));
        let updated = doc.remove(c("9.9.9/9.9.9/9.9.9"));
        assert_eq!(updated.select(c("1.1.1/1.1.1/1.1.2")), Some("x"));
    }

    #[test]
    fn test_rejects_reserved_delimiters_in_text() {
        let doc = Document::new("a");
        let result = doc.replace(Coordinate::ORIGIN, &format!("x{}y", BOOK_BREAK));
        assert!(matches!(result, Err(PhextError::ReservedDelimiter(BOOK_BREAK))));
        assert!(doc.append(Coordinate::ORIGIN, &format!("{}", LIBRARY_BREAK)).is_err());
    }

    #[test]
    fn test_normalize_keeps_scrolls() {
        let doc = Document::new(format!(
            "{s}{s}x{sec}{s}{s}{ch}y{s}",
            s = SCROLL_BREAK,
            sec = SECTION_BREAK,
            ch = CHAPTER_BREAK
        ));
        let normalized = doc.normalize();
        assert!(normalized.raw().len() <= doc.raw().len());
        assert_eq!(normalized.scrolls(), doc.scrolls());
    }
}
