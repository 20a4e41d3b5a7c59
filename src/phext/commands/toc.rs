use crate::commands::{CmdMessage, CmdResult, TocEntry};
use crate::error::Result;
use crate::store::DataStore;

/// One entry per non-empty scroll: where it is, how big it is, and its
/// first line as a heading.
pub fn run<S: DataStore>(store: &S, label: &str) -> Result<CmdResult> {
    let phext = store.get_phext(label)?;
    let document = phext.document();
    let entries: Vec<TocEntry> = document
        .scrolls()
        .iter()
        .map(|scroll| TocEntry {
            coordinate: scroll.coordinate,
            heading: scroll.text.lines().next().unwrap_or_default().trim().to_string(),
            lines: scroll.line_count(),
            bytes: scroll.text.len(),
        })
        .collect();

    let mut result = CmdResult::default();
    if entries.is_empty() {
        result.add_message(CmdMessage::info(format!("'{}' has no scrolls yet", label)));
    }
    Ok(result.with_toc(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_toc_lists_headings_and_sizes() {
        let fixture =
            StoreFixture::new().with_phext("doc", "  Title one \nbody\x18\x17Second\n\nmore\nlines");
        let toc = run(&fixture.store, "doc").unwrap().toc;

        assert_eq!(toc.len(), 2);
        assert_eq!(toc[0].coordinate.to_string(), "1.1.1/1.1.1/1.1.1");
        assert_eq!(toc[0].heading, "Title one");
        assert_eq!(toc[0].lines, 2);
        assert_eq!(toc[1].coordinate.to_string(), "1.1.1/1.1.1/1.2.2");
        assert_eq!(toc[1].heading, "Second");
        assert_eq!(toc[1].lines, 4);
        assert_eq!(toc[1].bytes, 18);
    }

    #[test]
    fn test_toc_of_empty_document() {
        let fixture = StoreFixture::new().with_phext("doc", "");
        let result = run(&fixture.store, "doc").unwrap();
        assert!(result.toc.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
