use crate::commands::{CmdMessage, CmdResult, ListedScroll};
use crate::error::Result;
use crate::store::DataStore;

/// Every non-empty scroll, in document order.
pub fn run<S: DataStore>(store: &S, label: &str) -> Result<CmdResult> {
    let phext = store.get_phext(label)?;
    let document = phext.document();
    let listed: Vec<ListedScroll> = document
        .scrolls()
        .into_iter()
        .map(ListedScroll::from)
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(format!("'{}' has no scrolls yet", label)));
    }
    Ok(result.with_listed_scrolls(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_lists_scrolls_in_document_order() {
        let fixture = StoreFixture::new().with_phext("doc", "a\x17\x17c\x01z");
        let result = run(&fixture.store, "doc").unwrap();

        let listed: Vec<(String, &str)> = result
            .listed_scrolls
            .iter()
            .map(|s| (s.coordinate.to_string(), s.text.as_str()))
            .collect();
        assert_eq!(
            listed,
            vec![
                ("1.1.1/1.1.1/1.1.1".to_string(), "a"),
                ("1.1.1/1.1.1/1.1.3".to_string(), "c"),
                ("2.1.1/1.1.1/1.1.1".to_string(), "z"),
            ]
        );
    }

    #[test]
    fn test_empty_document_lists_nothing() {
        let fixture = StoreFixture::new().with_phext("doc", "");
        let result = run(&fixture.store, "doc").unwrap();
        assert!(result.listed_scrolls.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
