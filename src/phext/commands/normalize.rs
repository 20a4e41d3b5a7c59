use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Rewrites a document in canonical form, dropping empty structure.
pub fn run<S: DataStore>(store: &mut S, label: &str) -> Result<CmdResult> {
    let mut phext = store.get_phext(label)?;
    let before = phext.raw.len();
    let normalized = phext.document().normalize();

    let mut result = CmdResult::default();
    if normalized.raw() == phext.raw {
        result.add_message(CmdMessage::info(format!("'{}' is already normalized", label)));
        return Ok(result);
    }

    phext.set_document(normalized);
    store.save_phext(&phext)?;
    result.add_message(CmdMessage::success(format!(
        "Normalized '{}': {} -> {} bytes",
        label,
        before,
        phext.raw.len()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_strips_empty_structure() {
        let mut fixture = StoreFixture::new().with_phext("doc", "\x17\x18\x17x\x17\x17");
        let result = run(&mut fixture.store, "doc").unwrap();

        assert_eq!(fixture.store.get_phext("doc").unwrap().raw, "\x18\x17x");
        assert_eq!(result.messages[0].content, "Normalized 'doc': 6 -> 3 bytes");
    }

    #[test]
    fn test_canonical_document_is_untouched() {
        let mut fixture = StoreFixture::new().with_phext("doc", "a\x17b");
        let result = run(&mut fixture.store, "doc").unwrap();
        assert!(result.messages[0].content.contains("already normalized"));
    }
}
