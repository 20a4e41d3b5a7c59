use crate::commands::{CmdMessage, CmdResult};
use crate::coordinate::Coordinate;
use crate::error::{PhextError, Result};
use crate::store::DataStore;
use std::fs;
use std::path::Path;

use super::helpers::{load_or_create, target_coordinate};

/// Replaces one scroll with the contents of a file.
pub fn run<S: DataStore>(
    store: &mut S,
    label: &str,
    coordinate: Option<Coordinate>,
    path: &Path,
) -> Result<CmdResult> {
    let text = fs::read_to_string(path).map_err(|e| {
        PhextError::Api(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let mut phext = load_or_create(store, label)?;
    let target = target_coordinate(&phext, coordinate);
    let updated = phext.document().replace(target, &text)?;
    phext.set_document(updated);
    phext.metadata.coordinate = target;
    store.save_phext(&phext)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Pushed {} bytes from {} to {}",
        text.len(),
        path.display(),
        target
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use tempfile::TempDir;

    #[test]
    fn test_push_replaces_one_scroll() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scroll.txt");
        fs::write(&path, "from disk\nline two").unwrap();

        let mut fixture = StoreFixture::new().with_phext("doc", "keep\x17old");
        let target = Coordinate::from_address("1.1.1/1.1.1/1.1.2");
        let result = run(&mut fixture.store, "doc", Some(target), &path).unwrap();

        let phext = fixture.store.get_phext("doc").unwrap();
        assert_eq!(phext.raw, "keep\x17from disk\nline two");
        assert_eq!(phext.metadata.coordinate, target);
        assert!(result.messages[0].content.starts_with("Pushed 18 bytes from "));
    }

    #[test]
    fn test_push_rejects_files_with_delimiters() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested.phext");
        fs::write(&path, "a\x18b").unwrap();

        let mut fixture = StoreFixture::new().with_phext("doc", "keep");
        let result = run(&mut fixture.store, "doc", None, &path);
        assert!(matches!(result, Err(PhextError::ReservedDelimiter('\x18'))));
        assert_eq!(fixture.store.get_phext("doc").unwrap().raw, "keep");
    }
}
