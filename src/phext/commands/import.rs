use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PhextError, Result};
use crate::store::DataStore;
use std::fs;
use std::path::Path;

use super::helpers::load_or_create;

/// Loads a raw phext file into `label`, replacing whatever was there.
pub fn run<S: DataStore>(store: &mut S, label: &str, path: &Path) -> Result<CmdResult> {
    let raw = fs::read_to_string(path).map_err(|e| {
        PhextError::Api(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let mut phext = load_or_create(store, label)?;
    let bytes = raw.len();
    phext.raw = raw;
    phext.metadata.updated_at = chrono::Utc::now();
    store.save_phext(&phext)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {} bytes from {} into '{}'",
        bytes,
        path.display(),
        label
    )));
    Ok(result)
}
