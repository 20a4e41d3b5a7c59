use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Deletes a stored document and everything in it.
pub fn run<S: DataStore>(store: &mut S, label: &str) -> Result<CmdResult> {
    store.delete_phext(label)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Removed '{}'", label)));
    Ok(result)
}
