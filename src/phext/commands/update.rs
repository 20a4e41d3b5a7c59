use crate::commands::{CmdMessage, CmdResult};
use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::{load_or_create, target_coordinate};

/// Overwrites a scroll. The whole document is re-flattened and saved.
pub fn run<S: DataStore>(
    store: &mut S,
    label: &str,
    coordinate: Option<Coordinate>,
    text: &str,
) -> Result<CmdResult> {
    let mut phext = load_or_create(store, label)?;
    let target = target_coordinate(&phext, coordinate);

    let updated = phext.document().replace(target, text)?;
    phext.set_document(updated);
    phext.metadata.coordinate = target;
    store.save_phext(&phext)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Updated {} bytes at {}",
        text.len(),
        target
    )));
    Ok(result)
}
