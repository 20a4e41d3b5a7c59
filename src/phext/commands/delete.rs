use crate::commands::{CmdMessage, CmdResult};
use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::target_coordinate;

/// Truncates a scroll to nothing.
pub fn run<S: DataStore>(
    store: &mut S,
    label: &str,
    coordinate: Option<Coordinate>,
) -> Result<CmdResult> {
    let mut phext = store.get_phext(label)?;
    let target = target_coordinate(&phext, coordinate);
    let document = phext.document();
    let removed = document.select(target).map(str::len).unwrap_or(0);

    let updated = document.remove(target);
    phext.set_document(updated);
    store.save_phext(&phext)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Removed {} bytes at {}",
        removed, target
    )));
    Ok(result)
}
