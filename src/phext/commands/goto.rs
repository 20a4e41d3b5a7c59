use crate::commands::{CmdMessage, CmdResult};
use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::load_or_create;

/// Moves the document's current coordinate.
pub fn run<S: DataStore>(store: &mut S, label: &str, coordinate: Coordinate) -> Result<CmdResult> {
    let mut phext = load_or_create(store, label)?;
    phext.metadata.coordinate = coordinate;
    store.save_phext(&phext)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Now at {}", coordinate)));
    if phext.document().select(coordinate).is_none() {
        result.add_message(CmdMessage::info("Nothing written here yet"));
    }
    Ok(result)
}
