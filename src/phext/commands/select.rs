use crate::commands::{CmdMessage, CmdResult, SelectedScroll};
use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::target_coordinate;

pub fn run<S: DataStore>(
    store: &S,
    label: &str,
    coordinate: Option<Coordinate>,
) -> Result<CmdResult> {
    let phext = store.get_phext(label)?;
    let target = target_coordinate(&phext, coordinate);
    let document = phext.document();
    let text = document.select(target).map(str::to_string);

    let mut result = CmdResult::default();
    if text.is_none() {
        result.add_message(CmdMessage::info(format!("No scroll at {}", target)));
    }
    Ok(result.with_selected(SelectedScroll {
        coordinate: target,
        text,
    }))
}
