use crate::commands::{CmdMessage, CmdResult};
use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::store::DataStore;
use std::fs;
use std::path::Path;

use super::helpers::target_coordinate;

/// Writes one scroll to a file. An absent scroll writes an empty file.
pub fn run<S: DataStore>(
    store: &S,
    label: &str,
    coordinate: Option<Coordinate>,
    path: &Path,
) -> Result<CmdResult> {
    let phext = store.get_phext(label)?;
    let target = target_coordinate(&phext, coordinate);
    let document = phext.document();
    let text = document.select(target).unwrap_or_default();
    fs::write(path, text)?;

    let mut result = CmdResult::default().with_paths(vec![path.to_path_buf()]);
    result.add_message(CmdMessage::success(format!(
        "Exported scroll at {} to {}.",
        target,
        path.display()
    )));
    Ok(result)
}
