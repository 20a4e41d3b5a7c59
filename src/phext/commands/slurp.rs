use crate::commands::{CmdMessage, CmdResult, ListedScroll};
use crate::coordinate::Coordinate;
use crate::error::{PhextError, Result};
use crate::store::DataStore;
use log::debug;
use std::fs;
use std::path::Path;

use super::helpers::{load_or_create, target_coordinate};

/// Loads every text file of `dir` into consecutive scrolls, starting at the
/// given (or current) coordinate. Files go in name order; subdirectories and
/// files that are not plain text are skipped with a warning.
pub fn run<S: DataStore>(
    store: &mut S,
    label: &str,
    coordinate: Option<Coordinate>,
    dir: &Path,
) -> Result<CmdResult> {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .map_err(|e| PhextError::Api(format!("Failed to read {}: {}", dir.display(), e)))?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    entries.sort();

    let mut phext = load_or_create(store, label)?;
    let start = target_coordinate(&phext, coordinate);
    let mut document = phext.document();
    let mut result = CmdResult::default();
    let mut placed = Vec::new();
    let mut next = Some(start);

    for path in entries {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let text = match fs::read_to_string(&path) {
            Ok(text) if document.delimiters().find_reserved(&text).is_none() => text,
            _ => {
                result.add_message(CmdMessage::warning(format!("Skipped {} (not plain text)", name)));
                continue;
            }
        };
        let at = next.ok_or_else(|| {
            PhextError::Api(format!("No scroll positions left for {}", name))
        })?;

        debug!("slurping {} into {}", name, at);
        document = document.replace(at, &text)?;
        placed.push(ListedScroll {
            coordinate: at,
            text: name,
        });
        next = at.successor();
    }

    phext.set_document(document);
    phext.metadata.coordinate = start;
    store.save_phext(&phext)?;

    result.add_message(CmdMessage::success(format!(
        "Slurped {} files from {} into '{}' at {}",
        placed.len(),
        dir.display(),
        label,
        start
    )));
    Ok(result.with_listed_scrolls(placed))
}
