use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use std::fs;
use std::path::Path;

/// Renders the non-empty scrolls as a JSON object keyed by coordinate, in
/// document order. Written to `path` when given, returned as raw otherwise.
pub fn run<S: DataStore>(store: &S, label: &str, path: Option<&Path>) -> Result<CmdResult> {
    let phext = store.get_phext(label)?;
    let document = phext.document();
    let json = serde_json::to_string_pretty(&document.partition().to_map())?;

    match path {
        Some(path) => {
            fs::write(path, &json)?;
            let mut result = CmdResult::default().with_paths(vec![path.to_path_buf()]);
            result.add_message(CmdMessage::success(format!(
                "Wrote {} bytes to {}",
                json.len(),
                path.display()
            )));
            Ok(result)
        }
        None => Ok(CmdResult::default().with_raw(json)),
    }
}
