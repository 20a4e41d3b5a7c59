use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use std::fs;
use std::path::Path;

/// Writes the raw document to `path`.
pub fn run<S: DataStore>(store: &S, label: &str, path: &Path) -> Result<CmdResult> {
    let phext = store.get_phext(label)?;
    fs::write(path, &phext.raw)?;

    let mut result = CmdResult::default().with_paths(vec![path.to_path_buf()]);
    result.add_message(CmdMessage::success(format!(
        "Wrote {} bytes to {}",
        phext.raw.len(),
        path.display()
    )));
    Ok(result)
}
