use crate::commands::{CmdMessage, CmdResult, PhextPaths};
use crate::error::Result;

pub fn run(paths: &PhextPaths) -> Result<CmdResult> {
    let dir = paths.ensure_root()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized phext store at {}",
        dir.display()
    )));
    Ok(result)
}
