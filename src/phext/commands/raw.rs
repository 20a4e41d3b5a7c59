use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, label: &str) -> Result<CmdResult> {
    let phext = store.get_phext(label)?;
    Ok(CmdResult::default().with_raw(phext.raw))
}
