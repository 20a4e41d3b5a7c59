use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let listed = store.list_phexts()?;
    Ok(CmdResult::default().with_listed_phexts(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_lists_labels_in_order() {
        let fixture = StoreFixture::new()
            .with_phext("zeta", "z")
            .with_phext("alpha", "a");
        let labels: Vec<String> = run(&fixture.store)
            .unwrap()
            .listed_phexts
            .into_iter()
            .map(|m| m.label)
            .collect();
        assert_eq!(labels, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_empty_store_lists_nothing() {
        let fixture = StoreFixture::new();
        assert!(run(&fixture.store).unwrap().listed_phexts.is_empty());
    }
}
