use super::DataStore;
use crate::error::{PhextError, Result};
use crate::model::{Metadata, StoredPhext};
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    phexts: HashMap<String, StoredPhext>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn save_phext(&mut self, phext: &StoredPhext) -> Result<()> {
        self.phexts
            .insert(phext.metadata.label.clone(), phext.clone());
        Ok(())
    }

    fn get_phext(&self, label: &str) -> Result<StoredPhext> {
        self.phexts
            .get(label)
            .cloned()
            .ok_or_else(|| PhextError::PhextNotFound(label.to_string()))
    }

    fn list_phexts(&self) -> Result<Vec<Metadata>> {
        let mut listed: Vec<Metadata> = self
            .phexts
            .values()
            .map(|p| p.metadata.clone())
            .collect();
        listed.sort_by(|a, b| a.label.cmp(&b.label));
        Ok(listed)
    }

    fn delete_phext(&mut self, label: &str) -> Result<()> {
        if self.phexts.remove(label).is_none() {
            return Err(PhextError::PhextNotFound(label.to_string()));
        }
        Ok(())
    }

    fn phext_path(&self, label: &str) -> Result<PathBuf> {
        let phext = self.get_phext(label)?;
        Ok(PathBuf::from(format!("memory://phext-{}", phext.metadata.id)))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_phext(mut self, label: &str, raw: &str) -> Self {
            let phext = StoredPhext::new(label.to_string(), raw.to_string());
            self.store.save_phext(&phext).unwrap();
            self
        }
    }
}
