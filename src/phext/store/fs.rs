use super::DataStore;
use crate::error::{PhextError, Result};
use crate::model::{Metadata, StoredPhext};
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const INDEX_FILENAME: &str = "data.json";
const FILE_EXT: &str = ".phext";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn phext_filename(id: &Uuid) -> String {
        format!("phext-{}{}", id, FILE_EXT)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(PhextError::Io)?;
        }
        Ok(())
    }

    fn load_index(&self) -> Result<HashMap<String, Metadata>> {
        let data_file = self.root.join(INDEX_FILENAME);
        if !data_file.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(data_file).map_err(PhextError::Io)?;
        let index: HashMap<String, Metadata> =
            serde_json::from_str(&content).map_err(PhextError::Serialization)?;
        Ok(index)
    }

    fn save_index(&self, index: &HashMap<String, Metadata>) -> Result<()> {
        let content = serde_json::to_string_pretty(index).map_err(PhextError::Serialization)?;
        self.write_atomic(INDEX_FILENAME, &content)
    }

    /// Writes to a tmp file first, then renames over the target.
    fn write_atomic(&self, filename: &str, content: &str) -> Result<()> {
        let target = self.root.join(filename);
        let tmp = self.root.join(format!(".{}-{}.tmp", filename, Uuid::new_v4()));
        fs::write(&tmp, content).map_err(PhextError::Io)?;
        fs::rename(&tmp, &target).map_err(PhextError::Io)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn save_phext(&mut self, phext: &StoredPhext) -> Result<()> {
        self.ensure_dir()?;

        // 1. Content first, so the index never points at a missing file
        let filename = Self::phext_filename(&phext.metadata.id);
        self.write_atomic(&filename, &phext.raw)?;

        // 2. Index
        let mut index = self.load_index()?;
        let replaced = index.insert(phext.metadata.label.clone(), phext.metadata.clone());
        self.save_index(&index)?;

        // A label re-created under a new id leaves the old file behind
        if let Some(old) = replaced.filter(|old| old.id != phext.metadata.id) {
            let stale = self.root.join(Self::phext_filename(&old.id));
            if stale.exists() {
                fs::remove_file(stale).map_err(PhextError::Io)?;
            }
        }

        debug!(
            "saved {} bytes for '{}' to {}",
            phext.raw.len(),
            phext.metadata.label,
            filename
        );
        Ok(())
    }

    fn get_phext(&self, label: &str) -> Result<StoredPhext> {
        let index = self.load_index()?;
        let metadata = index
            .get(label)
            .cloned()
            .ok_or_else(|| PhextError::PhextNotFound(label.to_string()))?;

        let path = self.root.join(Self::phext_filename(&metadata.id));
        let raw = if path.exists() {
            fs::read_to_string(path).map_err(PhextError::Io)?
        } else {
            String::new()
        };

        Ok(StoredPhext { metadata, raw })
    }

    fn list_phexts(&self) -> Result<Vec<Metadata>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }
        let mut listed: Vec<Metadata> = self.load_index()?.into_values().collect();
        listed.sort_by(|a, b| a.label.cmp(&b.label));
        Ok(listed)
    }

    fn delete_phext(&mut self, label: &str) -> Result<()> {
        let mut index = self.load_index()?;
        let metadata = index
            .remove(label)
            .ok_or_else(|| PhextError::PhextNotFound(label.to_string()))?;
        self.save_index(&index)?;

        let path = self.root.join(Self::phext_filename(&metadata.id));
        if path.exists() {
            fs::remove_file(path).map_err(PhextError::Io)?;
        }
        Ok(())
    }

    fn phext_path(&self, label: &str) -> Result<PathBuf> {
        let index = self.load_index()?;
        let metadata = index
            .get(label)
            .ok_or_else(|| PhextError::PhextNotFound(label.to_string()))?;
        Ok(self.root.join(Self::phext_filename(&metadata.id)))
    }
}
