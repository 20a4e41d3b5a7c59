//! # Storage Layer
//!
//! Documents are stored whole, one flat string per label. The [`DataStore`]
//! trait keeps the command layer independent of where that string lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - Metadata for every label in `data.json`
//!   - Raw text in `phext-{uuid}.phext`, written verbatim
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! $PHEXT_HOME/
//! ├── data.json             # label -> metadata (JSON object)
//! ├── phext-{uuid}.phext    # raw document text
//! └── config.json           # configuration
//! ```
//!
//! A store never splits one document across several files, and never
//! patches a file: saving always writes the complete new text.

use crate::error::Result;
use crate::model::{Metadata, StoredPhext};
use std::path::PathBuf;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Save a document (create or replace)
    fn save_phext(&mut self, phext: &StoredPhext) -> Result<()>;

    /// Get a document by label
    fn get_phext(&self, label: &str) -> Result<StoredPhext>;

    /// Metadata of every stored document, sorted by label
    fn list_phexts(&self) -> Result<Vec<Metadata>>;

    /// Delete a document permanently
    fn delete_phext(&mut self, label: &str) -> Result<()>;

    /// Get the file path for a document (for file-based stores)
    fn phext_path(&self, label: &str) -> Result<PathBuf>;
}
