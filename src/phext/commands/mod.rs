use crate::config::PhextConfig;
use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::model::Metadata;
use crate::partition::Scroll;
use std::fs;
use std::path::PathBuf;

pub mod config;
pub mod delete;
pub mod export;
pub mod goto;
pub mod helpers;
pub mod import;
pub mod init;
pub mod insert;
pub mod json_export;
pub mod list;
pub mod normalize;
pub mod phexts;
pub mod pull;
pub mod push;
pub mod raw;
pub mod remove;
pub mod select;
pub mod slurp;
pub mod toc;
pub mod update;

#[derive(Debug, Clone)]
pub struct PhextPaths {
    pub root: PathBuf,
}

impl PhextPaths {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn ensure_root(&self) -> Result<PathBuf> {
        fs::create_dir_all(&self.root)?;
        Ok(self.root.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// An owned scroll, detached from the document it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedScroll {
    pub coordinate: Coordinate,
    pub text: String,
}

impl From<Scroll<'_>> for ListedScroll {
    fn from(scroll: Scroll<'_>) -> Self {
        Self {
            coordinate: scroll.coordinate,
            text: scroll.text.to_string(),
        }
    }
}

/// Result of addressing one coordinate. `text` is `None` when the document
/// has no scroll there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedScroll {
    pub coordinate: Coordinate,
    pub text: Option<String>,
}

/// Table-of-contents line for one scroll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub coordinate: Coordinate,
    pub heading: String,
    pub lines: usize,
    pub bytes: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_scrolls: Vec<ListedScroll>,
    pub selected: Option<SelectedScroll>,
    pub listed_phexts: Vec<Metadata>,
    pub toc: Vec<TocEntry>,
    pub raw: Option<String>,
    pub paths: Vec<PathBuf>,
    pub config: Option<PhextConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_scrolls(mut self, scrolls: Vec<ListedScroll>) -> Self {
        self.listed_scrolls = scrolls;
        self
    }

    pub fn with_selected(mut self, selected: SelectedScroll) -> Self {
        self.selected = Some(selected);
        self
    }

    pub fn with_listed_phexts(mut self, phexts: Vec<Metadata>) -> Self {
        self.listed_phexts = phexts;
        self
    }

    pub fn with_toc(mut self, toc: Vec<TocEntry>) -> Self {
        self.toc = toc;
        self
    }

    pub fn with_raw(mut self, raw: String) -> Self {
        self.raw = Some(raw);
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_config(mut self, config: PhextConfig) -> Self {
        self.config = Some(config);
        self
    }
}
