//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for
//! phext operations, whatever UI sits on top.
//!
//! The facade:
//! - **Dispatches** to the matching `commands::*::run`
//! - **Normalizes inputs** (blank labels become the configured default,
//!   textual coordinates become [`Coordinate`]s)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and holds no business logic. Partitioning and
//! serialization live in the document core; storage lives behind
//! [`DataStore`].
//!
//! `PhextApi<S: DataStore>` runs as `PhextApi<FileStore>` in production and
//! `PhextApi<InMemoryStore>` in tests.

use crate::commands;
use crate::config::PhextConfig;
use crate::coordinate::{Axis, Coordinate};
use crate::error::{PhextError, Result};
use crate::store::DataStore;
use std::path::Path;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{
    CmdMessage, CmdResult, ListedScroll, MessageLevel, PhextPaths, SelectedScroll, TocEntry,
};

/// The main API facade for phext operations.
pub struct PhextApi<S: DataStore> {
    store: S,
    paths: commands::PhextPaths,
    config: PhextConfig,
}

impl<S: DataStore> PhextApi<S> {
    pub fn new(store: S, paths: commands::PhextPaths, config: PhextConfig) -> Self {
        Self {
            store,
            paths,
            config,
        }
    }

    pub fn config(&self) -> &PhextConfig {
        &self.config
    }

    /// The label an operation will act on.
    pub fn resolve_label(&self, label: Option<&str>) -> String {
        self.config.resolve_label(label)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn select(
        &self,
        label: Option<&str>,
        coordinate: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let label = self.resolve_label(label);
        commands::select::run(&self.store, &label, coordinate.map(Coordinate::from_address))
    }

    pub fn insert(
        &mut self,
        label: Option<&str>,
        coordinate: Option<&str>,
        text: &str,
    ) -> Result<commands::CmdResult> {
        let label = self.resolve_label(label);
        commands::insert::run(
            &mut self.store,
            &label,
            coordinate.map(Coordinate::from_address),
            text,
        )
    }

    pub fn update(
        &mut self,
        label: Option<&str>,
        coordinate: Option<&str>,
        text: &str,
    ) -> Result<commands::CmdResult> {
        let label = self.resolve_label(label);
        commands::update::run(
            &mut self.store,
            &label,
            coordinate.map(Coordinate::from_address),
            text,
        )
    }

    pub fn delete(
        &mut self,
        label: Option<&str>,
        coordinate: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let label = self.resolve_label(label);
        commands::delete::run(&mut self.store, &label, coordinate.map(Coordinate::from_address))
    }

    pub fn list(&self, label: Option<&str>) -> Result<commands::CmdResult> {
        let label = self.resolve_label(label);
        commands::list::run(&self.store, &label)
    }

    pub fn goto(&mut self, label: Option<&str>, coordinate: &str) -> Result<commands::CmdResult> {
        let label = self.resolve_label(label);
        commands::goto::run(&mut self.store, &label, Coordinate::from_address(coordinate))
    }

    /// Sets one axis of the current coordinate, keeping the others.
    pub fn jump(
        &mut self,
        label: Option<&str>,
        axis: &str,
        value: u32,
    ) -> Result<commands::CmdResult> {
        let axis: Axis = axis.parse().map_err(PhextError::Api)?;
        let label = self.resolve_label(label);
        let current = self.current_coordinate(&label)?;
        commands::goto::run(&mut self.store, &label, current.with(axis, value))
    }

    /// Steps one unit along `axis`, resetting finer axes.
    pub fn step(
        &mut self,
        label: Option<&str>,
        axis: &str,
        forward: bool,
    ) -> Result<commands::CmdResult> {
        let axis: Axis = axis.parse().map_err(PhextError::Api)?;
        let label = self.resolve_label(label);
        let current = self.current_coordinate(&label)?;
        let target = if forward {
            current.next(axis)
        } else {
            current.previous(axis)
        };
        commands::goto::run(&mut self.store, &label, target)
    }

    pub fn raw(&self, label: Option<&str>) -> Result<commands::CmdResult> {
        let label = self.resolve_label(label);
        commands::raw::run(&self.store, &label)
    }

    pub fn normalize(&mut self, label: Option<&str>) -> Result<commands::CmdResult> {
        let label = self.resolve_label(label);
        commands::normalize::run(&mut self.store, &label)
    }

    pub fn import(&mut self, label: Option<&str>, path: &Path) -> Result<commands::CmdResult> {
        let label = self.resolve_label(label);
        commands::import::run(&mut self.store, &label, path)
    }

    pub fn export(&self, label: Option<&str>, path: &Path) -> Result<commands::CmdResult> {
        let label = self.resolve_label(label);
        commands::export::run(&self.store, &label, path)
    }

    /// Replaces one scroll with a file's contents.
    pub fn push(
        &mut self,
        label: Option<&str>,
        coordinate: Option<&str>,
        path: &Path,
    ) -> Result<commands::CmdResult> {
        let label = self.resolve_label(label);
        commands::push::run(
            &mut self.store,
            &label,
            coordinate.map(Coordinate::from_address),
            path,
        )
    }

    /// Writes one scroll to a file.
    pub fn pull(
        &self,
        label: Option<&str>,
        coordinate: Option<&str>,
        path: &Path,
    ) -> Result<commands::CmdResult> {
        let label = self.resolve_label(label);
        commands::pull::run(&self.store, &label, coordinate.map(Coordinate::from_address), path)
    }

    pub fn slurp(
        &mut self,
        label: Option<&str>,
        coordinate: Option<&str>,
        dir: &Path,
    ) -> Result<commands::CmdResult> {
        let label = self.resolve_label(label);
        commands::slurp::run(
            &mut self.store,
            &label,
            coordinate.map(Coordinate::from_address),
            dir,
        )
    }

    pub fn json_export(
        &self,
        label: Option<&str>,
        path: Option<&Path>,
    ) -> Result<commands::CmdResult> {
        let label = self.resolve_label(label);
        commands::json_export::run(&self.store, &label, path)
    }

    pub fn toc(&self, label: Option<&str>) -> Result<commands::CmdResult> {
        let label = self.resolve_label(label);
        commands::toc::run(&self.store, &label)
    }

    pub fn phexts(&self) -> Result<commands::CmdResult> {
        commands::phexts::run(&self.store)
    }

    pub fn remove(&mut self, label: Option<&str>) -> Result<commands::CmdResult> {
        let label = self.resolve_label(label);
        commands::remove::run(&mut self.store, &label)
    }

    pub fn config_action(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let result = commands::config::run(&self.paths, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    /// Where a label's raw text lives in the backing store.
    pub fn phext_path(&self, label: Option<&str>) -> Result<std::path::PathBuf> {
        let label = self.resolve_label(label);
        self.store.phext_path(&label)
    }

    fn current_coordinate(&self, label: &str) -> Result<Coordinate> {
        match self.store.get_phext(label) {
            Ok(phext) => Ok(phext.metadata.coordinate),
            Err(PhextError::PhextNotFound(_)) => Ok(Coordinate::ORIGIN),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn make_api() -> PhextApi<InMemoryStore> {
        PhextApi::new(
            InMemoryStore::new(),
            commands::PhextPaths::new(PathBuf::from("/tmp/phext-api-test")),
            PhextConfig::default(),
        )
    }

    #[test]
    fn test_blank_label_uses_default() {
        let mut api = make_api();
        api.insert(Some(" "), None, "hello").unwrap();

        let listed = api.phexts().unwrap().listed_phexts;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].label, "holiday");
    }

    #[test]
    fn test_coordinates_are_parsed_leniently() {
        let mut api = make_api();
        api.insert(None, Some("1.1.1/1.1.1/1.1.x"), "origin").unwrap();

        let selected = api.select(None, Some("1.1.1/1.1.1/1.1.1")).unwrap().selected.unwrap();
        assert_eq!(selected.text.as_deref(), Some("origin"));
    }

    #[test]
    fn test_select_without_coordinate_uses_current() {
        let mut api = make_api();
        api.insert(Some("doc"), Some("1.1.1/1.1.1/1.1.2"), "second").unwrap();

        let selected = api.select(Some("doc"), None).unwrap().selected.unwrap();
        assert_eq!(selected.coordinate.to_string(), "1.1.1/1.1.1/1.1.2");
        assert_eq!(selected.text.as_deref(), Some("second"));
    }

    #[test]
    fn test_jump_changes_one_axis() {
        let mut api = make_api();
        api.goto(Some("doc"), "1.2.3/4.5.6/7.8.9").unwrap();
        api.jump(Some("doc"), "volume", 9).unwrap();

        let selected = api.select(Some("doc"), None).unwrap().selected.unwrap();
        assert_eq!(selected.coordinate.to_string(), "1.2.3/4.9.6/7.8.9");
    }

    #[test]
    fn test_step_moves_and_resets_finer_axes() {
        let mut api = make_api();
        api.goto(Some("doc"), "1.1.1/1.1.1/2.3.4").unwrap();
        api.step(Some("doc"), "chapter", true).unwrap();
        let at = api.select(Some("doc"), None).unwrap().selected.unwrap().coordinate;
        assert_eq!(at.to_string(), "1.1.1/1.1.1/3.1.1");

        api.step(Some("doc"), "chapter", false).unwrap();
        let at = api.select(Some("doc"), None).unwrap().selected.unwrap().coordinate;
        assert_eq!(at.to_string(), "1.1.1/1.1.1/2.1.1");
    }

    #[test]
    fn test_push_then_pull_round_trips_one_scroll() {
        let dir = tempfile::TempDir::new().unwrap();
        let source = dir.path().join("in.txt");
        let target = dir.path().join("out.txt");
        std::fs::write(&source, "pushed text").unwrap();

        let mut api = make_api();
        api.insert(Some("doc"), None, "origin").unwrap();
        api.push(Some("doc"), Some("1.1.1/1.1.1/1.2.1"), &source).unwrap();
        api.pull(Some("doc"), Some("1.1.1/1.1.1/1.2.1"), &target).unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "pushed text");
        let toc = api.toc(Some("doc")).unwrap().toc;
        assert_eq!(toc.len(), 2);
        assert_eq!(toc[1].heading, "pushed text");
    }

    #[test]
    fn test_json_export_without_path_returns_json() {
        let mut api = make_api();
        api.insert(None, None, "hello").unwrap();
        let json = api.json_export(None, None).unwrap().raw.unwrap();
        assert!(json.contains("\"1.1.1/1.1.1/1.1.1\": \"hello\""));
    }

    #[test]
    fn test_unknown_axis_is_an_error() {
        let mut api = make_api();
        assert!(matches!(
            api.jump(Some("doc"), "page", 2),
            Err(PhextError::Api(_))
        ));
    }
}
