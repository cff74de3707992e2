//! # API Facade
//!
//! The single entry point for every operation, whatever the UI. It dispatches
//! to `commands/*.rs` and returns `Result<CmdResult>`; it does no printing and
//! holds no logic of its own.
//!
//! `SolidApi<S: JournalStore>` is generic over the journal store:
//! - Production: `SolidApi<FileStore>`
//! - Testing: `SolidApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::store::JournalStore;
use std::path::{Path, PathBuf};

pub struct SolidApi<S: JournalStore> {
    store: S,
    paths: commands::SolidPaths,
}

impl<S: JournalStore> SolidApi<S> {
    pub fn new(store: S, paths: commands::SolidPaths) -> Self {
        Self { store, paths }
    }

    pub fn add_entry(&mut self, text: &str) -> Result<commands::CmdResult> {
        commands::journal::add(&mut self.store, text)
    }

    pub fn remove_entry(&mut self, pos: usize) -> Result<commands::CmdResult> {
        commands::journal::remove(&mut self.store, pos)
    }

    pub fn show_journal(&self) -> Result<commands::CmdResult> {
        commands::journal::show(&self.store)
    }

    pub fn clear_journal(&mut self) -> Result<commands::CmdResult> {
        commands::journal::clear(&mut self.store)
    }

    pub fn export_journal(&self, target: Option<PathBuf>) -> Result<commands::CmdResult> {
        commands::journal::save(&self.store, &self.paths, target)
    }

    pub fn filter_products(
        &self,
        catalog: Option<&Path>,
        query: &ProductQuery,
    ) -> Result<commands::CmdResult> {
        commands::products::run(catalog, query)
    }

    pub fn check_shapes(&self, width: u32, height: u32, side: u32) -> Result<commands::CmdResult> {
        commands::shapes::run(width, height, side)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::products::ProductQuery;
pub use commands::{CmdMessage, CmdResult, MessageLevel, ShapeReport, SolidPaths};
