//! # Storage Layer
//!
//! The [`JournalStore`] trait keeps the journal between runs. Commands only see
//! the trait, so they run the same against a file or memory.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage
//!   - The journal, counter included, lives in `journal.json`
//!   - The directory is created on first save
//!
//! - [`memory::InMemoryStore`]: storage for tests
//!   - No persistence
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── journal.json        # Entries and the entry counter
//! └── config.json         # SolidConfig
//! ```
//!
//! The plain-text export (`1: first entry`) is not a store format; it is
//! written by [`PersistenceManager`](crate::persistence::PersistenceManager).

use crate::error::Result;
use crate::journal::Journal;

pub mod fs;
pub mod memory;

/// Abstract interface for journal storage.
pub trait JournalStore {
    /// Load the journal, or an empty one if nothing was saved yet
    fn load(&self) -> Result<Journal>;

    /// Save the journal, replacing what was stored
    fn save(&mut self, journal: &Journal) -> Result<()>;
}
