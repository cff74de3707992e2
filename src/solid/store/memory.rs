use super::JournalStore;
use crate::error::Result;
use crate::journal::Journal;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    journal: Journal,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_journal(journal: Journal) -> Self {
        Self { journal, saves: 0 }
    }

    /// How many times [`JournalStore::save`] was called.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl JournalStore for InMemoryStore {
    fn load(&self) -> Result<Journal> {
        Ok(self.journal.clone())
    }

    fn save(&mut self, journal: &Journal) -> Result<()> {
        self.journal = journal.clone();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// A store holding a journal with the given entries, numbered from 1.
    pub fn store_with_entries(texts: &[&str]) -> InMemoryStore {
        let mut journal = Journal::new();
        for text in texts {
            journal.add_entry(*text);
        }
        InMemoryStore::with_journal(journal)
    }
}
