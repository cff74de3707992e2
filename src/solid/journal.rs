//! # Journal
//!
//! An ordered list of numbered text entries. The journal only manages its
//! entries; writing it anywhere is the job of
//! [`PersistenceManager`](crate::persistence::PersistenceManager) and the
//! [stores](crate::store).
//!
//! Entry numbers come from a counter that only ever goes up. Removing an
//! entry leaves a gap; the remaining entries keep their numbers and the next
//! entry still gets a fresh one.

use crate::error::{Result, SolidError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub number: u64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.number, self.text)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<Entry>,
    count: u64,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry and returns it.
    pub fn add_entry(&mut self, text: impl Into<String>) -> &Entry {
        self.count += 1;
        self.entries.push(Entry {
            number: self.count,
            text: text.into(),
            created_at: Utc::now(),
        });
        &self.entries[self.entries.len() - 1]
    }

    /// Removes the entry at the 0-based position `pos` and returns it.
    pub fn remove_entry(&mut self, pos: usize) -> Result<Entry> {
        if pos >= self.entries.len() {
            return Err(SolidError::EntryNotFound(pos));
        }
        Ok(self.entries.remove(pos))
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The number the last added entry received.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry. The counter is kept so numbers are never reused.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}
