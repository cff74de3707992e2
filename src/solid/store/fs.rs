use super::JournalStore;
use crate::error::{Result, SolidError};
use crate::journal::Journal;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

const JOURNAL_FILENAME: &str = "journal.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn journal_path(&self) -> PathBuf {
        self.root.join(JOURNAL_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(SolidError::Io)?;
        }
        Ok(())
    }
}

impl JournalStore for FileStore {
    fn load(&self) -> Result<Journal> {
        let path = self.journal_path();
        if !path.exists() {
            debug!(path = %path.display(), "no journal file yet");
            return Ok(Journal::new());
        }

        let content = fs::read_to_string(&path).map_err(SolidError::Io)?;
        let journal: Journal =
            serde_json::from_str(&content).map_err(SolidError::Serialization)?;
        debug!(path = %path.display(), entries = journal.len(), "loaded journal");
        Ok(journal)
    }

    fn save(&mut self, journal: &Journal) -> Result<()> {
        self.ensure_dir()?;
        let path = self.journal_path();
        let content = serde_json::to_string_pretty(journal).map_err(SolidError::Serialization)?;
        fs::write(&path, content).map_err(SolidError::Io)?;
        debug!(path = %path.display(), entries = journal.len(), "saved journal");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_without_file_gives_empty_journal() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("data"));

        let journal = store.load().unwrap();
        assert!(journal.is_empty());
        assert_eq!(journal.count(), 0);
    }

    #[test]
    fn save_creates_directory_and_roundtrips() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("data"));

        let mut journal = Journal::new();
        journal.add_entry("first");
        journal.add_entry("second");
        journal.remove_entry(0).unwrap();
        store.save(&journal).unwrap();

        assert!(store.journal_path().exists());
        let loaded = store.load().unwrap();
        assert_eq!(loaded, journal);
        assert_eq!(loaded.count(), 2);
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        fs::write(store.journal_path(), "not json").unwrap();

        assert!(matches!(store.load(), Err(SolidError::Serialization(_))));
    }
}
