use crate::error::Result;
use crate::journal::Journal;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Writes journals out as plain text.
///
/// Kept apart from [`Journal`] so the journal does not need to know where or
/// how it is stored.
pub struct PersistenceManager;

impl PersistenceManager {
    /// Writes the rendered journal to `path`, replacing any existing file.
    pub fn save_to_file<P: AsRef<Path>>(journal: &Journal, path: P) -> Result<()> {
        let path = path.as_ref();
        debug!(path = %path.display(), entries = journal.len(), "writing journal text");
        fs::write(path, journal.to_string())?;
        Ok(())
    }
}
