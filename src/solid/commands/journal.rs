use crate::commands::{CmdMessage, CmdResult, SolidPaths};
use crate::config::SolidConfig;
use crate::error::{Result, SolidError};
use crate::persistence::PersistenceManager;
use crate::store::JournalStore;
use std::path::PathBuf;
use tracing::debug;

pub fn add<S: JournalStore>(store: &mut S, text: &str) -> Result<CmdResult> {
    let text = text.trim();
    if text.is_empty() {
        return Err(SolidError::Api("Entry text cannot be empty".into()));
    }

    let mut journal = store.load()?;
    let entry = journal.add_entry(text).clone();
    store.save(&journal)?;
    debug!(number = entry.number, "added journal entry");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Entry added: {}", entry)));
    Ok(result.with_entries(vec![entry]))
}

pub fn remove<S: JournalStore>(store: &mut S, pos: usize) -> Result<CmdResult> {
    let mut journal = store.load()?;
    let entry = journal.remove_entry(pos)?;
    store.save(&journal)?;
    debug!(pos, number = entry.number, "removed journal entry");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Entry removed (position {}): {}",
        pos, entry
    )));
    Ok(result.with_entries(vec![entry]))
}

pub fn show<S: JournalStore>(store: &S) -> Result<CmdResult> {
    let journal = store.load()?;
    let mut result = CmdResult::default();
    if journal.is_empty() {
        result.add_message(CmdMessage::info("The journal is empty."));
    }
    Ok(result.with_entries(journal.entries().to_vec()))
}

pub fn clear<S: JournalStore>(store: &mut S) -> Result<CmdResult> {
    let mut journal = store.load()?;
    let removed = journal.len();
    journal.clear();
    store.save(&journal)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Removed {} entr{}",
        removed,
        if removed == 1 { "y" } else { "ies" }
    )));
    Ok(result)
}

/// Writes the journal as plain text to `target`, or to the configured
/// journal file when no target is given.
pub fn save<S: JournalStore>(
    store: &S,
    paths: &SolidPaths,
    target: Option<PathBuf>,
) -> Result<CmdResult> {
    let target = match target {
        Some(path) => path,
        None => SolidConfig::load(&paths.data_dir)?.journal_path(&paths.data_dir),
    };

    let journal = store.load()?;
    PersistenceManager::save_to_file(&journal, &target)?;

    let mut result = CmdResult::default();
    if journal.is_empty() {
        result.add_message(CmdMessage::warning("The journal is empty; wrote an empty file."));
    }
    result.add_message(CmdMessage::success(format!(
        "Journal saved to {}",
        target.display()
    )));
    Ok(result.with_saved_path(target))
}
