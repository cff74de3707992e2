use crate::error::{Result, SolidError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_JOURNAL_FILE: &str = "journal.txt";

/// Configuration for solid, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SolidConfig {
    /// Where `journal save` writes when no path is given. Relative paths are
    /// resolved against the data directory.
    #[serde(default = "default_journal_file")]
    pub journal_file: String,

    /// JSON catalog used by `products` instead of the built-in sample
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

fn default_journal_file() -> String {
    DEFAULT_JOURNAL_FILE.to_string()
}

impl Default for SolidConfig {
    fn default() -> Self {
        Self {
            journal_file: default_journal_file(),
            catalog: None,
        }
    }
}

impl SolidConfig {
    pub const KEYS: [&'static str; 2] = ["journal-file", "catalog"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(SolidError::Io)?;
        let config: SolidConfig =
            serde_json::from_str(&content).map_err(SolidError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(SolidError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(SolidError::Serialization)?;
        fs::write(config_path, content).map_err(SolidError::Io)?;
        Ok(())
    }

    /// Look up a value by its user-facing key. An unset catalog reads as "".
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "journal-file" => Some(self.journal_file.clone()),
            "catalog" => Some(
                self.catalog
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    /// Set a value by its user-facing key. An empty catalog value unsets it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "journal-file" => {
                if value.trim().is_empty() {
                    return Err(SolidError::Config("journal-file cannot be empty".into()));
                }
                self.journal_file = value.to_string();
            }
            "catalog" => {
                self.catalog = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            _ => return Err(SolidError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }

    /// The export target, resolved against `data_dir` when relative.
    pub fn journal_path(&self, data_dir: &Path) -> PathBuf {
        let path = PathBuf::from(&self.journal_file);
        if path.is_absolute() {
            path
        } else {
            data_dir.join(path)
        }
    }
}
