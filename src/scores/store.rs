//! Score store for loading and saving the high-score table

use super::types::*;
use std::fs;
use std::path::{Path, PathBuf};

const SCORE_FILE: &str = "highscores.json";

pub struct ScoreStore {
    directory: PathBuf,
}

impl ScoreStore {
    /// Creates a store in the given directory, creating it if needed.
    pub fn new(directory: impl AsRef<Path>) -> Result<Self, ScoreError> {
        let directory = directory.as_ref().to_path_buf();

        if !directory.exists() {
            fs::create_dir_all(&directory)?;
        }

        Ok(ScoreStore { directory })
    }

    /// `<data dir>/starfall`, or `./saves` when the platform has none.
    pub fn default_directory() -> PathBuf {
        dirs::data_dir()
            .map(|p| p.join("starfall"))
            .unwrap_or_else(|| PathBuf::from("./saves"))
    }

    pub fn path(&self) -> PathBuf {
        self.directory.join(SCORE_FILE)
    }

    /// Loads the table; a missing file is an empty table.
    pub fn load(&self) -> Result<HighScoreTable, ScoreError> {
        let path = self.path();
        if !path.exists() {
            return Ok(HighScoreTable::default());
        }

        let json = fs::read_to_string(&path)?;
        let table: HighScoreTable = serde_json::from_str(&json)?;

        if table.version > CURRENT_SCORE_VERSION {
            return Err(ScoreError::InvalidVersion(table.version));
        }

        Ok(table)
    }

    pub fn save(&self, table: &HighScoreTable) -> Result<PathBuf, ScoreError> {
        let path = self.path();
        let json = serde_json::to_string_pretty(table)?;
        fs::write(&path, json)?;

        log::info!("High scores saved to: {}", path.display());

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> ScoreStore {
        let dir = std::env::temp_dir().join(format!("starfall_test_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        ScoreStore::new(&dir).unwrap()
    }

    #[test]
    fn test_missing_file_loads_empty_table() {
        let store = temp_store("missing");
        assert_eq!(store.load().unwrap(), HighScoreTable::default());
    }

    #[test]
    fn test_saved_table_loads_back() {
        let store = temp_store("save_load");
        let mut table = HighScoreTable::default();
        table.record(9, 19);
        table.record(4, 24);

        store.save(&table).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded.best(), Some(9));
        assert_eq!(loaded.entries.len(), 2);
        assert_eq!(loaded.entries[1].stars_collected, 24);
    }

    #[test]
    fn test_newer_version_is_rejected() {
        let store = temp_store("version");
        fs::write(store.path(), r#"{ "version": 99, "entries": [] }"#).unwrap();

        assert!(matches!(store.load(), Err(ScoreError::InvalidVersion(99))));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let store = temp_store("corrupt");
        fs::write(store.path(), "not json").unwrap();

        assert!(matches!(store.load(), Err(ScoreError::SerializationError(_))));
    }
}
