use crate::domain::storage::{Storage, StorageKeys};
use crate::domain::HistoryEntry;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Clone)]
pub struct FileSystemStore {
    data_dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn get_path_for_key(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }

    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    fn write_json_file<T: serde::Serialize + ?Sized>(&self, key: &str, data: &T) -> Result<()> {
        self.ensure_dir(&self.data_dir)?;

        let path = self.get_path_for_key(key);
        let content = serde_json::to_string_pretty(data)?;
        fs::write(&path, content)?;
        debug!("Wrote {:?}", path);
        Ok(())
    }

    fn read_json_file<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.get_path_for_key(key);
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(Some(serde_json::from_str(&content)?))
        } else {
            Ok(None)
        }
    }
}

impl Storage for FileSystemStore {
    fn load_history(&self) -> Result<Option<Vec<HistoryEntry>>> {
        self.read_json_file(StorageKeys::COMPARE_HISTORY)
    }

    fn save_history(&self, entries: &[HistoryEntry]) -> Result<()> {
        self.write_json_file(StorageKeys::COMPARE_HISTORY, entries)
    }
}
