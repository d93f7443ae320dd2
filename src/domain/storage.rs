use super::HistoryEntry;
use crate::error::Result;

pub trait Storage: Send + Sync {
    fn load_history(&self) -> Result<Option<Vec<HistoryEntry>>>;
    fn save_history(&self, entries: &[HistoryEntry]) -> Result<()>;
}

pub struct StorageKeys;

impl StorageKeys {
    pub const COMPARE_HISTORY: &'static str = "edupath.compare.history";
}
