use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

pub const DEFAULT_HISTORY_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub ids: Vec<String>,
    /// Milliseconds since the Unix epoch.
    pub ts: i64,
}

/// Saved comparisons, newest first, never longer than `limit`.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentComparisons {
    entries: VecDeque<HistoryEntry>,
    limit: usize,
}

impl RecentComparisons {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Rebuilds the buffer from persisted entries, dropping whatever no
    /// longer fits.
    pub fn from_entries(entries: Vec<HistoryEntry>, limit: usize) -> Self {
        let mut entries: VecDeque<_> = entries.into();
        entries.truncate(limit);
        Self { entries, limit }
    }

    pub fn push(&mut self, ids: Vec<String>) -> HistoryEntry {
        self.push_at(ids, Utc::now().timestamp_millis())
    }

    /// Records a comparison. With a limit of zero nothing is retained.
    pub fn push_at(&mut self, ids: Vec<String>, ts: i64) -> HistoryEntry {
        let entry = HistoryEntry { ids, ts };
        self.entries.push_front(entry.clone());
        self.entries.truncate(self.limit);
        entry
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_entries(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }
}

impl Default for RecentComparisons {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<String> {
        vec![format!("course-{n}")]
    }

    #[test]
    fn newest_first() {
        let mut recent = RecentComparisons::default();
        recent.push_at(ids(1), 10);
        recent.push_at(ids(2), 20);

        assert_eq!(recent.get(0).unwrap().ids, ids(2));
        assert_eq!(recent.get(1).unwrap().ts, 10);
    }

    #[test]
    fn twenty_first_save_evicts_oldest() {
        let mut recent = RecentComparisons::default();
        for n in 0..21 {
            recent.push_at(ids(n), n as i64);
        }

        assert_eq!(recent.len(), 20);
        assert_eq!(recent.get(0).unwrap().ids, ids(20));
        assert!(recent.iter().all(|entry| entry.ids != ids(0)));
    }

    #[test]
    fn zero_limit_keeps_nothing() {
        let mut recent = RecentComparisons::new(0);
        let entry = recent.push_at(ids(1), 1);

        assert_eq!(entry.ids, ids(1));
        assert!(recent.is_empty());
        assert_eq!(recent.get(0), None);
    }

    #[test]
    fn oversized_history_is_trimmed_on_load() {
        let entries = (0..30)
            .map(|n| HistoryEntry { ids: ids(n), ts: n as i64 })
            .collect();
        let recent = RecentComparisons::from_entries(entries, 5);

        assert_eq!(recent.len(), 5);
        assert_eq!(recent.get(4).unwrap().ts, 4);
    }
}
