use std::sync::Mutex;

use securepass_breach::{HistoryError, SearchHistoryEntry, SearchHistoryStore};

/// An in-memory [`SearchHistoryStore`] for tests.
#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    entries: Mutex<Vec<SearchHistoryEntry>>,
}

#[async_trait::async_trait]
impl SearchHistoryStore for MemoryHistoryStore {
    async fn save(&self, entry: SearchHistoryEntry) -> Result<(), HistoryError> {
        self.entries
            .lock()
            .expect("Mutex is not poisoned")
            .push(entry);
        Ok(())
    }

    async fn history(&self) -> Result<Vec<SearchHistoryEntry>, HistoryError> {
        let entries = self.entries.lock().expect("Mutex is not poisoned");
        Ok(entries.iter().rev().cloned().collect())
    }

    async fn clear(&self) -> Result<(), HistoryError> {
        self.entries
            .lock()
            .expect("Mutex is not poisoned")
            .clear();
        Ok(())
    }
}
