use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Most recent distinct words kept for avoidance.
pub const MAX_RECENT: usize = 20;
/// Entries older than this are dropped at load time.
pub const RETENTION_DAYS: i64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecencyEntry {
    pub word: String,
    pub used_at: DateTime<Utc>,
}

/// Bounded, most-recent-first list of previously served words, persisted as
/// JSON. The server and the client each own an independent instance; the
/// two are only ever merged into one avoid-set at request time.
#[derive(Debug)]
pub struct RecencyStore {
    entries: Vec<RecencyEntry>,
    path: PathBuf,
}

impl RecencyStore {
    /// Load the persisted list, dropping entries past the retention window.
    /// A missing or unreadable file starts an empty list.
    pub fn load(path: &Path) -> Self {
        let mut entries: Vec<RecencyEntry> = match fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Discarding corrupt recency file {}: {}", path.display(), e);
                Vec::new()
            }),
            Err(_) => Vec::new(),
        };

        let cutoff = Utc::now() - Duration::days(RETENTION_DAYS);
        let before = entries.len();
        entries.retain(|e| e.used_at > cutoff);
        if entries.len() < before {
            info!("Pruned {} expired recency entries", before - entries.len());
        }
        entries.truncate(MAX_RECENT);

        Self {
            entries,
            path: path.to_path_buf(),
        }
    }

    /// Prepend a word, dropping any earlier occurrence of it, truncate to
    /// the bound, and persist. Persistence failures only cost avoidance
    /// quality, so they are logged rather than propagated.
    pub fn record(&mut self, word: &str) {
        self.entries.retain(|e| e.word != word);
        self.entries.insert(
            0,
            RecencyEntry {
                word: word.to_string(),
                used_at: Utc::now(),
            },
        );
        self.entries.truncate(MAX_RECENT);

        if let Err(e) = self.save() {
            warn!(
                "Failed to persist recency list to {}: {}",
                self.path.display(),
                e
            );
        }
    }

    /// Words in most-recent-first order.
    pub fn words(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.word.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn save(&self) -> io::Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let raw = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempdir().unwrap();
        let store = RecencyStore::load(&dir.path().join("recent_words.json"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_record_is_most_recent_first() {
        let dir = tempdir().unwrap();
        let mut store = RecencyStore::load(&dir.path().join("recent_words.json"));
        store.record("GATO");
        store.record("PATO");
        store.record("LEAO");
        assert_eq!(store.words(), vec!["LEAO", "PATO", "GATO"]);
    }

    #[test]
    fn test_record_deduplicates_and_moves_to_front() {
        let dir = tempdir().unwrap();
        let mut store = RecencyStore::load(&dir.path().join("recent_words.json"));
        store.record("GATO");
        store.record("PATO");
        store.record("GATO");
        assert_eq!(store.words(), vec!["GATO", "PATO"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_list_is_bounded() {
        let dir = tempdir().unwrap();
        let mut store = RecencyStore::load(&dir.path().join("recent_words.json"));
        for i in 0..25 {
            store.record(&format!("WORD{i}"));
        }
        assert_eq!(store.len(), MAX_RECENT);
        let words = store.words();
        assert_eq!(words[0], "WORD24");
        assert_eq!(words[MAX_RECENT - 1], "WORD5");
    }

    #[test]
    fn test_reload_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("recent_words.json");
        {
            let mut store = RecencyStore::load(&path);
            store.record("GATO");
            store.record("PATO");
        }
        let store = RecencyStore::load(&path);
        assert_eq!(store.words(), vec!["PATO", "GATO"]);
    }

    #[test]
    fn test_expired_entries_pruned_at_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("recent_words.json");
        let entries = vec![
            RecencyEntry {
                word: "FRESCO".to_string(),
                used_at: Utc::now(),
            },
            RecencyEntry {
                word: "ANTIGO".to_string(),
                used_at: Utc::now() - Duration::days(RETENTION_DAYS + 1),
            },
        ];
        fs::write(&path, serde_json::to_string(&entries).unwrap()).unwrap();

        let store = RecencyStore::load(&path);
        assert_eq!(store.words(), vec!["FRESCO"]);
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("recent_words.json");
        fs::write(&path, "not json at all").unwrap();
        let store = RecencyStore::load(&path);
        assert!(store.is_empty());
    }
}
