//! Durable key-value preference storage.
//!
//! The store is a flat string table. On disk it is a small TOML file that is
//! read once at startup and rewritten under an exclusive lock on every set.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use synthesia_core::prelude::*;

pub const PREFERENCES_FILENAME: &str = "preferences.toml";

pub trait PreferenceStore: Send {
    /// Read `key`. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `key` immediately.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

// ─────────────────────────────────────────────────────────────────────────────
// File-backed store
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<dir>/preferences.toml`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(PREFERENCES_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        toml::from_str(&content).map_err(|e| {
            Error::preferences(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    fn write_table(&self, table: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::preferences(format!("Failed to create dir: {}", e)))?;
        }

        let body = toml::to_string(table)
            .map_err(|e| Error::preferences(format!("Failed to serialize: {}", e)))?;
        let content = format!("# SynthesiaCanvas preferences\n\n{}", body);

        // Truncate only once the lock is held
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .map_err(|e| Error::preferences(format!("Failed to open preferences: {}", e)))?;

        // Released when `file` is dropped
        file.lock_exclusive()
            .map_err(|e| Error::preferences(format!("Failed to lock preferences: {}", e)))?;

        file.set_len(0)
            .map_err(|e| Error::preferences(format!("Failed to truncate preferences: {}", e)))?;
        file.write_all(content.as_bytes())
            .map_err(|e| Error::preferences(format!("Failed to write preferences: {}", e)))?;
        file.sync_all()
            .map_err(|e| Error::preferences(format!("Failed to flush preferences: {}", e)))?;

        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_table()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // An unreadable file is replaced rather than blocking the write
        let mut table = self.read_table().unwrap_or_else(|e| {
            warn!("Discarding unreadable preferences: {}", e);
            BTreeMap::new()
        });
        table.insert(key.to_string(), value.to_string());
        self.write_table(&table)?;
        debug!("Saved preference {} = {}", key, value);
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// In-memory store
// ─────────────────────────────────────────────────────────────────────────────

/// Non-durable store for tests and for runs without a writable config dir.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
    fail_writes: bool,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    /// Make every `set` fail, to exercise write-error paths.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(Error::preferences("store is read-only"));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let store = FilePreferenceStore::in_dir(dir.path());
        assert_eq!(store.get("themeMode").unwrap(), None);
    }

    #[test]
    fn test_set_then_get_survives_new_instance() {
        let dir = tempdir().unwrap();
        let mut store = FilePreferenceStore::in_dir(dir.path());
        store.set("themeMode", "ocean").unwrap();

        let reopened = FilePreferenceStore::in_dir(dir.path());
        assert_eq!(reopened.get("themeMode").unwrap().as_deref(), Some("ocean"));

        let content = std::fs::read_to_string(reopened.path()).unwrap();
        assert!(content.contains("themeMode = \"ocean\""));
    }

    #[test]
    fn test_set_preserves_other_keys() {
        let dir = tempdir().unwrap();
        let mut store = FilePreferenceStore::in_dir(dir.path());
        store.set("other", "1").unwrap();
        store.set("themeMode", "dark").unwrap();

        assert_eq!(store.get("other").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("themeMode").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_malformed_file_is_an_error_on_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILENAME);
        std::fs::write(&path, "themeMode = [not toml").unwrap();

        let store = FilePreferenceStore::new(&path);
        let err = store.get("themeMode").unwrap_err();
        assert!(matches!(err, Error::Preferences { .. }));
    }

    #[test]
    fn test_set_replaces_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILENAME);
        std::fs::write(&path, "{{{").unwrap();

        let mut store = FilePreferenceStore::new(&path);
        store.set("themeMode", "light").unwrap();
        assert_eq!(store.get("themeMode").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_set_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let mut store = FilePreferenceStore::in_dir(&dir.path().join("nested").join("conf"));
        store.set("themeMode", "dark").unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_locked_file_keeps_previous_value_until_released() {
        use std::time::Duration;

        let dir = tempdir().unwrap();
        let mut store = FilePreferenceStore::in_dir(dir.path());
        store.set("themeMode", "ocean").unwrap();

        let holder = std::fs::OpenOptions::new()
            .write(true)
            .open(store.path())
            .unwrap();
        holder.lock_exclusive().unwrap();

        let mut writer = store.clone();
        let handle = std::thread::spawn(move || writer.set("themeMode", "dark"));

        std::thread::sleep(Duration::from_millis(150));
        let content = std::fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("themeMode = \"ocean\""));

        FileExt::unlock(&holder).unwrap();
        drop(holder);
        handle.join().unwrap().unwrap();
        assert_eq!(store.get("themeMode").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_shorter_value_leaves_no_trailing_bytes() {
        let dir = tempdir().unwrap();
        let mut store = FilePreferenceStore::in_dir(dir.path());
        store.set("themeMode", "ocean").unwrap();
        store.set("themeMode", "dark").unwrap();

        let reopened = FilePreferenceStore::in_dir(dir.path());
        assert_eq!(reopened.get("themeMode").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_memory_store_failing_writes() {
        let mut store = MemoryPreferenceStore::with_value("themeMode", "dark").failing_writes();
        assert!(store.set("themeMode", "ocean").is_err());
        assert_eq!(store.get("themeMode").unwrap().as_deref(), Some("dark"));
    }
}
