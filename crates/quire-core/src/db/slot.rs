//! Persistent key-value slots holding serialized documents

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A persistent key-value slot, addressed by string keys
pub trait KeyValueSlot {
    /// Read the value stored under `key`, `None` when nothing was written yet
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    ///
    /// Failures are reported as [`Error::Persistence`].
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Slot storing each key as `<dir>/<key>.json`
///
/// Writes overwrite the file in place; a crash mid-write can leave a
/// truncated document behind.
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    /// Create a slot rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the slot files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueSlot for FileSlot {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        std::fs::create_dir_all(&self.dir)
            .and_then(|()| std::fs::write(&path, value))
            .map_err(|error| Error::Persistence(format!("{}: {error}", path.display())))
    }
}

/// In-process slot, optionally capped at a byte quota
///
/// Writes larger than the quota fail the way a full browser storage does.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    entries: HashMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot that rejects any value longer than `quota_bytes`
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Change the quota; `None` removes it
    pub fn set_quota(&mut self, quota_bytes: Option<usize>) {
        self.quota_bytes = quota_bytes;
    }
}

impl KeyValueSlot for MemorySlot {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        if let Some(quota) = self.quota_bytes {
            if value.len() > quota {
                return Err(Error::Persistence(format!(
                    "storage quota exceeded ({} > {quota} bytes)",
                    value.len()
                )));
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_slot_missing_key_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path());
        assert!(slot.read("quire-db").unwrap().is_none());
    }

    #[test]
    fn test_file_slot_write_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut slot = FileSlot::new(dir.path().join("nested").join("data"));

        slot.write("quire-db", "{\"notebooks\":[]}").unwrap();

        assert!(slot.path_for("quire-db").exists());
        assert_eq!(
            slot.read("quire-db").unwrap().as_deref(),
            Some("{\"notebooks\":[]}")
        );
    }

    #[test]
    fn test_file_slot_write_failure_is_persistence_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let mut slot = FileSlot::new(&blocker);
        let error = slot.write("quire-db", "{}").unwrap_err();
        assert!(error.is_persistence());
    }

    #[test]
    fn test_memory_slot_quota() {
        let mut slot = MemorySlot::with_quota(4);
        slot.write("k", "1234").unwrap();
        let error = slot.write("k", "12345").unwrap_err();
        assert!(error.is_persistence());
        assert_eq!(slot.read("k").unwrap().as_deref(), Some("1234"));

        slot.set_quota(None);
        slot.write("k", "12345").unwrap();
        assert_eq!(slot.read("k").unwrap().as_deref(), Some("12345"));
    }
}
