use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw key-value storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `Persistence` handles the "what" (which key, which shape).
pub trait StorageBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) if nothing has been written under that key.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Get the "file path" for a key.
    /// For FsBackend, this is the real path. For MemBackend, a virtual path.
    fn item_path(&self, key: &str) -> PathBuf;
}
