use super::backend::StorageBackend;
use crate::error::{ItaskError, Result};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// Filesystem backend: every key lives in `<root>/<key>.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ItaskError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.item_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(ItaskError::Io)?;
        Ok(Some(content))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;

        let path = self.item_path(key);
        let tmp_file = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_file, value).map_err(ItaskError::Io)?;
        fs::rename(&tmp_file, &path).map_err(ItaskError::Io)?;

        Ok(())
    }

    fn item_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}
