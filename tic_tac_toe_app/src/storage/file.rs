use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{KeyValueStore, StoreError};

/// Keeps every key in a single JSON object on disk.
///
/// The whole file is rewritten on each `set_string`, through a temporary
/// sibling file that is renamed over the original.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_string_pretty(values)?)?;
        fs::rename(&tmp, &self.path)?;

        debug!("Wrote {} key(s) to {}", values.len(), self.path.display());
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_string(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_string(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        // A corrupt file is replaced rather than blocking every later save.
        let mut values = self.read_all().unwrap_or_default();
        values.insert(key.to_string(), value);
        self.write_all(&values)
    }
}
