use std::collections::HashMap;

use super::{KeyValueStore, StoreError};

/// In-process store; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    /// Number of successful `set_string` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get_string(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set_string(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        self.writes += 1;
        Ok(())
    }
}
