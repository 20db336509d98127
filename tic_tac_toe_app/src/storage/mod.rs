//! Key-value persistence behind the game controller.
//!
//! Values are opaque strings; callers choose the key and the encoding.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed stored data: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub trait KeyValueStore {
    fn get_string(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set_string(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get_string(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_string(key)
    }

    fn set_string(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        (**self).set_string(key, value)
    }
}
