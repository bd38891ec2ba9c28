//! Key-value storage seam for the watcher.
//!
//! The original watcher reached into browser-local storage directly; here
//! the embedder injects whatever backing it has (browser storage, a file,
//! memory) through this trait.

use std::collections::HashMap;
use std::sync::Mutex;

/// String-keyed storage for watcher state
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
}

/// In-memory store, used by tests and headless embedders
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.entries.lock().unwrap().insert(key.to_string(), value);
    }
}
