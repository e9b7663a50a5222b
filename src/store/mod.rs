//! Durable storage for favorites and test history.
//!
//! Each record is a JSON envelope `{"version": 1, "items": [...]}` kept
//! under a fixed key. A bare JSON array is read as version 0, the
//! unversioned layout earlier clients wrote.
//!
//! Loads never fail: unreadable, corrupt or newer-versioned records are
//! logged and treated as empty, then replaced by the next write.

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileBackend;
pub use memory::MemoryBackend;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::model::{DictionaryEntry, TestResult};

pub const FAVORITES_KEY: &str = "lexicon_favorites";
pub const HISTORY_KEY: &str = "lexicon_test_history";

/// Version written into every envelope.
pub const SCHEMA_VERSION: u32 = 1;

/// Raw key-value storage. Every write replaces the whole value.
pub trait StoreBackend: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<B: StoreBackend + ?Sized> StoreBackend for std::sync::Arc<B> {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value)
    }
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    version: u32,
    items: &'a [T],
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Stored<T> {
    Versioned { version: u32, items: Vec<T> },
    Legacy(Vec<T>),
}

/// Typed access to the two persisted records.
pub struct PersistenceStore<B> {
    backend: B,
}

impl<B: StoreBackend> PersistenceStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn load_favorites(&self) -> Vec<DictionaryEntry> {
        self.load_or_empty(FAVORITES_KEY)
    }

    pub fn save_favorites(&self, favorites: &[DictionaryEntry]) -> Result<(), StoreError> {
        self.save(FAVORITES_KEY, favorites)
    }

    pub fn load_history(&self) -> Vec<TestResult> {
        self.load_or_empty(HISTORY_KEY)
    }

    pub fn save_history(&self, history: &[TestResult]) -> Result<(), StoreError> {
        self.save(HISTORY_KEY, history)
    }

    fn load_or_empty<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.load(key) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(key, error = %e, "Discarding unreadable store record");
                Vec::new()
            }
        }
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        match self.backend.read(key)? {
            Some(raw) => decode_records(key, &raw),
            None => Ok(Vec::new()),
        }
    }

    fn save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StoreError> {
        let json = encode_records(items)?;
        self.backend.write(key, &json)
    }
}

fn encode_records<T: Serialize>(items: &[T]) -> Result<String, StoreError> {
    let envelope = EnvelopeRef {
        version: SCHEMA_VERSION,
        items,
    };
    Ok(serde_json::to_string(&envelope)?)
}

fn decode_records<T: DeserializeOwned>(key: &str, raw: &str) -> Result<Vec<T>, StoreError> {
    let stored: Stored<T> = serde_json::from_str(raw).map_err(|e| StoreError::Corrupt {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    match stored {
        Stored::Versioned { version, items } if version <= SCHEMA_VERSION => Ok(items),
        Stored::Versioned { version, .. } => Err(StoreError::UnsupportedVersion {
            key: key.to_string(),
            version,
        }),
        Stored::Legacy(items) => Ok(items),
    }
}
