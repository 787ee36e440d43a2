//! Read-only record store loaded once at process start.
//!
//! # Design
//! The dataset is parsed into a `Vec<Record>` a single time and then frozen
//! behind an `Arc<[Record]>`. Every request borrows the same snapshot, so no
//! locking is needed and no request ever observes a reload. The handler talks
//! to the store through `RecordSource`, which lets tests inject a source that
//! fails to load.

use std::{fs, io::Read, path::Path, sync::Arc};

use serde::Deserialize;
use thiserror::Error;

/// A single person in the dataset, as stored on disk.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Record {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub about: String,
    pub gender: String,
}

impl Record {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse dataset: {0}")]
    Format(#[from] serde_json::Error),

    /// The source exists but cannot hand out records.
    #[error("{0}")]
    Unavailable(String),
}

/// Anything that can hand the handler the full ordered record sequence.
pub trait RecordSource: Send + Sync + 'static {
    fn records(&self) -> Result<Arc<[Record]>, StoreError>;
}

/// Immutable in-memory snapshot of the dataset.
#[derive(Clone, Debug)]
pub struct RecordStore {
    records: Arc<[Record]>,
}

impl RecordStore {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Parse a JSON array of records from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, StoreError> {
        let records: Vec<Record> = serde_json::from_reader(reader)?;
        Ok(Self::new(records))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let file = fs::File::open(path).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let store = Self::from_reader(std::io::BufReader::new(file))?;
        tracing::info!(path = %path.display(), records = store.len(), "dataset loaded");
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordSource for RecordStore {
    fn records(&self) -> Result<Arc<[Record]>, StoreError> {
        Ok(Arc::clone(&self.records))
    }
}
