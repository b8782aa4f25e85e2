//! Store: immutable record snapshots and the handle that publishes them.
//!
//! A [`RecordSet`] is built once per data load and never mutated. The
//! [`Store`] holds the current snapshot behind an `Arc`; readers clone the
//! `Arc` and keep using it even if a reload publishes a replacement.

use crate::catalog::list_faculties;
use crate::error::LoadError;
use crate::filters::Filter;
use crate::types::{Record, AWARD_NUMBER};
use std::path::Path;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

// ---------------------------------------------------------------------------
// RecordSet
// ---------------------------------------------------------------------------

/// An ordered, immutable collection of records.
#[derive(Debug, Default)]
pub struct RecordSet {
    records: Vec<Record>,
    skipped: usize,
    faculties: OnceLock<Vec<String>>,
}

impl RecordSet {
    pub fn new(records: Vec<Record>) -> Self {
        RecordSet {
            records,
            ..Default::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from already-decoded JSON values. Elements that are not
    /// objects are skipped and counted.
    pub fn from_values(values: Vec<serde_json::Value>) -> Self {
        let total = values.len();
        let records: Vec<Record> = values.into_iter().filter_map(Record::from_json).collect();
        let skipped = total - records.len();
        if skipped > 0 {
            tracing::warn!(skipped, total, "skipped malformed award records");
        }
        RecordSet {
            records,
            skipped,
            ..Default::default()
        }
    }

    /// Parse a JSON document whose top level is an array of records.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        match serde_json::from_str(json)? {
            serde_json::Value::Array(values) => Ok(Self::from_values(values)),
            other => Err(LoadError::NotAnArray {
                found: json_kind(&other),
            }),
        }
    }

    /// Read and parse a data file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let set = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            records = set.len(),
            skipped = set.skipped,
            "loaded award data"
        );
        Ok(set)
    }

    /// Like [`RecordSet::load`], but a missing or unreadable file yields an
    /// empty set after logging the error.
    pub fn load_or_empty(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::error!(path = %path.display(), error = %e, "continuing with no award data");
            Self::empty()
        })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_data(&self) -> bool {
        !self.is_empty()
    }

    /// Number of source elements dropped because they were not records.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// First record whose `Award Number` (in string form) equals `id`.
    pub fn find_by_award_number(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| {
            r.get(AWARD_NUMBER)
                .is_some_and(|n| n.to_search_string() == id)
        })
    }

    /// Faculty catalog across every campus, computed once per set.
    pub fn faculties(&self) -> &[String] {
        self.faculties
            .get_or_init(|| list_faculties(&self.records, &Filter::All))
    }

    /// Faculty catalog restricted to `campus`.
    pub fn faculties_for(&self, campus: &Filter) -> Vec<String> {
        match campus {
            Filter::All => self.faculties().to_vec(),
            _ => list_faculties(&self.records, campus),
        }
    }
}

impl From<Vec<Record>> for RecordSet {
    fn from(records: Vec<Record>) -> Self {
        RecordSet::new(records)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Shared handle to the current [`RecordSet`] snapshot.
#[derive(Debug, Default)]
pub struct Store {
    current: RwLock<Arc<RecordSet>>,
}

impl Store {
    pub fn new(set: RecordSet) -> Self {
        Store {
            current: RwLock::new(Arc::new(set)),
        }
    }

    /// The snapshot in effect right now.
    pub fn snapshot(&self) -> Arc<RecordSet> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Publish `set` as the new snapshot, returning the previous one.
    pub fn replace(&self, set: RecordSet) -> Arc<RecordSet> {
        let next = Arc::new(set);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *guard, next);
        tracing::info!(
            previous = previous.len(),
            current = guard.len(),
            "published new award snapshot"
        );
        previous
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
