//! Core types for awards-core.
//!
//! A [`Record`] is an open-ended, ordered mapping from field name to a scalar
//! [`FieldValue`]. Fields that are missing from the source document are simply
//! not present; every accessor returns `Option` so that "no value" is a
//! first-class case for the filter predicates rather than an error.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

// ---------------------------------------------------------------------------
// Recognised field names
// ---------------------------------------------------------------------------

pub const AWARD_NAME: &str = "Award Name";
pub const AWARD_NUMBER: &str = "Award Number";
pub const AWARD_CYCLE: &str = "Award Cycle";
pub const AWARD_TYPE: &str = "Award Type";
pub const ADMINISTERING_UNIT: &str = "Administering Unit";
pub const ELIGIBLE_LEARNER_LEVEL: &str = "Eligible Learner Level";
pub const APPLICATION_TYPE: &str = "Application Type (Award Profile)";
pub const CAMPUS: &str = "Campus";
pub const AWARD_DESCRIPTION: &str = "Award Description";

// ---------------------------------------------------------------------------
// FieldValue
// ---------------------------------------------------------------------------

/// A scalar field value. Anything else found in the source document
/// (null, booleans, arrays, nested objects) is dropped at load time.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(serde_json::Number),
}

impl FieldValue {
    /// The value as a string slice, only if it is textual.
    ///
    /// Coded fields (`Campus`, `Award Type`, …) are compared strictly, so a
    /// numeric value never equals a textual code.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Number(_) => None,
        }
    }

    /// String form used for free-text search and identifier lookups.
    pub fn to_search_string(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(s) => Cow::Borrowed(s),
            FieldValue::Number(n) => Cow::Owned(n.to_string()),
        }
    }

    /// Convert a JSON value, returning `None` for non-scalar values.
    pub fn from_json(value: serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) => Some(FieldValue::Text(s)),
            serde_json::Value::Number(n) => Some(FieldValue::Number(n)),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n.into())
    }
}

impl From<u64> for FieldValue {
    fn from(n: u64) -> Self {
        FieldValue::Number(n.into())
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::Number(n) => n.serialize(serializer),
        }
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// One award entry. Field order follows the source document.
///
/// Records are immutable once loaded; the engine only ever reads them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    /// Build a record from a JSON value.
    ///
    /// Returns `None` when the value is not an object. Non-scalar members are
    /// skipped; scalar members keep their document order.
    pub fn from_json(value: serde_json::Value) -> Option<Self> {
        let serde_json::Value::Object(map) = value else {
            return None;
        };
        let fields = map
            .into_iter()
            .filter_map(|(k, v)| FieldValue::from_json(v).map(|v| (k, v)))
            .collect();
        Some(Record { fields })
    }

    /// Look up a field by exact name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    /// Look up a textual field by exact name.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_text)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn values(&self) -> impl Iterator<Item = &FieldValue> {
        self.fields.iter().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Record {
    /// Later duplicates of a key replace earlier ones, matching JSON object
    /// semantics.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields: Vec<(String, FieldValue)> = Vec::new();
        for (k, v) in iter {
            let (k, v) = (k.into(), v.into());
            match fields.iter_mut().find(|(existing, _)| *existing == k) {
                Some(slot) => slot.1 = v,
                None => fields.push((k, v)),
            }
        }
        Record { fields }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
