//! Search layer: filter composition plus free-text matching.
//!
//! [`search`] is a linear scan: every record is checked against the four
//! filter predicates (campus, faculty, learner level, award type, in that
//! order) and then against the search term. Results keep collection order;
//! there is no ranking.

use crate::filters::{
    matches_award_type, matches_campus, matches_faculty, matches_learner_level, Filter,
};
use crate::types::Record;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// A search request. The default query matches every record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Query {
    /// Free-text term, matched case-insensitively against every field.
    pub term: String,
    pub campus: Filter,
    pub faculty: Filter,
    pub learner: Filter,
    pub award_type: Filter,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    pub fn campus(mut self, filter: impl Into<Filter>) -> Self {
        self.campus = filter.into();
        self
    }

    pub fn faculty(mut self, filter: impl Into<Filter>) -> Self {
        self.faculty = filter.into();
        self
    }

    pub fn learner(mut self, filter: impl Into<Filter>) -> Self {
        self.learner = filter.into();
        self
    }

    pub fn award_type(mut self, filter: impl Into<Filter>) -> Self {
        self.award_type = filter.into();
        self
    }

    /// True when the query would return the whole collection.
    pub fn is_unfiltered(&self) -> bool {
        self.term.trim().is_empty()
            && self.campus.is_all()
            && self.faculty.is_all()
            && self.learner.is_all()
            && self.award_type.is_all()
    }

    /// Whether `record` passes every active filter dimension.
    pub fn passes_filters(&self, record: &Record) -> bool {
        matches_campus(record, &self.campus)
            && matches_faculty(record, &self.faculty)
            && matches_learner_level(record, &self.learner)
            && matches_award_type(record, &self.award_type)
    }
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// Case-insensitive substring match against the string form of every field.
///
/// `needle` must already be lower-cased.
fn contains_term(record: &Record, needle: &str) -> bool {
    record
        .values()
        .any(|value| value.to_search_string().to_lowercase().contains(needle))
}

/// Return every record matching `query`, in collection order.
pub fn search<'a>(records: &'a [Record], query: &Query) -> Vec<&'a Record> {
    let term = query.term.trim();
    let needle = (!term.is_empty()).then(|| term.to_lowercase());

    let results: Vec<&Record> = records
        .iter()
        .filter(|record| query.passes_filters(record))
        .filter(|record| match &needle {
            Some(needle) => contains_term(record, needle),
            None => true,
        })
        .collect();

    tracing::debug!(
        scanned = records.len(),
        matched = results.len(),
        term = %term,
        campus = %query.campus,
        faculty = %query.faculty,
        learner = %query.learner,
        award_type = %query.award_type,
        "search complete"
    );

    results
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
