//! Endpoint handlers.
//!
//! Request fields use the same names and defaults as the search form posts:
//! every filter defaults to `"all"`, `page` to 1, and `per_page` to the
//! configured default. Integer fields are parsed leniently; anything that
//! does not parse counts as 0, and out-of-range values saturate. Filter values
//! are trimmed.

use crate::{error::ApiError, AppState, Envelope};
use awards_core::{paginate::paginate_vec, search, Filter, PageWindow, Pagination, Query, Record};
use axum::{
    extract::{Path, State},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub search_term: String,
    pub campus_filter: Filter,
    pub faculty_filter: Filter,
    pub graduate_filter: Filter,
    pub award_type_filter: Filter,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl SearchParams {
    pub fn query(&self) -> Query {
        Query {
            term: self.search_term.clone(),
            campus: trimmed(&self.campus_filter),
            faculty: trimmed(&self.faculty_filter),
            learner: trimmed(&self.graduate_filter),
            award_type: trimmed(&self.award_type_filter),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<Record>,
    pub pagination: Pagination,
    pub window: PageWindow,
}

#[tracing::instrument(skip_all, fields(term = %params.search_term))]
pub async fn search_awards(
    State(state): State<AppState>,
    Form(params): Form<SearchParams>,
) -> Result<Json<Envelope<SearchResponse>>, ApiError> {
    let per_page = match params.per_page.as_deref() {
        None => state.search.per_page,
        Some(raw) => {
            let requested = int_value(raw);
            usize::try_from(requested)
                .ok()
                .and_then(NonZeroUsize::new)
                .map(|n| state.search.limit_per_page(n))
                .ok_or(ApiError::InvalidPerPage(requested))?
        }
    };
    let page = params
        .page
        .as_deref()
        .map_or(1, |raw| usize::try_from(int_value(raw)).unwrap_or(0));

    let snapshot = state.store.snapshot();
    let matched = search(snapshot.records(), &params.query());
    let (page_records, pagination) = paginate_vec(matched, page, per_page);

    Ok(Json(Envelope::ok(SearchResponse {
        results: page_records.into_iter().cloned().collect(),
        window: pagination.window(),
        pagination,
    })))
}

// ---------------------------------------------------------------------------
// Faculties
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FacultiesParams {
    pub campus: Filter,
}

#[derive(Debug, Serialize)]
pub struct FacultiesResponse {
    pub faculties: Vec<String>,
}

#[tracing::instrument(skip_all, fields(campus = %params.campus))]
pub async fn faculties(
    State(state): State<AppState>,
    Form(params): Form<FacultiesParams>,
) -> Json<Envelope<FacultiesResponse>> {
    let snapshot = state.store.snapshot();
    Json(Envelope::ok(FacultiesResponse {
        faculties: snapshot.faculties_for(&trimmed(&params.campus)),
    }))
}

// ---------------------------------------------------------------------------
// Single award
// ---------------------------------------------------------------------------

#[tracing::instrument(skip_all, fields(number = %number))]
pub async fn award_by_number(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<Json<Envelope<Record>>, ApiError> {
    let snapshot = state.store.snapshot();
    snapshot
        .find_by_award_number(&number)
        .cloned()
        .map(|record| Json(Envelope::ok(record)))
        .ok_or(ApiError::AwardNotFound(number))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Leading-integer parse: optional sign followed by digits, ignoring
/// surrounding whitespace and any trailing garbage. No digits means 0.
fn int_value(raw: &str) -> i64 {
    let s = raw.trim();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return 0;
    }
    match digits.parse::<i64>() {
        Ok(n) => sign * n,
        Err(_) if sign < 0 => i64::MIN,
        Err(_) => i64::MAX,
    }
}

/// Form values arrive untrimmed; filters compare exactly.
fn trimmed(filter: &Filter) -> Filter {
    Filter::from(filter.as_str().trim())
}
