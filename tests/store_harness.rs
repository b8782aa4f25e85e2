#![allow(unused)]
//! Store layer integration harness.
//!
//! # What this covers
//!
//! - **Loading**: data files are parsed, malformed elements skipped and
//!   counted, and load failures reported as typed errors.
//! - **Missing data**: `load_or_empty` yields an empty, searchable set.
//! - **Reload**: `reload::reload` publishes a new snapshot; a broken file
//!   keeps the previous one.
//! - **Concurrent reads during replacement**: readers always see a complete
//!   snapshot (either the old or the new one, never a mix).
//!
//! # What this does NOT cover
//!
//! - Filesystem event delivery from the OS watcher
//!
//! # Running
//!
//! ```sh
//! cargo test --test store_harness
//! ```

mod common;
use awards::reload;
use awards_core::{search, LoadError, Query, RecordSet, Store};
use common::*;
use pretty_assertions::assert_eq;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[test]
fn loads_fixture_file_and_skips_malformed() {
    let file = data_file(AWARDS_JSON);
    let set = RecordSet::load(file.path()).unwrap();
    assert_eq!(set.len(), 6);
    assert_eq!(set.skipped(), 2);
}

#[test]
fn award_lookup_by_number() {
    let set = fixture_set();
    let found = set.find_by_award_number("1002").unwrap();
    assert_eq!(found.text("Award Name"), Some("Okanagan Physics Prize"));
    assert!(set.find_by_award_number("9999").is_none());
}

#[test]
fn invalid_json_is_a_typed_error() {
    let file = data_file("[{\"Award Name\": ");
    assert!(matches!(RecordSet::load(file.path()), Err(LoadError::Json(_))));
}

#[test]
fn non_array_document_is_rejected() {
    let file = data_file("{\"awards\": []}");
    let err = RecordSet::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("an object"), "{err}");
}

#[test]
fn missing_file_yields_empty_searchable_set() {
    let dir = tempfile::tempdir().unwrap();
    let set = RecordSet::load_or_empty(&dir.path().join("data.json"));
    assert!(!set.has_data());
    assert!(search(set.records(), &Query::new()).is_empty());
    assert!(set.faculties().is_empty());
}

// ---------------------------------------------------------------------------
// Reload
// ---------------------------------------------------------------------------

#[test]
fn reload_publishes_new_snapshot() {
    let file = data_file("[]");
    let store = Store::new(RecordSet::load(file.path()).unwrap());
    assert!(store.snapshot().is_empty());

    std::fs::write(file.path(), AWARDS_JSON).unwrap();
    let records = reload::reload(file.path(), &store).unwrap();
    assert_eq!(records, 6);
    assert_eq!(store.snapshot().len(), 6);
}

#[test]
fn failed_reload_keeps_previous_snapshot() {
    let file = data_file(AWARDS_JSON);
    let store = Store::new(RecordSet::load(file.path()).unwrap());
    let before = store.snapshot();

    std::fs::write(file.path(), "not json at all").unwrap();
    assert!(reload::reload(file.path(), &store).is_err());
    assert!(Arc::ptr_eq(&before, &store.snapshot()));
}

#[test]
fn in_flight_snapshot_survives_replacement() {
    let store = Store::new(fixture_set());
    let held = store.snapshot();
    store.replace(RecordSet::empty());
    assert_eq!(held.len(), 6);
    assert_eq!(search(held.records(), &Query::new().term("bursary")).len(), 1);
    assert!(store.snapshot().is_empty());
}

// ---------------------------------------------------------------------------
// Concurrent access
// ---------------------------------------------------------------------------

/// Readers searching while a writer swaps snapshots only ever observe one of
/// the two complete sets.
#[test]
fn concurrent_reads_see_whole_snapshots() {
    let small = build_corpus(10);
    let large = build_corpus(200);
    let store = Arc::new(Store::new(RecordSet::new(small.clone())));

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let store = Arc::clone(&store);
            scope.spawn(move || {
                for _ in 0..500 {
                    let snapshot = store.snapshot();
                    let n = search(snapshot.records(), &Query::new()).len();
                    assert!(n == 10 || n == 200, "observed a partial snapshot of {n} records");
                }
            });
        }
        let writer = Arc::clone(&store);
        scope.spawn(move || {
            for i in 0..200 {
                let set = if i % 2 == 0 { large.clone() } else { small.clone() };
                writer.replace(RecordSet::new(set));
            }
        });
    });
}
