//! Headless mode: one-shot search and catalog output for the CLI.

use awards_core::{paginate, search, Filter, Pagination, Query, Record, RecordSet};
use serde::Serialize;
use std::num::NonZeroUsize;

/// One page of search output, as printed by `awards query`.
#[derive(Debug, Serialize)]
pub struct QueryOutput<'a> {
    pub results: &'a [&'a Record],
    pub pagination: Pagination,
}

/// Run `query` and print the requested page as pretty JSON.
pub fn print_query(
    set: &RecordSet,
    query: &Query,
    page: usize,
    per_page: NonZeroUsize,
    out: &mut impl std::io::Write,
) -> anyhow::Result<Pagination> {
    let matched = search(set.records(), query);
    let (results, pagination) = paginate(&matched, page, per_page);
    serde_json::to_writer_pretty(&mut *out, &QueryOutput { results, pagination })?;
    writeln!(out)?;
    Ok(pagination)
}

/// Print the faculty catalog for `campus`, one name per line.
pub fn print_faculties(
    set: &RecordSet,
    campus: &Filter,
    out: &mut impl std::io::Write,
) -> anyhow::Result<usize> {
    let faculties = set.faculties_for(campus);
    for name in &faculties {
        writeln!(out, "{name}")?;
    }
    Ok(faculties.len())
}
