//! Faculty catalog: the distinct, sorted faculty names used to populate the
//! faculty filter choices. Not part of the search path.

use crate::faculty::faculties_in;
use crate::filters::{matches_campus, Filter};
use crate::types::{Record, ADMINISTERING_UNIT};
use std::collections::BTreeSet;

/// List every faculty named by records passing `campus`, deduplicated and in
/// ascending lexicographic order.
pub fn list_faculties(records: &[Record], campus: &Filter) -> Vec<String> {
    let mut names = BTreeSet::new();
    for record in records.iter().filter(|r| matches_campus(r, campus)) {
        let Some(unit) = record.text(ADMINISTERING_UNIT) else {
            continue;
        };
        for name in faculties_in(unit).filter(|n| !n.is_empty()) {
            if !names.contains(name) {
                names.insert(name.to_string());
            }
        }
    }
    names.into_iter().collect()
}
