//! Domain-specific assertion macros for awards harnesses.
//!
//! These add context-rich failure messages that make it clear *which*
//! engine invariant was violated.

use awards_core::Record;

/// Assert that every record in a result set satisfies a predicate.
///
/// ```rust
/// assert_results_all!(results, |r| r.text("Campus") == Some("V"));
/// ```
#[macro_export]
macro_rules! assert_results_all {
    ($results:expr, $pred:expr) => {{
        let results: &[&awards_core::Record] = &$results;
        let pred = $pred;
        let failing: Vec<_> = results.iter().filter(|r| !pred(**r)).collect();
        if !failing.is_empty() {
            panic!(
                "assert_results_all! failed: {} of {} records did not satisfy predicate.\n  first: {:?}",
                failing.len(),
                results.len(),
                failing[0]
            );
        }
    }};
}

/// Assert that a list of strings is strictly ascending (sorted, no duplicates).
#[macro_export]
macro_rules! assert_sorted_unique {
    ($items:expr) => {{
        let items: &[String] = &$items;
        if let Some(w) = items.windows(2).find(|w| w[0] >= w[1]) {
            panic!(
                "assert_sorted_unique! failed: {:?} is not strictly before {:?}",
                w[0], w[1]
            );
        }
    }};
}

/// Assert that `results` is a subsequence of `source`, by identity, in order.
///
/// Search never reorders or fabricates records, so every result must point
/// into the source slice at a strictly increasing position.
pub fn assert_stable_subsequence(source: &[Record], results: &[&Record]) {
    let mut next = 0;
    for (i, result) in results.iter().enumerate() {
        match source[next..].iter().position(|r| std::ptr::eq(r, *result)) {
            Some(offset) => next += offset + 1,
            None => panic!(
                "result #{i} is not from the source or is out of order: {:?}",
                result
            ),
        }
    }
}
