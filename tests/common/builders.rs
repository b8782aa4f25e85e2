//! Test builders: ergonomic constructors for `Record` fixtures.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use awards_core::types::{
    ADMINISTERING_UNIT, AWARD_DESCRIPTION, AWARD_NAME, AWARD_NUMBER, AWARD_TYPE, CAMPUS,
    ELIGIBLE_LEARNER_LEVEL,
};
use awards_core::{FieldValue, Record};

// ---------------------------------------------------------------------------
// AwardBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Record`] test fixtures.
///
/// # Example
///
/// ```rust
/// let award = AwardBuilder::new("Engineering Scholarship")
///     .campus("V")
///     .unit("Faculty of Applied Science - Engineering (Vancouver)")
///     .award_type("SCHL")
///     .build();
/// ```
pub struct AwardBuilder {
    fields: Vec<(String, FieldValue)>,
}

impl AwardBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            fields: vec![(AWARD_NAME.to_string(), FieldValue::Text(name.into()))],
        }
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    pub fn number(self, number: impl Into<FieldValue>) -> Self {
        self.field(AWARD_NUMBER, number)
    }

    pub fn campus(self, code: &str) -> Self {
        self.field(CAMPUS, code)
    }

    pub fn unit(self, unit: &str) -> Self {
        self.field(ADMINISTERING_UNIT, unit)
    }

    pub fn learner(self, level: &str) -> Self {
        self.field(ELIGIBLE_LEARNER_LEVEL, level)
    }

    pub fn award_type(self, code: &str) -> Self {
        self.field(AWARD_TYPE, code)
    }

    pub fn description(self, text: &str) -> Self {
        self.field(AWARD_DESCRIPTION, text)
    }

    pub fn build(self) -> Record {
        self.fields.into_iter().collect()
    }
}

// ---------------------------------------------------------------------------
// Convenience helpers
// ---------------------------------------------------------------------------

/// The `Award Name` of each record, in order.
pub fn names(records: &[&Record]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.text(AWARD_NAME).unwrap_or_default().to_string())
        .collect()
}

/// Build `n` awards cycling through campuses, types and levels.
pub fn build_corpus(n: usize) -> Vec<Record> {
    const CAMPUSES: [&str; 3] = ["V", "O", "A"];
    const TYPES: [&str; 5] = ["AWRD", "SCHL", "PRIZ", "FELL", "BURS"];
    const LEVELS: [&str; 2] = ["Undergraduate", "Graduate"];
    const UNITS: [&str; 4] = [
        "Faculty of Science - Physics (Okanagan)",
        "Faculty of Arts - Music",
        "Faculty of Applied Science - Engineering; Faculty of Science - Physics",
        "Enrolment Services",
    ];

    (0..n)
        .map(|i| {
            AwardBuilder::new(format!("Award {i}"))
                .number(i as u64)
                .campus(CAMPUSES[i % CAMPUSES.len()])
                .award_type(TYPES[i % TYPES.len()])
                .learner(LEVELS[i % LEVELS.len()])
                .unit(UNITS[i % UNITS.len()])
                .build()
        })
        .collect()
}
