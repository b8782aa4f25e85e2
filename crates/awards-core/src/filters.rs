//! Filter values and the per-dimension record predicates.
//!
//! Each predicate decides whether one record passes one filter dimension.
//! [`Filter::All`] always passes. A concrete filter fails when the field it
//! inspects is absent or not textual.

use crate::codes::{AwardType, Campus, LearnerLevel};
use crate::faculty::faculties_in;
use crate::types::{Record, ADMINISTERING_UNIT, AWARD_TYPE, CAMPUS, ELIGIBLE_LEARNER_LEVEL};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire spelling of [`Filter::All`].
pub const ALL: &str = "all";

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// One filter dimension: either disabled (`"all"`) or a concrete value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Filter {
    #[default]
    All,
    Only(String),
}

impl Filter {
    pub fn only(value: impl Into<String>) -> Self {
        Filter::from(value.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Filter::All => ALL,
            Filter::Only(v) => v,
        }
    }
}

impl From<String> for Filter {
    fn from(value: String) -> Self {
        if value == ALL {
            Filter::All
        } else {
            Filter::Only(value)
        }
    }
}

impl From<&str> for Filter {
    fn from(value: &str) -> Self {
        Filter::from(value.to_string())
    }
}

impl From<Filter> for String {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::All => ALL.to_string(),
            Filter::Only(v) => v,
        }
    }
}

impl From<Campus> for Filter {
    fn from(campus: Campus) -> Self {
        Filter::Only(campus.code().to_string())
    }
}

impl From<AwardType> for Filter {
    fn from(kind: AwardType) -> Self {
        Filter::Only(kind.code().to_string())
    }
}

impl From<LearnerLevel> for Filter {
    fn from(level: LearnerLevel) -> Self {
        Filter::Only(level.label().to_string())
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Campus filter.
///
/// `"A"` matches only records stored as `"A"`. Any other value matches its
/// own code or a record offered at every campus.
pub fn matches_campus(record: &Record, filter: &Filter) -> bool {
    let Filter::Only(wanted) = filter else {
        return true;
    };
    let Some(campus) = record.text(CAMPUS) else {
        return false;
    };
    let both = Campus::Both.code();
    if wanted == both {
        return campus == both;
    }
    campus == wanted || campus == both
}

/// Faculty filter. Matches when any faculty extracted from the
/// `Administering Unit` field equals the filter value exactly.
pub fn matches_faculty(record: &Record, filter: &Filter) -> bool {
    let Filter::Only(wanted) = filter else {
        return true;
    };
    let unit = match record.text(ADMINISTERING_UNIT) {
        Some(unit) if !unit.is_empty() => unit,
        _ => return false,
    };
    faculties_in(unit).any(|name| name == wanted)
}

/// Learner-level filter: exact equality on `Eligible Learner Level`.
pub fn matches_learner_level(record: &Record, filter: &Filter) -> bool {
    let Filter::Only(wanted) = filter else {
        return true;
    };
    record.text(ELIGIBLE_LEARNER_LEVEL) == Some(wanted.as_str())
}

/// Award-type filter. Labels are translated to their stored code first;
/// unknown values are compared literally.
pub fn matches_award_type(record: &Record, filter: &Filter) -> bool {
    let Filter::Only(wanted) = filter else {
        return true;
    };
    record.text(AWARD_TYPE) == Some(AwardType::resolve_filter(wanted))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
