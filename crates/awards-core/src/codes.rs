//! Label ↔ code tables for the coded record fields.
//!
//! Records store short codes (`"V"`, `"SCHL"`, …) while users pick labels
//! (`"Vancouver"`, `"Scholarship"`, …). Every translation between the two goes
//! through this module.

use phf::phf_map;
use std::fmt;

// ---------------------------------------------------------------------------
// Campus
// ---------------------------------------------------------------------------

/// Campus an award is offered at, stored in the `Campus` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Campus {
    Vancouver,
    Okanagan,
    /// Offered at every campus. Satisfies any specific-campus filter.
    Both,
}

static CAMPUS_BY_CODE: phf::Map<&'static str, Campus> = phf_map! {
    "V" => Campus::Vancouver,
    "O" => Campus::Okanagan,
    "A" => Campus::Both,
};

impl Campus {
    pub const ALL: [Campus; 3] = [Campus::Vancouver, Campus::Okanagan, Campus::Both];

    pub fn code(self) -> &'static str {
        match self {
            Campus::Vancouver => "V",
            Campus::Okanagan => "O",
            Campus::Both => "A",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Campus::Vancouver => "Vancouver",
            Campus::Okanagan => "Okanagan",
            Campus::Both => "Both Campuses",
        }
    }

    pub fn from_code(code: &str) -> Option<Campus> {
        CAMPUS_BY_CODE.get(code).copied()
    }
}

impl fmt::Display for Campus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Award type
// ---------------------------------------------------------------------------

/// Kind of award, stored as a four-letter code in the `Award Type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AwardType {
    Award,
    Scholarship,
    Prize,
    Fellowship,
    Bursary,
}

static AWARD_TYPE_BY_LABEL: phf::Map<&'static str, AwardType> = phf_map! {
    "Award" => AwardType::Award,
    "Scholarship" => AwardType::Scholarship,
    "Prize" => AwardType::Prize,
    "Fellowship" => AwardType::Fellowship,
    "Bursaries" => AwardType::Bursary,
};

static AWARD_TYPE_BY_CODE: phf::Map<&'static str, AwardType> = phf_map! {
    "AWRD" => AwardType::Award,
    "SCHL" => AwardType::Scholarship,
    "PRIZ" => AwardType::Prize,
    "FELL" => AwardType::Fellowship,
    "BURS" => AwardType::Bursary,
};

impl AwardType {
    pub const ALL: [AwardType; 5] = [
        AwardType::Award,
        AwardType::Scholarship,
        AwardType::Prize,
        AwardType::Fellowship,
        AwardType::Bursary,
    ];

    pub fn code(self) -> &'static str {
        match self {
            AwardType::Award => "AWRD",
            AwardType::Scholarship => "SCHL",
            AwardType::Prize => "PRIZ",
            AwardType::Fellowship => "FELL",
            AwardType::Bursary => "BURS",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AwardType::Award => "Award",
            AwardType::Scholarship => "Scholarship",
            AwardType::Prize => "Prize",
            AwardType::Fellowship => "Fellowship",
            AwardType::Bursary => "Bursaries",
        }
    }

    pub fn from_label(label: &str) -> Option<AwardType> {
        AWARD_TYPE_BY_LABEL.get(label).copied()
    }

    pub fn from_code(code: &str) -> Option<AwardType> {
        AWARD_TYPE_BY_CODE.get(code).copied()
    }

    /// Translate a filter value into the stored code it should match.
    ///
    /// Known labels map to their code; anything else is returned unchanged so
    /// callers may pass a raw code directly.
    pub fn resolve_filter(value: &str) -> &str {
        match AwardType::from_label(value) {
            Some(kind) => kind.code(),
            None => value,
        }
    }
}

impl fmt::Display for AwardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Learner level
// ---------------------------------------------------------------------------

/// Value of the `Eligible Learner Level` field. Stored as the label itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LearnerLevel {
    Undergraduate,
    Graduate,
}

impl LearnerLevel {
    pub const ALL: [LearnerLevel; 2] = [LearnerLevel::Undergraduate, LearnerLevel::Graduate];

    pub fn label(self) -> &'static str {
        match self {
            LearnerLevel::Undergraduate => "Undergraduate",
            LearnerLevel::Graduate => "Graduate",
        }
    }
}

impl fmt::Display for LearnerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
