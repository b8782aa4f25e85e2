//! Static award data used across harnesses.

use awards_core::RecordSet;

/// A small data file in the shape the loader expects. Includes two malformed
/// elements (a string and a number) that must be skipped.
pub const AWARDS_JSON: &str = r#"[
  {
    "Award Name": "Engineering Scholarship",
    "Award Number": "1001",
    "Award Cycle": "2025W",
    "Award Type": "SCHL",
    "Administering Unit": "Faculty of Applied Science - Engineering (Vancouver)",
    "Eligible Learner Level": "Undergraduate",
    "Application Type (Award Profile)": "Automatic",
    "Campus": "V",
    "Award Description": "For students entering second year engineering."
  },
  {
    "Award Name": "Okanagan Physics Prize",
    "Award Number": 1002,
    "Award Type": "PRIZ",
    "Administering Unit": "Faculty of Science - Department of Physics (Okanagan)",
    "Eligible Learner Level": "Undergraduate",
    "Campus": "O",
    "Award Description": "Top standing in PHYS 112."
  },
  "not a record",
  {
    "Award Name": "Graduate Research Fellowship",
    "Award Number": "1003",
    "Award Type": "FELL",
    "Administering Unit": "Faculty of Graduate Studies - Graduate Studies; Faculty of Science - Department of Physics",
    "Eligible Learner Level": "Graduate",
    "Campus": "A",
    "Award Description": "Supports thesis research."
  },
  {
    "Award Name": "Emergency Bursary",
    "Award Number": "1004",
    "Award Type": "BURS",
    "Administering Unit": "Enrolment Services",
    "Eligible Learner Level": "Undergraduate",
    "Campus": "A",
    "Award Description": "Financial need."
  },
  {
    "Award Name": "Music Performance Award",
    "Award Number": "1005",
    "Award Type": "AWRD",
    "Administering Unit": "Faculty of Arts - School of Music",
    "Eligible Learner Level": "Undergraduate",
    "Campus": "V",
    "Award Description": null
  },
  42,
  {
    "Award Name": "Unassigned Award",
    "Award Number": "1006",
    "Award Type": "AWRD"
  }
]"#;

/// The fixture above as a loaded record set.
pub fn fixture_set() -> RecordSet {
    RecordSet::from_json_str(AWARDS_JSON).expect("fixture JSON must parse")
}

/// Write `json` to a fresh temp file and return its handle.
pub fn data_file(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("create temp data file");
    std::io::Write::write_all(&mut file, json.as_bytes()).expect("write temp data file");
    file
}
