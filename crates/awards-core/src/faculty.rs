//! Faculty extraction from the free-text `Administering Unit` field.
//!
//! A unit string looks like `"Faculty of Science - Department of Physics (Okanagan)"`.
//! The faculty name is the part after the first `" - "`, with any trailing
//! parenthetical qualifier removed. A field may name several units separated
//! by `;`; each is extracted independently.

const UNIT_SEPARATOR: &str = " - ";
const QUALIFIER_START: &str = " (";

/// Extract the normalised faculty name from one administering-unit entry.
///
/// Total: never fails, returns `""` only for blank or purely parenthetical
/// input.
pub fn extract_faculty(admin_unit: &str) -> &str {
    let name = match admin_unit.find(UNIT_SEPARATOR) {
        Some(pos) => &admin_unit[pos + UNIT_SEPARATOR.len()..],
        None => admin_unit,
    };
    let name = match name.find(QUALIFIER_START) {
        Some(pos) => &name[..pos],
        None => name,
    };
    name.trim()
}

/// Faculty names named by a raw `Administering Unit` field, in field order
/// and not deduplicated.
///
/// A field containing `;` yields one name per trimmed entry. Any other field
/// is extracted as-is, so the result always agrees with the faculty filter.
pub fn faculties_in(raw: &str) -> impl Iterator<Item = &str> {
    let multi = raw.contains(';');
    raw.split(';')
        .map(move |part| extract_faculty(if multi { part.trim() } else { part }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
