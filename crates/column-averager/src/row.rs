//! Header / Data Row Classification

use csv::StringRecord;

/// Label in field 0 that marks a header row
pub const HEADER_LABEL: &str = "Year";

/// Kind of a parsed record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Establishes column count and order
    Header,
    /// Contributes values to the accumulator
    Data,
}

/// Classify a record by its first field.
///
/// Matching is exact and case-sensitive, with no trimming. An empty record
/// is a data row.
pub fn classify_row(record: &StringRecord) -> RowKind {
    match record.get(0) {
        Some(HEADER_LABEL) => RowKind::Header,
        _ => RowKind::Data,
    }
}
