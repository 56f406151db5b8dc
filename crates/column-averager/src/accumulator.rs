//! Per-Column Running Sums

use crate::error::AveragerError;
use csv::StringRecord;

/// Fixed divisor applied to every column sum.
///
/// The source dataset covers the years 2000 to 2010, so the mean is taken over
/// 11 rows no matter how many data rows the input actually holds.
pub const MEAN_DIVISOR: f64 = 11.0;

/// Running sum per column, sized by the header row
#[derive(Debug, Clone)]
pub struct ColumnAccumulator {
    /// One slot per header field. Slot 0 is the label column and stays 0.0
    sums: Vec<f64>,
    /// Data rows added since creation
    rows: usize,
}

impl ColumnAccumulator {
    /// Create a zeroed accumulator with one slot per header field
    pub fn new(width: usize) -> Self {
        Self {
            sums: vec![0.0; width],
            rows: 0,
        }
    }

    /// Number of columns, including the label column
    pub fn width(&self) -> usize {
        self.sums.len()
    }

    /// Number of data rows accumulated
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Current sums, in header order
    pub fn sums(&self) -> &[f64] {
        &self.sums
    }

    /// Add the value fields of one data row.
    ///
    /// Fields 1.. are parsed after trimming surrounding whitespace; field 0 is
    /// never read. The row must be exactly as wide as the header. Nothing is
    /// added unless every field parses.
    pub fn add_row(&mut self, record: &StringRecord, line: u64) -> Result<(), AveragerError> {
        if record.len() != self.sums.len() {
            return Err(AveragerError::ShapeMismatch {
                line,
                expected: self.sums.len(),
                found: record.len(),
            });
        }

        let mut values = Vec::with_capacity(record.len().saturating_sub(1));
        for (column, field) in record.iter().enumerate().skip(1) {
            let value = field
                .trim()
                .parse::<f64>()
                .map_err(|_| AveragerError::InvalidNumber {
                    line,
                    column,
                    value: field.to_string(),
                })?;
            values.push(value);
        }

        for (sum, value) in self.sums.iter_mut().skip(1).zip(values) {
            *sum += value;
        }
        self.rows += 1;
        Ok(())
    }

    /// Divide every slot, including slot 0, by [`MEAN_DIVISOR`]
    pub fn finish(self) -> Vec<f64> {
        self.sums.into_iter().map(|sum| sum / MEAN_DIVISOR).collect()
    }
}
