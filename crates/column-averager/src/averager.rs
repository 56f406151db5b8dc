//! Single-Pass Column Averager

use crate::accumulator::{ColumnAccumulator, MEAN_DIVISOR};
use crate::error::AveragerError;
use crate::means::ColumnMeans;
use crate::row::{classify_row, RowKind};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Input file read when no other path is configured
pub const DEFAULT_INPUT_PATH: &str = "EPC_2000_2010_new.csv";

/// Averager configuration
#[derive(Debug, Clone)]
pub struct AveragerConfig {
    /// CSV file to average
    pub input_path: PathBuf,
}

impl Default for AveragerConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
        }
    }
}

/// Computes per-column means of a "Year"-headed CSV file
pub struct ColumnAverager {
    config: AveragerConfig,
}

impl ColumnAverager {
    /// Create a new averager with given config
    pub fn new(config: AveragerConfig) -> Self {
        Self { config }
    }

    /// Configured input path
    pub fn input_path(&self) -> &Path {
        &self.config.input_path
    }

    /// Average the configured input file
    pub fn run(&self) -> Result<ColumnMeans, AveragerError> {
        compute_column_means(&self.config.input_path)
    }
}

impl Default for ColumnAverager {
    fn default() -> Self {
        Self::new(AveragerConfig::default())
    }
}

/// Average the CSV file at `path`.
///
/// The file is closed when this returns, on success or failure.
pub fn compute_column_means(path: impl AsRef<Path>) -> Result<ColumnMeans, AveragerError> {
    let path = path.as_ref();
    info!("Averaging columns of {}", path.display());

    let file = File::open(path).map_err(|source| AveragerError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    compute_column_means_from_reader(file)
}

/// Average comma-separated records read from `reader`
pub fn compute_column_means_from_reader<R: Read>(reader: R) -> Result<ColumnMeans, AveragerError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(b',')
        .from_reader(reader);

    let mut columns: Vec<String> = Vec::new();
    let mut accumulator: Option<ColumnAccumulator> = None;
    let mut record = StringRecord::new();

    while rdr.read_record(&mut record)? {
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        match classify_row(&record) {
            RowKind::Header => {
                if let Some(previous) = &accumulator {
                    warn!(
                        "Header repeated at line {}; discarding {} accumulated rows",
                        line,
                        previous.rows()
                    );
                }
                debug!("Header at line {} with {} columns", line, record.len());
                columns = record.iter().map(str::to_string).collect();
                accumulator = Some(ColumnAccumulator::new(record.len()));
            }
            RowKind::Data => {
                let acc = accumulator
                    .as_mut()
                    .ok_or(AveragerError::UninitializedAccumulator { line })?;
                acc.add_row(&record, line)?;
            }
        }
    }

    let Some(acc) = accumulator else {
        warn!("Input has no header row; returning an empty result");
        return Ok(ColumnMeans::empty());
    };
    let data_rows = acc.rows();
    if data_rows as f64 != MEAN_DIVISOR {
        warn!(
            "Input has {} data rows but means are divided by {}",
            data_rows, MEAN_DIVISOR
        );
    }

    let means = ColumnMeans::new(columns, acc.finish(), data_rows);
    info!(
        "Computed means for {} columns from {} data rows",
        means.len(),
        data_rows
    );
    Ok(means)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn means_of(input: &str) -> Result<ColumnMeans, AveragerError> {
        compute_column_means_from_reader(input.as_bytes())
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-12, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn test_two_data_rows() {
        let means = means_of("Year,A,B\nC1,10,20\nC2,30,40\n").unwrap();
        assert_close(means.values(), &[0.0, 40.0 / 11.0, 60.0 / 11.0]);
        assert_eq!(means.columns(), &["Year", "A", "B"]);
        assert_eq!(means.data_rows(), 2);
    }

    #[test]
    fn test_header_only() {
        let means = means_of("Year,A\n").unwrap();
        assert_eq!(means.values(), &[0.0, 0.0]);
        assert_eq!(means.data_rows(), 0);
    }

    #[test]
    fn test_label_column_only() {
        let means = means_of("Year\n").unwrap();
        assert_eq!(means.values(), &[0.0]);
        assert_eq!(means.columns(), &["Year"]);
    }

    #[test]
    fn test_float_and_integer_text() {
        let means = means_of("Year,A\n2000,1.5\n2001,2\n2002,-0.5e1\n").unwrap();
        assert_close(means.values(), &[0.0, (1.5 + 2.0 - 5.0) / 11.0]);
    }

    #[test]
    fn test_lowercase_year_is_data_row() {
        let err = means_of("year,A\n").unwrap_err();
        assert!(matches!(err, AveragerError::UninitializedAccumulator { line: 1 }));
    }

    #[test]
    fn test_data_before_header() {
        let err = means_of("C1,1,2\nYear,A,B\n").unwrap_err();
        assert!(matches!(err, AveragerError::UninitializedAccumulator { line: 1 }));
    }

    #[test]
    fn test_non_numeric_field() {
        let err = means_of("Year,A,B\nX,abc,2.0\n").unwrap_err();
        assert!(matches!(
            err,
            AveragerError::InvalidNumber { line: 2, column: 1, ref value } if value == "abc"
        ));
    }

    #[test]
    fn test_short_and_long_rows() {
        assert!(matches!(
            means_of("Year,A,B\nC1,1\n"),
            Err(AveragerError::ShapeMismatch { line: 2, expected: 3, found: 2 })
        ));
        assert!(matches!(
            means_of("Year,A,B\nC1,1,2,3\n"),
            Err(AveragerError::ShapeMismatch { line: 2, expected: 3, found: 4 })
        ));
    }

    #[test]
    fn test_repeated_header_resets() {
        let means = means_of("Year,A\nC1,100\nYear,A,B\nC2,11,22\n").unwrap();
        assert_close(means.values(), &[0.0, 1.0, 2.0]);
        assert_eq!(means.columns(), &["Year", "A", "B"]);
        assert_eq!(means.data_rows(), 1);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let means = means_of("Year,A\n\nC1,11\n\n").unwrap();
        assert_close(means.values(), &[0.0, 1.0]);
    }

    #[test]
    fn test_empty_input() {
        let means = means_of("").unwrap();
        assert!(means.is_empty());
        assert!(means.columns().is_empty());
        assert_eq!(means.data_rows(), 0);
        assert_eq!(means.render(crate::OutputFormat::List), "[]");
    }

    #[test]
    fn test_default_config_path() {
        let averager = ColumnAverager::default();
        assert_eq!(averager.input_path(), Path::new("EPC_2000_2010_new.csv"));
    }

    #[test]
    fn test_missing_file() {
        let err = compute_column_means("definitely/not/here.csv").unwrap_err();
        assert!(err.is_file_access());
        assert!(err.to_string().contains("definitely/not/here.csv"));
    }
}
