//! Column Averaging
//!
//! Reads a "Year"-headed CSV table and computes the mean of every column,
//! dividing each column sum by a fixed count of 11 rows.

mod accumulator;
mod averager;
mod error;
mod means;
mod row;

pub use accumulator::{ColumnAccumulator, MEAN_DIVISOR};
pub use averager::{
    compute_column_means, compute_column_means_from_reader, AveragerConfig, ColumnAverager,
    DEFAULT_INPUT_PATH,
};
pub use error::AveragerError;
pub use means::{ColumnMeans, OutputFormat};
pub use row::{classify_row, RowKind, HEADER_LABEL};
