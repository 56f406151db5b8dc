//! Column Means Result and Rendering

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a [`ColumnMeans`] is turned into text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bracketed list, e.g. `[0.0, 3.6363636363636362]`
    #[default]
    List,
    /// Header line followed by a value line
    Csv,
    /// JSON object with columns, values and row count
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "list" => Ok(OutputFormat::List),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::List => "list",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// Per-column means, in header order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnMeans {
    /// Header field names; the first is the "Year" label column
    columns: Vec<String>,
    /// Mean per column; the first is always 0.0
    values: Vec<f64>,
    /// Data rows that contributed to the sums
    data_rows: usize,
}

impl ColumnMeans {
    pub(crate) fn new(columns: Vec<String>, values: Vec<f64>, data_rows: usize) -> Self {
        debug_assert_eq!(columns.len(), values.len());
        Self {
            columns,
            values,
            data_rows,
        }
    }

    /// Result of an input without any header row
    pub(crate) fn empty() -> Self {
        Self::default()
    }

    /// Mean vector, including the leading label-column placeholder
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Header field names
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of data rows that were summed
    pub fn data_rows(&self) -> usize {
        self.data_rows
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Mean of the first column named `column`
    pub fn get(&self, column: &str) -> Option<f64> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| self.values[i])
    }

    /// `(column, mean)` pairs in header order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Consume into the bare mean vector
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Render as text in the given format
    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::List => format!("{:?}", self.values),
            OutputFormat::Csv => {
                let values: Vec<String> = self.values.iter().map(|v| format!("{:?}", v)).collect();
                format!("{}\n{}", self.columns.join(","), values.join(","))
            }
            OutputFormat::Json => serde_json::json!({
                "columns": self.columns,
                "values": self.values,
                "data_rows": self.data_rows,
            })
            .to_string(),
        }
    }
}
