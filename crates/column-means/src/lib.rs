//! Column Means Runner
//!
//! Loads settings, installs logging and prints the column means of the
//! configured CSV table.

use anyhow::Context;
use column_averager::{AveragerConfig, ColumnAverager, OutputFormat, DEFAULT_INPUT_PATH};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Settings file looked up in the working directory (any extension `config` knows)
pub const SETTINGS_FILE: &str = "column-means";

/// Prefix of environment overrides, e.g. `COLUMN_MEANS_INPUT_PATH`
pub const ENV_PREFIX: &str = "COLUMN_MEANS";

/// Runner settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// CSV table to average
    pub input_path: PathBuf,
    /// Output rendering
    pub format: OutputFormat,
    /// Maximum tracing level written to stderr
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            format: OutputFormat::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load from `column-means.*` in the working directory and the process environment
    pub fn load() -> anyhow::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(SETTINGS_FILE).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("Failed to load settings")?;

        config
            .try_deserialize()
            .context("Failed to parse settings")
    }

    /// Load from an explicit settings file and environment map
    pub fn from_sources(
        file: Option<&Path>,
        env: HashMap<String, String>,
    ) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path));
        }
        let config = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).source(Some(env)))
            .build()
            .context("Failed to load settings")?;

        config
            .try_deserialize()
            .context("Failed to parse settings")
    }

    /// Parsed log level
    pub fn level(&self) -> anyhow::Result<Level> {
        Level::from_str(&self.log_level)
            .map_err(|_| anyhow::anyhow!("Invalid log level: {}", self.log_level))
    }
}

/// Initialize logging on stderr, leaving stdout for the result
pub fn init_logging(level: Level) -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")
}

/// Compute and render the column means described by `settings`
pub fn run(settings: &Settings) -> anyhow::Result<String> {
    let averager = ColumnAverager::new(AveragerConfig {
        input_path: settings.input_path.clone(),
    });

    let means = averager
        .run()
        .with_context(|| format!("Failed to average {}", settings.input_path.display()))?;
    info!(
        "Rendering {} column means as {}",
        means.len(),
        settings.format
    );

    Ok(means.render(settings.format))
}
