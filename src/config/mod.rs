#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::classifier::DEFAULT_DAY_KEYWORD;
use crate::core::export::ExportFormat;
use crate::core::ConfigProvider;
use crate::utils::error::{CurriculumError, Result};
use crate::utils::validation::{self, Validate};
use std::time::Duration;

pub const DEFAULT_SOURCE_PATH: &str = "japwords.txt";

/// Effective settings after merging the TOML file and command line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub source_paths: Vec<String>,
    pub source_url: Option<String>,
    pub day_keyword: String,
    pub timeout_seconds: Option<u64>,
    pub export_format: String,
    pub export_output: Option<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            source_paths: vec![DEFAULT_SOURCE_PATH.to_string()],
            source_url: None,
            day_keyword: DEFAULT_DAY_KEYWORD.to_string(),
            timeout_seconds: None,
            export_format: "csv".to_string(),
            export_output: None,
        }
    }
}

impl RuntimeConfig {
    pub fn export_format(&self) -> Result<ExportFormat> {
        self.export_format.parse()
    }
}

impl ConfigProvider for RuntimeConfig {
    fn source_paths(&self) -> &[String] {
        &self.source_paths
    }

    fn source_url(&self) -> Option<&str> {
        self.source_url.as_deref()
    }

    fn day_keyword(&self) -> &str {
        &self.day_keyword
    }

    fn fetch_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for RuntimeConfig {
    fn validate(&self) -> Result<()> {
        validate_settings(
            &self.source_paths,
            self.source_url.as_deref(),
            &self.day_keyword,
            self.timeout_seconds,
            Some(&self.export_format),
        )
    }
}

pub(crate) fn validate_settings(
    paths: &[String],
    url: Option<&str>,
    day_keyword: &str,
    timeout_seconds: Option<u64>,
    export_format: Option<&str>,
) -> Result<()> {
    if paths.is_empty() && url.is_none() {
        return Err(CurriculumError::MissingConfigError {
            field: "source.paths or source.url".to_string(),
        });
    }
    for path in paths {
        validation::validate_path("source.paths", path)?;
    }
    if let Some(url) = url {
        validation::validate_url("source.url", url)?;
    }
    validation::validate_keyword("extraction.day_keyword", day_keyword)?;
    if let Some(seconds) = timeout_seconds {
        validation::validate_positive_number("source.timeout_seconds", seconds, 1)?;
    }
    if let Some(format) = export_format {
        validation::validate_one_of("export.format", format, &ExportFormat::NAMES)?;
    }
    Ok(())
}
