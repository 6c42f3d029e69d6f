use crate::core::classifier::DEFAULT_DAY_KEYWORD;
use crate::core::ConfigProvider;
use crate::utils::error::{CurriculumError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

static ENV_VAR_PATTERN: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub paths: Vec<String>,
    pub url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionConfig {
    pub day_keyword: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    pub format: Option<String>,
    pub output_path: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CurriculumError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        let re = ENV_VAR_PATTERN.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        super::validate_settings(
            &self.source.paths,
            self.source.url.as_deref(),
            self.day_keyword(),
            self.source.timeout_seconds,
            self.export.format.as_deref(),
        )
    }
}

impl ConfigProvider for TomlConfig {
    fn source_paths(&self) -> &[String] {
        &self.source.paths
    }

    fn source_url(&self) -> Option<&str> {
        self.source.url.as_deref()
    }

    fn day_keyword(&self) -> &str {
        self.extraction
            .day_keyword
            .as_deref()
            .unwrap_or(DEFAULT_DAY_KEYWORD)
    }

    fn fetch_timeout(&self) -> Option<Duration> {
        self.source.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
