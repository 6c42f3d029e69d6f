use super::toml_config::TomlConfig;
use super::RuntimeConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "curriculum-etl")]
#[command(about = "Extracts a day-by-day vocabulary curriculum from a text document")]
pub struct CliConfig {
    /// Candidate document paths, tried in order (repeatable)
    #[arg(long = "source", value_name = "PATH")]
    pub sources: Vec<String>,

    /// Fetch the document over HTTP instead of reading a file
    #[arg(long, value_name = "URL")]
    pub source_url: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Word that introduces a day heading, e.g. "Dag 3 – Food"
    #[arg(long)]
    pub day_keyword: Option<String>,

    #[arg(long, help = "Give up reading the source after this many seconds")]
    pub timeout_seconds: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(long, help = "Log process memory and timings")]
    pub monitor: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List days with their titles and entry counts
    Days,
    /// Show the entries of one day
    Day { day: u32 },
    /// Show curriculum totals
    Stats,
    /// Write every entry as CSV or TSV
    Export {
        #[arg(long)]
        format: Option<String>,
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl CliConfig {
    /// Loads the TOML file (if any) and layers explicit flags on top.
    pub fn resolve(&self) -> Result<RuntimeConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        Ok(self.merge(file))
    }

    pub fn merge(&self, file: TomlConfig) -> RuntimeConfig {
        let defaults = RuntimeConfig::default();

        let source_url = self.source_url.clone().or(file.source.url);
        let source_paths = if !self.sources.is_empty() {
            self.sources.clone()
        } else if !file.source.paths.is_empty() {
            file.source.paths
        } else if source_url.is_some() {
            Vec::new()
        } else {
            defaults.source_paths
        };

        let (export_format, export_output) = match &self.command {
            Command::Export { format, output } => (format.clone(), output.clone()),
            _ => (None, None),
        };

        RuntimeConfig {
            source_paths,
            source_url,
            day_keyword: self
                .day_keyword
                .clone()
                .or(file.extraction.day_keyword)
                .unwrap_or(defaults.day_keyword),
            timeout_seconds: self.timeout_seconds.or(file.source.timeout_seconds),
            export_format: export_format
                .or(file.export.format)
                .unwrap_or(defaults.export_format),
            export_output: export_output.or(file.export.output_path),
        }
    }
}
