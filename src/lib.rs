pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use adapters::{FileDocumentProvider, HttpDocumentProvider};
pub use app::build_query;
pub use config::RuntimeConfig;
pub use crate::core::{cache::CurriculumCache, extractor::CurriculumExtractor, query::CurriculumQuery};
pub use domain::model::{Curriculum, CurriculumStatistics, DaySegment, DaySummary, VocabularyEntry};
pub use utils::error::{CurriculumError, ExtractionError, Result};
