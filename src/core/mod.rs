pub mod accumulator;
pub mod cache;
pub mod classifier;
pub mod export;
pub mod extractor;
pub mod query;
pub mod resolver;

pub use crate::domain::model::{Curriculum, CurriculumStatistics, DaySegment, DaySummary, VocabularyEntry};
pub use crate::domain::ports::{ConfigProvider, DocumentProvider};
pub use crate::utils::error::Result;
