use crate::core::cache::CurriculumCache;
use crate::domain::model::{Curriculum, CurriculumStatistics, DaySegment, DaySummary};
use crate::utils::error::{CurriculumError, Result};
use std::sync::Arc;

/// The read-only interface handed to browsing, flashcard and statistics callers.
#[derive(Clone)]
pub struct CurriculumQuery {
    cache: Arc<CurriculumCache>,
}

impl CurriculumQuery {
    pub fn new(cache: Arc<CurriculumCache>) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &CurriculumCache {
        &self.cache
    }

    pub async fn curriculum(&self) -> Result<Arc<Curriculum>> {
        Ok(self.cache.get_curriculum().await?)
    }

    /// Days in ascending index order.
    pub async fn list_days(&self) -> Result<Vec<DaySummary>> {
        let curriculum = self.curriculum().await?;
        Ok(curriculum.days().map(DaySegment::summary).collect())
    }

    pub async fn get_day(&self, day_index: u32) -> Result<DaySegment> {
        let curriculum = self.curriculum().await?;
        curriculum
            .day(day_index)
            .cloned()
            .ok_or(CurriculumError::DayNotFound { day: day_index })
    }

    pub async fn get_statistics(&self) -> Result<CurriculumStatistics> {
        let curriculum = self.curriculum().await?;
        Ok(CurriculumStatistics::from_curriculum(&curriculum))
    }
}
