// Composition root: wires one provider and one cache behind the query facade.

use crate::adapters::{FileDocumentProvider, HttpDocumentProvider};
use crate::core::cache::CurriculumCache;
use crate::core::extractor::CurriculumExtractor;
use crate::core::query::CurriculumQuery;
use crate::core::{ConfigProvider, DocumentProvider};
use crate::utils::error::Result;
use std::sync::Arc;

pub fn build_provider(config: &impl ConfigProvider) -> Arc<dyn DocumentProvider> {
    match config.source_url() {
        Some(url) => {
            tracing::debug!("Using HTTP source: {}", url);
            Arc::new(HttpDocumentProvider::new(url))
        }
        None => {
            tracing::debug!("Using file source candidates: {:?}", config.source_paths());
            Arc::new(FileDocumentProvider::new(config.source_paths()))
        }
    }
}

pub fn build_query(config: &impl ConfigProvider) -> Result<CurriculumQuery> {
    let extractor = CurriculumExtractor::new(config.day_keyword())?;
    let cache = CurriculumCache::new(build_provider(config), extractor)
        .with_fetch_timeout(config.fetch_timeout());
    Ok(CurriculumQuery::new(Arc::new(cache)))
}
