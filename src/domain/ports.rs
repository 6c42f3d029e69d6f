use crate::utils::error::ExtractionError;
use async_trait::async_trait;
use std::time::Duration;

/// Supplies the raw bytes of the curriculum document.
#[async_trait]
pub trait DocumentProvider: Send + Sync {
    /// Human-readable location, used in logs and error messages.
    fn location(&self) -> String;

    async fn fetch(&self) -> Result<Vec<u8>, ExtractionError>;
}

pub trait ConfigProvider: Send + Sync {
    /// Candidate file paths, tried in order.
    fn source_paths(&self) -> &[String];
    /// Takes precedence over `source_paths` when set.
    fn source_url(&self) -> Option<&str>;
    fn day_keyword(&self) -> &str;
    fn fetch_timeout(&self) -> Option<Duration>;
}
