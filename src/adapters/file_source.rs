use crate::domain::ports::DocumentProvider;
use crate::utils::error::ExtractionError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Reads the first candidate path that exists.
///
/// Deployments put the document in different places (next to the binary, in
/// the working directory, in a mounted volume), so several are tried in order.
#[derive(Debug, Clone)]
pub struct FileDocumentProvider {
    candidates: Vec<PathBuf>,
}

impl FileDocumentProvider {
    pub fn new<P: AsRef<Path>>(candidates: impl IntoIterator<Item = P>) -> Self {
        Self {
            candidates: candidates
                .into_iter()
                .map(|p| p.as_ref().to_path_buf())
                .collect(),
        }
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    async fn locate(&self) -> Option<&Path> {
        for candidate in &self.candidates {
            if tokio::fs::try_exists(candidate).await.unwrap_or(false) {
                return Some(candidate.as_path());
            }
            tracing::debug!("Source candidate not found: {}", candidate.display());
        }
        None
    }
}

#[async_trait]
impl DocumentProvider for FileDocumentProvider {
    fn location(&self) -> String {
        self.candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    async fn fetch(&self) -> Result<Vec<u8>, ExtractionError> {
        let Some(path) = self.locate().await else {
            tracing::error!("Curriculum document not found. Tried: {}", self.location());
            return Err(ExtractionError::SourceUnavailable {
                location: self.location(),
            });
        };

        tracing::debug!("Reading curriculum document from {}", path.display());
        tokio::fs::read(path)
            .await
            .map_err(|e| ExtractionError::SourceUnreadable {
                location: path.display().to_string(),
                reason: e.to_string(),
            })
    }
}
