use crate::domain::ports::DocumentProvider;
use crate::utils::error::ExtractionError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

#[derive(Debug, Clone)]
pub struct HttpDocumentProvider {
    client: Client,
    url: String,
}

impl HttpDocumentProvider {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl DocumentProvider for HttpDocumentProvider {
    fn location(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<u8>, ExtractionError> {
        tracing::debug!("Fetching curriculum document from: {}", self.url);

        let response = self.client.get(&self.url).send().await.map_err(|e| {
            tracing::warn!("Request to {} failed: {}", self.url, e);
            ExtractionError::SourceUnavailable {
                location: self.url.clone(),
            }
        })?;

        let status = response.status();
        tracing::debug!("Source response status: {}", status);

        if status == StatusCode::NOT_FOUND {
            return Err(ExtractionError::SourceUnavailable {
                location: self.url.clone(),
            });
        }
        if !status.is_success() {
            return Err(ExtractionError::SourceUnreadable {
                location: self.url.clone(),
                reason: format!("unexpected HTTP status {}", status),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ExtractionError::SourceUnreadable {
                location: self.url.clone(),
                reason: e.to_string(),
            })?;

        Ok(body.to_vec())
    }
}
