use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;

use crate::document::{ContentRepresentation, DocumentIdentifier, RepresentationKind};
use crate::error::{ConfigError, LoadError};

use super::ContentSource;

/// Fetches `{base}/files/{identifier}` from a file server.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base: Url,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ConfigError> {
        let base = Url::parse(base_url).map_err(|e| ConfigError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl {
                url: base_url.to_string(),
                reason: "not a base url".to_string(),
            });
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ConfigError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base })
    }

    /// The identifier becomes one percent-encoded path segment.
    pub fn file_url(&self, identifier: &DocumentIdentifier) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("files").push(identifier.as_str());
        }
        url
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch(
        &self,
        identifier: &DocumentIdentifier,
        kind: RepresentationKind,
    ) -> Result<ContentRepresentation, LoadError> {
        let url = self.file_url(identifier);
        debug!("GET {} as {}", url, kind.as_str());

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        match kind {
            RepresentationKind::Binary => {
                let bytes = response.bytes().await?;
                Ok(ContentRepresentation::Binary(bytes.to_vec()))
            }
            RepresentationKind::Text => Ok(ContentRepresentation::Text(response.text().await?)),
        }
    }

    fn describe(&self, identifier: &DocumentIdentifier) -> String {
        self.file_url(identifier).to_string()
    }
}
