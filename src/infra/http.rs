//! Backend access for the remote collections.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::domain::{FetchError, Resource};

/// Where collection bodies come from.
///
/// Implementations return the raw response body of a successful request;
/// decoding into records happens in [`fetch_collection`].
#[async_trait]
pub trait CollectionSource: Send + Sync {
    async fn fetch(&self, resource: Resource) -> Result<Vec<u8>, FetchError>;
}

/// Fetches one collection and decodes it as a JSON array of `T`.
pub async fn fetch_collection<T: DeserializeOwned>(
    source: &dyn CollectionSource,
    resource: Resource,
) -> Result<Vec<T>, FetchError> {
    let body = source.fetch(resource).await?;
    serde_json::from_slice(&body).map_err(|e| FetchError::Parse(e.to_string()))
}

/// `GET {base_url}{resource}` over reqwest.
pub struct HttpCollectionSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCollectionSource {
    /// `base_url` is used as given; callers normalise it through the config
    /// layer so it ends with `/`.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> reqwest::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, resource: Resource) -> String {
        format!("{}{}", self.base_url, resource.path())
    }
}

fn status_error(status: reqwest::StatusCode) -> FetchError {
    FetchError::Status {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
    }
}

#[async_trait]
impl CollectionSource for HttpCollectionSource {
    async fn fetch(&self, resource: Resource) -> Result<Vec<u8>, FetchError> {
        let url = self.url_for(resource);
        log::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(body.to_vec())
    }
}
