//! Read access to the Finn JSON API.

mod query;
#[cfg(test)]
mod fixture;

use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

#[cfg(test)]
pub(crate) use fixture::StaticBackend;
pub(crate) use query::Query;

#[derive(Debug, thiserror::Error)]
pub(crate) enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Source of JSON records. Only GET is ever issued.
pub(crate) trait Backend: Send + Sync {
    /// Human-readable location of `path` + `query`, used in logs and errors.
    fn url(&self, path: &str, query: &Query) -> String;

    fn get_json(
        &self,
        path: &str,
        query: &Query,
    ) -> impl Future<Output = Result<Value, FetchError>> + Send;
}

/// Fetch a single record, e.g. `/json/account/42`.
pub(crate) async fn fetch_one<B, T>(backend: &B, path: &str) -> Result<T, FetchError>
where
    B: Backend,
    T: DeserializeOwned,
{
    fetch_list(backend, path, &Query::new()).await
}

/// Fetch and decode a collection endpoint.
pub(crate) async fn fetch_list<B, T>(backend: &B, path: &str, query: &Query) -> Result<T, FetchError>
where
    B: Backend,
    T: DeserializeOwned,
{
    let value = backend.get_json(path, query).await?;
    serde_json::from_value(value).map_err(|source| FetchError::Decode {
        url: backend.url(path, query),
        source,
    })
}

/// The live backend, reached over HTTP.
pub(crate) struct HttpBackend {
    client: reqwest::Client,
    base: String,
}

impl HttpBackend {
    pub(crate) fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            base: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl Backend for HttpBackend {
    fn url(&self, path: &str, query: &Query) -> String {
        format!("{}{}{}", self.base, path, query)
    }

    async fn get_json(&self, path: &str, query: &Query) -> Result<Value, FetchError> {
        let url = self.url(path, query);
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }
        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Decode { url, source })
    }
}
