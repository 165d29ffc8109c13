use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use serde_json::Value;

use super::{Backend, FetchError, Query};

/// Canned responses keyed by path + query string, for mounting components in tests.
#[derive(Default)]
pub(crate) struct StaticBackend {
    responses: HashMap<String, Value>,
    requests: Mutex<Vec<String>>,
    delay: Option<Duration>,
}

impl StaticBackend {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(mut self, path_and_query: &str, body: Value) -> Self {
        self.responses.insert(path_and_query.to_string(), body);
        self
    }

    /// Hold every response back for `delay` before answering.
    pub(crate) fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl Backend for StaticBackend {
    fn url(&self, path: &str, query: &Query) -> String {
        format!("{path}{query}")
    }

    async fn get_json(&self, path: &str, query: &Query) -> Result<Value, FetchError> {
        let url = self.url(path, query);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.clone());
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.responses
            .get(&url)
            .cloned()
            .ok_or(FetchError::Status { url, status: 404 })
    }
}
