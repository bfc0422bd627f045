//! Strapi GraphQL client.
//! One network round trip per call: no cache, no retry. Timeouts and
//! store-side errors surface as fetch errors with the cause attached.

use std::time::Duration;

use convoca_common::error::{ConvocaError, Result};
use reqwest::{header, Client, ClientBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, instrument};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

impl<T> GraphQlResponse<T> {
    fn into_result(self) -> Result<T> {
        if let Some(err) = self.errors.into_iter().next() {
            return Err(ConvocaError::Query(err.message));
        }
        self.data
            .ok_or_else(|| ConvocaError::Query("response contained no data".to_string()))
    }
}

/// HTTP client bound to one GraphQL endpoint. Cheap to clone; holds no
/// request-scoped state.
#[derive(Debug, Clone)]
pub struct CmsClient {
    http: Client,
    endpoint: String,
}

impl CmsClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let http = ClientBuilder::new().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// Execute one query with variables and decode the `data` payload.
    #[instrument(skip(self, query, variables), fields(endpoint = %self.endpoint))]
    pub async fn execute<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<T> {
        let resp = self
            .http
            .post(&self.endpoint)
            .header(header::CACHE_CONTROL, "no-store")
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ConvocaError::Status(status));
        }

        let body: GraphQlResponse<T> = resp.json().await?;
        debug!(has_errors = !body.errors.is_empty(), "CMS query completed");
        body.into_result()
    }
}
