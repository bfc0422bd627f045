//! Shared application state for the web server.

use std::sync::Arc;

use convoca_cms::CmsClient;
use convoca_common::{Config, Result};

/// Shared state injected into every Axum handler. The CMS client is the
/// only capability handle; handlers pass it down explicitly.
#[derive(Clone)]
pub struct AppState {
    pub cms: CmsClient,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let cms = CmsClient::new(config.graphql_endpoint.clone())?;
        Ok(Self { cms, config })
    }
}

pub type SharedState = Arc<AppState>;
