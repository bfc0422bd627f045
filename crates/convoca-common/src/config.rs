//! Environment configuration for Convoca.
//! Reads process environment (with an optional `.env` file via dotenvy):
//!   STRAPI_GRAPHQL_URL — CMS GraphQL endpoint (default http://localhost:1337/graphql)
//!   STRAPI_URL         — base URL for media paths returned by the CMS
//!   SITE_URL           — public base URL for canonical / Open Graph URLs
//!   BIND_ADDR          — listen address (default 127.0.0.1:3000)

use std::env;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub graphql_endpoint: String,
    pub media_base_url: String,
    pub site_base_url: String,
    pub bind_addr: String,
}

impl Config {
    /// Load configuration from the environment. A missing base URL is not an
    /// error: generated URLs simply carry an empty prefix.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self {
            graphql_endpoint: env_or("STRAPI_GRAPHQL_URL", "http://localhost:1337/graphql"),
            media_base_url: env::var("STRAPI_URL").unwrap_or_default(),
            site_base_url: env::var("SITE_URL").unwrap_or_default(),
            bind_addr: env_or("BIND_ADDR", "127.0.0.1:3000"),
        }
    }

    /// Absolute URL for a media path returned by the CMS (`/uploads/...`).
    pub fn media_url(&self, path: &str) -> String {
        format!("{}{}", self.media_base_url, path)
    }

    /// Absolute URL for a site-local path (`/departamento/lima`).
    pub fn site_url(&self, path: &str) -> String {
        format!("{}{}", self.site_base_url, path)
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_url_prefixes_relative_paths() {
        let cfg = Config {
            media_base_url: "http://cms.example".to_string(),
            ..Default::default()
        };
        assert_eq!(cfg.media_url("/uploads/x.png"), "http://cms.example/uploads/x.png");
    }

    #[test]
    fn missing_base_urls_yield_empty_prefix() {
        let cfg = Config::default();
        assert_eq!(cfg.media_url("/uploads/x.png"), "/uploads/x.png");
        assert_eq!(cfg.site_url("/beca-2025"), "/beca-2025");
    }
}
