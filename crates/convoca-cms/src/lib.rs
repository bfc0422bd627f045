//! convoca-cms — Content resolution core for the Convoca site.
//! Provides:
//!   - serde models for the Strapi GraphQL response shapes
//!   - a GraphQL content client (one uncached round trip per call)
//!   - the `ContentStore` seam so pages can be tested without a live CMS
//!   - the route-key resolver (slug / department / active-window modes)
//!   - SEO metadata derivation with fallback precedence

pub mod client;
pub mod model;
pub mod queries;
pub mod resolver;
pub mod seo;
pub mod store;

pub use client::CmsClient;
pub use resolver::{resolve, Lookup, Resolution};
pub use store::ContentStore;
