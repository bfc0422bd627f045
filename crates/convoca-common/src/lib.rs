//! convoca-common — Shared error taxonomy and configuration used across all Convoca crates.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{ConvocaError, Result};
