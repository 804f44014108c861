//! Serves the dashboard's source files over HTTP.
//!
//! Read-only: every route returns one file verbatim with caching disabled.

pub mod config;
pub mod error;
pub mod files;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::SourceError;

use axum::Router;

pub fn build_router(config: &ServerConfig) -> Router {
    files::data_router(config)
}
