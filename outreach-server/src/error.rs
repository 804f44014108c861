use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{} not found", .path.display())]
    Missing { file: &'static str, path: PathBuf },
    #[error("{} unreadable: {source}", .path.display())]
    Unreadable {
        file: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{} is not valid utf-8", .path.display())]
    NotUtf8 { file: &'static str, path: PathBuf },
}

impl SourceError {
    pub fn file(&self) -> &'static str {
        match self {
            SourceError::Missing { file, .. }
            | SourceError::Unreadable { file, .. }
            | SourceError::NotUtf8 { file, .. } => *file,
        }
    }
}

impl IntoResponse for SourceError {
    fn into_response(self) -> Response {
        error!(file = self.file(), error = %self, "data file read failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("failed to read {}", self.file()),
        )
            .into_response()
    }
}
