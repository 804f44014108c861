use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use outreach_data::Source;
use tracing::debug;

use crate::config::ServerConfig;
use crate::error::SourceError;

pub type DataRoot = Arc<PathBuf>;

/// One GET route per source, each returning the file verbatim.
pub fn data_router(config: &ServerConfig) -> Router {
    let mut router = Router::new();
    for source in Source::ALL {
        router = router.route(
            source.route(),
            get(move |State(root): State<DataRoot>| serve_source(root, source)),
        );
    }
    router.with_state(Arc::new(config.data_root.clone()))
}

async fn serve_source(root: DataRoot, source: Source) -> Result<Response, SourceError> {
    let text = read_source(&root, source).await?;
    Ok((
        [
            (header::CONTENT_TYPE, source.content_type()),
            (header::CACHE_CONTROL, "no-store"),
        ],
        text,
    )
        .into_response())
}

/// Read a source's file in full. Missing, unreadable and non-UTF-8 files are errors.
pub async fn read_source(root: &Path, source: Source) -> Result<String, SourceError> {
    let file = source.file();
    let path = root.join(file);
    let bytes = tokio::fs::read(&path).await.map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            SourceError::Missing {
                file,
                path: path.clone(),
            }
        } else {
            SourceError::Unreadable {
                file,
                path: path.clone(),
                source: err,
            }
        }
    })?;
    let len = bytes.len();
    let text = String::from_utf8(bytes).map_err(|_| SourceError::NotUtf8 {
        file,
        path: path.clone(),
    })?;
    debug!(path = %path.display(), bytes = len, "served data file");
    Ok(text)
}
