//! Static client serving.
//!
//! Serves the browser client from a configurable directory. Non-file paths
//! fall back to `index.html`.

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::warn;

use crate::app::AppState;

/// Serve a static asset, falling back to `index.html` for client routes.
pub async fn serve_static(State(state): State<AppState>, uri: Uri) -> Response {
    let base_dir = PathBuf::from(&state.config.frontend.dir);

    if !base_dir.exists() {
        warn!(dir = %base_dir.display(), "Frontend directory does not exist");
        return (StatusCode::SERVICE_UNAVAILABLE, "Frontend not available").into_response();
    }

    let path = uri.path().trim_start_matches('/');

    let file_path = if path.is_empty() {
        base_dir.join("index.html")
    } else {
        base_dir.join(path)
    };

    // Reject any request escaping the frontend directory
    if !is_safe_path(&file_path) {
        warn!(requested_path = %file_path.display(), "Path traversal attempt rejected");
        return StatusCode::FORBIDDEN.into_response();
    }

    if let Ok(response) = serve_file(&file_path).await {
        return response;
    }

    // Fall back to index.html for extension-less paths
    if !path.contains('.') {
        if let Ok(response) = serve_file(&base_dir.join("index.html")).await {
            return response;
        }
    }

    StatusCode::NOT_FOUND.into_response()
}

async fn serve_file(path: &Path) -> Result<Response, std::io::Error> {
    let content = fs::read(path).await?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, mime.to_string())],
        content,
    )
        .into_response())
}

/// True when the path contains no parent-directory components.
fn is_safe_path(path: &Path) -> bool {
    path.components()
        .all(|c| !matches!(c, Component::ParentDir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_path_accepts_normal_files() {
        assert!(is_safe_path(Path::new("static/index.html")));
        assert!(is_safe_path(Path::new("static/app.js")));
    }

    #[test]
    fn test_safe_path_rejects_traversal() {
        assert!(!is_safe_path(Path::new("static/../secrets.toml")));
        assert!(!is_safe_path(Path::new("static/../../etc/passwd")));
    }
}
