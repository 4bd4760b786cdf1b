//! Front-end fallback for every path outside `/api`.
//!
//! GET and HEAD requests are first offered to the static file directory;
//! anything it cannot serve, and every other method, receives the SPA shell
//! so the client-side router can take over. Unmatched `/api` paths get a
//! bare 404.

use super::AppState;
use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Response},
};
use std::path::Path;
use tower::ServiceExt;
use tower_http::services::ServeDir;
use tracing::{debug, warn};

/// Shell served when `index.html` is missing from the public directory.
pub const BUILTIN_SHELL: &str = include_str!("../../public/index.html");

/// Whether a request path belongs to the reserved API namespace.
#[must_use]
pub fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}

/// Reads `index.html` from `public_dir`, falling back to [`BUILTIN_SHELL`].
pub async fn load_shell(public_dir: &Path) -> String {
    let index = public_dir.join("index.html");
    match tokio::fs::read_to_string(&index).await {
        Ok(shell) => {
            debug!("Loaded SPA shell from {:?}", index);
            shell
        }
        Err(e) => {
            warn!("Could not read {:?} ({}); using built-in shell.", index, e);
            BUILTIN_SHELL.to_string()
        }
    }
}

/// Router fallback handler.
pub async fn spa_fallback(State(state): State<AppState>, request: Request) -> Response {
    if is_api_path(request.uri().path()) {
        return StatusCode::NOT_FOUND.into_response();
    }

    if matches!(*request.method(), Method::GET | Method::HEAD) {
        match ServeDir::new(&*state.public_dir).oneshot(request).await {
            Ok(response) if response.status().is_success() => return response.into_response(),
            Ok(_) => {}
            Err(never) => match never {},
        }
    }

    Html(state.shell.to_string()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_api_path() {
        assert!(is_api_path("/api"));
        assert!(is_api_path("/api/products"));
        assert!(is_api_path("/api/unknown-route"));
        assert!(!is_api_path("/"));
        assert!(!is_api_path("/dashboard"));
        assert!(!is_api_path("/apiary"));
    }

    #[tokio::test]
    async fn test_load_shell_falls_back_to_builtin() {
        let shell = load_shell(Path::new("/nonexistent/public")).await;
        assert_eq!(shell, BUILTIN_SHELL);
    }
}
