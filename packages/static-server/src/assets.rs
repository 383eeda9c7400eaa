use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use crate::config::Config;
use crate::mime;

/// Serve a file from the asset root, falling back to the entry document
/// for the root path and for anything that does not resolve to a file
/// (SPA routing). Only a missing entry document yields a 404.
pub async fn serve_asset(State(config): State<Config>, uri: Uri) -> Response {
    let path = uri.path();

    if let Some(file_path) = resolve(&config.static_dir, path) {
        if let Ok(content) = fs::read(&file_path).await {
            debug!("Serving {} ({} bytes)", file_path.display(), content.len());
            return file_response(&file_path, content);
        }
    }

    serve_fallback(&config).await
}

async fn serve_fallback(config: &Config) -> Response {
    let index_path = Path::new(&config.static_dir).join(&config.index_file);
    match fs::read(&index_path).await {
        Ok(content) => file_response(&index_path, content),
        Err(e) => {
            warn!(
                "Entry document missing at '{}': {}",
                index_path.display(),
                e
            );
            (StatusCode::NOT_FOUND, "Not Found").into_response()
        }
    }
}

/// Resolve a request path under the asset root, refusing anything that
/// would escape it. Returns `None` when the path does not name a
/// readable file inside the root.
fn resolve(static_dir: &str, path: &str) -> Option<PathBuf> {
    let relative = path.trim_start_matches('/');

    if relative.is_empty() {
        return None;
    }

    // Reject traversal before touching the filesystem
    if relative.split('/').any(|segment| segment == "..") {
        warn!("Path traversal attempt blocked: {}", path);
        return None;
    }

    let root = Path::new(static_dir).canonicalize().ok()?;
    let candidate = root.join(relative).canonicalize().ok()?;

    // Symlinks could still point outside the root
    if !candidate.starts_with(&root) {
        warn!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            candidate.display()
        );
        return None;
    }

    candidate.is_file().then_some(candidate)
}

fn file_response(path: &Path, content: Vec<u8>) -> Response {
    let content_type = mime::content_type(path.extension().and_then(|e| e.to_str()));
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, content_type)],
        content,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;

    fn fixture_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("static-server-{}-{}", name, std::process::id()));
        let _ = std_fs::remove_dir_all(&dir);
        std_fs::create_dir_all(&dir).unwrap();
        std_fs::write(dir.join("index.html"), "<html>entry</html>").unwrap();
        std_fs::write(dir.join("app.js"), "console.log('app');").unwrap();
        dir
    }

    #[test]
    fn test_resolve_existing_file() {
        let dir = fixture_dir("resolve");
        let resolved = resolve(dir.to_str().unwrap(), "/app.js").unwrap();
        assert!(resolved.ends_with("app.js"));
    }

    #[test]
    fn test_resolve_missing_file() {
        let dir = fixture_dir("missing");
        assert!(resolve(dir.to_str().unwrap(), "/missing/path.js").is_none());
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let dir = fixture_dir("traversal");
        assert!(resolve(dir.to_str().unwrap(), "/../../etc/passwd").is_none());
        assert!(resolve(dir.to_str().unwrap(), "/a/../../escape").is_none());
    }

    #[test]
    fn test_resolve_root_path_is_fallback() {
        let dir = fixture_dir("root");
        assert!(resolve(dir.to_str().unwrap(), "/").is_none());
    }
}
