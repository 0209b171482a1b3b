//! Static file server for browser fixtures.
//!
//! Serves a fixture's `dist/` directory on a local port for exactly one render. The server is
//! owned by the render call and shut down when the handle is closed or dropped, on every exit
//! path including assertion failures.

use std::net::SocketAddr;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use super::error::HarnessError;

/// Handle to a running static server.
pub struct StaticServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl StaticServer {
    /// Bind `127.0.0.1:<port>` and serve `root`. Port 0 picks an ephemeral port.
    pub async fn bind(root: impl Into<PathBuf>, port: u16) -> Result<Self, HarnessError> {
        let root = root.into();
        let listener = TcpListener::bind(("127.0.0.1", port))
            .await
            .map_err(|source| HarnessError::Bind { port, source })?;
        let addr = listener
            .local_addr()
            .map_err(|source| HarnessError::Bind { port, source })?;

        let app = router(root.clone());
        let (tx, rx) = oneshot::channel::<()>();
        let task = tokio::spawn(async move {
            let shutdown = async {
                let _ = rx.await;
            };
            if let Err(e) = axum::serve(listener, app).with_graceful_shutdown(shutdown).await {
                tracing::warn!("static server error: {}", e);
            }
        });

        tracing::debug!(%addr, root = %root.display(), "serving bundle");
        Ok(Self {
            addr,
            shutdown: Some(tx),
            task: Some(task),
        })
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Root URL of the served directory.
    pub fn url(&self) -> String {
        format!("http://localhost:{}/", self.addr.port())
    }

    /// Stop accepting connections and wait for the server task to finish.
    pub async fn close(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::warn!("static server task ended abnormally: {}", e);
            }
        }
        tracing::debug!(addr = %self.addr, "static server closed");
    }
}

impl Drop for StaticServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

fn router(root: PathBuf) -> Router {
    Router::new().fallback(serve_file).with_state(Arc::new(root))
}

async fn serve_file(State(root): State<Arc<PathBuf>>, uri: Uri) -> Response {
    let Some(mut path) = resolve(&root, uri.path()) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    if tokio::fs::metadata(&path).await.is_ok_and(|m| m.is_dir()) {
        path.push("index.html");
    }

    match tokio::fs::read(&path).await {
        Ok(body) => ([(header::CONTENT_TYPE, content_type(&path))], body).into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Map a request path onto `root`, refusing anything that would escape it.
pub fn resolve(root: &Path, request_path: &str) -> Option<PathBuf> {
    let decoded = percent_decode(request_path)?;
    let mut path = root.to_path_buf();
    for segment in decoded.split('/') {
        if segment.is_empty() || segment == "." {
            continue;
        }
        if segment.contains('\\') {
            return None;
        }
        match Path::new(segment).components().next() {
            Some(Component::Normal(_)) => path.push(segment),
            _ => return None,
        }
    }
    Some(path)
}

/// Decode `%XX` escapes. `None` for malformed escapes or non-UTF-8 results.
fn percent_decode(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = input.get(i + 1..i + 3)?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

pub fn content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "html" | "htm" => "text/html; charset=utf-8",
        "js" | "mjs" => "text/javascript; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "json" | "map" => "application/json",
        "txt" => "text/plain; charset=utf-8",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "ico" => "image/x-icon",
        "wasm" => "application/wasm",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    async fn get(port: u16, path: &str) -> String {
        let mut stream = TcpStream::connect(("127.0.0.1", port)).await.unwrap();
        let request = format!("GET {} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n", path);
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    #[test]
    fn test_resolve_plain_and_nested() {
        let root = Path::new("/srv/dist");
        assert_eq!(resolve(root, "/"), Some(PathBuf::from("/srv/dist")));
        assert_eq!(
            resolve(root, "/assets/example1.jpg"),
            Some(PathBuf::from("/srv/dist/assets/example1.jpg"))
        );
        assert_eq!(resolve(root, "/a/./b.js"), Some(PathBuf::from("/srv/dist/a/b.js")));
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let root = Path::new("/srv/dist");
        assert_eq!(resolve(root, "/../secret"), None);
        assert_eq!(resolve(root, "/assets/%2e%2e/%2e%2e/etc/passwd"), None);
        assert_eq!(resolve(root, "/a%5c..%5cb"), None);
    }

    #[test]
    fn test_resolve_decodes_escapes() {
        let root = Path::new("/srv");
        assert_eq!(resolve(root, "/HELLO%20WORLD"), Some(PathBuf::from("/srv/HELLO WORLD")));
        assert_eq!(resolve(root, "/bad%zz"), None);
        assert_eq!(resolve(root, "/cut%2"), None);
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type(Path::new("index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("main.js")), "text/javascript; charset=utf-8");
        assert_eq!(content_type(Path::new("assets/example3.SVG")), "image/svg+xml");
        assert_eq!(content_type(Path::new("blob")), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_serves_index_and_404() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<div id=\"hello\">hi</div>").unwrap();
        std::fs::create_dir_all(dir.path().join("assets")).unwrap();
        std::fs::write(dir.path().join("assets/example.txt"), "HELLO WORLD\n").unwrap();

        let server = StaticServer::bind(dir.path(), 0).await.unwrap();
        let port = server.port();
        assert_eq!(server.url(), format!("http://localhost:{}/", port));

        let index = get(port, "/").await;
        assert!(index.starts_with("HTTP/1.1 200"), "{}", index);
        assert!(index.contains("text/html"));
        assert!(index.ends_with("<div id=\"hello\">hi</div>"));

        let asset = get(port, "/assets/example.txt").await;
        assert!(asset.starts_with("HTTP/1.1 200"));
        assert!(asset.ends_with("HELLO WORLD\n"));

        let missing = get(port, "/nope.js").await;
        assert!(missing.starts_with("HTTP/1.1 404"));

        server.close().await;
        assert!(TcpStream::connect(("127.0.0.1", port)).await.is_err());
    }

    #[tokio::test]
    async fn test_port_in_use_is_bind_error() {
        let dir = tempfile::tempdir().unwrap();
        let first = StaticServer::bind(dir.path(), 0).await.unwrap();
        let err = StaticServer::bind(dir.path(), first.port()).await.err().unwrap();
        assert!(matches!(err, HarnessError::Bind { .. }));
        first.close().await;
    }
}
