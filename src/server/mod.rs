//! Preview server with live reload
//!
//! Serves the generated tree. Route resolution mirrors the page state
//! machine: a request either resolves to a generated page (found) or falls
//! through to the generated 404 page (not found). A miss is a page, not an
//! error.

use anyhow::Result;
use axum::{
    body::Body,
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tower_http::services::ServeDir;

use crate::Folio;

/// Live reload script injected into HTML pages
const LIVE_RELOAD_SCRIPT: &str = r#"
<script>
(function() {
    var ws = new WebSocket('ws://' + location.host + '/__livereload');
    ws.onmessage = function(msg) {
        if (msg.data === 'reload') {
            location.reload();
        }
    };
    ws.onclose = function() {
        setTimeout(function() { location.reload(); }, 1000);
    };
})();
</script>
</body>
"#;

/// Shared server state
struct ServerState {
    public_dir: PathBuf,
    reload_tx: broadcast::Sender<()>,
    live_reload: bool,
}

/// How a request path resolved against the generated tree
enum Resolution {
    Found(PathBuf),
    NotFound,
}

/// Start the preview server
pub async fn start(folio: &Folio, ip: &str, port: u16, watch: bool, open: bool) -> Result<()> {
    let (reload_tx, _) = broadcast::channel::<()>(16);

    let state = Arc::new(ServerState {
        public_dir: folio.public_dir.clone(),
        reload_tx: reload_tx.clone(),
        live_reload: watch,
    });

    let app = Router::new()
        .route("/__livereload", get(livereload_handler))
        .fallback(fallback_handler)
        .with_state(state);

    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    if watch {
        println!("Live reload enabled. Watching for changes...");
    }
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    if watch {
        let folio_clone = folio.clone();
        tokio::spawn(async move {
            if let Err(e) = watch_and_reload(folio_clone, reload_tx).await {
                tracing::error!("File watcher error: {}", e);
            }
        });
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Watch content, static assets, and the config for changes; regenerate and
/// notify connected clients
async fn watch_and_reload(folio: Folio, reload_tx: broadcast::Sender<()>) -> Result<()> {
    let (tx, rx) = std::sync::mpsc::channel();

    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    for dir in [&folio.content_dir, &folio.static_dir] {
        if dir.exists() {
            debouncer.watcher().watch(dir, RecursiveMode::Recursive)?;
            tracing::debug!("Watching: {:?}", dir);
        }
    }

    let config_path = folio.base_dir.join("_config.yml");
    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
    }

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let relevant: Vec<_> = events
                    .iter()
                    .filter(|e| {
                        let p = e.path.to_string_lossy();
                        !p.contains(".git") && !p.contains(".DS_Store") && !p.ends_with('~')
                    })
                    .collect();

                if relevant.is_empty() {
                    continue;
                }

                for event in &relevant {
                    println!("File changed: {}", event.path.display());
                }

                println!("Regenerating...");
                match folio.generate() {
                    Ok(_) => {
                        println!("Regenerated successfully!");
                        let _ = reload_tx.send(());
                    }
                    Err(e) => {
                        // Leave the last good tree in place; bad front
                        // matter should not kill the server
                        println!("Generation failed: {e:#}");
                    }
                }
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(e) => {
                tracing::error!("Channel error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}

/// WebSocket handler for live reload
async fn livereload_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    let reload_rx = state.reload_tx.subscribe();
    ws.on_upgrade(move |socket| handle_livereload_socket(socket, reload_rx))
}

async fn handle_livereload_socket(mut socket: WebSocket, mut reload_rx: broadcast::Receiver<()>) {
    tracing::debug!("Live reload client connected");

    loop {
        tokio::select! {
            result = reload_rx.recv() => {
                match result {
                    Ok(_) => {
                        if socket.send(Message::Text("reload".to_string())).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                }
            }
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Ping(data))) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    _ => {}
                }
            }
        }
    }

    tracing::debug!("Live reload client disconnected");
}

/// Resolve a request path against the generated tree
fn resolve(public_dir: &Path, request_path: &str) -> Resolution {
    let clean = request_path.trim_start_matches('/');

    let candidate = if clean.is_empty() {
        public_dir.join("index.html")
    } else {
        let direct = public_dir.join(clean);
        if direct.is_dir() {
            direct.join("index.html")
        } else {
            direct
        }
    };

    if candidate.is_file() {
        Resolution::Found(candidate)
    } else {
        Resolution::NotFound
    }
}

/// Serve files from the generated tree; unmatched paths get the generated
/// 404 page with a 404 status
async fn fallback_handler(
    State(state): State<Arc<ServerState>>,
    request: Request<Body>,
) -> Response {
    let request_path = request.uri().path().to_string();

    match resolve(&state.public_dir, &request_path) {
        Resolution::Found(file_path) => {
            let is_html = file_path
                .extension()
                .map(|ext| ext == "html" || ext == "htm")
                .unwrap_or(false);

            if is_html && state.live_reload {
                match tokio::fs::read_to_string(&file_path).await {
                    Ok(content) => Html(inject_live_reload(&content)).into_response(),
                    Err(_) => not_found_response(&state).await,
                }
            } else {
                let mut service =
                    ServeDir::new(&state.public_dir).append_index_html_on_directories(true);
                match service.try_call(request).await {
                    Ok(response) => response.into_response(),
                    Err(_) => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
                    }
                }
            }
        }
        Resolution::NotFound => not_found_response(&state).await,
    }
}

/// The not-found branch: serve the generated 404 page
async fn not_found_response(state: &ServerState) -> Response {
    let page = state.public_dir.join("404.html");
    match tokio::fs::read_to_string(&page).await {
        Ok(content) => {
            let body = if state.live_reload {
                inject_live_reload(&content)
            } else {
                content
            };
            (StatusCode::NOT_FOUND, Html(body)).into_response()
        }
        Err(_) => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}

/// Inject the live reload script into HTML content
fn inject_live_reload(html: &str) -> String {
    if html.contains("</body>") {
        html.replace("</body>", LIVE_RELOAD_SCRIPT)
    } else {
        format!("{}{}", html, LIVE_RELOAD_SCRIPT)
    }
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_resolve_found_and_not_found() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("blog/hello")).unwrap();
        fs::write(dir.path().join("index.html"), "home").unwrap();
        fs::write(dir.path().join("blog/hello/index.html"), "post").unwrap();

        assert!(matches!(resolve(dir.path(), "/"), Resolution::Found(_)));
        assert!(matches!(
            resolve(dir.path(), "/blog/hello/"),
            Resolution::Found(_)
        ));
        assert!(matches!(
            resolve(dir.path(), "/blog/does-not-exist/"),
            Resolution::NotFound
        ));
    }

    #[test]
    fn test_inject_live_reload() {
        let html = "<html><body>hi</body></html>";
        let injected = inject_live_reload(html);
        assert!(injected.contains("__livereload"));
        assert!(injected.ends_with("</html>"));
    }
}
