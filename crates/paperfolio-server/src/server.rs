//! HTTP server implementation for the paperfolio site.
//!
//! Exposes the index listing, the static personal page, and per-paper detail
//! pages, all rendered server-side from the shared immutable catalog.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use paperfolio_core::{Catalog, Error, PaperId, Result};

use crate::render;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address.
    pub addr: SocketAddr,
    /// Enable CORS.
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:8080".parse().unwrap(),
            cors: true,
        }
    }
}

impl ServerConfig {
    /// Creates a new server config builder.
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

/// Builder for ServerConfig.
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    addr: Option<SocketAddr>,
    cors: Option<bool>,
}

impl ServerConfigBuilder {
    /// Sets the listen address.
    pub fn addr(mut self, addr: SocketAddr) -> Self {
        self.addr = Some(addr);
        self
    }

    /// Sets whether CORS is enabled.
    pub fn cors(mut self, enabled: bool) -> Self {
        self.cors = Some(enabled);
        self
    }

    /// Builds the server config.
    pub fn build(self) -> ServerConfig {
        ServerConfig {
            addr: self.addr.unwrap_or_else(|| "0.0.0.0:8080".parse().unwrap()),
            cors: self.cors.unwrap_or(true),
        }
    }
}

/// Shared application state.
///
/// The catalog is read-only after construction; handlers only read it, so no
/// locking is needed.
pub struct AppState {
    /// The paper catalog.
    pub catalog: Catalog,
}

impl AppState {
    /// Creates new app state holding the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

/// The HTTP server.
pub struct Server {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl Server {
    /// Creates a new server with the given configuration and catalog.
    pub fn new(config: ServerConfig, catalog: Catalog) -> Self {
        let state = Arc::new(AppState::new(catalog));
        Self { config, state }
    }

    /// Creates the router.
    fn router(&self) -> Router {
        let mut router = Router::new()
            // Pages
            .route("/", get(index))
            .route("/personal", get(personal))
            .route("/paper/{id}", get(paper_detail))
            // Health endpoint
            .route("/health", get(health))
            .with_state(self.state.clone());

        // Add middleware
        router = router.layer(TraceLayer::new_for_http());

        if self.config.cors {
            router = router.layer(CorsLayer::permissive());
        }

        router
    }

    /// Runs the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot start.
    pub async fn run(self) -> Result<()> {
        let router = self.router();

        tracing::info!(
            addr = %self.config.addr,
            papers = self.state.catalog.len(),
            "Starting paperfolio server"
        );
        eprintln!(
            "\n\x1b[32m✓\x1b[0m Server listening on http://{}",
            self.config.addr
        );
        eprintln!("  Press Ctrl+C to stop\n");

        let listener = tokio::net::TcpListener::bind(self.config.addr)
            .await
            .map_err(Error::Io)?;

        // Set up graceful shutdown
        let shutdown_signal = async {
            let ctrl_c = async {
                tokio::signal::ctrl_c()
                    .await
                    .expect("Failed to install Ctrl+C handler");
            };

            #[cfg(unix)]
            let terminate = async {
                tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                    .expect("Failed to install signal handler")
                    .recv()
                    .await;
            };

            #[cfg(not(unix))]
            let terminate = std::future::pending::<()>();

            tokio::select! {
                () = ctrl_c => {
                    eprintln!("\n\x1b[33m⚡\x1b[0m Received Ctrl+C, shutting down gracefully...");
                },
                () = terminate => {
                    eprintln!("\n\x1b[33m⚡\x1b[0m Received SIGTERM, shutting down gracefully...");
                },
            }
        };

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(|e| Error::internal(e.to_string()))?;

        tracing::info!("Server shutdown complete");
        eprintln!("\x1b[32m✓\x1b[0m Server stopped");

        Ok(())
    }
}

// === Health Endpoint ===

async fn health() -> &'static str {
    "OK"
}

// === Page Handlers ===

/// Index page: the full collection, in insertion order.
async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render::index_page(state.catalog.papers()))
}

/// Static personal page.
async fn personal() -> Html<&'static str> {
    Html(render::personal_page())
}

/// Detail page for a single paper.
///
/// Non-integer ids are rejected by the path extractor and never reach the
/// catalog lookup. A missing paper renders the explicit not-found page with
/// a 404 status; the handler itself always completes.
async fn paper_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> (StatusCode, Html<String>) {
    let lookup = state.catalog.lookup(PaperId(id));
    let status = if lookup.is_found() {
        StatusCode::OK
    } else {
        tracing::debug!(paper_id = id, "Detail request for unknown paper");
        StatusCode::NOT_FOUND
    };
    (status, Html(render::paper_detail_page(&lookup)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState::new(Catalog::placeholder()))
    }

    fn test_server() -> Server {
        Server::new(ServerConfig::default(), Catalog::placeholder())
    }

    #[test]
    fn test_server_config_builder() {
        let config = ServerConfig::builder()
            .addr("127.0.0.1:3000".parse().unwrap())
            .cors(false)
            .build();

        assert_eq!(config.addr, "127.0.0.1:3000".parse().unwrap());
        assert!(!config.cors);
    }

    #[tokio::test]
    async fn index_receives_full_collection() {
        let Html(body) = index(State(test_state())).await;
        let first = body.find("Placeholder Paper").expect("first title");
        let second = body.find("Another Paper").expect("second title");
        assert!(first < second);
    }

    #[tokio::test]
    async fn detail_renders_matching_record() {
        let (status, Html(body)) = paper_detail(State(test_state()), Path(1)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Placeholder Paper"));
        assert!(body.contains("A. Author"));
    }

    #[tokio::test]
    async fn detail_renders_second_record() {
        let (status, Html(body)) = paper_detail(State(test_state()), Path(2)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Another Paper"));
        assert!(body.contains("B. Researcher"));
    }

    #[tokio::test]
    async fn detail_completes_for_missing_record() {
        // One past the maximum present id, and a far-off id.
        for id in [3, 99] {
            let (status, Html(body)) = paper_detail(State(test_state()), Path(id)).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert!(body.contains(&format!("No paper with id {id}")));
        }
    }

    #[tokio::test]
    async fn personal_page_is_static() {
        let Html(body) = personal().await;
        assert!(!body.contains("Placeholder Paper"));
    }

    #[tokio::test]
    async fn non_integer_id_rejected_by_router() {
        let response = test_server()
            .router()
            .oneshot(
                Request::builder()
                    .uri("/paper/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn routes_are_wired() {
        for (uri, expected) in [
            ("/", StatusCode::OK),
            ("/personal", StatusCode::OK),
            ("/paper/1", StatusCode::OK),
            ("/paper/99", StatusCode::NOT_FOUND),
            ("/health", StatusCode::OK),
        ] {
            let response = test_server()
                .router()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), expected, "uri {uri}");
        }
    }
}
