pub mod errors;
pub mod handlers;
pub mod responses;

use axum::{Router, routing::get};
use color_eyre::eyre::{Result, WrapErr};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::store::CrlStore;
use handlers::{get_crl, health_check};

#[derive(Clone)]
pub struct AppState<S: CrlStore> {
    pub store: S,
}

impl<S: CrlStore> AppState<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

/// Builds the application router on top of the given CRL store.
pub fn router<S: CrlStore>(store: S) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &'_ axum::extract::Request<_>| {
            let uri = request.uri().to_string();
            tracing::info_span!("request", method = %request.method(), uri)
        });

    Router::new()
        .route("/health", get(health_check))
        .route("/crls/{file_name}", get(get_crl::<S>))
        .layer(trace_layer)
        .with_state(AppState::new(store))
}

pub struct Server {
    router: Router,
    listener: TcpListener,
}

impl Server {
    /// Binds the listening socket and prepares the router.
    ///
    /// Port `0` lets the OS pick a free port, see [`Server::port`].
    pub async fn new<S: CrlStore>(store: S, config: &ServerConfig) -> Result<Self> {
        let addr = format!("{}:{}", config.host, config.port);
        let listener = TcpListener::bind(&addr)
            .await
            .wrap_err_with(|| format!("Binding TCP listener on {addr}"))?;

        Ok(Self {
            router: router(store),
            listener,
        })
    }

    /// Returns the port the server is bound to.
    pub fn port(&self) -> Result<u16> {
        let addr = self
            .listener
            .local_addr()
            .wrap_err("Getting local address")?;
        Ok(addr.port())
    }

    /// Serves requests until the process receives Ctrl-C.
    pub async fn run(self) -> Result<()> {
        let addr = self
            .listener
            .local_addr()
            .wrap_err("Getting local address")?;
        tracing::info!("Server listening on http://{addr}");

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .wrap_err("Running server")
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server");
}
