//! The web layer: router construction and server startup.
//!
//! This is the only part of the crate that knows about HTTP. The router is
//! generic over the store so tests can run the full request path against
//! [`InMemoryStore`](crate::store::memory::InMemoryStore) without touching
//! the filesystem.

use crate::error::{Result, WikiError};
use crate::store::EntryStore;
use axum::routing::get;
use axum::Router;
use parking_lot::RwLock;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod handlers;
pub mod pages;

/// Shared application state: the entry store behind a read/write lock.
///
/// Reads take the read lock; the single `save_entry` in create/edit takes
/// the write lock. Racing writers to the same title still end up
/// last-write-wins, which is the accepted behavior.
pub struct WikiState<S> {
    pub(crate) store: RwLock<S>,
}

pub(crate) type SharedState<S> = Arc<WikiState<S>>;

pub fn router<S>(store: S) -> Router
where
    S: EntryStore + Send + Sync + 'static,
{
    let state = Arc::new(WikiState {
        store: RwLock::new(store),
    });
    Router::new()
        .route("/", get(handlers::index::<S>))
        .route("/wiki/{title}", get(handlers::entry::<S>))
        .route("/search", get(handlers::search::<S>))
        .route(
            "/new",
            get(handlers::new_form).post(handlers::new_submit::<S>),
        )
        .route(
            "/edit/{title}",
            get(handlers::edit_form::<S>).post(handlers::edit_submit::<S>),
        )
        .route("/random", get(handlers::random::<S>))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until ctrl-c / SIGTERM.
pub async fn serve<S>(store: S, addr: SocketAddr) -> Result<()>
where
    S: EntryStore + Send + Sync + 'static,
{
    let router = router(store);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(WikiError::Io)?;
    info!(%addr, "Listening");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(WikiError::Io)?;
    info!("HTTP server exited");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            let _ = stream.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
