//! The contacts web API.

pub mod handlers;

pub use handlers::AppState;

use crate::repositories::ContactRepository;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the API router over the given repository.
pub fn router(repository: Arc<dyn ContactRepository>) -> Router {
    let state = AppState { repository };

    Router::new()
        .route(
            "/api/contacts",
            get(handlers::list_contacts).post(handlers::create_contact),
        )
        .route(
            "/api/contacts/:id",
            get(handlers::get_contact)
                .put(handlers::update_contact)
                .delete(handlers::delete_contact),
        )
        .route("/api/contacts/save-all", post(handlers::save_all))
        .layer(TraceLayer::new_for_http())
        // the browser client is served from a different origin
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve the API until the process is stopped.
pub async fn run(bind_addr: &str, repository: Arc<dyn ContactRepository>) -> anyhow::Result<()> {
    let app = router(repository);
    let listener = TcpListener::bind(bind_addr).await?;
    info!("listening on http://{bind_addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
