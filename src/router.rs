use crate::config::HostState;
use crate::handlers::health::health_check;
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Health probe plus the console bundle. Paths that are not files get
/// `index.html` so client-side routes survive a reload.
pub fn create_router(state: HostState) -> Router {
    tracing::debug!(dist = %state.dist.display(), "Serving console bundle");

    let bundle = ServeDir::new(&state.dist)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(&state.index));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(bundle)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(state.request_timeout))
                .layer(CorsLayer::permissive()),
        )
}
