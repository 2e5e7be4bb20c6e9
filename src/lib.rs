pub mod config;
pub mod db;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod templates;

use axum::{middleware::from_fn_with_state, routing::get, Router};
use sqlx::PgPool;
use tower_http::{compression::CompressionLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Shared application state passed to all Axum handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: config::AppConfig,
}

/// Blog and dashboard pages, without visit counting.
pub fn site_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(routes::posts::home))
        .route("/home", get(routes::posts::home))
        .route("/about", get(routes::pages::about))
        .route(
            "/post/new",
            get(routes::posts::new_post).post(routes::posts::create_post),
        )
        .route("/dashboard", get(routes::dashboard::show))
}

/// The full application. Every site request is counted before it reaches
/// its handler; health probes are not.
///
/// Serve with `into_make_service_with_connect_info::<SocketAddr>()` so the
/// counter can see the peer address.
pub fn router(state: AppState) -> Router {
    let counted = site_routes()
        .fallback(routes::pages::not_found)
        .layer(from_fn_with_state(
            state.clone(),
            middleware::visits::count_visit,
        ));

    Router::new()
        .route("/health/live", get(routes::health::live))
        .route("/health/ready", get(routes::health::ready))
        .merge(counted)
        .layer(RequestBodyLimitLayer::new(state.config.max_form_bytes))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
