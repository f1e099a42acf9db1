//! HTTP API server

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

pub mod cors;
pub mod envelope;
pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state.
///
/// The CORS layer sits outermost so it runs before any business logic;
/// each route installs an explicit 405 fallback because the contract
/// requires the error envelope body, not an empty response.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/assets",
            get(handlers::list_assets)
                .post(handlers::create_asset)
                .fallback(handlers::method_not_allowed),
        )
        .nest(
            "/auth",
            Router::new()
                .route(
                    "/login",
                    post(handlers::login).fallback(handlers::method_not_allowed),
                )
                .route(
                    "/register",
                    post(handlers::register).fallback(handlers::method_not_allowed),
                ),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors::cors_layer())
        .with_state(state)
}
