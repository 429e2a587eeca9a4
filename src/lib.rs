pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod store;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::store::DocumentStore;

/// Builds the application router over a loaded document store.
///
/// The authorization gate is layered over every route; only the login path may
/// pass through it without an `Authorization` header.
pub fn app(store: DocumentStore) -> Router {
    Router::new()
        .merge(auth_routes())
        .merge(lms_routes())
        .merge(pods_routes())
        // Gate runs before any handler, login excepted
        .layer(middleware::from_fn_with_state(store.clone(), auth::authorize))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

fn auth_routes() -> Router<DocumentStore> {
    use handlers::auth;

    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
}

fn lms_routes() -> Router<DocumentStore> {
    use handlers::lms;

    Router::new().route("/api/lms/leave/approve", post(lms::approve_leave))
}

fn pods_routes() -> Router<DocumentStore> {
    use handlers::pods;

    Router::new()
        .route("/api/pods/details", get(pods::details))
        .route(
            "/api/pods/recommend",
            get(pods::recommendations).post(pods::recommend),
        )
}
