// ============================================================================
// TrackDesk API - Router
// File: crates/trackdesk-api/src/router.rs
// ============================================================================

use std::path::PathBuf;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::handlers::{auth, customers, dashboard, health, settings, settlements, tickets, users};
use crate::middleware::require_page_session;
use crate::state::AppState;

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/me", get(auth::me))
        .route("/auth/logout", post(auth::logout))
        .route("/settings", get(settings::get_settings))
        .route("/dashboard", get(dashboard::summary))
        .route("/tickets", get(tickets::list).post(tickets::create))
        .route("/tickets/{id}", put(tickets::update))
        .route("/tickets/{id}/notes", post(tickets::add_note))
        .route("/customers", get(customers::list).post(customers::create))
        .route("/customers/options", get(customers::options))
        .route("/customers/titles", get(customers::titles))
        .route("/customers/{id}", put(customers::update))
        .route("/users/options", get(users::options))
        .route("/settlements", get(settlements::list).post(settlements::create))
        .route("/settlements/{id}", get(settlements::get).put(settlements::update))
}

/// JSON API under `/api`, the UI bundle for everything else.
pub fn build_router(state: AppState) -> Router {
    let static_dir = PathBuf::from(&state.config.app.static_dir);
    let ui = ServeDir::new(&static_dir)
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(health::health_check))
        .route_service("/login", ServeFile::new(static_dir.join("login.html")))
        .nest("/api", api_routes())
        .fallback_service(ui)
        .layer(middleware::from_fn_with_state(state.clone(), require_page_session))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
