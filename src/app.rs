use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/panel", get(handlers::panel_fragment))
        .route("/api/panel", get(handlers::get_panel))
        .with_state(state)
}
