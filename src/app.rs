use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard_page))
        .route("/history", get(handlers::history_page))
        .route("/targets/add", post(handlers::create_target_form))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/targets", post(handlers::create_target))
        .route(
            "/api/targets/:id",
            put(handlers::rename_target).delete(handlers::delete_target),
        )
        .route("/api/logs", post(handlers::upsert_log))
        .route("/api/history", get(handlers::get_history))
        .route("/api/history/export", get(handlers::export_history))
        .with_state(state)
}
