use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post, put}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api", get(handlers::root))
        .route("/api/habits", get(handlers::list_habits).post(handlers::create_habit))
        .route("/api/habits/log", post(handlers::log_habit))
        .route("/api/habits/bulk-log", post(handlers::bulk_log_habits))
        .route("/api/habits/:id", put(handlers::update_habit).delete(handlers::delete_habit))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/seed", post(handlers::seed))
        .with_state(state)
}
