use crate::handlers;
use crate::state::AppState;
use axum::{routing::{delete, get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/healthz", get(handlers::healthz))
        .route("/activities", get(handlers::list_activities))
        .route("/activities/:name/signup", post(handlers::signup))
        .route("/activities/:name/participants", delete(handlers::unregister))
        .with_state(state)
}
