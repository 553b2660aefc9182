use crate::errors::AppError;
use crate::models::{Catalog, EmailQuery, MessageResponse};
use crate::roster;
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let catalog = state.catalog.lock().await;
    Html(render_index(&catalog))
}

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn list_activities(State(state): State<AppState>) -> Json<Catalog> {
    let catalog = state.catalog.lock().await;
    Json(catalog.clone())
}

pub async fn signup(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    let email = require_email(query)?;
    let mut catalog = state.catalog.lock().await;

    match roster::signup(&mut catalog, &name, &email) {
        Ok(message) => {
            info!(activity = %name, email = %email, "participant signed up");
            Ok(Json(MessageResponse { message }))
        }
        Err(err) => {
            warn!(activity = %name, email = %email, "signup rejected: {err}");
            Err(err.into())
        }
    }
}

pub async fn unregister(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    let email = require_email(query)?;
    let mut catalog = state.catalog.lock().await;

    match roster::unregister(&mut catalog, &name, &email) {
        Ok(message) => {
            info!(activity = %name, email = %email, "participant unregistered");
            Ok(Json(MessageResponse { message }))
        }
        Err(err) => {
            warn!(activity = %name, email = %email, "unregister rejected: {err}");
            Err(err.into())
        }
    }
}

fn require_email(query: EmailQuery) -> Result<String, AppError> {
    query
        .email
        .ok_or_else(|| AppError::bad_request("Query parameter 'email' is required"))
}
