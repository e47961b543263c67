use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::shell::state::AppState;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    if state.cart_store.ping() {
        (StatusCode::OK, Json(HealthResponse { status: "SERVING" }))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "NOT_SERVING",
            }),
        )
    }
}
