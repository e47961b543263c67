use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::cart::core::validation::validate_user_id;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(user_id): Path<String>) -> impl IntoResponse {
    match validate_user_id(&user_id) {
        Ok(user_id) => {
            state.cart_store.empty_cart(user_id).await;
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    }
}
