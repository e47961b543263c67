use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::cart::core::validation::{validate_product_id, validate_user_id};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AddItemBody {
    pub product_id: String,
    pub quantity: i32,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    body: Result<Json<AddItemBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let ids = validate_user_id(&user_id).and_then(|user_id| {
        validate_product_id(&body.product_id).map(|product_id| (user_id, product_id))
    });
    let (user_id, product_id) = match ids {
        Ok(ids) => ids,
        Err(e) => {
            tracing::debug!(error = %e, "rejected add item request");
            return (StatusCode::BAD_REQUEST, e.to_string()).into_response();
        }
    };

    state
        .cart_store
        .add_item(user_id, product_id, body.quantity)
        .await;
    StatusCode::NO_CONTENT.into_response()
}
