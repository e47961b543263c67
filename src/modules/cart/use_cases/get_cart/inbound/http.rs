use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::cart::core::validation::validate_user_id;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(user_id): Path<String>) -> impl IntoResponse {
    match validate_user_id(&user_id) {
        Ok(user_id) => Json(state.cart_store.get_cart(user_id).await).into_response(),
        Err(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    }
}

#[cfg(test)]
mod get_cart_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use rstest::rstest;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::cart::adapters::outbound::cart_store::CartStore;
    use crate::modules::cart::adapters::outbound::cart_store_in_memory::InMemoryCartStore;
    use crate::shell::state::AppState;

    use super::handle;

    fn app(store: Arc<InMemoryCartStore>) -> Router {
        Router::new()
            .route("/carts/{user_id}", get(handle))
            .with_state(AppState::new(store))
    }

    async fn get_json(store: Arc<InMemoryCartStore>, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app(store)
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or_default())
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_200_with_no_items_for_an_unknown_user() {
        let (status, json) = get_json(Arc::new(InMemoryCartStore::new()), "/carts/u-1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["items"], serde_json::json!([]));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_the_merged_cart() {
        let store = Arc::new(InMemoryCartStore::new());
        store.add_item("u-1", "p1", 2).await;
        store.add_item("u-1", "p2", 1).await;
        store.add_item("u-1", "p1", 3).await;

        let (status, json) = get_json(store, "/carts/u-1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            serde_json::json!({
                "user_id": "u-1",
                "items": [
                    {"product_id": "p1", "quantity": 5},
                    {"product_id": "p2", "quantity": 1}
                ]
            })
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_400_when_user_id_is_blank() {
        let (status, _) = get_json(Arc::new(InMemoryCartStore::new()), "/carts/%20%20").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
