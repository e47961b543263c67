use crate::modules::cart::adapters::outbound::cart_store_in_memory::InMemoryCartStore;
use crate::modules::cart::core::cart::Cart;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::{CartBuilder, USER_ID};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

fn add_item(user_id: &str, product_id: &str, quantity: i32) -> Request<Body> {
    Request::post(format!("/carts/{user_id}/items"))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::json!({"product_id": product_id, "quantity": quantity}).to_string(),
        ))
        .unwrap()
}

async fn get_cart(app: &Router, user_id: &str) -> Cart {
    let (status, bytes) = send(
        app,
        Request::get(format!("/carts/{user_id}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn adds_merges_reads_and_empties_a_cart_over_http() {
    let app = router(AppState::new(Arc::new(InMemoryCartStore::new())));

    for (product_id, quantity) in [("p1", 2), ("p2", 1), ("p1", 3)] {
        let (status, _) = send(&app, add_item(USER_ID, product_id, quantity)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    let expected = CartBuilder::new().item("p1", 5).item("p2", 1).build();
    assert_eq!(get_cart(&app, USER_ID).await, expected);

    let (status, _) = send(
        &app,
        Request::delete(format!("/carts/{USER_ID}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(get_cart(&app, USER_ID).await, Cart::new(USER_ID));
}

#[tokio::test]
async fn keeps_users_apart_over_http() {
    let app = router(AppState::new(Arc::new(InMemoryCartStore::new())));

    send(&app, add_item("user-b", "p1", 9)).await;

    let cart = get_cart(&app, "user-a").await;
    assert!(cart.items.is_empty());
}
