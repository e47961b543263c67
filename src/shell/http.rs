use axum::{
    Extension, Router,
    body::Body,
    http::Request,
    middleware,
    routing::{get, post},
};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::modules::cart::use_cases::add_item::inbound::http as add_item_http;
use crate::modules::cart::use_cases::empty_cart::inbound::http as empty_cart_http;
use crate::modules::cart::use_cases::get_cart::inbound::http as get_cart_http;
use crate::modules::cart::use_cases::health_check::inbound::http as health_http;
use crate::shared::infrastructure::trace_context::make_request_span;
use crate::shared::infrastructure::trace_context::middleware::propagate_trace_context;
use crate::shell::graphql::{self, GRAPHQL_PATH};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = graphql::schema(state.clone());

    Router::new()
        .route("/health", get(health_http::handle))
        .route(
            "/carts/{user_id}",
            get(get_cart_http::handle).delete(empty_cart_http::handle),
        )
        .route("/carts/{user_id}/items", post(add_item_http::handle))
        .route(GRAPHQL_PATH, get(graphql::graphiql).post(graphql::graphql))
        .layer(Extension(schema))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| make_request_span(request))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(propagate_trace_context))
        .with_state(state)
}
