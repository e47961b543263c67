use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;

use crate::shared::infrastructure::trace_context::{TRACEPARENT_HEADER, TraceContext};

/// Resolves the request's trace context once, stores it in the request
/// extensions for the request span, and echoes it back as `traceparent`.
pub async fn propagate_trace_context(mut request: Request, next: Next) -> Response {
    let context = TraceContext::from_headers(request.headers());
    let traceparent = context.to_traceparent();
    request.extensions_mut().insert(context);

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&traceparent) {
        response.headers_mut().insert(TRACEPARENT_HEADER, value);
    }
    response
}
