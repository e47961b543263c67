// Trace identifiers for log correlation.
//
// Every request runs inside a span that carries its trace id, span id and
// parent span id, so each log line written while serving it can be joined
// with the caller's trace. Ids come from an incoming W3C `traceparent` header
// when it is valid, otherwise a new root trace is started.

pub mod middleware;

use axum::http::{HeaderMap, Request};
use thiserror::Error;
use tracing::Span;
use uuid::Uuid;

pub const TRACEPARENT_HEADER: &str = "traceparent";

const TRACE_ID_LEN: usize = 32;
const SPAN_ID_LEN: usize = 16;
const SUPPORTED_VERSION: &str = "00";
const SAMPLED_FLAGS: &str = "01";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TraceContextError {
    #[error("expected 4 dash separated fields, found {0}")]
    FieldCount(usize),

    #[error("unsupported traceparent version {0}")]
    Version(String),

    #[error("{field} must be {expected} lowercase hex characters")]
    Malformed {
        field: &'static str,
        expected: usize,
    },

    #[error("{0} must not be all zeros")]
    AllZeros(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    pub trace_id: String,
    pub span_id: String,
    pub parent_span_id: Option<String>,
}

impl TraceContext {
    pub fn new_root() -> Self {
        Self {
            trace_id: Uuid::now_v7().simple().to_string(),
            span_id: new_span_id(),
            parent_span_id: None,
        }
    }

    /// Continues the trace described by a `traceparent` header value. The
    /// caller's span becomes the parent of a freshly minted span id.
    pub fn from_traceparent(value: &str) -> Result<Self, TraceContextError> {
        let fields: Vec<&str> = value.trim().split('-').collect();
        let [version, trace_id, parent_id, flags] = fields.as_slice() else {
            return Err(TraceContextError::FieldCount(fields.len()));
        };

        check_hex("version", version, 2)?;
        if *version != SUPPORTED_VERSION {
            return Err(TraceContextError::Version((*version).to_string()));
        }
        check_hex("trace id", trace_id, TRACE_ID_LEN)?;
        check_hex("parent id", parent_id, SPAN_ID_LEN)?;
        check_hex("flags", flags, 2)?;

        Ok(Self {
            trace_id: (*trace_id).to_string(),
            span_id: new_span_id(),
            parent_span_id: Some((*parent_id).to_string()),
        })
    }

    pub fn from_headers(headers: &HeaderMap) -> Self {
        let Some(value) = headers.get(TRACEPARENT_HEADER) else {
            return Self::new_root();
        };
        match value
            .to_str()
            .map_err(|e| e.to_string())
            .and_then(|v| Self::from_traceparent(v).map_err(|e| e.to_string()))
        {
            Ok(context) => context,
            Err(reason) => {
                tracing::debug!(%reason, "ignoring invalid traceparent header");
                Self::new_root()
            }
        }
    }

    pub fn to_traceparent(&self) -> String {
        format!(
            "{SUPPORTED_VERSION}-{}-{}-{SAMPLED_FLAGS}",
            self.trace_id, self.span_id
        )
    }
}

fn new_span_id() -> String {
    let (_, random) = Uuid::now_v7().as_u64_pair();
    format!("{random:016x}")
}

fn check_hex(field: &'static str, value: &str, expected: usize) -> Result<(), TraceContextError> {
    let is_lower_hex = value
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
    if value.len() != expected || !is_lower_hex {
        return Err(TraceContextError::Malformed { field, expected });
    }
    if expected > 2 && value.chars().all(|c| c == '0') {
        return Err(TraceContextError::AllZeros(field));
    }
    Ok(())
}

/// Span for one inbound request, carrying its trace identifiers.
pub fn make_request_span<B>(request: &Request<B>) -> Span {
    let context = request
        .extensions()
        .get::<TraceContext>()
        .cloned()
        .unwrap_or_else(|| TraceContext::from_headers(request.headers()));

    let span = tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        trace_id = %context.trace_id,
        span_id = %context.span_id,
        parent_span_id = tracing::field::Empty,
    );
    if let Some(parent) = &context.parent_span_id {
        span.record("parent_span_id", parent.as_str());
    }
    span
}
