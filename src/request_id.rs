use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::{info_span, Instrument};
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// Accepts the caller's x-request-id or mints a fresh uuid, runs the
/// handler inside a span carrying it, and reflects it back to the client.
pub async fn inject_request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    if !req.headers().contains_key("x-request-id") {
        if let Ok(val) = HeaderValue::from_str(&id) {
            req.headers_mut().insert("x-request-id", val);
        }
    }
    req.extensions_mut().insert(RequestId(id.clone()));

    let span = info_span!(
        "http_request",
        trace_id = %id,
        method = %req.method(),
        path = %req.uri().path()
    );
    let mut resp = next.run(req).instrument(span).await;

    if let Ok(val) = HeaderValue::from_str(&id) {
        resp.headers_mut().insert("x-request-id", val);
    }
    resp
}
