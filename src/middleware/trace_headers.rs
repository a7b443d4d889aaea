use axum::{extract::Request, middleware::Next, response::Response};

/// Middlware to trace the request and response headers.
pub async fn trace_headers(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    let incoming_headers = req.headers();
    tracing::trace!(%method, %uri, ?incoming_headers, "Request headers");

    let response = next.run(req).await;

    let status = response.status();
    let outgoing_headers = response.headers();
    tracing::trace!(%status, ?outgoing_headers, "Response headers");

    response
}
