use axum::{extract::Request, http::StatusCode, middleware::Next, response::IntoResponse};

use crate::error::{ApiError, NotFoundError};

/// Middleware to fold axum's `MethodNotAllowed` rejection into the route fallback.
///
/// A known path with an unsupported method (e.g. `DELETE /person`) is answered like any unknown route.
pub async fn method_not_allowed(req: Request, next: Next) -> Result<impl IntoResponse, ApiError> {
    let method = req.method().clone();
    let resp = next.run(req).await;

    match resp.status() {
        StatusCode::METHOD_NOT_ALLOWED => {
            tracing::debug!(%method, "Method not allowed");

            Err(NotFoundError.into())
        }
        _ => Ok(resp),
    }
}
