use axum::http::{Method, Uri};

use crate::error::{ApiError, NotFoundError};

/// Fallback for every request no route matches.
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    tracing::debug!(%method, %uri, "No route");

    NotFoundError.into()
}
