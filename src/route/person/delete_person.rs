use axum::{extract::State, http::StatusCode};

use crate::{
    error::ApiError, extractor::path::ApiPath, person::PersonId, state::ApiState,
    traits::StateProvider,
};

pub async fn delete_person(
    State(state): State<ApiState>,
    ApiPath(person_id): ApiPath<PersonId>,
) -> Result<StatusCode, ApiError> {
    state
        .persons()
        .delete(&person_id)
        .map(|_| {
            tracing::info!(%person_id, "Person deleted");

            StatusCode::NO_CONTENT
        })
        .map_err(|err| ApiError::from_store_error(state.error_verbosity(), err))
}
