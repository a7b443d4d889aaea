use axum::extract::State;
use serde_json::{Map, Value};

use crate::{
    error::ApiError,
    extractor::{json::ApiJson, path::ApiPath},
    person::{Person, PersonId, PersonPatch},
    state::ApiState,
    traits::StateProvider,
};

/// Shallow-merges the body over the stored person, then validates the merged record.
pub async fn update_person(
    State(state): State<ApiState>,
    ApiPath(person_id): ApiPath<PersonId>,
    ApiJson(body): ApiJson<Map<String, Value>>,
) -> Result<Person, ApiError> {
    match state.persons().update(&person_id, PersonPatch::from(body)) {
        Ok(person) => {
            tracing::info!(%person_id, "Person updated");

            Ok(person)
        }
        Err(err) => {
            tracing::warn!(%person_id, %err, "Person not updated");

            Err(ApiError::from_store_error(state.error_verbosity(), err))
        }
    }
}
