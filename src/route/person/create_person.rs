use axum::extract::State;
use serde_json::{Map, Value};

use crate::{
    error::ApiError,
    extractor::json::ApiJson,
    person::{Person, PersonPatch},
    state::ApiState,
    traits::StateProvider,
};

/// Validates the body and appends it to the collection under a freshly generated id.
///
/// Keys other than `name`, `age` and `hobbies` are ignored, a client-supplied `id` included.
pub async fn create_person(
    State(state): State<ApiState>,
    ApiJson(body): ApiJson<Map<String, Value>>,
) -> Result<Person, ApiError> {
    match state.persons().create(PersonPatch::from(body)) {
        Ok(person) => {
            tracing::info!(person_id = %person.id, "Person created");

            Ok(person)
        }
        Err(err) => {
            tracing::warn!(%err, "Person not created");

            Err(ApiError::from_store_error(state.error_verbosity(), err))
        }
    }
}
