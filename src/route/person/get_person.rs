use axum::extract::State;

use crate::{
    error::ApiError,
    extractor::path::ApiPath,
    person::{Person, PersonId},
    state::ApiState,
    traits::StateProvider,
};

use super::PersonList;

pub async fn list_persons(State(state): State<ApiState>) -> PersonList {
    PersonList(state.persons().list())
}

pub async fn get_person(
    State(state): State<ApiState>,
    ApiPath(person_id): ApiPath<PersonId>,
) -> Result<Person, ApiError> {
    state
        .persons()
        .get(&person_id)
        .map_err(|err| ApiError::from_store_error(state.error_verbosity(), err))
}
