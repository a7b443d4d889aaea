use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::person::Person;

pub mod app;
pub mod create_person;
pub mod delete_person;
pub mod get_person;
pub mod update_person;

impl IntoResponse for Person {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Every person in the collection, in insertion order.
#[derive(Debug)]
pub struct PersonList(pub Vec<Person>);

impl IntoResponse for PersonList {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.0)).into_response()
    }
}
