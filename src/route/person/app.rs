use axum::{
    routing::{get, MethodRouter},
    Router,
};

use crate::state::ApiState;

fn collection() -> MethodRouter<ApiState> {
    get(super::get_person::list_persons).post(super::create_person::create_person)
}

/// Mounts the person routes. The collection answers with or without a trailing slash.
pub fn app() -> Router<ApiState> {
    Router::<ApiState>::new()
        .route("/person", collection())
        .route("/person/", collection())
        .route(
            "/person/:person_id",
            get(super::get_person::get_person)
                .put(super::update_person::update_person)
                .delete(super::delete_person::delete_person),
        )
}
