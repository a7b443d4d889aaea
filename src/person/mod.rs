use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use uuid::Uuid;

pub mod store;
pub mod validator;

/// Opaque identifier of a [`Person`].
///
/// Generated server side and never changed after creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PersonId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for PersonId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The validated schema fields of a person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonFields {
    pub name: String,
    pub age: Number,
    pub hobbies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    #[serde(flatten)]
    pub fields: PersonFields,
}

impl Person {
    pub fn new(id: PersonId, fields: PersonFields) -> Self {
        Self { id, fields }
    }

    /// The record every fresh collection starts with.
    pub fn seed() -> Self {
        Self::new(
            PersonId::from("1"),
            PersonFields {
                name: "Sam".to_string(),
                age: Number::from(26),
                hobbies: Vec::new(),
            },
        )
    }
}

/// A sparse record holding only the schema fields a client supplied.
///
/// A key that is present with `null` counts as supplied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonPatch {
    pub name: Option<Value>,
    pub age: Option<Value>,
    pub hobbies: Option<Value>,
}

impl From<serde_json::Map<String, Value>> for PersonPatch {
    /// Picks the schema fields out of a JSON object, ignoring every other key.
    fn from(mut object: serde_json::Map<String, Value>) -> Self {
        Self {
            name: object.remove("name"),
            age: object.remove("age"),
            hobbies: object.remove("hobbies"),
        }
    }
}
