use std::{
    collections::HashSet,
    sync::{Mutex, MutexGuard, PoisonError},
};

use super::{
    validator::{PersonCandidate, Violation},
    Person, PersonId, PersonPatch,
};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Person {id} not found")]
    NotFound { id: PersonId },
    #[error(transparent)]
    Validation(#[from] Violation),
    #[error("Duplicate person id {id}")]
    DuplicateId { id: PersonId },
    #[error("Invalid person {id}: {violation}")]
    InvalidSeed { id: PersonId, violation: Violation },
}

/// The in-memory, insertion-ordered collection of persons.
///
/// Every operation holds the lock for its whole duration.
#[derive(Debug)]
pub struct PersonStore {
    persons: Mutex<Vec<Person>>,
}

impl PersonStore {
    pub fn new(seed: Vec<Person>) -> Result<Self, StoreError> {
        let mut ids = HashSet::with_capacity(seed.len());

        for person in &seed {
            if !ids.insert(&person.id) {
                return Err(StoreError::DuplicateId {
                    id: person.id.clone(),
                });
            }

            PersonCandidate::from(&person.fields)
                .validate()
                .map_err(|violation| StoreError::InvalidSeed {
                    id: person.id.clone(),
                    violation,
                })?;
        }

        Ok(Self {
            persons: Mutex::new(seed),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Person>> {
        // Operations never leave the collection half-written.
        self.persons.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list(&self) -> Vec<Person> {
        self.lock().clone()
    }

    pub fn get(&self, id: &PersonId) -> Result<Person, StoreError> {
        self.lock()
            .iter()
            .find(|person| &person.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.clone() })
    }

    pub fn create(&self, patch: PersonPatch) -> Result<Person, StoreError> {
        let fields = PersonCandidate::from(patch).into_fields()?;

        let mut persons = self.lock();

        let id = loop {
            let id = PersonId::generate();

            if !persons.iter().any(|person| person.id == id) {
                break id;
            }
        };

        let person = Person::new(id, fields);
        persons.push(person.clone());

        Ok(person)
    }

    pub fn update(&self, id: &PersonId, patch: PersonPatch) -> Result<Person, StoreError> {
        let mut persons = self.lock();

        let person = persons
            .iter_mut()
            .find(|person| &person.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.clone() })?;

        person.fields = PersonCandidate::from(&person.fields)
            .overlay(patch)
            .into_fields()?;

        Ok(person.clone())
    }

    /// Removes the first person with the given id.
    pub fn delete(&self, id: &PersonId) -> Result<Person, StoreError> {
        let mut persons = self.lock();

        let index = persons
            .iter()
            .position(|person| &person.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.clone() })?;

        Ok(persons.remove(index))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lock().len()
    }
}

impl Default for PersonStore {
    fn default() -> Self {
        Self {
            persons: Mutex::new(vec![Person::seed()]),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    fn patch(value: Value) -> PersonPatch {
        match value {
            Value::Object(object) => PersonPatch::from(object),
            _ => panic!("Patch must be an object"),
        }
    }

    #[test]
    fn default_store_holds_the_seed() {
        let store = PersonStore::default();

        assert_eq!(store.list(), vec![Person::seed()]);
    }

    #[test]
    fn duplicate_seed_ids_are_rejected() {
        let result = PersonStore::new(vec![Person::seed(), Person::seed()]);

        assert!(matches!(result, Err(StoreError::DuplicateId { id }) if id.as_str() == "1"));
    }

    #[test]
    fn invalid_seed_records_are_rejected() {
        let nameless: Person = serde_yaml::from_str("id: x\nname: ''\nage: 1\nhobbies: []")
            .expect("Seed record should parse");

        let result = PersonStore::new(vec![Person::seed(), nameless]);

        assert!(matches!(
            result,
            Err(StoreError::InvalidSeed {
                id,
                violation: Violation::NameRequired,
            }) if id.as_str() == "x"
        ));
    }

    #[test]
    fn valid_seed_is_kept_in_order() {
        let ann: Person =
            serde_yaml::from_str("id: ann\nname: Ann\nage: 30\nhobbies: [chess]")
                .expect("Seed record should parse");

        let store = PersonStore::new(vec![Person::seed(), ann.clone()])
            .expect("Seed should be accepted");

        assert_eq!(store.list(), vec![Person::seed(), ann]);
    }

    #[test]
    fn created_persons_are_appended_with_fresh_ids() {
        let store = PersonStore::default();

        let ids = (0..16)
            .map(|i| {
                store
                    .create(patch(json!({"name": format!("P{i}"), "age": i, "hobbies": []})))
                    .expect("Person should be created")
                    .id
            })
            .collect::<HashSet<_>>();

        assert_eq!(ids.len(), 16);
        assert!(!ids.contains(&PersonId::from("1")));
        assert_eq!(store.len(), 17);
        assert_eq!(store.list().last().map(|p| p.fields.name.as_str()), Some("P15"));
    }

    #[test]
    fn create_ignores_client_supplied_id() {
        let store = PersonStore::default();

        let person = store
            .create(patch(json!({"id": "1", "name": "Ann", "age": 30, "hobbies": []})))
            .expect("Person should be created");

        assert_ne!(person.id.as_str(), "1");
    }

    #[test]
    fn invalid_create_leaves_the_collection_alone() {
        let store = PersonStore::default();

        let result = store.create(patch(json!({"name": "", "age": 30, "hobbies": []})));

        assert!(matches!(
            result,
            Err(StoreError::Validation(Violation::NameRequired))
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn invalid_update_leaves_the_record_alone() {
        let store = PersonStore::default();
        let id = PersonId::from("1");

        let result = store.update(&id, patch(json!({"age": "old"})));

        assert!(matches!(
            result,
            Err(StoreError::Validation(Violation::AgeNotANumber))
        ));
        assert_eq!(store.get(&id).ok(), Some(Person::seed()));
    }

    #[test]
    fn update_of_unknown_id_is_not_found() {
        let store = PersonStore::default();

        let result = store.update(&PersonId::from("2"), PersonPatch::default());

        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn delete_removes_only_the_matching_record() {
        let store = PersonStore::default();
        let ann = store
            .create(patch(json!({"name": "Ann", "age": 30, "hobbies": []})))
            .expect("Person should be created");

        let deleted = store
            .delete(&PersonId::from("1"))
            .expect("Person should be deleted");

        assert_eq!(deleted, Person::seed());
        assert_eq!(store.list(), vec![ann]);
        assert!(matches!(
            store.delete(&PersonId::from("1")),
            Err(StoreError::NotFound { .. })
        ));
    }
}
