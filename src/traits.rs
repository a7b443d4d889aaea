use crate::{error::ErrorVerbosity, person::store::PersonStore};

pub trait StateProvider {
    /// Returns the error verbosity.
    fn error_verbosity(&self) -> ErrorVerbosity;

    /// Returns the collection of persons.
    fn persons(&self) -> &PersonStore;
}
