use std::{ops::Deref, sync::Arc};

use crate::{error::ErrorVerbosity, person::store::PersonStore, traits::StateProvider};

#[derive(Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    pub fn new(error_verbosity: ErrorVerbosity, persons: PersonStore) -> Self {
        Self {
            inner: Arc::new(ApiStateInner {
                error_verbosity,
                persons,
            }),
        }
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

pub struct ApiStateInner {
    error_verbosity: ErrorVerbosity,
    persons: PersonStore,
}

impl StateProvider for ApiState {
    fn error_verbosity(&self) -> ErrorVerbosity {
        self.error_verbosity
    }

    fn persons(&self) -> &PersonStore {
        &self.persons
    }
}
