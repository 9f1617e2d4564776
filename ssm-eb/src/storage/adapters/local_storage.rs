use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::ParameterPath;
use crate::storage::repository::*;

/// A call to [`ParameterAdminRepository::store`] as seen by [`LocalStorage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredParameter {
    pub path: ParameterPath,
    pub description: String,
    pub value: String,
}

#[derive(Debug, Default)]
struct State {
    values: HashMap<ParameterPath, String>,
    fetched: Vec<ParameterPath>,
    stored: Vec<StoredParameter>,
    denied: Vec<ParameterPath>,
}

/// In-memory parameter store. Keeps an ordered log of every fetch and store
/// so callers can check what was touched and in which order.
#[derive(Clone, Default)]
pub struct LocalStorage {
    state: Arc<RwLock<State>>,
}

impl LocalStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values<P, V>(values: impl IntoIterator<Item = (P, V)>) -> Self
    where
        P: Into<String>,
        V: Into<String>,
    {
        let state = State {
            values: values
                .into_iter()
                .map(|(path, value)| (ParameterPath::new(path), value.into()))
                .collect(),
            ..Default::default()
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Makes every later fetch or store of `path` fail with `AccessDenied`.
    pub fn deny(&self, path: impl Into<String>) {
        if let Ok(mut state) = self.state.write() {
            state.denied.push(ParameterPath::new(path));
        }
    }

    pub fn value(&self, path: &str) -> Option<String> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.values.get(&ParameterPath::new(path)).cloned())
    }

    pub fn fetched(&self) -> Vec<ParameterPath> {
        self.state
            .read()
            .map(|state| state.fetched.clone())
            .unwrap_or_default()
    }

    pub fn stored(&self) -> Vec<StoredParameter> {
        self.state
            .read()
            .map(|state| state.stored.clone())
            .unwrap_or_default()
    }
}

fn poisoned(path: &ParameterPath) -> String {
    format!("{}: local storage lock poisoned", path)
}

#[async_trait::async_trait]
impl ParameterRepository for LocalStorage {
    async fn fetch(&self, path: &ParameterPath) -> Result<String, RepositoryError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| RepositoryError::FetchFailed(poisoned(path)))?;
        state.fetched.push(path.clone());

        if state.denied.contains(path) {
            return Err(RepositoryError::AccessDenied(path.to_string()));
        }
        state
            .values
            .get(path)
            .cloned()
            .ok_or_else(|| RepositoryError::ParameterNotFound(path.to_string()))
    }
}

#[async_trait::async_trait]
impl ParameterAdminRepository for LocalStorage {
    async fn store(
        &self,
        path: &ParameterPath,
        description: &str,
        value: &str,
    ) -> Result<(), RepositoryError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| RepositoryError::StoreFailed(poisoned(path)))?;

        if state.denied.contains(path) {
            return Err(RepositoryError::AccessDenied(path.to_string()));
        }
        state.stored.push(StoredParameter {
            path: path.clone(),
            description: description.to_string(),
            value: value.to_string(),
        });
        state.values.insert(path.clone(), value.to_string());
        Ok(())
    }
}
