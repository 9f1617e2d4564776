use std::fmt;

use crate::domain::ParameterPath;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    ParameterNotFound(String),
    AccessDenied(String),
    FetchFailed(String),
    StoreFailed(String),
    MissingValue(String),
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParameterNotFound(msg) => write!(f, "Parameter not found: {}", msg),
            Self::AccessDenied(msg) => write!(f, "Access denied: {}", msg),
            Self::FetchFailed(msg) => write!(f, "Fetch failed: {}", msg),
            Self::StoreFailed(msg) => write!(f, "Store failed: {}", msg),
            Self::MissingValue(msg) => write!(f, "Missing value: {}", msg),
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Read access to the parameter store
#[async_trait::async_trait]
pub trait ParameterRepository: Send + Sync {
    async fn fetch(&self, path: &ParameterPath) -> Result<String, RepositoryError>;
}

/// Write access to the parameter store. Existing values are always overwritten.
#[async_trait::async_trait]
pub trait ParameterAdminRepository: ParameterRepository {
    async fn store(
        &self,
        path: &ParameterPath,
        description: &str,
        value: &str,
    ) -> Result<(), RepositoryError>;
}
