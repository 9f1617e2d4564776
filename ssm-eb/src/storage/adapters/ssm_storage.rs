use aws_config::BehaviorVersion;
use aws_sdk_ssm::{
    Client,
    error::{DisplayErrorContext, ProvideErrorMetadata},
    types::ParameterType,
};
use aws_types::region::Region;
use tracing::debug;

use crate::{
    configs::StoreConfig,
    domain::ParameterPath,
    storage::repository::{ParameterAdminRepository, ParameterRepository, RepositoryError},
};

const ACCESS_DENIED_CODE: &str = "AccessDeniedException";

/// AWS Systems Manager Parameter Store adapter
#[derive(Clone)]
pub struct SsmStorage {
    client: Client,
}

impl SsmStorage {
    pub async fn new(config: &StoreConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }

        if let Some(region) = config.region.clone() {
            loader = loader.region(Region::new(region));
        }

        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url.clone());
        }

        let shared_config = loader.load().await;
        Self::with_client(Client::new(&shared_config))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl std::fmt::Debug for SsmStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SsmStorage")
            .field("region", &self.client.config().region())
            .finish()
    }
}

/// Maps a service error onto the repository taxonomy. Not-found and
/// access-denied keep their own variant, everything else becomes `other`.
fn classify_error(
    path: &ParameterPath,
    not_found: bool,
    code: Option<&str>,
    message: String,
    other: fn(String) -> RepositoryError,
) -> RepositoryError {
    if not_found {
        return RepositoryError::ParameterNotFound(path.to_string());
    }
    match code {
        Some(ACCESS_DENIED_CODE) => RepositoryError::AccessDenied(format!("{}: {}", path, message)),
        _ => other(format!("{}: {}", path, message)),
    }
}

#[async_trait::async_trait]
impl ParameterRepository for SsmStorage {
    async fn fetch(&self, path: &ParameterPath) -> Result<String, RepositoryError> {
        debug!(path = path.as_str(), "Fetching parameter from SSM");

        let response = self
            .client
            .get_parameter()
            .name(path.as_str())
            .with_decryption(true)
            .send()
            .await
            .map_err(|err| {
                let message = DisplayErrorContext(&err).to_string();
                let service_err = err.into_service_error();
                classify_error(
                    path,
                    service_err.is_parameter_not_found(),
                    service_err.code(),
                    message,
                    RepositoryError::FetchFailed,
                )
            })?;

        response
            .parameter()
            .and_then(|p| p.value())
            .map(|v| v.to_string())
            .ok_or_else(|| RepositoryError::MissingValue(path.to_string()))
    }
}

#[async_trait::async_trait]
impl ParameterAdminRepository for SsmStorage {
    async fn store(
        &self,
        path: &ParameterPath,
        description: &str,
        value: &str,
    ) -> Result<(), RepositoryError> {
        debug!(path = path.as_str(), description, "Putting parameter into SSM");

        let response = self
            .client
            .put_parameter()
            .name(path.as_str())
            .description(description)
            .value(value)
            .overwrite(true)
            .r#type(ParameterType::String)
            .send()
            .await
            .map_err(|err| {
                let message = DisplayErrorContext(&err).to_string();
                let service_err = err.into_service_error();
                classify_error(
                    path,
                    false,
                    service_err.code(),
                    message,
                    RepositoryError::StoreFailed,
                )
            })?;

        debug!(
            path = path.as_str(),
            version = response.version(),
            "Parameter stored"
        );
        Ok(())
    }
}
