use tracing::{debug, info};

use crate::{
    domain::{OutputDocument, OutputOption, ParameterSet},
    storage::repository::{ParameterRepository, RepositoryError},
};

/// Fetches every component parameter, then every external one, and renders
/// each under its option name. The first failure aborts the whole run; the
/// remaining parameters are not fetched.
pub async fn collect_option_settings<R>(
    repository: &R,
    parameters: &ParameterSet,
) -> Result<OutputDocument, RepositoryError>
where
    R: ParameterRepository + ?Sized,
{
    let mut document = OutputDocument::new();

    for spec in parameters.iter_all() {
        info!("Getting `{}` from path `{}`", spec.name(), spec.path());
        let value = repository.fetch(spec.path()).await?;
        document.push(OutputOption::new(spec.name().clone(), value));
        debug!(name = spec.name().as_str(), "OK");
    }

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{OptionName, ParameterPath, ParameterSpec},
        storage::adapters::local_storage::LocalStorage,
    };

    fn spec(name: &str, path: &str) -> ParameterSpec {
        ParameterSpec::new(OptionName::new(name), ParameterPath::new(path))
    }

    #[tokio::test]
    async fn test_output_mirrors_input_order() {
        let storage = LocalStorage::with_values([("/a", "1"), ("/b", "2"), ("/c", "3")]);
        let parameters =
            ParameterSet::new(vec![spec("B", "/b"), spec("A", "/a")], vec![spec("C", "/c")]);

        let document = collect_option_settings(&storage, &parameters).await.unwrap();

        let pairs: Vec<(&str, &str)> = document
            .options()
            .iter()
            .map(|o| (o.option_name().as_str(), o.value()))
            .collect();
        assert_eq!(pairs, vec![("B", "2"), ("A", "1"), ("C", "3")]);
    }

    #[tokio::test]
    async fn test_empty_set_gives_empty_document() {
        let storage = LocalStorage::new();

        let document = collect_option_settings(&storage, &ParameterSet::default())
            .await
            .unwrap();
        assert!(document.is_empty());
        assert!(storage.fetched().is_empty());
    }

    #[tokio::test]
    async fn test_missing_path_fails_at_fetch() {
        let storage = LocalStorage::with_values([("/a", "1")]);
        let parameters = ParameterSet::new(vec![ParameterSpec::default()], vec![]);

        let result = collect_option_settings(&storage, &parameters).await;
        assert_eq!(
            result,
            Err(RepositoryError::ParameterNotFound(String::new()))
        );
    }

    #[tokio::test]
    async fn test_access_denied_aborts() {
        let storage = LocalStorage::with_values([("/a", "1"), ("/b", "2")]);
        storage.deny("/a");
        let parameters = ParameterSet::new(vec![spec("A", "/a")], vec![spec("B", "/b")]);

        let result = collect_option_settings(&storage, &parameters).await;
        assert!(matches!(result, Err(RepositoryError::AccessDenied(_))));
        assert_eq!(storage.fetched(), vec![ParameterPath::new("/a")]);
    }
}
