pub mod environment;

use std::fs;

use tracing::debug;

use crate::{configs::ConfigError, domain::ParameterSet};

/// Reads the parameter file at `input` (a path, optionally `file://` prefixed)
/// and prefixes every path with `/{environment}` when `environment` is not empty.
pub fn load_parameters(input: &str, environment: &str) -> Result<ParameterSet, ConfigError> {
    let path = input.strip_prefix("file://").unwrap_or(input);
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;
    let parameters = parse(path, &content)?.with_environment(environment);

    debug!(
        component = parameters.component().len(),
        external = parameters.external().len(),
        "Loaded parameters from {}",
        path
    );
    Ok(parameters)
}

pub fn parse(path: &str, content: &str) -> Result<ParameterSet, ConfigError> {
    if content.trim().is_empty() {
        return Ok(ParameterSet::default());
    }
    serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_string(),
        source,
    })
}
