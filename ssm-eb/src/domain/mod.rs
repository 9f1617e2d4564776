use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct OptionName(String);

impl OptionName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OptionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key of a parameter in the remote store, e.g. `/db/host`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ParameterPath(String);

impl ParameterPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prepends `/{environment}` to the path. An empty environment leaves it untouched.
    pub fn with_environment(self, environment: &str) -> Self {
        if environment.is_empty() {
            self
        } else {
            Self(format!("/{}{}", environment, self.0))
        }
    }
}

impl fmt::Display for ParameterPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the input file.
///
/// Every field defaults to empty: an entry without `option_name` or `path`
/// still loads and only fails once the remote store rejects the lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ParameterSpec {
    #[serde(rename = "option_name", default)]
    name: OptionName,
    #[serde(default)]
    description: String,
    #[serde(default)]
    path: ParameterPath,
    #[serde(default)]
    value: String,
}

impl ParameterSpec {
    pub fn new(name: OptionName, path: ParameterPath) -> Self {
        Self {
            name,
            path,
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn name(&self) -> &OptionName {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn path(&self) -> &ParameterPath {
        &self.path
    }

    /// Literal value from the input file, `None` when absent or empty.
    pub fn literal_value(&self) -> Option<&str> {
        if self.value.is_empty() {
            None
        } else {
            Some(&self.value)
        }
    }

    fn prefix_path(mut self, environment: &str) -> Self {
        self.path = self.path.with_environment(environment);
        self
    }
}

/// Parameters owned by this application (`component`) and parameters owned
/// by other systems (`external`). External parameters are never written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ParameterSet {
    #[serde(default)]
    component: Vec<ParameterSpec>,
    #[serde(default)]
    external: Vec<ParameterSpec>,
}

impl ParameterSet {
    pub fn new(component: Vec<ParameterSpec>, external: Vec<ParameterSpec>) -> Self {
        Self {
            component,
            external,
        }
    }

    pub fn component(&self) -> &[ParameterSpec] {
        &self.component
    }

    pub fn external(&self) -> &[ParameterSpec] {
        &self.external
    }

    /// Component parameters followed by external ones, in file order.
    pub fn iter_all(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.component.iter().chain(self.external.iter())
    }

    pub fn len(&self) -> usize {
        self.component.len() + self.external.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn with_environment(self, environment: &str) -> Self {
        if environment.is_empty() {
            return self;
        }
        let Self {
            component,
            external,
        } = self;

        Self {
            component: component
                .into_iter()
                .map(|spec| spec.prefix_path(environment))
                .collect(),
            external: external
                .into_iter()
                .map(|spec| spec.prefix_path(environment))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputOption {
    option_name: OptionName,
    value: String,
}

impl OutputOption {
    pub fn new(option_name: OptionName, value: impl Into<String>) -> Self {
        Self {
            option_name,
            value: value.into(),
        }
    }

    pub fn option_name(&self) -> &OptionName {
        &self.option_name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Elastic Beanstalk `option_settings` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputDocument {
    option_settings: Vec<OutputOption>,
}

impl OutputDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, option: OutputOption) {
        self.option_settings.push(option);
    }

    pub fn options(&self) -> &[OutputOption] {
        &self.option_settings
    }

    pub fn len(&self) -> usize {
        self.option_settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.option_settings.is_empty()
    }
}
