use std::env;

/// Value of `env_name`, treating an empty variable as unset.
pub fn optional_env(env_name: &str) -> Option<String> {
    env::var(env_name).ok().filter(|v| !v.is_empty())
}

/// First variable of `env_names` that is set.
pub fn first_env(env_names: &[&str]) -> Option<String> {
    env_names.iter().find_map(|name| optional_env(name))
}
