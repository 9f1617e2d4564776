use super::{
    Args, Configs,
    loaders::environment::{first_env, optional_env},
};

/// Session settings for the remote parameter store. Anything left as `None`
/// is resolved by the AWS SDK default provider chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub endpoint_url: Option<String>,
}

impl StoreConfig {
    /// Command-line values win over environment variables.
    pub fn with_overrides(mut self, args: &Args) -> Self {
        if let Some(region) = &args.region {
            self.region = Some(region.clone());
        }
        if let Some(profile) = &args.profile {
            self.profile = Some(profile.clone());
        }
        if let Some(endpoint_url) = &args.endpoint_url {
            self.endpoint_url = Some(endpoint_url.clone());
        }
        self
    }
}

#[async_trait::async_trait]
impl Configs for StoreConfig {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Ok(StoreConfig {
            region: optional_env("AWS_REGION"),
            profile: optional_env("AWS_PROFILE"),
            endpoint_url: first_env(&["SSM_ENDPOINT", "AWS_ENDPOINT"]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serial_test::serial;

    fn clear_env() {
        unsafe {
            std::env::remove_var("AWS_REGION");
            std::env::remove_var("AWS_PROFILE");
            std::env::remove_var("SSM_ENDPOINT");
            std::env::remove_var("AWS_ENDPOINT");
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_load_from_environment() {
        clear_env();
        unsafe {
            std::env::set_var("AWS_REGION", "eu-west-1");
            std::env::set_var("AWS_ENDPOINT", "http://localhost:4566");
        }

        let config = StoreConfig::load().await.unwrap();
        assert_eq!(config.region.as_deref(), Some("eu-west-1"));
        assert_eq!(config.profile, None);
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:4566"));

        clear_env();
    }

    #[tokio::test]
    #[serial]
    async fn test_ssm_endpoint_takes_precedence() {
        clear_env();
        unsafe {
            std::env::set_var("SSM_ENDPOINT", "http://ssm.local");
            std::env::set_var("AWS_ENDPOINT", "http://aws.local");
        }

        let config = StoreConfig::load().await.unwrap();
        assert_eq!(config.endpoint_url.as_deref(), Some("http://ssm.local"));

        clear_env();
    }

    #[tokio::test]
    #[serial]
    async fn test_cli_overrides_environment() {
        clear_env();
        unsafe {
            std::env::set_var("AWS_REGION", "eu-west-1");
            std::env::set_var("AWS_PROFILE", "default");
        }

        let args =
            Args::try_parse_from(["ssm-eb", "-i", "params.yml", "--region", "us-east-1"]).unwrap();
        let config = StoreConfig::load().await.unwrap().with_overrides(&args);

        assert_eq!(config.region.as_deref(), Some("us-east-1"));
        assert_eq!(config.profile.as_deref(), Some("default"));

        clear_env();
    }
}
