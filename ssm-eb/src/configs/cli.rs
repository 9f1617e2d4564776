use std::path::PathBuf;

use clap::Parser;

use crate::{modes::Mode, output::OutputFormat};

#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about = "Fetch AWS Systems Manager parameters into Elastic Beanstalk option settings, or store them",
    long_about = None
)]
pub struct Args {
    /// Input file listing the `component` and `external` parameters
    #[arg(long, short = 'i')]
    pub input: String,

    /// Destination of the rendered option settings. Standard output when omitted or empty
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// Environment name prepended to every parameter path (e.g. `prod` turns `/db/host` into `/prod/db/host`)
    #[arg(long, short = 'e')]
    pub environment: Option<String>,

    /// `get` renders the parameters, `set` writes the component parameters
    #[arg(long, short = 'm', default_value = "get")]
    pub mode: Mode,

    /// Output format of the option settings (yaml or json)
    #[arg(long, short = 'f', default_value = "yaml")]
    pub format: OutputFormat,

    /// AWS region of the parameter store. Falls back to AWS_REGION
    #[arg(long)]
    pub region: Option<String>,

    /// AWS shared config profile. Falls back to AWS_PROFILE
    #[arg(long)]
    pub profile: Option<String>,

    /// Custom parameter store endpoint. Falls back to SSM_ENDPOINT, then AWS_ENDPOINT
    #[arg(long)]
    pub endpoint_url: Option<String>,
}

impl Args {
    pub fn environment(&self) -> &str {
        self.environment.as_deref().unwrap_or("")
    }

    pub fn output_path(&self) -> Option<PathBuf> {
        self.output
            .as_deref()
            .filter(|o| !o.is_empty())
            .map(PathBuf::from)
    }
}
