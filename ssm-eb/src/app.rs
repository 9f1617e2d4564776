use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::{
    configs::{Args, SsmEbConfig, loaders::load_parameters},
    modes::{Mode, Prompt, collect_option_settings, store_parameters},
    output::{emit, render},
    storage::{adapters::ssm_storage::SsmStorage, repository::ParameterAdminRepository},
};

fn setup_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .try_init();
}

/// Runs one invocation against `repository`. Prompts in set mode go through
/// `prompt`; the rendered document goes to `stdout` unless an output file is
/// configured.
pub async fn run<A, R, W, O>(
    config: &SsmEbConfig,
    repository: &A,
    prompt: &mut Prompt<R, W>,
    stdout: &mut O,
) -> anyhow::Result<()>
where
    A: ParameterAdminRepository + ?Sized,
    R: BufRead,
    W: Write,
    O: Write,
{
    let args = &config.args;
    let parameters = load_parameters(&args.input, args.environment())
        .with_context(|| format!("Error reading file `{}`", args.input))?;

    match args.mode {
        Mode::Get => {
            let document = collect_option_settings(repository, &parameters)
                .await
                .context("Error getting values")?;
            let rendered =
                render(&document, args.format).context("Error marshaling beanstalk options")?;

            let destination = args.output_path();
            emit(&rendered, destination.as_deref(), stdout).with_context(|| match &destination {
                Some(path) => format!("Error writing to file `{}`", path.display()),
                None => "Error writing to standard output".to_string(),
            })?;
        }
        Mode::Set => {
            let stored = store_parameters(repository, &parameters, prompt)
                .await
                .context("Error setting values")?;
            info!("{} parameters stored", stored);
        }
    }

    Ok(())
}

/// Writes the fatal diagnostic straight to `stderr`, so it shows up whatever
/// the log filter is.
pub fn report_fatal<W: Write>(err: &anyhow::Error, stderr: &mut W) {
    let _ = writeln!(stderr, "Error: {:#}", err);
    let _ = stderr.flush();
}

fn exit_with(err: anyhow::Error) -> ! {
    report_fatal(&err, &mut io::stderr());
    std::process::exit(1);
}

pub async fn start() {
    dotenv().ok();

    setup_logging();

    let args = Args::parse();
    info!(
        input = args.input.as_str(),
        output = args.output.as_deref().unwrap_or(""),
        environment = args.environment(),
        mode = %args.mode,
        "Starting"
    );

    let config = match SsmEbConfig::from_args(args).await {
        Ok(c) => c,
        Err(e) => exit_with(anyhow::Error::msg(e.to_string()).context("Failed to load configs")),
    };
    debug!("CONFIGS: {:?}", &config);

    let repository = SsmStorage::new(&config.store_config).await;

    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout());

    if let Err(e) = run(&config, &repository, &mut prompt, &mut io::stdout()).await {
        exit_with(e);
    }
}
