//! ffs-search - command-line client for Code42 Forensic File Search.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Resolve configuration, credentials, and the query before touching the network.
//! - Run the search and map failures onto structured exit codes.
//!
//! Does NOT handle:
//! - Query construction or HTTP (see `crates/client`).
//! - Profile file parsing (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can feed clap env defaults.
//! - Logs and progress go to stderr; stdout carries results only.

mod args;
mod cancellation;
mod commands;
mod error;
mod input;
mod interactive;
mod output;
mod progress;

use anyhow::Context;
use args::Cli;
use cancellation::{CancellationToken, is_cancelled_error, print_cancelled_message};
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use ffs_client::{CredentialProvider, StaticCredentials};
use ffs_config::{Config, ConfigError, ConfigLoader, SearchDefaultConfig};
use interactive::PromptingCredentials;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version go to stdout and succeed; everything else is bad input.
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(ExitCode::ValidationError.as_i32());
        }
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let (config, search_defaults) = match load_config(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::from(&e).as_i32());
        }
    };

    let payload = match commands::search::prepare(&cli, &search_defaults) {
        Ok(payload) => payload,
        Err(e) => exit_with_error(&e),
    };

    // Prompt before the Ctrl+C listener exists so an interrupt at the prompt
    // still terminates the process.
    let credentials = match PromptingCredentials::new(&config.auth)
        .resolve()
        .context("Failed to read credentials")
    {
        Ok(creds) => StaticCredentials::from(creds),
        Err(e) => exit_with_error(&e),
    };

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let result = commands::search::run(
        &cli,
        &config,
        &search_defaults,
        &payload,
        &credentials,
        &cancel,
    )
    .await;

    let exit_code = match result {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn exit_with_error(err: &anyhow::Error) -> ! {
    eprintln!("{:#}", err);
    std::process::exit(err.exit_code().as_i32());
}

/// Layer profile, environment, and flags into a connection config and search defaults.
fn load_config(cli: &Cli) -> Result<(Config, SearchDefaultConfig), ConfigError> {
    let mut loader = ConfigLoader::new();

    // Blank values are ignored so FFS_CONFIG_PATH can still apply.
    if let Some(ref path) = cli.config_path
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }
    if let Some(ref profile_name) = cli.profile {
        loader = loader.with_profile_name(profile_name.clone());
    }

    // Profile values only fill unset fields, so FFS_* variables clap does not
    // bind (FFS_SOURCE) still beat the profile.
    loader = loader.from_profile()?.from_env()?;

    // CLI flags and the FFS_* variables clap reads for them.
    if let Some(ref url) = cli.sts_url {
        loader = loader.with_sts_url(url.clone());
    }
    if let Some(ref url) = cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(ref username) = cli.username {
        loader = loader.with_username(username.clone());
    }
    if let Some(ref password) = cli.password {
        loader = loader.with_password(password.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }
    if let Some(source) = cli.source {
        loader = loader.with_source(ffs_client::EventSource::from(source).as_str().to_string());
    }
    if let Some(size) = cli.page_size {
        loader = loader.with_page_size(size);
    }
    if let Some(max) = cli.max_results {
        loader = loader.with_max_results(max);
    }

    // Must run before build(), which consumes the loader.
    let search_defaults = loader.build_search_defaults()?;
    let config = loader.build()?;

    Ok((config, search_defaults))
}
