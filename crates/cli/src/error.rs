//! Exit codes and CLI-local error types.
//!
//! Responsibilities:
//! - Define the exit codes scripts use to tell failure modes apart.
//! - Map `ClientError` and `ConfigError` onto those codes.
//! - Define errors that only exist at the CLI layer (output writes, usage).
//!
//! Does NOT handle:
//! - Message formatting (anyhow `{:#}` in `main`).
//! - SIGINT (see `cancellation`).
//!
//! Invariants:
//! - Exit code 130 is reserved for SIGINT.

use std::path::PathBuf;

use ffs_client::ClientError;
use ffs_config::ConfigError;
use thiserror::Error;

use crate::cancellation::SIGINT_EXIT_CODE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,

    /// Unhandled failure, including output write errors.
    GeneralError = 1,

    /// STS rejected the login or no token was issued.
    AuthenticationFailed = 2,

    /// Network, TLS, DNS, or timeout failure.
    ConnectionError = 3,

    /// Bad input: search values, dates, limits, raw JSON, or configuration.
    ///
    /// Scripts should fix the input and not retry.
    ValidationError = 4,

    /// The search endpoint answered with a non-2xx status.
    SearchFailed = 5,

    /// SIGINT/Ctrl+C.
    Interrupted = SIGINT_EXIT_CODE,
}

impl ExitCode {
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::Authentication { .. } => ExitCode::AuthenticationFailed,

            ClientError::Validation(_)
            | ClientError::ValueCountExceeded { .. }
            | ClientError::PayloadParse(_) => ExitCode::ValidationError,

            ClientError::SearchRequest { .. } | ClientError::InvalidResponse(_) => {
                ExitCode::SearchFailed
            }

            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::Http(_) if err.is_connection_error() => ExitCode::ConnectionError,
            ClientError::Http(_) => ExitCode::GeneralError,
        }
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::InvalidValue { .. }
            | ConfigError::MissingUsername
            | ConfigError::MissingEndpoint { .. }
            | ConfigError::InvalidTimeout { .. } => ExitCode::ValidationError,
            _ => ExitCode::GeneralError,
        }
    }
}

/// Writing results to `--out_file` failed.
#[derive(Debug, Error)]
#[error("Failed to write output to {}", .path.display())]
pub struct OutputWriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Flag combinations that cannot be resolved into a search.
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("provide search values with either --values or --in_file, not both")]
    ValuesAndInFile,

    #[error("no search values: pass --values or --in_file")]
    NoValues,

    #[error("a raw search takes exactly one JSON document, got {0} values")]
    RawValueCount(usize),
}

/// Extract an exit code from anywhere in an anyhow error chain.
pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
            if cause.is::<UsageError>() {
                return ExitCode::ValidationError;
            }
        }

        ExitCode::GeneralError
    }
}
