//! Configuration management for the FFS search tool.
//!
//! This crate provides types and loaders for resolving the identity (STS) and
//! search endpoints, credentials, and search defaults from profile files,
//! environment variables, and explicit overrides.

pub mod constants;
mod loader;
pub mod persistence;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, SearchDefaultConfig, env_var_or_none};
pub use persistence::{ConfigFile, ConfigFileError};
pub use types::{AuthConfig, Config, ConnectionConfig, ProfileConfig, SecureValue};
