//! Config file access for the FFS search tool.
//!
//! Responsibilities:
//! - Locate the config file in the platform-standard directory.
//! - Read and parse the profile file.
//!
//! Does NOT handle:
//! - Writing profiles; the file is managed by hand.
//! - Merging profile values with env vars or flags (see `loader`).

mod file;
mod path;

pub use file::{ConfigFile, ConfigFileError};
pub use path::default_config_path;

pub(crate) use file::read_config_file;
