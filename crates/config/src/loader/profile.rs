//! Profile file loading for configuration.
//!
//! Responsibilities:
//! - Load configuration from the JSON profile file.
//! - Apply profile settings to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Environment variable parsing (see env.rs).
//! - Building the final Config (see builder.rs).
//!
//! Invariants:
//! - Profile values only fill settings that are still unset, so env vars and
//!   builder overrides win whichever order the loader methods run in.
//! - Missing profiles are recorded for later error handling in build().

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::persistence::{default_config_path, read_config_file};

/// Apply profile configuration from the profile file to the loader.
///
/// If the profile is not found, this records the missing profile name
/// for later error handling in `build()`.
pub fn apply_profile(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let profile_name = match loader.profile_name() {
        Some(name) => name.clone(),
        None => return Ok(()),
    };

    let config_path = if let Some(path) = loader.config_path() {
        path.clone()
    } else {
        default_config_path().map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()))?
    };

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "Config file not found");
        loader.set_profile_missing(Some(profile_name));
        return Ok(());
    }

    let file = read_config_file(&config_path)?;
    let Some(profile) = file.profiles.get(&profile_name) else {
        loader.set_profile_missing(Some(profile_name));
        return Ok(());
    };

    tracing::debug!(profile = %profile_name, "Applying profile settings");
    loader.merge_profile(profile)
}
