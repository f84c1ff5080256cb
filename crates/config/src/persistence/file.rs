//! Config file representation and parsing.
//!
//! Responsibilities:
//! - Define the on-disk config file shape (`ConfigFile`).
//! - Define config file errors (`ConfigFileError`).
//!
//! Invariants:
//! - Unknown top-level keys are ignored so the file can carry notes.
//! - A file without a `profiles` key parses as an empty profile set.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::ProfileConfig;

/// The config file on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Named profiles, e.g. one per Code42 region.
    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileConfig>,
}

/// Errors that can occur when reading the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Reads and parses the config file from disk.
pub(crate) fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigFileError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str::<ConfigFile>(&content).map_err(|e| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_config_file_with_profiles() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"profiles": {"west": {"sts_url": "sts-west.us.code42.com"}}}"#,
        )
        .unwrap();

        let file = read_config_file(&path).unwrap();
        assert_eq!(file.profiles.len(), 1);
        assert_eq!(
            file.profiles["west"].sts_url.as_deref(),
            Some("sts-west.us.code42.com")
        );
    }

    #[test]
    fn test_read_config_file_without_profiles_key() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{}").unwrap();

        let file = read_config_file(&path).unwrap();
        assert!(file.profiles.is_empty());
    }

    #[test]
    fn test_read_config_file_parse_error_names_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = read_config_file(&path).unwrap_err();
        assert!(matches!(err, ConfigFileError::Parse { .. }));
        assert!(err.to_string().contains("config.json"));
    }

    #[test]
    fn test_read_config_file_missing_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_config_file(&temp_dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigFileError::Read { .. }));
    }
}
