//! Credential types for FFS configuration.
//!
//! Responsibilities:
//! - Hold the username and optional password used for the STS token exchange.
//! - Provide secure value storage (plain text or keyring) for profile files.
//!
//! Does NOT handle:
//! - The token exchange itself (see client crate).
//! - Prompting for a missing password (see the CLI).
//!
//! Invariants:
//! - Passwords are always held as `secrecy::SecretString`.
//! - A missing password is legal here; callers decide how to obtain one.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Credentials for the STS login.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Local user with Security Event Viewer rights.
    pub username: String,
    /// Password, if known ahead of time.
    pub password: Option<SecretString>,
}

/// Service name used for keyring storage.
pub const KEYRING_SERVICE: &str = "ffs-search";

/// A value that can be stored either in plain text or in the system keyring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SecureValue {
    /// Value stored in the system keyring.
    Keyring {
        /// The account name in the keyring.
        keyring_account: String,
    },
    /// Value stored in plain text (as a SecretString).
    #[serde(with = "secret_string")]
    Plain(SecretString),
}

impl SecureValue {
    /// Resolve the secure value to a SecretString.
    ///
    /// If the value is stored in the keyring, it will be fetched.
    pub fn resolve(&self) -> Result<SecretString, keyring::Error> {
        match self {
            Self::Plain(secret) => Ok(secret.clone()),
            Self::Keyring { keyring_account } => {
                let entry = keyring::Entry::new(KEYRING_SERVICE, keyring_account)?;
                let password = entry.get_password()?;
                Ok(SecretString::new(password.into()))
            }
        }
    }
}
