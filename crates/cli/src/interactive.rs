//! Terminal prompting.
//!
//! Responsibilities:
//! - Supply login credentials, asking for the password on the terminal when
//!   none came from flags, environment, or a profile.
//!
//! Invariants:
//! - Typed passwords are never echoed and go straight into a `SecretString`.
//! - A prompt that cannot run (no terminal) fails authentication.

use ffs_client::{ClientError, CredentialProvider, Credentials};
use ffs_config::AuthConfig;
use secrecy::SecretString;

/// Credentials that fall back to a hidden terminal prompt.
pub struct PromptingCredentials<'a> {
    auth: &'a AuthConfig,
}

impl<'a> PromptingCredentials<'a> {
    pub fn new(auth: &'a AuthConfig) -> Self {
        Self { auth }
    }
}

impl CredentialProvider for PromptingCredentials<'_> {
    fn resolve(&self) -> ffs_client::Result<Credentials> {
        let password = match &self.auth.password {
            Some(password) => password.clone(),
            None => {
                let input = dialoguer::Password::new()
                    .with_prompt(format!("Password for {}", self.auth.username))
                    .allow_empty_password(false)
                    .interact()
                    .map_err(prompt_failed)?;
                SecretString::new(input.into())
            }
        };
        Credentials::new(self.auth.username.clone(), password)
    }
}

/// No password means no login, so a failed prompt is an authentication failure.
fn prompt_failed(err: dialoguer::Error) -> ClientError {
    ClientError::Authentication {
        status: None,
        message: format!("password prompt failed: {err}"),
    }
}
