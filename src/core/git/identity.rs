use anyhow::Result;

use super::config::ConfigBackend;

pub const NAME_KEY: &str = "user.name";
pub const EMAIL_KEY: &str = "user.email";

/// The identity git attaches to new commits in this repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Identity {
    /// True when both name and email are set.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.name.is_some() && self.email.is_some()
    }
}

/// Read the local identity. Each field is independently absent when unset or
/// when the backend cannot answer.
pub fn current_identity<B: ConfigBackend + ?Sized>(backend: &B) -> Identity {
    Identity {
        name: backend.read_config(NAME_KEY),
        email: backend.read_config(EMAIL_KEY),
    }
}

/// Write both identity keys to the local config.
///
/// # Errors
/// Returns the first write failure; the email is not written if the name fails.
pub fn set_identity<B: ConfigBackend + ?Sized>(backend: &B, name: &str, email: &str) -> Result<()> {
    backend.write_config(NAME_KEY, name)?;
    backend.write_config(EMAIL_KEY, email)
}
