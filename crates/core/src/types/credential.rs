//! Vendor login credential.
//!
//! Shop passwords are kept as plain text and compared exactly. The secret is
//! wrapped so it never shows up in `Debug` output or logs.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

/// A shop owner's password.
#[derive(Clone)]
pub struct Credential(SecretString);

impl Credential {
    /// Create a credential from a password.
    #[must_use]
    pub fn new(password: impl Into<String>) -> Self {
        Self(SecretString::from(password.into()))
    }

    /// Exact, case-sensitive comparison against a candidate password.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.expose_secret() == candidate
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

impl From<&str> for Credential {
    fn from(password: &str) -> Self {
        Self::new(password)
    }
}
