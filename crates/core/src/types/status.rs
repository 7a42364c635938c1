//! Shop status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a status string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid shop status: {0}")]
pub struct StatusParseError(pub String);

/// Whether a shop is currently taking orders.
///
/// New shops start out `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ShopStatus {
    Open,
    #[default]
    Closed,
    Preparing,
}

impl ShopStatus {
    /// All statuses, in the order vendors pick from.
    pub const ALL: [Self; 3] = [Self::Open, Self::Closed, Self::Preparing];

    /// Display name of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
            Self::Preparing => "Preparing",
        }
    }
}

impl fmt::Display for ShopStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShopStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StatusParseError(s.to_string()))
    }
}
