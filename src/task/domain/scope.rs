//! Listing scope switch.

use super::ParseListingScopeError;
use std::fmt;
use std::str::FromStr;

/// Which tasks a listing returns.
///
/// `Owned` is the only scope that respects the ownership relation and is the
/// default. `All` exists for single-user deployments and must be selected
/// explicitly in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListingScope {
    /// Only tasks owned by the caller.
    #[default]
    Owned,
    /// Every stored task, regardless of owner.
    All,
}

impl ListingScope {
    /// Returns the canonical configuration value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owned => "owned",
            Self::All => "all",
        }
    }
}

impl FromStr for ListingScope {
    type Err = ParseListingScopeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "owned" => Ok(Self::Owned),
            "all" => Ok(Self::All),
            _ => Err(ParseListingScopeError(value.to_owned())),
        }
    }
}

impl fmt::Display for ListingScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
