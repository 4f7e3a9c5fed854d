//! User roles and their landing routes.

#[cfg(test)]
#[path = "role_test.rs"]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role carried by an authenticated user.
///
/// Unknown role strings are preserved in [`Role::Other`] so a backend can
/// introduce new roles without breaking session decoding.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    EventAdmin,
    Exhibitor,
    Visitor,
    Other(String),
}

impl Role {
    /// Wire representation used in cookies and JSON payloads.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::EventAdmin => "event-admin",
            Self::Exhibitor => "exhibitor",
            Self::Visitor => "visitor",
            Self::Other(raw) => raw,
        }
    }

    /// Parse a role string. Matching is case-insensitive and ignores
    /// surrounding whitespace; anything unrecognized becomes `Other`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "event-admin" => Self::EventAdmin,
            "exhibitor" => Self::Exhibitor,
            "visitor" => Self::Visitor,
            _ => Self::Other(trimmed.to_owned()),
        }
    }

    /// Landing route for this role inside the tenant `identifier`.
    #[must_use]
    pub fn default_path(&self, identifier: &str) -> String {
        match self {
            Self::Visitor => format!("/{identifier}/event-admin/visitors"),
            Self::Exhibitor => format!("/{identifier}/event-admin/exhibitors"),
            Self::EventAdmin => format!("/{identifier}/event-admin/dashboard"),
            Self::Other(_) => format!("/{identifier}"),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}
