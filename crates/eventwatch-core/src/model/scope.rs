use serde::{Deserialize, Serialize};

use crate::errors::WatchError;
use crate::model::Event;

/// US postal codes accepted as a state scope (states, DC and territories).
const STATE_CODES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", "NM",
    "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA",
    "WV", "WI", "WY", "PR", "GU", "VI", "AS", "MP",
];

/// Which slice of the listing a check tracks.
///
/// `All` is a filter target only; no individual event carries it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    #[default]
    All,
    State(String),
}

impl Scope {
    /// Parse `all`, `*` or a state code (case-insensitive).
    pub fn parse(value: &str) -> Result<Self, WatchError> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed == "*" {
            return Ok(Scope::All);
        }
        let code = trimmed.to_ascii_uppercase();
        if STATE_CODES.contains(&code.as_str()) {
            Ok(Scope::State(code))
        } else {
            Err(WatchError::InvalidScope {
                value: value.to_string(),
            })
        }
    }

    pub fn matches(&self, event: &Event) -> bool {
        match self {
            Scope::All => true,
            Scope::State(code) => event.state.eq_ignore_ascii_case(code),
        }
    }

    /// Lowercase name used for snapshot file naming (`all`, `nv`, ...).
    pub fn file_stem(&self) -> String {
        match self {
            Scope::All => "all".to_string(),
            Scope::State(code) => code.to_ascii_lowercase(),
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scope::All => f.write_str("all"),
            Scope::State(code) => f.write_str(code),
        }
    }
}

impl std::str::FromStr for Scope {
    type Err = WatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scope::parse(s)
    }
}
