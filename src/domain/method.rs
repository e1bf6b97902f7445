//! Proxy tag matching methods

use crate::domain::matcher::{half_sigil_end, half_sigil_start, sigils, Match};
use crate::error::{ProxyTagError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The strategy that recognised a proxy tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Delimiters on both ends: `[foo]`
    Sigils,
    /// Leading delimiter only: `[foo`
    HalfSigilStart,
    /// Trailing delimiter only: `foo]`
    HalfSigilEnd,
}

impl Method {
    /// Every method, most specific first. This is the default priority order.
    pub const ALL: [Method; 3] = [Method::Sigils, Method::HalfSigilStart, Method::HalfSigilEnd];

    /// Canonical name, as shown in output
    pub fn name(&self) -> &'static str {
        match self {
            Method::Sigils => "Sigils",
            Method::HalfSigilStart => "HalfSigilStart",
            Method::HalfSigilEnd => "HalfSigilEnd",
        }
    }

    /// Run the matcher for this method against a message
    pub fn apply<'a>(&self, message: &'a str) -> Result<Match<'a>> {
        match self {
            Method::Sigils => sigils(message),
            Method::HalfSigilStart => half_sigil_start(message),
            Method::HalfSigilEnd => half_sigil_end(message),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = ProxyTagError;

    /// Accepts `HalfSigilStart`, `half_sigil_start`, `half-sigil-start` and
    /// any casing thereof.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "sigils" => Ok(Method::Sigils),
            "halfsigilstart" => Ok(Method::HalfSigilStart),
            "halfsigilend" => Ok(Method::HalfSigilEnd),
            _ => Err(ProxyTagError::UnknownMethod(s.to_string())),
        }
    }
}
