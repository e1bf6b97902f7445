//! Detect proxy tags use case
//!
//! Applies the configured matcher priority order to one or many messages.

use crate::domain::{detect_with, Match, Method};
use crate::error::Result;
use crate::infrastructure::Config;
use tracing::debug;

/// Result of running detection on a single message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// A proxy tag was found
    Matched(Match<'a>),
    /// No matcher recognised the message
    Unmatched(&'a str),
}

impl Outcome<'_> {
    pub fn is_match(&self) -> bool {
        matches!(self, Outcome::Matched(_))
    }
}

/// Service for detecting proxy tags
pub struct DetectService {
    config: Config,
}

impl DetectService {
    /// Create new detect service
    pub fn new(config: Config) -> Self {
        DetectService { config }
    }

    /// Matchers tried, in priority order
    pub fn methods(&self) -> &[Method] {
        &self.config.methods
    }

    /// Detect a proxy tag in one message, stopping at the first matcher that
    /// succeeds.
    pub fn detect<'a>(&self, message: &'a str) -> Result<Match<'a>> {
        let result = detect_with(message, &self.config.methods);
        match &result {
            Ok(m) => debug!(method = %m.method, body = m.body, "proxy tag matched"),
            Err(_) => debug!(input = message, "no proxy tag"),
        }
        result
    }

    /// Detect proxy tags in a batch of messages. Outcomes are returned in
    /// input order.
    pub fn detect_all<'a, I>(&self, messages: I) -> Vec<Outcome<'a>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        messages
            .into_iter()
            .map(|message| match self.detect(message) {
                Ok(m) => Outcome::Matched(m),
                Err(_) => Outcome::Unmatched(message),
            })
            .collect()
    }
}
