//! proxytag - Proxy tag detection for chat messages
//!
//! Recognises the delimiter characters ("sigils") a user wraps around, or
//! puts before or after, a message to pick the persona it should be resent
//! as, and strips them to recover the message body.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{detect, half_sigil_end, half_sigil_start, shuck, sigils, Match, Method};
pub use error::ProxyTagError;
