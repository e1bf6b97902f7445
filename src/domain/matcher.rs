//! Proxy tag matchers
//!
//! Each matcher takes a raw message and either recognises a proxy tag in it,
//! returning a [`Match`], or fails with [`ProxyTagError::NoMatch`]. Matchers
//! are independent of one another; [`detect_with`] tries several in order and
//! keeps the first success.
//!
//! # Examples
//!
//! ```
//! use proxytag::domain::{detect, Method};
//!
//! let m = detect("[hello]").unwrap();
//! assert_eq!(m.method, Method::Sigils);
//! assert_eq!(m.body, "hello");
//!
//! assert!(detect("plain text").is_err());
//! ```

use crate::domain::method::Method;
use crate::domain::sigil::{is_sigil, shuck};
use crate::error::{ProxyTagError, Result};

/// A recognised proxy tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    /// Leading delimiter, if one was consumed
    pub initial_sigil: Option<char>,

    /// Trailing delimiter, if one was consumed
    pub end_sigil: Option<char>,

    /// Strategy that produced this match
    pub method: Method,

    /// Message text with the consumed delimiters stripped
    pub body: &'a str,
}

impl Match<'_> {
    /// Put the consumed sigils back around the body, yielding the original
    /// message.
    pub fn reassemble(&self) -> String {
        let mut message = String::with_capacity(self.body.len() + 8);
        if let Some(c) = self.initial_sigil {
            message.push(c);
        }
        message.push_str(self.body);
        if let Some(c) = self.end_sigil {
            message.push(c);
        }
        message
    }
}

/// True when `message` has fewer than `n` characters
fn shorter_than(message: &str, n: usize) -> bool {
    message.chars().nth(n - 1).is_none()
}

/// Parse the "sigils" method: a message wrapped on both ends.
///
/// ```
/// use proxytag::domain::{sigils, Method};
///
/// let m = sigils("[foo]").unwrap();
/// assert_eq!(m.initial_sigil, Some('['));
/// assert_eq!(m.end_sigil, Some(']'));
/// assert_eq!(m.method, Method::Sigils);
/// assert_eq!(m.body, "foo");
/// ```
pub fn sigils(message: &str) -> Result<Match<'_>> {
    if shorter_than(message, 3) {
        return Err(ProxyTagError::NoMatch);
    }

    let mut chars = message.chars();
    let (first, last) = match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(ProxyTagError::NoMatch),
    };

    // A trailing `>` without an opening `<` is usually a mention like
    // `[ <@72838115944828928>`, not a closing tag.
    if first != '<' && last == '>' {
        return Err(ProxyTagError::NoMatch);
    }

    if !is_sigil(first) || !is_sigil(last) {
        return Err(ProxyTagError::NoMatch);
    }

    Ok(Match {
        initial_sigil: Some(first),
        end_sigil: Some(last),
        method: Method::Sigils,
        body: shuck(message),
    })
}

/// Parse the "half sigil at the start" method: `[foo`.
pub fn half_sigil_start(message: &str) -> Result<Match<'_>> {
    if shorter_than(message, 2) {
        return Err(ProxyTagError::NoMatch);
    }

    let first = message.chars().next().ok_or(ProxyTagError::NoMatch)?;
    if !is_sigil(first) {
        return Err(ProxyTagError::NoMatch);
    }

    Ok(Match {
        initial_sigil: Some(first),
        end_sigil: None,
        method: Method::HalfSigilStart,
        body: &message[first.len_utf8()..],
    })
}

/// Parse the "half sigil at the end" method: `foo]`.
pub fn half_sigil_end(message: &str) -> Result<Match<'_>> {
    if shorter_than(message, 2) {
        return Err(ProxyTagError::NoMatch);
    }

    let last = message.chars().next_back().ok_or(ProxyTagError::NoMatch)?;
    if !is_sigil(last) {
        return Err(ProxyTagError::NoMatch);
    }

    Ok(Match {
        initial_sigil: None,
        end_sigil: Some(last),
        method: Method::HalfSigilEnd,
        body: &message[..message.len() - last.len_utf8()],
    })
}

/// Try each method in `order`, returning the first match.
pub fn detect_with<'a>(message: &'a str, order: &[Method]) -> Result<Match<'a>> {
    order
        .iter()
        .find_map(|method| method.apply(message).ok())
        .ok_or(ProxyTagError::NoMatch)
}

/// Try every method, most specific first.
pub fn detect(message: &str) -> Result<Match<'_>> {
    detect_with(message, &Method::ALL)
}
