//! Sigil classification and message trimming

use regex::Regex;
use std::sync::OnceLock;

/// Single character in a Unicode symbol (S*) or punctuation (P*) category
fn symbol_or_punct_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[\p{S}\p{P}]$").unwrap())
}

/// Check whether a character can delimit a proxy tag.
///
/// Any Unicode symbol or punctuation character qualifies, except the
/// sentence terminators `;`, `.`, `?` and `!`.
pub fn is_sigil(c: char) -> bool {
    if matches!(c, ';' | '.' | '?' | '!') {
        return false;
    }

    let mut buf = [0u8; 4];
    symbol_or_punct_regex().is_match(c.encode_utf8(&mut buf))
}

/// Remove the first and last character of a string, like shucking the husk
/// off an ear of corn.
///
/// Strings shorter than two characters shuck down to the empty string.
pub fn shuck(message: &str) -> &str {
    let mut chars = message.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}
