//! Output formatting utilities

use crate::application::Outcome;

/// Format one detection outcome as a tab-separated line.
///
/// Matches print `method, initial sigil, end sigil, body`, leaving absent
/// sigils empty. Misses print `no match` followed by the message.
pub fn format_outcome(outcome: &Outcome<'_>) -> String {
    match outcome {
        Outcome::Matched(m) => format!(
            "{}\t{}\t{}\t{}",
            m.method,
            m.initial_sigil.map(String::from).unwrap_or_default(),
            m.end_sigil.map(String::from).unwrap_or_default(),
            m.body
        ),
        Outcome::Unmatched(message) => format!("no match\t{}", message),
    }
}

/// Format a batch of outcomes, one per line
pub fn format_outcomes(outcomes: &[Outcome<'_>]) -> String {
    let mut output = String::new();
    for outcome in outcomes {
        output.push_str(&format_outcome(outcome));
        output.push('\n');
    }
    output
}
