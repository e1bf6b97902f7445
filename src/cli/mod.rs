//! CLI layer - Command-line interface

pub mod commands;
pub mod input;
pub mod output;

pub use commands::Cli;
pub use input::read_messages;
pub use output::{format_outcome, format_outcomes};
