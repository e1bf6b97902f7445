//! Application layer - Use cases and orchestration

pub mod detect;

pub use detect::{DetectService, Outcome};
