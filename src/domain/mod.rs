//! Domain layer - Proxy tag recognition

pub mod matcher;
pub mod method;
pub mod sigil;

pub use matcher::{detect, detect_with, half_sigil_end, half_sigil_start, sigils, Match};
pub use method::Method;
pub use sigil::{is_sigil, shuck};
