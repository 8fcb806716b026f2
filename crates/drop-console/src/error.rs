//! Errors raised while configuring a console

use thiserror::Error;

/// Configuration errors rejected at construction time.
///
/// Once a console is built none of its operations can fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConsoleError {
    #[error("max_lines must be at least 1, got {0}")]
    InvalidMaxLines(usize),

    #[error("invalid colour {0:?}, expected RRGGBB or RRGGBBAA hex")]
    InvalidColour(String),

    #[error("show angle must be within 0..=90 degrees, got {0}")]
    InvalidShowAngle(f32),
}
