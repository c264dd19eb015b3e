//! Error types for core value parsing.

use thiserror::Error;

/// Errors raised while building [`Settings`](crate::Settings) from user input.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// The color string is neither a hex code nor a known color name.
    #[error("invalid color: '{0}'")]
    InvalidColor(String),

    /// Velocity must be a finite number.
    #[error("invalid velocity: {0}")]
    InvalidVelocity(f32),
}

/// Type alias for Results from core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = CoreError::InvalidColor("#zz".to_string());
        assert_eq!(format!("{error}"), "invalid color: '#zz'");

        let error = CoreError::InvalidVelocity(f32::INFINITY);
        assert_eq!(format!("{error}"), "invalid velocity: inf");
    }
}
