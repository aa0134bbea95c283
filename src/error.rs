//! Error types for brim.
//!
//! The engine is infallible once constructed. The one fallible boundary is
//! viewport validation: dimensions are rejected there so NaN and infinity
//! can never reach the animation parameters.

use std::fmt;

/// Errors raised when constructing a [`Viewport`](crate::Viewport).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportError {
    /// Width or height is zero or negative.
    NonPositive { width: f32, height: f32 },
    /// Width or height is NaN or infinite.
    NonFinite { width: f32, height: f32 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewportError::NonPositive { width, height } => write!(
                f,
                "Viewport dimensions must be positive, got {}x{}",
                width, height
            ),
            ViewportError::NonFinite { width, height } => write!(
                f,
                "Viewport dimensions must be finite, got {}x{}",
                width, height
            ),
        }
    }
}

impl std::error::Error for ViewportError {}
