//! Validated viewport dimensions.

use crate::error::ViewportError;

/// Screen dimensions in pixels, validated on construction.
///
/// `Viewport` is the only gate through which dimensions enter the engine:
/// zero, negative, and non-finite sizes are rejected here instead of
/// propagating through the animation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    /// Create a viewport from positive, finite dimensions.
    pub fn new(width: f32, height: f32) -> Result<Self, ViewportError> {
        if !width.is_finite() || !height.is_finite() {
            return Err(ViewportError::NonFinite { width, height });
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(ViewportError::NonPositive { width, height });
        }
        Ok(Self { width, height })
    }

    /// Viewport width in pixels.
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Viewport height in pixels.
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }
}
