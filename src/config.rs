use serde::{Deserialize, Serialize};
use crate::error::PbmError;

/// Widest image either ingestion path accepts.
pub const MAX_WIDTH: usize = 1024;
/// Tallest image either ingestion path accepts.
pub const MAX_HEIGHT: usize = 768;

/// Dimension limits enforced on an image before any pixel is read.
///
/// Both the PBM reader and manual entry check declared dimensions against
/// the same `Limits`, so an oversized image is rejected identically whichever
/// way it arrives.
/// ```
/// use quad_encoder::config::Limits;
/// let limits = Limits::default();
/// assert!(limits.check(1024, 768).is_ok());
/// assert!(limits.check(1025, 768).is_err());
/// assert!(limits.check(1024, 769).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
  /// Maximum permitted width, inclusive.
  pub max_width: usize,
  /// Maximum permitted height, inclusive.
  pub max_height: usize,
}
impl Limits {
  /// Creates a set of limits with the given maximums.
  pub fn new(max_width: usize, max_height: usize) -> Self {
    Limits {
      max_width,
      max_height,
    }
  }
  /// Returns the number of pixels in a `width` by `height` image.
  ///
  /// Fails with `PbmError::Bounds` if either dimension is over its maximum,
  /// or if the pixel count would not fit in a `usize`.
  pub fn check(&self, width: usize, height: usize) -> Result<usize, PbmError> {
    let bounds = PbmError::Bounds {
      width,
      height,
      max_width: self.max_width,
      max_height: self.max_height,
    };
    if width > self.max_width || height > self.max_height {
      return Err(bounds)
    }
    width.checked_mul(height).ok_or(bounds)
  }
}
impl Default for Limits {
  fn default() -> Self {
    Limits::new(MAX_WIDTH, MAX_HEIGHT)
  }
}
