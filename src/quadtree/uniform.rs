use crate::{
  grid::PixelGrid,
  quadtree::Region,
};

/// Decides whether every pixel of a region shares one value.
///
/// The encoder only ever passes regions that lie inside `grid`, so
/// implementations may assume that without checking it again.
pub trait UniformityChecker {
  /// Returns true if every pixel in `region` matches its top-left pixel.
  fn is_uniform(&self, grid: &PixelGrid, region: &Region) -> bool;
}

/// Scans a region row by row and stops at the first mismatching pixel.
///
/// Best case is a single comparison, worst case touches every pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanChecker;

impl UniformityChecker for ScanChecker {
  fn is_uniform(&self, grid: &PixelGrid, region: &Region) -> bool {
    grid.scan_uniform(region)
  }
}
impl<C: UniformityChecker + ?Sized> UniformityChecker for &C {
  fn is_uniform(&self, grid: &PixelGrid, region: &Region) -> bool {
    (**self).is_uniform(grid, region)
  }
}
