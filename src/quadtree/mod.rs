
mod encoder;
mod iterators;
mod uniform;

pub use encoder::{encode, Encoding, EncodingStats, QuadEncoder, Symbol};
pub use iterators::Symbols;
pub use uniform::{ScanChecker, UniformityChecker};

use serde::{Deserialize, Serialize};
use crate::{
  error::RegionError,
  grid::PixelGrid,
};

/* Regions */

/// A rectangular block of a PixelGrid, given by inclusive row and column bounds.
///
/// Regions are small and `Copy`; the encoder passes them around by value.
/// ```
/// fn main() -> Result<(), quad_encoder::error::RegionError> {
///   use quad_encoder::Region;
///   let r = Region::new(0, 3, 0, 1)?;
///   assert_eq!(4, r.height());
///   assert_eq!(2, r.width());
///   assert!(Region::new(2, 1, 0, 0).is_err());
///   Ok(())
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
  ///
  pub first_row: usize,
  ///
  pub last_row: usize,
  ///
  pub first_col: usize,
  ///
  pub last_col: usize,
}
impl Region {
  /// Creates a region, failing if either range is inverted.
  pub fn new(first_row: usize, last_row: usize, first_col: usize, last_col: usize) -> Result<Self, RegionError> {
    if first_row > last_row || first_col > last_col {
      return Err(RegionError::Inverted {
        rows: [first_row, last_row],
        cols: [first_col, last_col],
      })
    }
    Ok(Region {
      first_row,
      last_row,
      first_col,
      last_col,
    })
  }
  /// Number of rows covered.
  pub fn height(&self) -> usize {
    self.last_row - self.first_row + 1 // +1 because range is inclusive
  }
  /// Number of columns covered.
  pub fn width(&self) -> usize {
    self.last_col - self.first_col + 1 // +1 because range is inclusive
  }
  /// Number of pixels covered.
  pub fn area(&self) -> usize {
    self.height() * self.width()
  }
  /// Returns true if the pixel at (row, col) lies in this region.
  pub fn contains(&self, row: usize, col: usize) -> bool {
    row >= self.first_row && row <= self.last_row
    && col >= self.first_col && col <= self.last_col
  }
  /// Returns true if the region covers exactly one pixel.
  pub fn is_single_pixel(&self) -> bool {
    self.first_row == self.last_row && self.first_col == self.last_col
  }
  /// Splits the region in half along both axes.
  ///
  /// Midpoints round down, so the top and left halves take the extra
  /// row/column of an odd range. A single-row region has no bottom children
  /// and a single-column region has no right children.
  /// ```
  /// use quad_encoder::Region;
  /// let column = Region { first_row: 0, last_row: 2, first_col: 4, last_col: 4 };
  /// let halves: Vec<Region> = column.quadrants().iter().copied().collect();
  /// assert_eq!(vec![
  ///   Region { first_row: 0, last_row: 1, first_col: 4, last_col: 4 },
  ///   Region { first_row: 2, last_row: 2, first_col: 4, last_col: 4 },
  /// ], halves);
  /// ```
  pub fn quadrants(&self) -> Quadrants {
    let mid_row = (self.first_row + self.last_row) / 2;
    let mid_col = (self.first_col + self.last_col) / 2;
    let has_bottom = mid_row < self.last_row;
    let has_right = mid_col < self.last_col;
    let mut regions = Vec::with_capacity(4);
    regions.push(Region::new_unchecked(self.first_row, mid_row, self.first_col, mid_col));
    if has_right {
      regions.push(Region::new_unchecked(self.first_row, mid_row, mid_col+1, self.last_col));
    }
    if has_bottom {
      regions.push(Region::new_unchecked(mid_row+1, self.last_row, self.first_col, mid_col));
      if has_right {
        regions.push(Region::new_unchecked(mid_row+1, self.last_row, mid_col+1, self.last_col));
      }
    }
    Quadrants { regions }
  }
}

/* Crate */
impl Region {
  fn new_unchecked(first_row: usize, last_row: usize, first_col: usize, last_col: usize) -> Self {
    Region {
      first_row,
      last_row,
      first_col,
      last_col,
    }
  }
  pub(crate) fn outside(&self, grid: &PixelGrid) -> RegionError {
    RegionError::OutsideGrid {
      rows: [self.first_row, self.last_row],
      cols: [self.first_col, self.last_col],
      height_width: [grid.height(), grid.width()],
    }
  }
}
impl std::fmt::Display for Region {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "[{}..={}, {}..={}]", self.first_row, self.last_row, self.first_col, self.last_col)
  }
}

/// The children of a split Region, in top-left, top-right, bottom-left,
/// bottom-right order with absent children skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quadrants {
  regions: Vec<Region>,
}
impl Quadrants {
  /// Iterates over the children in encoding order.
  pub fn iter(&self) -> impl DoubleEndedIterator<Item=&Region> {
    self.regions.iter()
  }
  /// Number of children, between 2 and 4 for any splittable region.
  pub fn len(&self) -> usize {
    self.regions.len()
  }
  /// Returns true if there are no children.
  pub fn is_empty(&self) -> bool {
    self.regions.is_empty()
  }
}
impl std::ops::Index<usize> for Quadrants {
  type Output = Region;
  fn index(&self, i: usize) -> &Self::Output {
    &self.regions[i]
  }
}
impl IntoIterator for Quadrants {
  type Item = Region;
  type IntoIter = std::vec::IntoIter<Region>;
  fn into_iter(self) -> Self::IntoIter {
    self.regions.into_iter()
  }
}

/* Tests */
