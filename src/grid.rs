
use bitvec::vec::BitVec;
use crate::{
  error::{GridError, RegionError},
  quadtree::Region,
};

type Result<T> = std::result::Result<T, GridError>;

/// A 2-d grid of binary pixels, stored one bit per pixel in row-major order.
///
/// A set bit is a black pixel (value 1), a clear bit a white pixel (value 0).
/// Grids are immutable once built: every constructor validates its input, so
/// a grid that exists only ever holds 0s and 1s and exactly `width * height`
/// of them. The dimensions can be read but not changed:
/// ```compile_fail
/// let mut grid = quad_encoder::PixelGrid::with_dimensions(2, 2).unwrap();
/// grid.width = 4;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PixelGrid {
  width: usize,
  height: usize,
  bits: BitVec,
}
impl PixelGrid {
  /// Creates an empty PixelGrid with zero width and height.
  pub fn new() -> Self {
    PixelGrid {
      width: 0,
      height: 0,
      bits: BitVec::new(),
    }
  }
  /// Creates an all-white PixelGrid with predefined dimensions.
  pub fn with_dimensions(width: usize, height: usize) -> Result<Self> {
    let area = checked_area(width, height)?;
    let mut bits = BitVec::with_capacity(area);
    bits.resize_with(area, Default::default);
    Ok(PixelGrid {
      width,
      height,
      bits,
    })
  }
  /// Builds a PixelGrid from a row-major sequence of bits.
  ///
  /// Exactly `width * height` bits must be supplied.
  pub fn from_bits(width: usize, height: usize, data: impl IntoIterator<Item=bool>) -> Result<Self> {
    let area = checked_area(width, height)?;
    let bits: BitVec = data.into_iter().collect();
    if bits.len() != area {
      return Err(GridError::DimensionMismatch {
        expected: area,
        found: bits.len(),
      })
    }
    Ok(PixelGrid {
      width,
      height,
      bits,
    })
  }
  /// Builds a PixelGrid from a row-major sequence of pixel values.
  /// ```
  /// fn main() -> Result<(), quad_encoder::error::GridError> {
  ///   use quad_encoder::PixelGrid;
  ///   let grid = PixelGrid::from_values(2, 2, vec![0, 1, 1, 0])?;
  ///   assert_eq!(1, grid.value(0, 1)?);
  ///   assert!(PixelGrid::from_values(2, 1, vec![0, 2]).is_err());
  ///   Ok(())
  /// }
  /// ```
  pub fn from_values(width: usize, height: usize, data: impl IntoIterator<Item=u8>) -> Result<Self> {
    let area = checked_area(width, height)?;
    let mut bits = BitVec::new();
    for (i, value) in data.into_iter().enumerate() {
      let (row, col) = if width == 0 { (i, 0) } else { (i / width, i % width) };
      bits.push(pixel_bit(row, col, value)?);
    }
    if bits.len() != area {
      return Err(GridError::DimensionMismatch {
        expected: area,
        found: bits.len(),
      })
    }
    Ok(PixelGrid {
      width,
      height,
      bits,
    })
  }
  /// Builds a PixelGrid from a list of rows of pixel values.
  ///
  /// Every row must be as long as the first.
  pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self> {
    let height = rows.len();
    let width = rows.first().map_or(0, |row| row.len());
    let mut bits = BitVec::with_capacity(checked_area(width, height)?);
    for (row, values) in rows.into_iter().enumerate() {
      if values.len() != width {
        return Err(GridError::RaggedRow {
          row,
          expected: width,
          found: values.len(),
        })
      }
      for (col, value) in values.into_iter().enumerate() {
        bits.push(pixel_bit(row, col, value)?);
      }
    }
    Ok(PixelGrid {
      width,
      height,
      bits,
    })
  }
  /// Width of the grid, in columns.
  pub fn width(&self) -> usize {
    self.width
  }
  /// Height of the grid, in rows.
  pub fn height(&self) -> usize {
    self.height
  }
  /// Returns true if the grid has no pixels.
  pub fn is_empty(&self) -> bool {
    self.bits.len() == 0
  }
  /// Number of pixels in the grid.
  pub fn area(&self) -> usize {
    self.width * self.height
  }
  /// Returns the state of the pixel at a specific coordinate, `true` being black.
  pub fn get(&self, row: usize, col: usize) -> Result<bool> {
    if row >= self.height || col >= self.width {
      return Err(GridError::OutOfBounds {
        row_col: [row, col],
        height_width: [self.height, self.width],
      })
    }
    Ok(self.bit(row, col))
  }
  /// Returns the value, 0 or 1, of the pixel at a specific coordinate.
  pub fn value(&self, row: usize, col: usize) -> Result<u8> {
    Ok(self.get(row, col)? as u8)
  }
  /// Returns the values of all the pixels in a specific row.
  pub fn get_row(&self, row: usize) -> Result<Vec<u8>> {
    if row >= self.height {
      return Err(GridError::OutOfBounds {
        row_col: [row, 0],
        height_width: [self.height, self.width],
      })
    }
    Ok((0..self.width).map(|col| self.bit(row, col) as u8).collect())
  }
  /// Produces the contents of the grid as a vec of its rows.
  pub fn to_rows(&self) -> Vec<Vec<u8>> {
    (0..self.height)
    .map(|row| (0..self.width).map(|col| self.bit(row, col) as u8).collect())
    .collect()
  }
  /// The region covering the whole grid, or `None` if the grid is empty.
  pub fn full_region(&self) -> Option<Region> {
    if self.is_empty() { return None }
    Some(Region {
      first_row: 0,
      last_row: self.height-1,
      first_col: 0,
      last_col: self.width-1,
    })
  }
  /// Returns true if every pixel of `region` lies inside the grid.
  pub fn contains(&self, region: &Region) -> bool {
    region.first_row <= region.last_row
    && region.first_col <= region.last_col
    && region.last_row < self.height
    && region.last_col < self.width
  }
  /// Returns true if every pixel in `region` has the same value.
  /// ```
  /// fn main() -> Result<(), quad_encoder::error::Error> {
  ///   use quad_encoder::{PixelGrid, Region};
  ///   let grid = PixelGrid::from_values(3, 2, vec![
  ///     1, 1, 0,
  ///     1, 1, 0,
  ///   ])?;
  ///   assert!(grid.is_uniform(&Region::new(0, 1, 0, 1)?)?);
  ///   assert!(!grid.is_uniform(&Region::new(0, 1, 0, 2)?)?);
  ///   Ok(())
  /// }
  /// ```
  pub fn is_uniform(&self, region: &Region) -> std::result::Result<bool, RegionError> {
    if !self.contains(region) {
      return Err(region.outside(self))
    }
    Ok(self.scan_uniform(region))
  }
}
impl Default for PixelGrid {
  fn default() -> Self {
    PixelGrid::new()
  }
}

/* Crate */
impl PixelGrid {
  /// Wraps bits that were already validated by an ingestion path.
  pub(crate) fn from_raw(width: usize, height: usize, bits: BitVec) -> Self {
    debug_assert_eq!(width*height, bits.len());
    PixelGrid {
      width,
      height,
      bits,
    }
  }
  /// Unchecked pixel read. Callers must have validated the coordinates.
  pub(crate) fn bit(&self, row: usize, col: usize) -> bool {
    self.bits[row*self.width + col]
  }
  /// Compares every pixel of `region` against its top-left pixel, stopping at
  /// the first that differs. `region` must lie inside the grid.
  pub(crate) fn scan_uniform(&self, region: &Region) -> bool {
    all_same(self.pixels(*region))
  }
  /// The pixels of `region` in row-major order. `region` must lie inside the grid.
  pub(crate) fn pixels(&self, region: Region) -> impl Iterator<Item=bool> + '_ {
    (region.first_row..=region.last_row).flat_map(move |row| {
      let row_start = row*self.width;
      (row_start + region.first_col..=row_start + region.last_col).map(move |i| self.bits[i])
    })
  }
}

/// Returns true if every pixel matches the first, reading no further than the
/// first that differs.
fn all_same(pixels: impl IntoIterator<Item=bool>) -> bool {
  let mut pixels = pixels.into_iter();
  match pixels.next() {
    Some(first) => pixels.all(|pixel| pixel == first),
    None => true,
  }
}

fn checked_area(width: usize, height: usize) -> Result<usize> {
  width.checked_mul(height).ok_or(GridError::Overflow { width, height })
}

fn pixel_bit(row: usize, col: usize, value: u8) -> Result<bool> {
  match value {
    0 => Ok(false),
    1 => Ok(true),
    _ => Err(GridError::InvalidPixel { row, col, value }),
  }
}
