/*!
These are all the custom errors that this library could return.

This library uses a nesting system to convey the most useful information
while minimising the number of unique enumerations required:
- Grid:
  - A PixelGrid could not be built, or was read outside of its bounds.
- Region:
  - A Region was malformed, or does not fit inside the grid it was used with.
- Pbm:
  - An image could not be ingested, either from a PBM file or from manual entry.
    No grid is ever produced alongside one of these.
*/

/// Errors produced by any part of this library.
#[derive(Debug)]
pub enum Error {
  /// Propogation of a GridError.
  Grid {
    ///
    source: Box<GridError>,
  },
  /// Propogation of a RegionError.
  Region {
    ///
    source: Box<RegionError>,
  },
  /// Propogation of a PbmError.
  Pbm {
    ///
    source: Box<PbmError>,
  },
}
impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    use Error::*;
    match self {
      Grid{source} => Some(source),
      Region{source} => Some(source),
      Pbm{source} => Some(source),
    }
  }
}
impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use Error::*;
    match self {
      Grid{source} => write!(f, "{}", source),
      Region{source} => write!(f, "{}", source),
      Pbm{source} => write!(f, "{}", source),
    }
  }
}
impl From<GridError> for Error {
  fn from(error: GridError) -> Self {
    Error::Grid {
      source: Box::new(error),
    }
  }
}
impl From<RegionError> for Error {
  fn from(error: RegionError) -> Self {
    Error::Region {
      source: Box::new(error),
    }
  }
}
impl From<PbmError> for Error {
  fn from(error: PbmError) -> Self {
    Error::Pbm {
      source: Box::new(error),
    }
  }
}

/// Errors produced as a result of interactions with the PixelGrid object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
  /// Produced when a user attempts to read a pixel outside of the grid.
  OutOfBounds {
    ///
    row_col: [usize; 2],
    ///
    height_width: [usize; 2],
  },
  /// Produced when a pixel value other than 0 or 1 is supplied.
  InvalidPixel {
    ///
    row: usize,
    ///
    col: usize,
    /// The offending value.
    value: u8,
  },
  /// Produced when the number of pixels supplied does not match the
  /// declared dimensions.
  DimensionMismatch {
    /// Number of pixels the dimensions call for.
    expected: usize,
    /// Number of pixels actually supplied.
    found: usize,
  },
  /// Produced when `width * height` does not fit in a `usize`.
  Overflow {
    ///
    width: usize,
    ///
    height: usize,
  },
  /// Produced when rows of differing lengths are supplied.
  RaggedRow {
    /// The index of the first row whose length differs from row 0.
    row: usize,
    /// Length of row 0.
    expected: usize,
    /// Length of the offending row.
    found: usize,
  },
}
impl std::error::Error for GridError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    None
  }
}
impl std::fmt::Display for GridError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use GridError::*;
    match self {
      OutOfBounds {
        row_col: [row, col],
        height_width: [height, width],
      } => write!(f, "Attempt to access a pixel at (row {}, column {}) which is not in a grid of {} rows and {} columns", row, col, height, width),
      InvalidPixel{row, col, value} => write!(f, "Pixel at (row {}, column {}) has value {}, only 0 and 1 are permitted", row, col, value),
      DimensionMismatch{expected, found} => write!(f, "Expected {} pixels but {} were supplied", expected, found),
      Overflow{width, height} => write!(f, "A grid of {} columns and {} rows has more pixels than can be addressed", width, height),
      RaggedRow{row, expected, found} => write!(f, "Row {} has {} pixels but row 0 has {}", row, found, expected),
    }
  }
}

/// Errors produced as a result of interactions with the Region object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegionError {
  /// Produced when a region's last row/column comes before its first.
  Inverted {
    /// `[first_row, last_row]`
    rows: [usize; 2],
    /// `[first_col, last_col]`
    cols: [usize; 2],
  },
  /// Produced when a region reaches outside of the grid it is applied to.
  OutsideGrid {
    /// `[first_row, last_row]`
    rows: [usize; 2],
    /// `[first_col, last_col]`
    cols: [usize; 2],
    ///
    height_width: [usize; 2],
  },
}
impl std::error::Error for RegionError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    None
  }
}
impl std::fmt::Display for RegionError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use RegionError::*;
    match self {
      Inverted {
        rows: [first_row, last_row],
        cols: [first_col, last_col],
      } => write!(f, "The region rows {}..={}, columns {}..={} is inverted", first_row, last_row, first_col, last_col),
      OutsideGrid {
        rows: [first_row, last_row],
        cols: [first_col, last_col],
        height_width: [height, width],
      } => write!(f, "The region rows {}..={}, columns {}..={} does not fit in a grid of {} rows and {} columns", first_row, last_row, first_col, last_col, height, width),
    }
  }
}

/// Errors produced while ingesting an image, from a PBM file or from manual entry.
#[derive(Debug)]
pub enum PbmError {
  /// Produced when the input does not start with the `P1` magic number.
  Format {
    /// What was found in place of the magic number.
    found: String,
  },
  /// Produced when the declared dimensions exceed the permitted maximum.
  Bounds {
    ///
    width: usize,
    ///
    height: usize,
    ///
    max_width: usize,
    ///
    max_height: usize,
  },
  /// Produced when the input is not text, such as a raw (`P4`) bitmap.
  Binary {
    /// The path or stream that was read.
    path: String,
  },
  /// Produced when the input could not be opened or read.
  Resource {
    /// The path or stream that failed.
    path: String,
    ///
    source: std::io::Error,
  },
  /// Produced when the input ends before the width and height are given.
  MissingDimensions,
  /// Produced when a width or height token is not a non-negative integer.
  MalformedDimension {
    ///
    token: String,
  },
  /// Produced when a pixel token is anything other than `0` or `1`.
  MalformedValue {
    ///
    row: usize,
    ///
    col: usize,
    ///
    token: String,
  },
  /// Produced when the input ends before every declared pixel was read.
  Truncated {
    /// Number of pixels the header declared.
    expected: usize,
    /// Number of pixels actually read.
    found: usize,
  },
}
impl std::error::Error for PbmError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    use PbmError::*;
    match self {
      Resource{source, ..} => Some(source),
      _ => None,
    }
  }
}
impl std::fmt::Display for PbmError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use PbmError::*;
    match self {
      Format{found} => write!(f, "Invalid file format: expected magic number \"P1\" but found {:?}", found),
      Bounds {
        width,
        height,
        max_width,
        max_height,
      } => write!(f, "Matrix dimensions {}x{} exceed the permitted maximum of {}x{}", width, height, max_width, max_height),
      Binary{path} => write!(f, "Invalid file format: '{}' is not text, only plain \"P1\" bitmaps are read", path),
      Resource{path, source} => write!(f, "Could not read '{}': {}", path, source),
      MissingDimensions => write!(f, "Input ended before the width and height were given"),
      MalformedDimension{token} => write!(f, "Expected a non-negative integer dimension but found {:?}", token),
      MalformedValue{row, col, token} => write!(f, "Pixel at (row {}, column {}) is {:?}, only 0 and 1 are permitted", row, col, token),
      Truncated{expected, found} => write!(f, "Expected {} pixels but the input ended after {}", expected, found),
    }
  }
}

/// Produced when a string of symbols contains a character other than `X`, `B` or `P`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolParseError {
  /// Character index of the offending character.
  pub position: usize,
  /// The offending character.
  pub found: char,
}
impl std::error::Error for SymbolParseError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    None
  }
}
impl std::fmt::Display for SymbolParseError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "Character {:?} at position {} is not one of 'X', 'B' or 'P'", self.found, self.position)
  }
}
