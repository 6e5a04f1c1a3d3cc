use {
  log::debug,
  serde::{Deserialize, Serialize},
  crate::error::{RegionError, SymbolParseError},
  crate::grid::PixelGrid,
  crate::quadtree::*,
};

type Result<T> = std::result::Result<T, RegionError>;

/// One symbol of an encoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
  /// The region was not uniform and was split into quadrants. Written `X`.
  #[serde(rename = "X")]
  Split,
  /// Every pixel in the region is 0. Written `B` (branco).
  #[serde(rename = "B")]
  White,
  /// Every pixel in the region is 1. Written `P` (preto).
  #[serde(rename = "P")]
  Black,
}
impl Symbol {
  /// The leaf symbol for a uniform region whose pixels are `black`.
  pub fn leaf(black: bool) -> Self {
    if black { Symbol::Black } else { Symbol::White }
  }
  /// The character this symbol is written as.
  pub fn as_char(self) -> char {
    match self {
      Symbol::Split => 'X',
      Symbol::White => 'B',
      Symbol::Black => 'P',
    }
  }
  /// Reads a symbol from its character, if it is one.
  pub fn from_char(c: char) -> Option<Self> {
    match c {
      'X' => Some(Symbol::Split),
      'B' => Some(Symbol::White),
      'P' => Some(Symbol::Black),
      _ => None,
    }
  }
  /// Returns true for `White` and `Black`.
  pub fn is_leaf(self) -> bool {
    self != Symbol::Split
  }
}
impl std::fmt::Display for Symbol {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_char())
  }
}

/// Counts of each kind of symbol in an Encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EncodingStats {
  /// Regions that were split, one per `X`.
  pub splits: usize,
  /// Uniform white regions, one per `B`.
  pub white_leaves: usize,
  /// Uniform black regions, one per `P`.
  pub black_leaves: usize,
}
impl EncodingStats {
  /// Number of uniform regions.
  pub fn leaves(&self) -> usize {
    self.white_leaves + self.black_leaves
  }
  /// Number of regions visited.
  pub fn regions(&self) -> usize {
    self.splits + self.leaves()
  }
}

/// The full symbol stream of an encoded image.
///
/// Displays as the unbroken string of `X`, `B` and `P` characters.
/// ```
/// fn main() -> Result<(), quad_encoder::error::Error> {
///   use quad_encoder::{encode, PixelGrid};
///   let grid = PixelGrid::from_rows(vec![
///     vec![0, 1],
///     vec![1, 0],
///   ])?;
///   assert_eq!("XBPPB", encode(&grid).to_string());
///   Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Encoding {
  symbols: Vec<Symbol>,
}
impl Encoding {
  /// The symbols, in pre-order.
  pub fn symbols(&self) -> &[Symbol] {
    &self.symbols
  }
  /// Consumes the Encoding to produce its symbols.
  pub fn into_symbols(self) -> Vec<Symbol> {
    self.symbols
  }
  /// Number of symbols.
  pub fn len(&self) -> usize {
    self.symbols.len()
  }
  /// Returns true if there are no symbols, which is only the case for an empty grid.
  pub fn is_empty(&self) -> bool {
    self.symbols.is_empty()
  }
  /// Number of `X` symbols.
  pub fn splits(&self) -> usize {
    self.symbols.iter().filter(|s| **s == Symbol::Split).count()
  }
  /// Number of `B` and `P` symbols.
  pub fn leaves(&self) -> usize {
    self.symbols.iter().filter(|s| s.is_leaf()).count()
  }
  /// Counts each kind of symbol.
  pub fn stats(&self) -> EncodingStats {
    self.symbols.iter().fold(EncodingStats::default(), |mut stats, symbol| {
      match symbol {
        Symbol::Split => stats.splits += 1,
        Symbol::White => stats.white_leaves += 1,
        Symbol::Black => stats.black_leaves += 1,
      }
      stats
    })
  }
}
impl std::iter::FromIterator<Symbol> for Encoding {
  fn from_iter<I: IntoIterator<Item=Symbol>>(iter: I) -> Self {
    Encoding {
      symbols: iter.into_iter().collect(),
    }
  }
}
impl std::fmt::Display for Encoding {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let s: String = self.symbols.iter().map(|s| s.as_char()).collect();
    write!(f, "{}", s)
  }
}
impl std::str::FromStr for Encoding {
  type Err = SymbolParseError;
  fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
    s.chars()
    .enumerate()
    .map(|(position, found)| Symbol::from_char(found).ok_or(SymbolParseError { position, found }))
    .collect()
  }
}
impl<'a> IntoIterator for &'a Encoding {
  type Item = &'a Symbol;
  type IntoIter = std::slice::Iter<'a, Symbol>;
  fn into_iter(self) -> Self::IntoIter {
    self.symbols.iter()
  }
}

/// Encodes binary images by recursively splitting them into quadrants until
/// every quadrant is a single colour.
///
/// The `UniformityChecker` decides when to stop splitting; `ScanChecker` is
/// used unless another is supplied.
/// ```
/// fn main() -> Result<(), quad_encoder::error::Error> {
///   use quad_encoder::{PixelGrid, QuadEncoder, Region, Symbol};
///   let grid = PixelGrid::from_values(4, 2, vec![
///     1,1,0,0,
///     1,1,0,1,
///   ])?;
///   let encoder = QuadEncoder::new();
///   assert_eq!("XPBPXBP", encoder.encode(&grid).to_string());
///   let right = encoder.encode_region(&grid, Region::new(0, 1, 2, 3)?)?;
///   assert_eq!("XBBBP", right.to_string());
///   let first = encoder.symbols(&grid).next();
///   assert_eq!(Some(Symbol::Split), first);
///   Ok(())
/// }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuadEncoder<C = ScanChecker> {
  checker: C,
}
impl QuadEncoder<ScanChecker> {
  /// Creates an encoder using the default `ScanChecker`.
  pub fn new() -> Self {
    QuadEncoder {
      checker: ScanChecker,
    }
  }
}
impl<C: UniformityChecker> QuadEncoder<C> {
  /// Creates an encoder using a custom uniformity checker.
  pub fn with_checker(checker: C) -> Self {
    QuadEncoder {
      checker,
    }
  }
  /// The checker this encoder consults.
  pub fn checker(&self) -> &C {
    &self.checker
  }
  /// Lazily produces the symbols for the whole grid.
  ///
  /// An empty grid produces no symbols.
  pub fn symbols<'a>(&'a self, grid: &'a PixelGrid) -> Symbols<'a, C> {
    Symbols::new(grid, &self.checker, grid.full_region())
  }
  /// Lazily produces the symbols for one region of the grid.
  pub fn symbols_in<'a>(&'a self, grid: &'a PixelGrid, region: Region) -> Result<Symbols<'a, C>> {
    if !grid.contains(&region) {
      return Err(region.outside(grid))
    }
    Ok(Symbols::new(grid, &self.checker, Some(region)))
  }
  /// Encodes the whole grid.
  pub fn encode(&self, grid: &PixelGrid) -> Encoding {
    let encoding: Encoding = self.symbols(grid).collect();
    log_summary(grid, &encoding);
    encoding
  }
  /// Encodes one region of the grid.
  pub fn encode_region(&self, grid: &PixelGrid, region: Region) -> Result<Encoding> {
    let encoding: Encoding = self.symbols_in(grid, region)?.collect();
    log_summary(grid, &encoding);
    Ok(encoding)
  }
}

/// Encodes a whole grid with the default encoder.
pub fn encode(grid: &PixelGrid) -> Encoding {
  QuadEncoder::new().encode(grid)
}

fn log_summary(grid: &PixelGrid, encoding: &Encoding) {
  let stats = encoding.stats();
  debug!(
    "encoded {}x{} grid: {} symbols ({} splits, {} white, {} black)",
    grid.width(), grid.height(), encoding.len(), stats.splits, stats.white_leaves, stats.black_leaves
  );
}

#[cfg(test)]
mod api {
  use super::*;
  type Result<T> = std::result::Result<T, crate::error::Error>;
  #[test]
  fn symbol_chars() {
    for symbol in [Symbol::Split, Symbol::White, Symbol::Black].iter() {
      assert_eq!(Some(*symbol), Symbol::from_char(symbol.as_char()));
    }
    assert_eq!(None, Symbol::from_char('x'));
    assert_eq!(Symbol::White, Symbol::leaf(false));
    assert_eq!(Symbol::Black, Symbol::leaf(true));
  }
  #[test]
  fn symbol_serde() {
    assert_eq!("\"X\"", serde_json::to_string(&Symbol::Split).unwrap());
    assert_eq!(Symbol::Black, serde_json::from_str::<Symbol>("\"P\"").unwrap());
    let encoding: Encoding = "XBPPB".parse().unwrap();
    assert_eq!(r#"["X","B","P","P","B"]"#, serde_json::to_string(&encoding).unwrap());
  }
  #[test]
  fn encoding_from_str() {
    let encoding: Encoding = "XPBXBBBP".parse().unwrap();
    assert_eq!(8, encoding.len());
    assert_eq!("XPBXBBBP", encoding.to_string());
    assert_eq!(
      Err(SymbolParseError { position: 2, found: 'Q' }),
      "XPQ".parse::<Encoding>()
    );
  }
  #[test]
  fn stats() {
    let encoding: Encoding = "XPBXBBBP".parse().unwrap();
    let stats = encoding.stats();
    assert_eq!(EncodingStats { splits: 2, white_leaves: 4, black_leaves: 2 }, stats);
    assert_eq!(encoding.splits(), stats.splits);
    assert_eq!(encoding.leaves(), stats.leaves());
    assert_eq!(8, stats.regions());
  }
  #[test]
  fn encode_empty() {
    let encoding = encode(&PixelGrid::new());
    assert!(encoding.is_empty());
    assert_eq!("", encoding.to_string());
  }
  #[test]
  fn encode_region() -> Result<()> {
    let grid = PixelGrid::from_values(4, 4, vec![
      1,1,0,1,
      1,1,1,1,
      0,0,0,0,
      0,0,0,0,
    ])?;
    let encoder = QuadEncoder::new();
    assert_eq!("P", encoder.encode_region(&grid, Region::new(0, 1, 0, 1)?)?.to_string());
    assert_eq!("XBPPP", encoder.encode_region(&grid, Region::new(0, 1, 2, 3)?)?.to_string());
    assert_eq!("B", encoder.encode_region(&grid, Region::new(2, 3, 0, 3)?)?.to_string());
    assert_eq!("XPXBPPPBB", encoder.encode(&grid).to_string());
    Ok(())
  }
  #[test]
  fn region_outside_grid() {
    let grid = PixelGrid::with_dimensions(2, 2).unwrap();
    let encoder = QuadEncoder::new();
    assert_eq!(
      Err(RegionError::OutsideGrid { rows: [0, 1], cols: [1, 2], height_width: [2, 2] }),
      encoder.encode_region(&grid, Region { first_row: 0, last_row: 1, first_col: 1, last_col: 2 })
    );
    assert!(encoder.symbols_in(&grid, Region { first_row: 1, last_row: 0, first_col: 0, last_col: 0 }).is_err());
  }
  #[test]
  fn custom_checker() {
    /* Treats any region of four pixels or fewer as uniform */
    struct Coarse;
    impl UniformityChecker for Coarse {
      fn is_uniform(&self, grid: &PixelGrid, region: &Region) -> bool {
        region.area() <= 4 || ScanChecker.is_uniform(grid, region)
      }
    }
    let grid = PixelGrid::from_values(4, 4, vec![
      1,0,0,0,
      0,0,0,0,
      0,0,0,0,
      0,0,0,0,
    ]).unwrap();
    assert_eq!("XPBBB", QuadEncoder::with_checker(Coarse).encode(&grid).to_string());
    assert_eq!("XXPBBBBBB", QuadEncoder::new().encode(&grid).to_string());
  }
}
