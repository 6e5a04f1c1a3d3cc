/*!
Reading of plain ("P1") Portable Bitmap images.

```ignore
P1
# comments run from '#' to the end of the line
4 2
0 1 1 0
1 1 1 1
```

The magic number is followed by the width and the height, then
`width * height` pixels, each `0` (white) or `1` (black), separated by any
whitespace. Dimensions are checked against [`Limits`] before the raster is
read, and nothing is returned unless every pixel was read successfully.
*/

use {
  std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind},
    path::Path,
  },
  bitvec::vec::BitVec,
  log::{debug, warn},
  crate::config::{Limits, MAX_HEIGHT, MAX_WIDTH},
  crate::error::PbmError,
  crate::grid::PixelGrid,
};

type Result<T> = std::result::Result<T, PbmError>;

/// The magic number of a plain PBM file.
pub const MAGIC: &str = "P1";

/// Reads a plain PBM image from a buffered reader.
/// ```
/// fn main() -> Result<(), quad_encoder::error::PbmError> {
///   use quad_encoder::{config::Limits, pbm::read_pbm};
///   let text = "P1\n# tiny\n2 2\n0 1\n1 0\n";
///   let grid = read_pbm(text.as_bytes(), &Limits::default())?;
///   assert_eq!(vec![vec![0, 1], vec![1, 0]], grid.to_rows());
///   Ok(())
/// }
/// ```
pub fn read_pbm<R: BufRead>(reader: R, limits: &Limits) -> Result<PixelGrid> {
  read_named(reader, "<input>", limits)
}

/// Reads a plain PBM image held in a string.
pub fn parse_pbm(text: &str, limits: &Limits) -> Result<PixelGrid> {
  read_named(text.as_bytes(), "<string>", limits)
}

/// Opens and reads a plain PBM file.
pub fn open_pbm<P: AsRef<Path>>(path: P, limits: &Limits) -> Result<PixelGrid> {
  let path = path.as_ref();
  let name = path.display().to_string();
  let file = match File::open(path) {
    Ok(file) => file,
    Err(source) => return Err(PbmError::Resource {
      path: name,
      source,
    }),
  };
  read_named(BufReader::new(file), &name, limits)
}

fn read_named<R: BufRead>(reader: R, name: &str, limits: &Limits) -> Result<PixelGrid> {
  let mut tokens = Tokens::new(reader, name);
  match tokens.next_token()? {
    Some(ref magic) if magic == MAGIC => {},
    Some(found) => return Err(PbmError::Format { found }),
    None => return Err(PbmError::Format { found: String::new() }),
  }
  let (width, height) = read_dimensions(&mut tokens)?;
  let pixels = limits.check(width, height)?;
  debug!("{}: {}x{} plain PBM", name, width, height);
  let grid = read_pixels(&mut tokens, width, height, pixels)?;
  if let Some(extra) = tokens.next_token()? {
    warn!("{}: ignoring data after the last pixel, starting with {:?}", name, extra);
  }
  Ok(grid)
}

/* Shared with manual entry */

/// Whitespace-separated tokens read a line at a time, with `#` comments removed.
///
/// Lines are only read when the previous one is used up, so an interactive
/// reader is never asked for more than the caller needs.
pub(crate) struct Tokens<R> {
  reader: R,
  name: String,
  line: String,
  pending: Vec<String>,
}
impl<R: BufRead> Tokens<R> {
  pub(crate) fn new(reader: R, name: &str) -> Self {
    Tokens {
      reader,
      name: name.to_string(),
      line: String::new(),
      pending: Vec::new(),
    }
  }
  pub(crate) fn next_token(&mut self) -> Result<Option<String>> {
    loop {
      if let Some(token) = self.pending.pop() {
        return Ok(Some(token))
      }
      self.line.clear();
      let read = match self.reader.read_line(&mut self.line) {
        Ok(read) => read,
        Err(ref e) if e.kind() == ErrorKind::InvalidData => return Err(PbmError::Binary {
          path: self.name.clone(),
        }),
        Err(source) => return Err(PbmError::Resource {
          path: self.name.clone(),
          source,
        }),
      };
      if read == 0 { return Ok(None) }
      let content = self.line.split('#').next().unwrap_or("");
      /* Reversed so that pop() yields them in order */
      self.pending = content.split_whitespace().rev().map(String::from).collect();
    }
  }
}

/// Reads `width height`.
pub(crate) fn read_dimensions<R: BufRead>(tokens: &mut Tokens<R>) -> Result<(usize, usize)> {
  let width = read_dimension(tokens)?;
  let height = read_dimension(tokens)?;
  Ok((width, height))
}

fn read_dimension<R: BufRead>(tokens: &mut Tokens<R>) -> Result<usize> {
  match tokens.next_token()? {
    Some(token) => token.parse::<usize>().map_err(|_| PbmError::MalformedDimension { token }),
    None => Err(PbmError::MissingDimensions),
  }
}

/// Reads the `expected` pixels of a `width` by `height` image in row-major
/// order. `expected` comes from `Limits::check`.
pub(crate) fn read_pixels<R: BufRead>(tokens: &mut Tokens<R>, width: usize, height: usize, expected: usize) -> Result<PixelGrid> {
  /* Room for a default-sized image at most, however large the header claims to be */
  let mut bits = BitVec::with_capacity(expected.min(MAX_WIDTH*MAX_HEIGHT));
  for i in 0..expected {
    let token = match tokens.next_token()? {
      Some(token) => token,
      None => return Err(PbmError::Truncated {
        expected,
        found: i,
      }),
    };
    match token.as_str() {
      "0" => bits.push(false),
      "1" => bits.push(true),
      _ => return Err(PbmError::MalformedValue {
        row: i / width,
        col: i % width,
        token,
      }),
    }
  }
  Ok(PixelGrid::from_raw(width, height, bits))
}
