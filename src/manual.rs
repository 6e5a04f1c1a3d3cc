use {
  std::io::{BufRead, Write},
  log::debug,
  crate::config::Limits,
  crate::error::PbmError,
  crate::grid::PixelGrid,
  crate::pbm::{read_dimensions, read_pixels, Tokens},
};

type Result<T> = std::result::Result<T, PbmError>;

/// Prompt written before the dimensions are read.
pub const DIMENSIONS_PROMPT: &str = "Enter the matrix dimensions (width and height): ";
/// Prompt written before the pixels are read.
pub const ELEMENTS_PROMPT: &str = "Enter the matrix elements:";

/// Reads an image typed in by hand.
///
/// Prompts on `prompt` for the width and height, rejects them if they are
/// over `limits`, then prompts for and reads `width * height` pixels of 0 or 1.
/// Values may be split across lines however the user likes.
/// ```
/// fn main() -> Result<(), quad_encoder::error::PbmError> {
///   use quad_encoder::{config::Limits, manual::read_manual};
///   let mut prompts = Vec::new();
///   let grid = read_manual("3 1\n1 0 1\n".as_bytes(), &mut prompts, &Limits::default())?;
///   assert_eq!(vec![vec![1, 0, 1]], grid.to_rows());
///   Ok(())
/// }
/// ```
pub fn read_manual<R: BufRead, W: Write>(input: R, mut prompt: W, limits: &Limits) -> Result<PixelGrid> {
  let mut tokens = Tokens::new(input, "<stdin>");
  write_prompt(&mut prompt, DIMENSIONS_PROMPT)?;
  let (width, height) = read_dimensions(&mut tokens)?;
  let pixels = limits.check(width, height)?;
  debug!("manual entry of a {}x{} matrix", width, height);
  write_prompt(&mut prompt, &format!("{}\n", ELEMENTS_PROMPT))?;
  read_pixels(&mut tokens, width, height, pixels)
}

fn write_prompt<W: Write>(prompt: &mut W, text: &str) -> Result<()> {
  prompt.write_all(text.as_bytes())
  .and_then(|_| prompt.flush())
  .map_err(|source| PbmError::Resource {
    path: String::from("<stdout>"),
    source,
  })
}
