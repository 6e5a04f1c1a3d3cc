use std::{
  io::{self, BufRead, BufWriter, Write},
  path::PathBuf,
  process::ExitCode,
};

use anyhow::Context;
use clap::{ArgAction, CommandFactory, Parser};
use log::{debug, info};
use quad_encoder::{
  config::Limits,
  manual::read_manual,
  pbm::open_pbm,
  PixelGrid,
  QuadEncoder,
};

/// Encodes binary images given in PBM files or typed in manually.
///
/// The image is written to standard output as a quadtree stream: `X` for a
/// region that was split into quadrants, `B` for an all-white region and `P`
/// for an all-black one.
#[derive(Debug, Parser)]
#[command(name = "image_encoder", version, disable_help_flag = true)]
struct Cli {
  /// Show this usage text.
  #[arg(short = '?', long, action = ArgAction::Help)]
  help: Option<bool>,

  /// Type the image dimensions and pixels in at the keyboard.
  #[arg(short, long, conflicts_with = "file")]
  manual: bool,

  /// Encode the image in a plain PBM (P1) file.
  #[arg(short, long, value_name = "FILE")]
  file: Option<PathBuf>,
}

fn main() -> ExitCode {
  // Logs go to stderr so stdout only ever carries the encoding.
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

  let stdin = io::stdin();
  let stdout = io::stdout();
  match run(Cli::parse(), stdin.lock(), stdout.lock()) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("Error: {:#}", e);
      ExitCode::FAILURE
    }
  }
}

/// Reads the image the command line asks for and writes its encoding to `out`.
///
/// Nothing is written to `out` unless the image was read successfully, apart
/// from the prompts of manual entry.
fn run<R: BufRead, W: Write>(cli: Cli, input: R, mut out: W) -> anyhow::Result<()> {
  let limits = Limits::default();
  let grid = if let Some(path) = &cli.file {
    open_pbm(path, &limits).with_context(|| format!("could not read image from '{}'", path.display()))?
  } else if cli.manual {
    read_manual(input, &mut out, &limits).context("could not read image from the keyboard")?
  } else {
    debug!("no mode given, showing usage");
    Cli::command().write_help(&mut out)?;
    return Ok(())
  };
  write_encoding(&grid, out)
}

fn write_encoding<W: Write>(grid: &PixelGrid, out: W) -> anyhow::Result<()> {
  info!("encoding a {}x{} image", grid.width(), grid.height());
  let mut out = BufWriter::new(out);
  for symbol in QuadEncoder::new().symbols(grid) {
    write!(out, "{}", symbol.as_char())?;
  }
  writeln!(out)?;
  out.flush().context("could not write the encoding")?;
  Ok(())
}
