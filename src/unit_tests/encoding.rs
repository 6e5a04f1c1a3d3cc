
/* Encoding Property Tests */

use crate::{
  config::Limits,
  error::PbmError,
  pbm::parse_pbm,
  quadtree::{ScanChecker, UniformityChecker},
  encode,
  Encoding,
  PixelGrid,
  QuadEncoder,
  Region,
  Symbol,
};
use rand::Rng;

type Result<T> = std::result::Result<T, crate::error::Error>;

/* Private funcs used in testing */
fn checkerboard(n: usize) -> PixelGrid {
  PixelGrid::from_bits(n, n, (0..n*n).map(|i| (i / n + i % n) % 2 == 1)).unwrap()
}
fn random_grid(rng: &mut impl Rng, width: usize, height: usize) -> PixelGrid {
  /* Mostly blocky images, so some quadrants come out uniform */
  let block = rng.gen_range(1, 5);
  let seeds: Vec<bool> = (0..width*height).map(|_| rng.gen()).collect();
  PixelGrid::from_bits(width, height, (0..width*height).map(|i| {
    let (row, col) = (i / width, i % width);
    seeds[(row / block * block) * width + (col / block * block)]
  })).unwrap()
}
/// Straightforward recursive encoder to compare the iterator against.
fn reference(grid: &PixelGrid, region: Region, out: &mut String) {
  let first = grid.get(region.first_row, region.first_col).unwrap();
  let mut uniform = true;
  for row in region.first_row..=region.last_row {
    for col in region.first_col..=region.last_col {
      uniform &= grid.get(row, col).unwrap() == first;
    }
  }
  if uniform {
    out.push(if first { 'P' } else { 'B' });
    return
  }
  out.push('X');
  let mid_row = (region.first_row + region.last_row) / 2;
  let mid_col = (region.first_col + region.last_col) / 2;
  reference(grid, Region::new(region.first_row, mid_row, region.first_col, mid_col).unwrap(), out);
  if mid_col + 1 <= region.last_col {
    reference(grid, Region::new(region.first_row, mid_row, mid_col+1, region.last_col).unwrap(), out);
  }
  if mid_row + 1 <= region.last_row {
    reference(grid, Region::new(mid_row+1, region.last_row, region.first_col, mid_col).unwrap(), out);
    if mid_col + 1 <= region.last_col {
      reference(grid, Region::new(mid_row+1, region.last_row, mid_col+1, region.last_col).unwrap(), out);
    }
  }
}
/// Walks the quadtree alongside the symbols, checking each one against the
/// region it stands for. Returns the number of regions visited.
fn check_structure(grid: &PixelGrid, region: Region, symbols: &mut std::slice::Iter<'_, Symbol>) -> usize {
  let uniform = ScanChecker.is_uniform(grid, &region);
  match symbols.next() {
    Some(Symbol::Split) => {
      assert!(!uniform, "split of uniform region {}", region);
      1 + region.quadrants().into_iter().map(|q| check_structure(grid, q, symbols)).sum::<usize>()
    },
    Some(leaf) => {
      assert!(uniform, "leaf for mixed region {}", region);
      assert_eq!(Symbol::leaf(grid.get(region.first_row, region.first_col).unwrap()), *leaf);
      1
    },
    None => panic!("stream ended before region {}", region),
  }
}

#[test]
fn concrete_scenarios() -> Result<()> {
  let black = PixelGrid::from_rows(vec![vec![1, 1], vec![1, 1]])?;
  assert_eq!("P", encode(&black).to_string());
  let diagonal = PixelGrid::from_rows(vec![vec![0, 1], vec![1, 0]])?;
  assert_eq!("XBPPB", encode(&diagonal).to_string());
  Ok(())
}
#[test]
fn uniform_grids() {
  for &(width, height) in [(1, 1), (2, 2), (7, 3), (1, 9), (64, 64), (1024, 768)].iter() {
    assert_eq!("B", encode(&PixelGrid::with_dimensions(width, height).unwrap()).to_string());
    let black = PixelGrid::from_bits(width, height, std::iter::repeat(true).take(width*height)).unwrap();
    assert_eq!("P", encode(&black).to_string());
  }
}
#[test]
fn single_pixel() -> Result<()> {
  assert_eq!(vec![Symbol::White], encode(&PixelGrid::from_values(1, 1, vec![0])?).into_symbols());
  assert_eq!(vec![Symbol::Black], encode(&PixelGrid::from_values(1, 1, vec![1])?).into_symbols());
  Ok(())
}
#[test]
fn checkerboard_worst_case() {
  assert_eq!("XBPPB", encode(&checkerboard(2)).to_string());
  assert_eq!(format!("X{}", "XBPPB".repeat(4)), encode(&checkerboard(4)).to_string());
  for &n in [2usize, 4, 8, 16, 32].iter() {
    let stats = encode(&checkerboard(n)).stats();
    assert_eq!((n*n - 1) / 3, stats.splits);
    assert_eq!(n*n / 2, stats.white_leaves);
    assert_eq!(n*n / 2, stats.black_leaves);
  }
}
#[test]
fn odd_dimensions() -> Result<()> {
  let grid = PixelGrid::from_values(3, 3, vec![
    1,0,0,
    0,0,0,
    0,0,0,
  ])?;
  assert_eq!("XXPBBBBBB", encode(&grid).to_string());
  let row = PixelGrid::from_values(5, 1, vec![0,0,0,1,1])?;
  assert_eq!("XBP", encode(&row).to_string());
  Ok(())
}
#[test]
fn single_column() -> Result<()> {
  /* No phantom right-hand quadrants for a one-pixel-wide image */
  let column = PixelGrid::from_values(1, 3, vec![0, 0, 1])?;
  assert_eq!("XBP", encode(&column).to_string());
  let column = PixelGrid::from_values(1, 4, vec![0, 1, 1, 1])?;
  assert_eq!("XXBPP", encode(&column).to_string());
  Ok(())
}
#[test]
fn matches_recursive_reference() {
  let mut rng = rand::thread_rng();
  for _ in 0..200 {
    let width = rng.gen_range(1, 40);
    let height = rng.gen_range(1, 40);
    let grid = random_grid(&mut rng, width, height);
    let mut expected = String::new();
    reference(&grid, grid.full_region().unwrap(), &mut expected);
    assert_eq!(expected, encode(&grid).to_string(), "{}x{} grid {:?}", width, height, grid.to_rows());
  }
}
#[test]
fn split_count_invariant() {
  let mut rng = rand::thread_rng();
  for _ in 0..200 {
    let width = rng.gen_range(1, 33);
    let height = rng.gen_range(1, 33);
    let grid = random_grid(&mut rng, width, height);
    let encoding = encode(&grid);
    let mut symbols = encoding.symbols().iter();
    let visited = check_structure(&grid, grid.full_region().unwrap(), &mut symbols);
    assert_eq!(None, symbols.next(), "symbols left over");
    assert_eq!(visited, encoding.len());
    assert_eq!(visited, encoding.stats().regions());
  }
}
#[test]
fn deterministic() {
  let mut rng = rand::thread_rng();
  let grid = random_grid(&mut rng, 97, 61);
  let encoder = QuadEncoder::new();
  assert_eq!(encoder.encode(&grid), encoder.encode(&grid));
  assert_eq!(encode(&grid).to_string(), encode(&grid.clone()).to_string());
}
#[test]
fn lazy_matches_collected() {
  let mut rng = rand::thread_rng();
  let grid = random_grid(&mut rng, 23, 17);
  let encoder = QuadEncoder::new();
  let lazy: Encoding = encoder.symbols(&grid).collect();
  assert_eq!(encoder.encode(&grid), lazy);
}
#[test]
fn stream_parses_back() {
  let encoding = encode(&checkerboard(8));
  let parsed: Encoding = encoding.to_string().parse().unwrap();
  assert_eq!(encoding, parsed);
}
#[test]
fn boundary_rejection() {
  let limits = Limits::default();
  let wide = format!("P1\n1025 1\n{}", "0 ".repeat(1025));
  assert!(matches!(parse_pbm(&wide, &limits), Err(PbmError::Bounds{width: 1025, ..})));
  let tall = format!("P1\n1 769\n{}", "0\n".repeat(769));
  assert!(matches!(parse_pbm(&tall, &limits), Err(PbmError::Bounds{height: 769, ..})));
  let largest = format!("P1\n1024 768\n{}", "1 ".repeat(1024*768));
  assert_eq!("P", encode(&parse_pbm(&largest, &limits).unwrap()).to_string());
}
#[test]
fn pbm_to_stream() -> Result<()> {
  let text = "P1\n# the example image\n4 4\n0 1 0 0\n0 0 0 0\n0 0 1 1\n0 0 1 1\n";
  let grid = parse_pbm(text, &Limits::default())?;
  assert_eq!("XXBPBBBBP", encode(&grid).to_string());
  Ok(())
}
