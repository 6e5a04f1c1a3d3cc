#![warn(missing_debug_implementations, rust_2018_idioms, missing_docs)]

/*!
Encodes binary (two-colour) raster images as a stream of quadtree symbols.

An image is split into four quadrants, each quadrant into four more, and so
on, until every piece is a single colour. Walking that tree in pre-order and
writing one character per node gives the encoding:
* `X` - the region was split, its children follow.
* `B` - the region is entirely white (0).
* `P` - the region is entirely black (1).
*/

/*!
# How it Works:

## Original Image:

```ignore
0 1 | 0 0
0 0 | 0 0
---------
0 0 | 1 1
0 0 | 1 1
```

The whole image is not one colour, so it is split (`X`) at the midpoint of
its rows and of its columns. Midpoints round down, so odd-sized regions give
the extra row to the top half and the extra column to the left half.

## Quadrants

The four quadrants are then visited in the order top-left, top-right,
bottom-left, bottom-right:
* Top-left `[0 1; 0 0]` is mixed, so it is split again (`X`) into four
  single pixels: `B`, `P`, `B`, `B`.
* Top-right is all white: `B`.
* Bottom-left is all white: `B`.
* Bottom-right is all black: `P`.

A region one row tall has no bottom quadrants, and one a single column wide
has no right quadrants. A single pixel is always one colour, so the splitting
always ends.

## Final Encoding:

`XXBPBBBBP`

```
fn main() -> Result<(), quad_encoder::error::Error> {
  use quad_encoder::{encode, PixelGrid};
  let grid = PixelGrid::from_rows(vec![
    vec![0, 1, 0, 0],
    vec![0, 0, 0, 0],
    vec![0, 0, 1, 1],
    vec![0, 0, 1, 1],
  ])?;
  assert_eq!("XXBPBBBBP", encode(&grid).to_string());
  Ok(())
}
```
*/

pub use grid::PixelGrid;
pub use quadtree::{encode, Encoding, QuadEncoder, Region, Symbol};

/// `PixelGrid` struct.
pub mod grid;

/// Regions, the uniformity check and the quadtree encoder.
pub mod quadtree;

/// Plain PBM (`P1`) reading.
pub mod pbm;

/// Interactive entry of an image.
pub mod manual;

/// Dimension limits shared by every way of reading an image.
pub mod config;

/// Library error types.
pub mod error;

#[cfg(test)]
mod unit_tests;
