use log::trace;
use crate::{
  grid::PixelGrid,
  quadtree::{Region, ScanChecker, Symbol, UniformityChecker},
};

/// A lazy, pre-order walk of the quadtree of a PixelGrid which produces
/// one Symbol per region visited.
///
/// Regions still to be visited are kept on a stack, with the children of a
/// split pushed in reverse so they pop in top-left, top-right, bottom-left,
/// bottom-right order. The symbols come out exactly as a depth-first
/// recursion would print them, without using the call stack.
#[derive(Debug)]
pub struct Symbols<'a, C: UniformityChecker = ScanChecker> {
  grid: &'a PixelGrid,
  checker: &'a C,
  pending: Vec<Region>,
}
impl<'a, C: UniformityChecker> Iterator for Symbols<'a, C> {
  type Item = Symbol;
  fn next(&mut self) -> Option<Self::Item> {
    let region = self.pending.pop()?;
    /* A single pixel is uniform whatever the checker says, which guarantees the walk ends */
    if region.is_single_pixel() || self.checker.is_uniform(self.grid, &region) {
      return Some(Symbol::leaf(self.grid.bit(region.first_row, region.first_col)))
    }
    trace!("splitting region {}", region);
    self.pending.extend(region.quadrants().into_iter().rev());
    Some(Symbol::Split)
  }
}
impl<'a, C: UniformityChecker> std::iter::FusedIterator for Symbols<'a, C> {}
impl<'a, C: UniformityChecker> Symbols<'a, C> {
  /// Produces a Symbols iterator over `root`, or an empty one for `None`.
  ///
  /// `root` must lie inside `grid`.
  pub(crate) fn new(grid: &'a PixelGrid, checker: &'a C, root: Option<Region>) -> Self {
    let mut pending = Vec::new();
    pending.extend(root);
    Self {
      grid,
      checker,
      pending,
    }
  }
  /// Returns true once every region has been visited.
  pub fn is_finished(&self) -> bool {
    self.pending.is_empty()
  }
}
