//! Power-set enumeration over optional products.
//!
//! Kept apart from the filters and pricing so a cost bound can later be
//! added to the search without touching either.

use std::ops::Range;

use itertools::{Itertools, Powerset};

/// Iterator over every subset of `0..n`, as sorted index vectors.
///
/// Subsets come by ascending size, lexicographically within a size:
/// `[]`, `[0]`, `[1]`, `[0, 1]` for `n = 2`. The search relies on this order
/// to break cost ties deterministically.
#[derive(Debug, Clone)]
pub struct Subsets(Powerset<Range<usize>>);

impl Subsets {
    pub fn new(n: usize) -> Self {
        Self((0..n).powerset())
    }
}

impl Iterator for Subsets {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}
