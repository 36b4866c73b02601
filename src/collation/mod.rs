//! Sibling ordering strategies.

mod natural_collator;

pub use natural_collator::NaturalCollator;

use std::cmp::Ordering;
use std::fmt;

/// Orders sibling names.
///
/// Implementations may report `Equal` for distinct names (for instance when
/// ignoring case); the tree breaks such ties by plain byte order so sibling
/// lists stay strictly ordered.
pub trait Collator: fmt::Debug {
    fn compare(&self, left: &str, right: &str) -> Ordering;
}

/// Plain byte-wise ordering, handy as a fixed comparator in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryCollator;

impl Collator for BinaryCollator {
    fn compare(&self, left: &str, right: &str) -> Ordering {
        left.cmp(right)
    }
}
