// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Coverage and fragmentation of a range set.

use num_integer::Integer;
use num_traits::{ToPrimitive, Unsigned};

/// Summary of the ranges stored in a set.
///
/// * `covered` is the total width of the stored ranges.
/// * `fragmentation` is the share of `covered` lying outside the widest range, that is `(covered - widest) / covered`. It is `0` when the set is empty or holds a single range, and tends to `1` when the covered values are scattered across many small ranges.
///
/// # Examples
///
/// ```rust
/// use rangeset::RangeSet;
///
/// let mut set = RangeSet::new();
/// set.insert(0usize, 100);
/// set.erase(10, 20);
/// let stats = set.stats();
/// assert_eq!(stats.covered, 90);
/// assert_eq!(stats.fragmentation, 10.0 / 90.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats<W>
{
  pub covered: W,
  pub fragmentation: f64
}

impl<W> Stats<W> where
 W: Unsigned + Integer + ToPrimitive + Copy
{
  pub(crate) fn new(covered: W, widest: W) -> Stats<W> {
    debug_assert!(widest <= covered, "The widest range cannot be wider than the whole set.");
    let fragmentation =
      if covered.is_zero() { 0.0 }
      else {
        let outside = (covered - widest).to_f64().unwrap_or(0.0);
        let covered = covered.to_f64().unwrap_or(1.0);
        outside / covered
      };
    Stats {
      covered: covered,
      fragmentation: fragmentation
    }
  }

  /// Computes the statistics from the widths of the stored ranges.
  pub(crate) fn from_widths<I>(widths: I) -> Stats<W> where
   I: IntoIterator<Item=W>
  {
    let (covered, widest) = widths.into_iter()
      .fold((W::zero(), W::zero()), |(covered, widest), width| {
        (covered + width, if width > widest { width } else { widest })
      });
    Stats::new(covered, widest)
  }
}
