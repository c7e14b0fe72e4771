// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Coalescing insertion and splitting erasure over an ordered index of ranges.
//!
//! Both [RangeSet](../range_set/index.html) and [RangeSizeSet](../range_size_set/index.html) store their ranges `[from, to)` in an index keyed by `from`. The algorithms maintaining the invariants of the set (ranges are ordered, never overlap and never touch) are written once against the primitive operations of `RangeIndex`. An index with several views (such as the size view of `RangeSizeSet`) keeps them in lockstep inside these primitives.

use log::trace;
use std::cmp::max;
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

/// Identifies a stored range by its lower bound.
///
/// Unlike a cursor, a position does not borrow the set: it stays meaningful across mutations and swaps, and it is resolved again with `cursor_at`. It resolves to nothing once the range it names has been erased, merged into a range starting earlier, or re-keyed by an erasure of its front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position<T>
{
  from: T
}

impl<T: Copy> Position<T>
{
  pub(crate) fn new(from: T) -> Position<T> {
    Position { from: from }
  }

  /// Lower bound of the range named by this position.
  pub fn start(&self) -> T {
    self.from
  }
}

pub(crate) trait RangeIndex<T: Ord + Copy>
{
  /// Last range whose lower bound is at most `value`.
  fn floor(&self, value: &T) -> Option<(T, T)>;
  /// First range whose lower bound is strictly greater than `value`.
  fn successor(&self, value: &T) -> Option<(T, T)>;
  /// Last range whose lower bound is strictly less than `value`.
  fn predecessor(&self, value: &T) -> Option<(T, T)>;
  fn insert_range(&mut self, from: T, to: T);
  fn erase_range(&mut self, from: &T);
  /// Moves the upper bound of the range starting at `from`.
  fn set_to(&mut self, from: &T, to: T);

  fn reduce_to(&mut self, from: &T, old_to: T, to: T) {
    debug_assert!(*from < to && to < old_to, "Reducing a range must keep it non-empty and strictly smaller.");
    self.set_to(from, to);
  }

  /// The lower bound is the key of the index, so it cannot be updated in place.
  fn reduce_from(&mut self, from: T, to: T, new_from: T) {
    debug_assert!(from < new_from && new_from < to, "Reducing a range must keep it non-empty and strictly smaller.");
    self.erase_range(&from);
    self.insert_range(new_from, to);
  }

  /// Splits `[from, to)` into `[from, hole_from)` and `[hole_to, to)`.
  fn bisect(&mut self, from: T, to: T, hole_from: T, hole_to: T) {
    debug_assert!(from < hole_from, "Cannot bisect a range from its lower bound.");
    debug_assert!(hole_to < to, "Cannot bisect a range up to its upper bound.");
    debug_assert!(hole_from < hole_to, "Cannot bisect a range with an empty hole.");
    trace!("splitting a stored range in two");
    self.reduce_to(&from, to, hole_from);
    self.insert_range(hole_to, to);
  }

  /// Absorbs every range following `retained` and starting at most at `to`.
  fn absorb(&mut self, retained: T, retained_to: T, to: T) {
    let mut end = retained_to;
    let mut absorbed = 0usize;
    while let Some((next_from, next_to)) = self.successor(&retained) {
      if next_from > to {
        break;
      }
      if next_to > end {
        self.set_to(&retained, next_to);
        end = next_to;
      }
      self.erase_range(&next_from);
      absorbed += 1;
    }
    if absorbed > 0 {
      trace!("coalesced {} stored ranges", absorbed);
    }
  }

  fn merge_insert(&mut self, from: T, to: T) {
    if !(from < to) {
      return;
    }
    if let Some((left_from, left_to)) = self.floor(&from) {
      if left_to >= from {
        if to > left_to {
          self.set_to(&left_from, to);
        }
        self.absorb(left_from, max(left_to, to), to);
        return;
      }
    }
    match self.successor(&from) {
      Some((right_from, right_to)) if right_from <= to => {
        let end = max(to, right_to);
        self.erase_range(&right_from);
        self.insert_range(from, end);
        self.absorb(from, end, to);
      }
      _ => self.insert_range(from, to)
    }
  }

  fn split_erase(&mut self, from: T, to: T) {
    if !(from < to) {
      return;
    }
    let first = match self.floor(&from) {
      Some((left_from, left_to)) if left_from == from => Some((left_from, left_to)),
      Some((left_from, left_to)) => {
        if from < left_to {
          if to < left_to {
            self.bisect(left_from, left_to, from, to);
            return;
          }
          self.reduce_to(&left_from, left_to, from);
        }
        self.successor(&from)
      }
      None => self.successor(&from)
    };
    self.erase_until(first, to);
  }

  /// Erases the ranges from `next` on, up to `to`; `next` must start at or after the lower bound of the erased range.
  fn erase_until(&mut self, mut next: Option<(T, T)>, to: T) {
    while let Some((next_from, next_to)) = next {
      if to <= next_from {
        return;
      }
      if to < next_to {
        self.reduce_from(next_from, next_to, to);
        return;
      }
      self.erase_range(&next_from);
      if to == next_to {
        return;
      }
      next = self.successor(&next_from);
    }
  }
}

impl<T: Ord + Copy> RangeIndex<T> for BTreeMap<T, T>
{
  fn floor(&self, value: &T) -> Option<(T, T)> {
    self.range(..=*value).next_back().map(|(from, to)| (*from, *to))
  }

  fn successor(&self, value: &T) -> Option<(T, T)> {
    self.range((Excluded(*value), Unbounded)).next().map(|(from, to)| (*from, *to))
  }

  fn predecessor(&self, value: &T) -> Option<(T, T)> {
    self.range(..*value).next_back().map(|(from, to)| (*from, *to))
  }

  fn insert_range(&mut self, from: T, to: T) {
    let previous = self.insert(from, to);
    debug_assert!(previous.is_none(), "Cannot insert a range over a stored range starting at the same bound.");
  }

  fn erase_range(&mut self, from: &T) {
    let removed = self.remove(from);
    debug_assert!(removed.is_some(), "Cannot erase a range that is not stored.");
  }

  fn set_to(&mut self, from: &T, to: T) {
    match self.get_mut(from) {
      Some(end) => *end = to,
      None => debug_assert!(false, "Cannot move the upper bound of a range that is not stored.")
    }
  }
}
