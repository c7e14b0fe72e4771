// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Set of half-open ranges with automatic coalescing, also indexed by the width of the ranges.
//!
//! It behaves exactly like [RangeSet](../range_set/index.html), but every stored range is also recorded in a second index ordered by decreasing width. The widest (or narrowest) range, or a range of a given width, is found in logarithmic time. This is useful to track the free regions of an address space, for example.
//!
//! The two indices refer to each other by key: an entry of the main index knows the width of its range, and an entry of the width index knows the lower bound of its range. A [Cursor](struct.Cursor.html) over the ranges in ascending order is converted into a [SizeCursor](struct.SizeCursor.html) over the ranges by width, and back, in constant time.
//!
//! # Examples
//!
//! ```rust
//! use rangeset::RangeSizeSet;
//!
//! let mut free = RangeSizeSet::new();
//! free.insert(0u64, 4096);
//! free.erase(1000, 1100);
//! free.erase(3000, 3010);
//!
//! assert_eq!(free.largest(), Some(1100..3000));
//! assert_eq!(free.smallest(), Some(0..1000));
//!
//! // Widest range of width at most 1500.
//! let fit = free.by_size_lower_bound(1500);
//! assert_eq!(fit.range(), Some(3010..4096));
//! let mut next = fit.to_range_cursor();
//! next.move_next();
//! assert!(next.is_end());
//! ```

use crate::index::{Position, RangeIndex};
use crate::ops::Width;
use crate::serialization::{deserialize_ranges, serialize_ranges};
use crate::stats::Stats;
use gcollections::kind::Collection;
use gcollections::ops::{Cardinality, Contains, Empty};
use log::trace;
use num_traits::Zero;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::cmp::Reverse;
use std::collections::{btree_map, btree_set, BTreeMap, BTreeSet};
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::mem;
use std::ops::Bound::{Excluded, Included, Unbounded};
use std::ops::Range;
use std::ptr;

/// Value of the main index.
#[derive(Clone, PartialEq, Eq)]
struct Entry<T: Width>
{
  to: T,
  /// Width of `[from, to)`, locates the range in the width index.
  width: T::Output
}

/// Key of the width index, the widest ranges come first. Ranges of the same width are ordered by their lower bound, which is also the key of the range in the main index.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct SizeKey<T, W>
{
  width: Reverse<W>,
  from: T
}

impl<T, W> SizeKey<T, W>
{
  fn new(from: T, width: W) -> SizeKey<T, W> {
    SizeKey {
      width: Reverse(width),
      from: from
    }
  }
}

#[derive(Clone)]
struct Indices<T: Width>
{
  // Assumptions that can be made about the data:
  // - `from` is the key of `by_start` and `from < entry.to`.
  // - Stored ranges never overlap and never touch.
  // - `by_size` holds exactly `SizeKey::new(from, entry.width)` for every entry of `by_start`.
  by_start: BTreeMap<T, Entry<T>>,
  by_size: BTreeSet<SizeKey<T, T::Output>>
}

impl<T: Width> Indices<T>
{
  fn new() -> Indices<T> {
    Indices {
      by_start: BTreeMap::new(),
      by_size: BTreeSet::new()
    }
  }

  fn first(&self) -> Option<(T, T)> {
    self.by_start.iter().next().map(|(from, entry)| (*from, entry.to))
  }

  fn last(&self) -> Option<(T, T)> {
    self.by_start.iter().next_back().map(|(from, entry)| (*from, entry.to))
  }

  /// Follows the reference from the width index to the main index.
  fn resolve(&self, key: &SizeKey<T, T::Output>) -> Option<(T, T)> {
    let resolved = self.by_start.get(&key.from).map(|entry| (key.from, entry.to));
    debug_assert!(resolved.is_some(), "The width index refers to a range missing from the main index.");
    resolved
  }

  fn size_key(from: T, to: T) -> SizeKey<T, T::Output> {
    SizeKey::new(from, T::width(&from, &to))
  }

  /// First key of width at most `width`.
  fn size_lower_bound(&self, width: T::Output) -> Option<&SizeKey<T, T::Output>> {
    self.by_size.range(SizeKey::new(T::min_value(), width)..).next()
  }

  /// First key of width strictly less than `width`.
  fn size_upper_bound(&self, width: T::Output) -> Option<&SizeKey<T, T::Output>> {
    self.by_size.range((Excluded(SizeKey::new(T::max_value(), width)), Unbounded)).next()
  }
}

impl<T: Width> RangeIndex<T> for Indices<T>
{
  fn floor(&self, value: &T) -> Option<(T, T)> {
    self.by_start.range(..=*value).next_back().map(|(from, entry)| (*from, entry.to))
  }

  fn successor(&self, value: &T) -> Option<(T, T)> {
    self.by_start.range((Excluded(*value), Unbounded)).next().map(|(from, entry)| (*from, entry.to))
  }

  fn predecessor(&self, value: &T) -> Option<(T, T)> {
    self.by_start.range(..*value).next_back().map(|(from, entry)| (*from, entry.to))
  }

  fn insert_range(&mut self, from: T, to: T) {
    let width = T::width(&from, &to);
    let previous = self.by_start.insert(from, Entry { to: to, width: width });
    debug_assert!(previous.is_none(), "Cannot insert a range over a stored range starting at the same bound.");
    if let Some(previous) = previous {
      self.by_size.remove(&SizeKey::new(from, previous.width));
    }
    self.by_size.insert(SizeKey::new(from, width));
  }

  fn erase_range(&mut self, from: &T) {
    match self.by_start.remove(from) {
      Some(entry) => {
        let removed = self.by_size.remove(&SizeKey::new(*from, entry.width));
        debug_assert!(removed, "The width index lost track of a stored range.");
      }
      None => debug_assert!(false, "Cannot erase a range that is not stored.")
    }
  }

  fn set_to(&mut self, from: &T, to: T) {
    match self.by_start.get_mut(from) {
      Some(entry) => {
        let removed = self.by_size.remove(&SizeKey::new(*from, entry.width));
        debug_assert!(removed, "The width index lost track of a stored range.");
        entry.to = to;
        entry.width = T::width(from, &to);
        self.by_size.insert(SizeKey::new(*from, entry.width));
      }
      None => debug_assert!(false, "Cannot move the upper bound of a range that is not stored.")
    }
  }
}

pub struct RangeSizeSet<T: Width>
{
  indices: Indices<T>
}

impl<T: Width> RangeSizeSet<T>
{
  pub fn new() -> RangeSizeSet<T> {
    RangeSizeSet {
      indices: Indices::new()
    }
  }

  /// Number of stored ranges.
  pub fn len(&self) -> usize {
    self.indices.by_start.len()
  }

  pub fn is_empty(&self) -> bool {
    self.indices.by_start.is_empty()
  }

  pub fn clear(&mut self) {
    trace!("clearing {} ranges", self.len());
    self.indices.by_start.clear();
    self.indices.by_size.clear();
  }

  /// Adds `[from, to)` to the set, merging it with the stored ranges it overlaps or touches. Nothing happens if `from >= to`.
  pub fn insert(&mut self, from: T, to: T) {
    self.indices.merge_insert(from, to);
  }

  /// Removes `[from, to)` from the set, trimming or splitting the stored ranges it overlaps. Nothing happens if `from >= to`.
  pub fn erase(&mut self, from: T, to: T) {
    self.indices.split_erase(from, to);
  }

  /// Removes the range named by `position` from both indices and returns a cursor to the range following it in ascending order.
  ///
  /// Returns `None` if no stored range starts at `position`.
  pub fn remove(&mut self, position: Position<T>) -> Option<Cursor<'_, T>> {
    let from = position.start();
    if !self.indices.by_start.contains_key(&from) {
      return None;
    }
    self.indices.erase_range(&from);
    let next = self.indices.successor(&from);
    Some(Cursor::new(self, next))
  }

  pub fn contains(&self, value: &T) -> bool {
    match self.indices.floor(value) {
      Some((_, to)) => *value < to,
      None => false
    }
  }

  pub fn first(&self) -> Option<Range<T>> {
    self.indices.first().map(|(from, to)| from..to)
  }

  pub fn last(&self) -> Option<Range<T>> {
    self.indices.last().map(|(from, to)| from..to)
  }

  /// Widest stored range; among ranges of the same width, the one with the lowest bound.
  pub fn largest(&self) -> Option<Range<T>> {
    self.by_size_front().range()
  }

  /// Narrowest stored range; among ranges of the same width, the one with the highest bound.
  pub fn smallest(&self) -> Option<Range<T>> {
    self.by_size_back().range()
  }

  pub fn iter(&self) -> Iter<'_, T> {
    Iter { inner: self.indices.by_start.iter() }
  }

  /// Iterates over the ranges from the widest to the narrowest.
  pub fn by_size_iter(&self) -> SizeIter<'_, T> {
    SizeIter {
      indices: &self.indices,
      inner: self.indices.by_size.iter()
    }
  }

  /// Cursor on the first range, or on the end position if the set is empty.
  pub fn cursor_front(&self) -> Cursor<'_, T> {
    Cursor::new(self, self.indices.first())
  }

  /// Cursor on the last range, or on the end position if the set is empty.
  pub fn cursor_back(&self) -> Cursor<'_, T> {
    Cursor::new(self, self.indices.last())
  }

  /// Cursor on the end position, past the last range.
  pub fn cursor_end(&self) -> Cursor<'_, T> {
    Cursor::new(self, None)
  }

  pub fn cursor_at(&self, position: Position<T>) -> Option<Cursor<'_, T>> {
    let from = position.start();
    self.indices.by_start.get(&from).map(|entry| Cursor::new(self, Some((from, entry.to))))
  }

  /// Cursor on the widest range, or on the end position if the set is empty.
  pub fn by_size_front(&self) -> SizeCursor<'_, T> {
    self.size_cursor(self.indices.by_size.iter().next())
  }

  /// Cursor on the narrowest range, or on the end position if the set is empty.
  pub fn by_size_back(&self) -> SizeCursor<'_, T> {
    self.size_cursor(self.indices.by_size.iter().next_back())
  }

  /// Cursor on the end position, past the narrowest range.
  pub fn by_size_end(&self) -> SizeCursor<'_, T> {
    SizeCursor::new(self, None)
  }

  pub fn size_cursor_at(&self, position: Position<T>) -> Option<SizeCursor<'_, T>> {
    self.cursor_at(position).map(|cursor| cursor.to_size_cursor())
  }

  /// Number of stored ranges of width `width`.
  pub fn by_size_count(&self, width: T::Output) -> usize {
    let lower = SizeKey::new(T::min_value(), width);
    let upper = SizeKey::new(T::max_value(), width);
    self.indices.by_size.range((Included(lower), Included(upper))).count()
  }

  /// Cursor on a stored range of width `width`, if any. When several ranges have this width, which one is found is unspecified.
  pub fn by_size_find(&self, width: T::Output) -> Option<SizeCursor<'_, T>> {
    self.indices.size_lower_bound(width)
      .filter(|key| key.width.0 == width)
      .map(|key| self.size_cursor(Some(key)))
  }

  /// Cursors delimiting the ranges of width `width`: the first one is on the first of these ranges (if any) and the second one on the first range following them.
  pub fn by_size_equal_range(&self, width: T::Output) -> (SizeCursor<'_, T>, SizeCursor<'_, T>) {
    (self.by_size_lower_bound(width), self.by_size_upper_bound(width))
  }

  /// Cursor on the first range, in decreasing width order, of width at most `width`.
  ///
  /// The width index is ordered from the widest to the narrowest range, so the bounds are reversed compared to an ascending index: the lower bound is the widest range not wider than `width`.
  pub fn by_size_lower_bound(&self, width: T::Output) -> SizeCursor<'_, T> {
    self.size_cursor(self.indices.size_lower_bound(width))
  }

  /// Cursor on the first range, in decreasing width order, of width strictly less than `width`.
  pub fn by_size_upper_bound(&self, width: T::Output) -> SizeCursor<'_, T> {
    self.size_cursor(self.indices.size_upper_bound(width))
  }

  /// Exchanges the content of the two sets. Positions stay valid and follow their ranges into the other set, along with the references between the two indices.
  pub fn swap(&mut self, other: &mut RangeSizeSet<T>) {
    mem::swap(&mut self.indices, &mut other.indices);
  }

  /// Total width of the stored ranges and how it is scattered among them, see [Stats](../stats/struct.Stats.html).
  pub fn stats(&self) -> Stats<T::Output> {
    let covered = self.size();
    let widest = self.indices.by_size.iter().next()
      .map_or_else(Zero::zero, |key| key.width.0);
    Stats::new(covered, widest)
  }

  #[doc(hidden)]
  pub fn check_consistency(&self) {
    assert_eq!(self.indices.by_start.len(), self.indices.by_size.len(),
      "The two indices must hold the same number of ranges.");
    let mut previous_to: Option<T> = None;
    for (from, entry) in &self.indices.by_start {
      assert!(*from < entry.to, "Stored ranges must not be empty.");
      if let Some(previous_to) = previous_to {
        assert!(previous_to < *from, "Stored ranges must neither overlap nor touch.");
      }
      assert!(entry.width == T::width(from, &entry.to), "The recorded width of a range is outdated.");
      assert!(self.indices.by_size.contains(&SizeKey::new(*from, entry.width)),
        "A stored range is missing from the width index.");
      previous_to = Some(entry.to);
    }
  }

  fn size_cursor(&self, key: Option<&SizeKey<T, T::Output>>) -> SizeCursor<'_, T> {
    SizeCursor::new(self, key.and_then(|key| self.indices.resolve(key)))
  }
}

impl<T: Width> Default for RangeSizeSet<T>
{
  fn default() -> RangeSizeSet<T> {
    RangeSizeSet::new()
  }
}

impl<T: Width> Clone for RangeSizeSet<T>
{
  fn clone(&self) -> RangeSizeSet<T> {
    RangeSizeSet {
      indices: self.indices.clone()
    }
  }
}

impl<T: Width> Eq for RangeSizeSet<T> {}

impl<T: Width> PartialEq<RangeSizeSet<T>> for RangeSizeSet<T>
{
  fn eq(&self, other: &RangeSizeSet<T>) -> bool {
    if self.len() != other.len() { false }
    else {
      self.indices.by_start == other.indices.by_start
    }
  }
}

impl<T: Width + fmt::Debug> fmt::Debug for RangeSizeSet<T>
{
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.debug_set()
      .entries(self.iter())
      .finish()
  }
}

impl<T: Width> Extend<Range<T>> for RangeSizeSet<T>
{
  fn extend<I>(&mut self, iterable: I) where
   I: IntoIterator<Item=Range<T>>
  {
    for range in iterable {
      self.insert(range.start, range.end);
    }
  }
}

impl<T: Width> FromIterator<Range<T>> for RangeSizeSet<T>
{
  fn from_iter<I>(iterable: I) -> RangeSizeSet<T> where
   I: IntoIterator<Item=Range<T>>
  {
    let mut set = RangeSizeSet::new();
    set.extend(iterable);
    set
  }
}

impl<'a, T: Width> IntoIterator for &'a RangeSizeSet<T>
{
  type Item = Range<T>;
  type IntoIter = Iter<'a, T>;

  fn into_iter(self) -> Iter<'a, T> {
    self.iter()
  }
}

impl<T: Width> Collection for RangeSizeSet<T>
{
  type Item = T;
}

impl<T: Width> Cardinality for RangeSizeSet<T>
{
  type Size = T::Output;

  /// Number of values covered by the set, `len()` counts the stored ranges.
  fn size(&self) -> T::Output {
    self.indices.by_start.values()
      .fold(Zero::zero(), |covered: T::Output, entry| covered + entry.width)
  }
}

impl<T: Width> Empty for RangeSizeSet<T>
{
  fn empty() -> RangeSizeSet<T> {
    RangeSizeSet::new()
  }
}

impl<T: Width> Contains for RangeSizeSet<T>
{
  fn contains(&self, value: &T) -> bool {
    RangeSizeSet::contains(self, value)
  }
}

impl<T: Width + Serialize> Serialize for RangeSizeSet<T>
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    serialize_ranges(self.iter(), serializer)
  }
}

impl<'de, T: Width + Deserialize<'de>> Deserialize<'de> for RangeSizeSet<T>
{
  fn deserialize<D>(deserializer: D) -> Result<RangeSizeSet<T>, D::Error> where
   D: Deserializer<'de>
  {
    deserialize_ranges(deserializer).map(|ranges| ranges.into_iter().collect())
  }
}

/// Iterator over the ranges of a [RangeSizeSet](struct.RangeSizeSet.html) in ascending order.
pub struct Iter<'a, T: Width>
{
  inner: btree_map::Iter<'a, T, Entry<T>>
}

impl<'a, T: Width> Iterator for Iter<'a, T>
{
  type Item = Range<T>;

  fn next(&mut self) -> Option<Range<T>> {
    self.inner.next().map(|(from, entry)| *from..entry.to)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.inner.size_hint()
  }
}

impl<'a, T: Width> DoubleEndedIterator for Iter<'a, T>
{
  fn next_back(&mut self) -> Option<Range<T>> {
    self.inner.next_back().map(|(from, entry)| *from..entry.to)
  }
}

impl<'a, T: Width> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: Width> FusedIterator for Iter<'a, T> {}

/// Iterator over the ranges of a [RangeSizeSet](struct.RangeSizeSet.html) from the widest to the narrowest.
pub struct SizeIter<'a, T: Width>
{
  indices: &'a Indices<T>,
  inner: btree_set::Iter<'a, SizeKey<T, T::Output>>
}

impl<'a, T: Width> Iterator for SizeIter<'a, T>
{
  type Item = Range<T>;

  fn next(&mut self) -> Option<Range<T>> {
    let key = self.inner.next()?;
    self.indices.resolve(key).map(|(from, to)| from..to)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.inner.size_hint()
  }
}

impl<'a, T: Width> DoubleEndedIterator for SizeIter<'a, T>
{
  fn next_back(&mut self) -> Option<Range<T>> {
    let key = self.inner.next_back()?;
    self.indices.resolve(key).map(|(from, to)| from..to)
  }
}

impl<'a, T: Width> ExactSizeIterator for SizeIter<'a, T> {}

/// Bidirectional cursor over the ranges of a [RangeSizeSet](struct.RangeSizeSet.html) in ascending order.
///
/// It follows the conventions of [range_set::Cursor](../range_set/struct.Cursor.html) regarding the end position.
pub struct Cursor<'a, T: Width>
{
  set: &'a RangeSizeSet<T>,
  current: Option<(T, T)>
}

impl<'a, T: Width> Cursor<'a, T>
{
  fn new(set: &'a RangeSizeSet<T>, current: Option<(T, T)>) -> Cursor<'a, T> {
    Cursor {
      set: set,
      current: current
    }
  }

  /// The range under the cursor, `None` on the end position.
  pub fn range(&self) -> Option<Range<T>> {
    self.current.map(|(from, to)| from..to)
  }

  pub fn start(&self) -> Option<T> {
    self.current.map(|(from, _)| from)
  }

  pub fn end(&self) -> Option<T> {
    self.current.map(|(_, to)| to)
  }

  pub fn width(&self) -> Option<T::Output> {
    self.current.map(|(from, to)| T::width(&from, &to))
  }

  pub fn is_end(&self) -> bool {
    self.current.is_none()
  }

  /// Position of the range under the cursor, to find it again after the set has been mutated.
  pub fn position(&self) -> Option<Position<T>> {
    self.current.map(|(from, _)| Position::new(from))
  }

  pub fn move_next(&mut self) {
    self.current = match self.current {
      Some((from, _)) => self.set.indices.successor(&from),
      None => self.set.indices.first()
    };
  }

  pub fn move_prev(&mut self) {
    self.current = match self.current {
      Some((from, _)) => self.set.indices.predecessor(&from),
      None => self.set.indices.last()
    };
  }

  /// Cursor on the same range in the width index. The end position maps to the end position.
  pub fn to_size_cursor(&self) -> SizeCursor<'a, T> {
    SizeCursor::new(self.set, self.current)
  }
}

impl<'a, T: Width> Clone for Cursor<'a, T>
{
  fn clone(&self) -> Cursor<'a, T> {
    Cursor::new(self.set, self.current)
  }
}

impl<'a, T: Width> Copy for Cursor<'a, T> {}

impl<'a, T: Width> PartialEq for Cursor<'a, T>
{
  fn eq(&self, other: &Cursor<'a, T>) -> bool {
    ptr::eq(self.set, other.set) && self.start() == other.start()
  }
}

impl<'a, T: Width> Eq for Cursor<'a, T> {}

impl<'a, T: Width + fmt::Debug> fmt::Debug for Cursor<'a, T>
{
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    match self.range() {
      Some(range) => formatter.debug_tuple("Cursor").field(&range).finish(),
      None => formatter.write_str("Cursor(end)")
    }
  }
}

/// Bidirectional cursor over the ranges of a [RangeSizeSet](struct.RangeSizeSet.html) from the widest to the narrowest.
///
/// The end position lies past the narrowest range. Moving forward from the end position wraps around to the widest range.
pub struct SizeCursor<'a, T: Width>
{
  set: &'a RangeSizeSet<T>,
  current: Option<(T, T)>
}

impl<'a, T: Width> SizeCursor<'a, T>
{
  fn new(set: &'a RangeSizeSet<T>, current: Option<(T, T)>) -> SizeCursor<'a, T> {
    SizeCursor {
      set: set,
      current: current
    }
  }

  /// The range under the cursor, `None` on the end position.
  pub fn range(&self) -> Option<Range<T>> {
    self.current.map(|(from, to)| from..to)
  }

  pub fn start(&self) -> Option<T> {
    self.current.map(|(from, _)| from)
  }

  pub fn end(&self) -> Option<T> {
    self.current.map(|(_, to)| to)
  }

  pub fn width(&self) -> Option<T::Output> {
    self.current.map(|(from, to)| T::width(&from, &to))
  }

  pub fn is_end(&self) -> bool {
    self.current.is_none()
  }

  pub fn position(&self) -> Option<Position<T>> {
    self.current.map(|(from, _)| Position::new(from))
  }

  pub fn move_next(&mut self) {
    let set = self.set;
    let indices = &set.indices;
    let next = match self.current {
      Some((from, to)) => {
        let key = Indices::size_key(from, to);
        indices.by_size.range((Excluded(key), Unbounded)).next()
      }
      None => indices.by_size.iter().next()
    };
    self.current = next.and_then(|key| indices.resolve(key));
  }

  pub fn move_prev(&mut self) {
    let set = self.set;
    let indices = &set.indices;
    let prev = match self.current {
      Some((from, to)) => {
        let key = Indices::size_key(from, to);
        indices.by_size.range(..key).next_back()
      }
      None => indices.by_size.iter().next_back()
    };
    self.current = prev.and_then(|key| indices.resolve(key));
  }

  /// Cursor on the same range in ascending order. The end position maps to the end position.
  pub fn to_range_cursor(&self) -> Cursor<'a, T> {
    Cursor::new(self.set, self.current)
  }
}

impl<'a, T: Width> Clone for SizeCursor<'a, T>
{
  fn clone(&self) -> SizeCursor<'a, T> {
    SizeCursor::new(self.set, self.current)
  }
}

impl<'a, T: Width> Copy for SizeCursor<'a, T> {}

impl<'a, T: Width> PartialEq for SizeCursor<'a, T>
{
  fn eq(&self, other: &SizeCursor<'a, T>) -> bool {
    ptr::eq(self.set, other.set) && self.start() == other.start()
  }
}

impl<'a, T: Width> Eq for SizeCursor<'a, T> {}

impl<'a, T: Width + fmt::Debug> fmt::Debug for SizeCursor<'a, T>
{
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    match self.range() {
      Some(range) => formatter.debug_tuple("SizeCursor").field(&range).finish(),
      None => formatter.write_str("SizeCursor(end)")
    }
  }
}
