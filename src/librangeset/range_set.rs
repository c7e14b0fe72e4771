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

//! Set of half-open ranges with automatic coalescing.
//!
//! It stores ranges `[from, to)` ordered by their lower bound. Inserting a range merges it with every stored range it overlaps or touches, so `[1, 3)` and `[3, 5)` are stored as `[1, 5)`. Erasing a range trims, removes or splits the stored ranges it overlaps. Both operations are logarithmic in the number of stored ranges, plus the number of ranges they absorb or remove.
//!
//! # Examples
//!
//! ```rust
//! use rangeset::RangeSet;
//!
//! let mut set = RangeSet::new();
//! set.insert(10u32, 20);
//! set.insert(20, 30);
//! set.erase(14, 16);
//! assert_eq!(set.iter().collect::<Vec<_>>(), vec![10..14, 16..30]);
//! assert!(set.contains(&16));
//! assert!(!set.contains(&15));
//! ```
//!
//! # See also
//! [range_size_set](../range_size_set/index.html)

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
use std::collections::{btree_map, BTreeMap};
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::mem;
use std::ops::Range;
use std::ptr;

#[derive(Clone)]
pub struct RangeSet<T>
{
  // Assumptions that can be made about the data:
  // - `from` is the key, `to` the value, and `from < to`.
  // - Stored ranges never overlap and never touch.
  ranges: BTreeMap<T, T>
}

impl<T: Ord + Copy> RangeSet<T>
{
  pub fn new() -> RangeSet<T> {
    RangeSet {
      ranges: BTreeMap::new()
    }
  }

  /// Number of stored ranges.
  pub fn len(&self) -> usize {
    self.ranges.len()
  }

  pub fn is_empty(&self) -> bool {
    self.ranges.is_empty()
  }

  pub fn clear(&mut self) {
    trace!("clearing {} ranges", self.ranges.len());
    self.ranges.clear();
  }

  /// Adds `[from, to)` to the set, merging it with the stored ranges it overlaps or touches. Nothing happens if `from >= to`.
  pub fn insert(&mut self, from: T, to: T) {
    self.ranges.merge_insert(from, to);
  }

  /// Removes `[from, to)` from the set, trimming or splitting the stored ranges it overlaps. Nothing happens if `from >= to`.
  pub fn erase(&mut self, from: T, to: T) {
    self.ranges.split_erase(from, to);
  }

  /// Removes the range named by `position` and returns a cursor to the range following it.
  ///
  /// Returns `None` if no stored range starts at `position`.
  pub fn remove(&mut self, position: Position<T>) -> Option<Cursor<'_, T>> {
    let from = position.start();
    self.ranges.remove(&from)?;
    let next = self.ranges.successor(&from);
    Some(Cursor::new(self, next))
  }

  pub fn contains(&self, value: &T) -> bool {
    match self.ranges.floor(value) {
      Some((_, to)) => *value < to,
      None => false
    }
  }

  pub fn first(&self) -> Option<Range<T>> {
    self.ranges.iter().next().map(|(from, to)| *from..*to)
  }

  pub fn last(&self) -> Option<Range<T>> {
    self.ranges.iter().next_back().map(|(from, to)| *from..*to)
  }

  pub fn iter(&self) -> Iter<'_, T> {
    Iter { inner: self.ranges.iter() }
  }

  /// Cursor on the first range, or on the end position if the set is empty.
  pub fn cursor_front(&self) -> Cursor<'_, T> {
    Cursor::new(self, self.ranges.iter().next().map(|(from, to)| (*from, *to)))
  }

  /// Cursor on the last range, or on the end position if the set is empty.
  pub fn cursor_back(&self) -> Cursor<'_, T> {
    Cursor::new(self, self.ranges.iter().next_back().map(|(from, to)| (*from, *to)))
  }

  /// Cursor on the end position, past the last range.
  pub fn cursor_end(&self) -> Cursor<'_, T> {
    Cursor::new(self, None)
  }

  pub fn cursor_at(&self, position: Position<T>) -> Option<Cursor<'_, T>> {
    let from = position.start();
    self.ranges.get(&from).map(|to| Cursor::new(self, Some((from, *to))))
  }

  /// Exchanges the content of the two sets. Positions stay valid and follow their ranges into the other set.
  pub fn swap(&mut self, other: &mut RangeSet<T>) {
    mem::swap(&mut self.ranges, &mut other.ranges);
  }

  #[doc(hidden)]
  pub fn check_consistency(&self) {
    let mut previous_to: Option<T> = None;
    for (from, to) in &self.ranges {
      assert!(from < to, "Stored ranges must not be empty.");
      if let Some(previous_to) = previous_to {
        assert!(previous_to < *from, "Stored ranges must neither overlap nor touch.");
      }
      previous_to = Some(*to);
    }
  }
}

impl<T: Width> RangeSet<T>
{
  /// Total width of the stored ranges and how it is scattered among them, see [Stats](../stats/struct.Stats.html).
  pub fn stats(&self) -> Stats<T::Output> {
    Stats::from_widths(self.ranges.iter().map(|(from, to)| T::width(from, to)))
  }
}

impl<T: Ord + Copy> Default for RangeSet<T>
{
  fn default() -> RangeSet<T> {
    RangeSet::new()
  }
}

impl<T: Ord + Copy> Eq for RangeSet<T> {}

impl<T: Ord + Copy> PartialEq<RangeSet<T>> for RangeSet<T>
{
  fn eq(&self, other: &RangeSet<T>) -> bool {
    if self.len() != other.len() { false }
    else {
      self.ranges == other.ranges
    }
  }
}

impl<T: fmt::Debug> fmt::Debug for RangeSet<T>
{
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.debug_set()
      .entries(self.ranges.iter().map(|(from, to)| from..to))
      .finish()
  }
}

impl<T: Ord + Copy> Extend<Range<T>> for RangeSet<T>
{
  fn extend<I>(&mut self, iterable: I) where
   I: IntoIterator<Item=Range<T>>
  {
    for range in iterable {
      self.insert(range.start, range.end);
    }
  }
}

impl<T: Ord + Copy> FromIterator<Range<T>> for RangeSet<T>
{
  fn from_iter<I>(iterable: I) -> RangeSet<T> where
   I: IntoIterator<Item=Range<T>>
  {
    let mut set = RangeSet::new();
    set.extend(iterable);
    set
  }
}

impl<'a, T: Ord + Copy> IntoIterator for &'a RangeSet<T>
{
  type Item = Range<T>;
  type IntoIter = Iter<'a, T>;

  fn into_iter(self) -> Iter<'a, T> {
    self.iter()
  }
}

impl<T> Collection for RangeSet<T>
{
  type Item = T;
}

impl<T: Width> Cardinality for RangeSet<T>
{
  type Size = T::Output;

  /// Number of values covered by the set, `len()` counts the stored ranges.
  fn size(&self) -> T::Output {
    self.ranges.iter()
      .fold(Zero::zero(), |covered: T::Output, (from, to)| covered + T::width(from, to))
  }
}

impl<T: Ord + Copy> Empty for RangeSet<T>
{
  fn empty() -> RangeSet<T> {
    RangeSet::new()
  }
}

impl<T: Ord + Copy> Contains for RangeSet<T>
{
  fn contains(&self, value: &T) -> bool {
    RangeSet::contains(self, value)
  }
}

impl<T: Ord + Copy + Serialize> Serialize for RangeSet<T>
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    serialize_ranges(self.iter(), serializer)
  }
}

impl<'de, T: Ord + Copy + Deserialize<'de>> Deserialize<'de> for RangeSet<T>
{
  fn deserialize<D>(deserializer: D) -> Result<RangeSet<T>, D::Error> where
   D: Deserializer<'de>
  {
    deserialize_ranges(deserializer).map(|ranges| ranges.into_iter().collect())
  }
}

/// Iterator over the ranges of a [RangeSet](struct.RangeSet.html) in ascending order.
pub struct Iter<'a, T>
{
  inner: btree_map::Iter<'a, T, T>
}

impl<'a, T: Copy> Iterator for Iter<'a, T>
{
  type Item = Range<T>;

  fn next(&mut self) -> Option<Range<T>> {
    self.inner.next().map(|(from, to)| *from..*to)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.inner.size_hint()
  }
}

impl<'a, T: Copy> DoubleEndedIterator for Iter<'a, T>
{
  fn next_back(&mut self) -> Option<Range<T>> {
    self.inner.next_back().map(|(from, to)| *from..*to)
  }
}

impl<'a, T: Copy> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: Copy> FusedIterator for Iter<'a, T> {}

/// Bidirectional cursor over the ranges of a [RangeSet](struct.RangeSet.html).
///
/// Besides the stored ranges, the cursor can sit on the end position, past the last range. Moving forward from the last range reaches the end position, moving backward from the end position reaches the last range, and moving forward from the end position wraps around to the first range.
pub struct Cursor<'a, T>
{
  set: &'a RangeSet<T>,
  current: Option<(T, T)>
}

impl<'a, T: Ord + Copy> Cursor<'a, T>
{
  fn new(set: &'a RangeSet<T>, current: Option<(T, T)>) -> Cursor<'a, T> {
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

  pub fn is_end(&self) -> bool {
    self.current.is_none()
  }

  /// Position of the range under the cursor, to find it again after the set has been mutated.
  pub fn position(&self) -> Option<Position<T>> {
    self.current.map(|(from, _)| Position::new(from))
  }

  pub fn move_next(&mut self) {
    self.current = match self.current {
      Some((from, _)) => self.set.ranges.successor(&from),
      None => self.set.ranges.iter().next().map(|(from, to)| (*from, *to))
    };
  }

  pub fn move_prev(&mut self) {
    self.current = match self.current {
      Some((from, _)) => self.set.ranges.predecessor(&from),
      None => self.set.ranges.iter().next_back().map(|(from, to)| (*from, *to))
    };
  }
}

impl<'a, T> Clone for Cursor<'a, T> where
 T: Copy
{
  fn clone(&self) -> Cursor<'a, T> {
    Cursor {
      set: self.set,
      current: self.current
    }
  }
}

impl<'a, T: Copy> Copy for Cursor<'a, T> {}

impl<'a, T: Ord + Copy> PartialEq for Cursor<'a, T>
{
  fn eq(&self, other: &Cursor<'a, T>) -> bool {
    ptr::eq(self.set, other.set) && self.start() == other.start()
  }
}

impl<'a, T: Ord + Copy> Eq for Cursor<'a, T> {}

impl<'a, T: fmt::Debug> fmt::Debug for Cursor<'a, T>
{
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    match &self.current {
      Some((from, to)) => formatter.debug_tuple("Cursor").field(&(from..to)).finish(),
      None => formatter.write_str("Cursor(end)")
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use gcollections::ops::IsEmpty;
  use serde_test::{assert_de_tokens_error, assert_tokens, Token};

  // precondition: `ranges` must be a valid intern representation of the range set.
  fn make_range_set(ranges: Vec<(u32, u32)>) -> RangeSet<u32> {
    RangeSet {
      ranges: ranges.into_iter().collect()
    }
  }

  fn contents<T: Ord + Copy>(set: &RangeSet<T>) -> Vec<(T, T)> {
    set.iter().map(|range| (range.start, range.end)).collect()
  }

  fn test_inside_outside(set: &RangeSet<u32>, inside: Vec<u32>, outside: Vec<u32>) {
    for i in &inside {
      assert!(set.contains(i),
        "{} is not contained inside {:?}, but it should.", i, set);
    }
    for i in &outside {
      assert!(!set.contains(i),
        "{} is contained inside {:?}, but it should not.", i, set);
    }
  }

  fn sample() -> RangeSet<u32> {
    let mut set = RangeSet::new();
    set.insert(10, 18);
    set.insert(20, 29);
    set.insert(30, 37);
    set.insert(40, 41);
    set.insert(50, 56);
    set
  }

  #[test]
  fn test_contains() {
    let set = sample();
    assert_eq!(set.len(), 5);
    let inside = (10..18).chain(20..29).chain(30..37).chain(40..41).chain(50..56).collect();
    let outside = (0..10).chain(18..20).chain(29..30).chain(37..40).chain(41..50).chain(56..100).collect();
    test_inside_outside(&set, inside, outside);
    test_inside_outside(&RangeSet::new(), vec![], vec![0, 1, 2, u32::MAX]);
  }

  #[test]
  fn test_insert() {
    // Note: the first number is the test id, so it should be easy to identify which test has failed.
    // The stored ranges come first, then the inserted range and the expected result.
    let cases = vec![
      // identity tests
      (1, vec![], (1, 2), vec![(1, 2)]),
      (2, vec![(1, 2)], (1, 2), vec![(1, 2)]),
      (3, vec![(1, 9)], (3, 5), vec![(1, 9)]),
      // empty and inverted ranges
      (4, vec![(1, 2)], (7, 7), vec![(1, 2)]),
      (5, vec![(1, 2)], (9, 7), vec![(1, 2)]),
      // front tests
      (6, vec![(4, 6), (8, 9)], (1, 3), vec![(1, 3), (4, 6), (8, 9)]),
      (7, vec![(4, 6), (8, 9)], (1, 4), vec![(1, 6), (8, 9)]),
      (8, vec![(4, 6), (8, 9)], (1, 5), vec![(1, 6), (8, 9)]),
      (9, vec![(4, 6), (8, 9)], (1, 7), vec![(1, 7), (8, 9)]),
      // middle tests
      (10, vec![(1, 2), (7, 9)], (2, 7), vec![(1, 9)]),
      (11, vec![(1, 2), (7, 9)], (3, 7), vec![(1, 2), (3, 9)]),
      (12, vec![(1, 2), (7, 9)], (3, 6), vec![(1, 2), (3, 6), (7, 9)]),
      (13, vec![(1, 2), (7, 9)], (2, 6), vec![(1, 6), (7, 9)]),
      (14, vec![(1, 2), (7, 9)], (0, 8), vec![(0, 9)]),
      // back tests
      (15, vec![(1, 2), (7, 9)], (8, 9), vec![(1, 2), (7, 9)]),
      (16, vec![(1, 2), (7, 9)], (8, 10), vec![(1, 2), (7, 10)]),
      (17, vec![(1, 2), (7, 9)], (9, 10), vec![(1, 2), (7, 10)]),
      (18, vec![(1, 2), (7, 9)], (10, 11), vec![(1, 2), (7, 9), (10, 11)]),
      // englobing tests
      (19, vec![(1, 2), (4, 5), (7, 9)], (0, 12), vec![(0, 12)]),
      (20, vec![(1, 2), (4, 5), (7, 9)], (1, 9), vec![(1, 9)]),
    ];

    for (id, stored, (from, to), expected) in cases {
      let mut set = make_range_set(stored);
      set.insert(from, to);
      set.check_consistency();
      assert_eq!(contents(&set), expected, "test #{} of insert", id);
    }
  }

  #[test]
  fn test_erase() {
    let cases = vec![
      // gaps and invalid ranges
      (1, vec![], (1, 2), vec![]),
      (2, vec![(1, 2), (7, 9)], (3, 6), vec![(1, 2), (7, 9)]),
      (3, vec![(1, 2), (7, 9)], (2, 7), vec![(1, 2), (7, 9)]),
      (4, vec![(1, 9)], (5, 5), vec![(1, 9)]),
      (5, vec![(1, 9)], (6, 4), vec![(1, 9)]),
      // single range
      (6, vec![(1, 9)], (1, 9), vec![]),
      (7, vec![(1, 9)], (4, 9), vec![(1, 4)]),
      (8, vec![(1, 9)], (1, 4), vec![(4, 9)]),
      (9, vec![(1, 9)], (3, 5), vec![(1, 3), (5, 9)]),
      (10, vec![(1, 9)], (0, 3), vec![(3, 9)]),
      (11, vec![(1, 9)], (5, 12), vec![(1, 5)]),
      // several ranges
      (12, vec![(1, 3), (5, 7), (9, 11)], (2, 10), vec![(1, 2), (10, 11)]),
      (13, vec![(1, 3), (5, 7), (9, 11)], (0, 12), vec![]),
      (14, vec![(1, 3), (5, 7), (9, 11)], (3, 9), vec![(1, 3), (9, 11)]),
      (15, vec![(1, 3), (5, 7), (9, 11)], (5, 11), vec![(1, 3)]),
      (16, vec![(1, 3), (5, 7), (9, 11)], (6, 10), vec![(1, 3), (5, 6), (10, 11)]),
    ];

    for (id, stored, (from, to), expected) in cases {
      let mut set = make_range_set(stored);
      set.erase(from, to);
      set.check_consistency();
      assert_eq!(contents(&set), expected, "test #{} of erase", id);
    }
  }

  #[test]
  fn insert_is_idempotent() {
    let mut once = sample();
    once.insert(25, 33);
    let mut twice = once.clone();
    twice.insert(25, 33);
    assert_eq!(once, twice);
  }

  #[test]
  fn erase_inserted_returns_to_empty() {
    let inserted = vec![(100, 180), (900, 960), (500, 570), (170, 520), (700, 750)];
    // Note: the first number is the test id, the others are indices into `inserted`.
    let erase_orders = vec![
      (1, vec![4, 3, 2, 1, 0]),
      (2, vec![0, 1, 2, 3, 4]),
      (3, vec![3, 0, 4, 2, 1]),
      (4, vec![2, 4, 1, 0, 3]),
      (5, vec![1, 3, 0, 4, 2])
    ];
    for (id, order) in erase_orders {
      let mut set = RangeSet::new();
      for &(from, to) in &inserted {
        set.insert(from, to);
      }
      for i in order {
        let (from, to) = inserted[i];
        set.erase(from, to);
        set.check_consistency();
      }
      assert!(set.is_empty(), "test #{} of erase_inserted_returns_to_empty", id);
    }
  }

  #[test]
  fn iterate_both_ways() {
    let mut set = RangeSet::new();
    set.insert(100u64, 180);
    set.insert(900, 960);
    set.insert(500, 570);
    set.insert(700, 750);
    set.insert(300, 390);
    let expected = vec![100..180, 300..390, 500..570, 700..750, 900..960];
    assert_eq!(set.iter().len(), 5);
    assert_eq!(set.iter().collect::<Vec<_>>(), expected);
    assert_eq!(set.iter().rev().collect::<Vec<_>>(), expected.iter().cloned().rev().collect::<Vec<_>>());
    assert_eq!((&set).into_iter().next(), set.first());
    assert_eq!(set.first(), Some(100..180));
    assert_eq!(set.last(), Some(900..960));
  }

  #[test]
  fn cursor_forward_and_backward() {
    let set = sample();
    let mut cursor = set.cursor_front();
    let mut seen = vec![];
    while let Some(range) = cursor.range() {
      seen.push(range);
      cursor.move_next();
    }
    assert_eq!(seen, set.iter().collect::<Vec<_>>());
    assert_eq!(cursor, set.cursor_end());

    cursor.move_prev();
    assert_eq!(cursor.range(), Some(50..56));
    assert_eq!(cursor, set.cursor_back());
    cursor.move_prev();
    assert_eq!(cursor.start(), Some(40));
    assert_eq!(cursor.end(), Some(41));
    cursor.move_prev();
    cursor.move_prev();
    cursor.move_prev();
    assert_eq!(cursor, set.cursor_front());
    cursor.move_prev();
    assert!(cursor.is_end());
    cursor.move_next();
    assert_eq!(cursor, set.cursor_front());

    let empty: RangeSet<u32> = RangeSet::new();
    assert_eq!(empty.cursor_front(), empty.cursor_end());
    assert_eq!(empty.cursor_back(), empty.cursor_end());
  }

  #[test]
  fn remove_at_position() {
    let mut set = sample();
    let position = {
      let mut cursor = set.cursor_front();
      cursor.move_next();
      cursor.position().unwrap()
    };
    assert_eq!(position.start(), 20);
    {
      let next = set.remove(position).unwrap();
      assert_eq!(next.range(), Some(30..37));
    }
    assert_eq!(set.len(), 4);
    assert!(!set.contains(&25));
    assert!(set.remove(position).is_none());
    assert!(set.cursor_at(position).is_none());

    let last = set.cursor_back().position().unwrap();
    assert!(set.remove(last).unwrap().is_end());
    assert_eq!(contents(&set), vec![(10, 18), (30, 37), (40, 41)]);
  }

  #[test]
  fn positions_survive_mutations() {
    let mut set = sample();
    let position = set.cursor_back().position().unwrap();
    set.insert(0, 5);
    set.erase(12, 14);
    assert_eq!(set.cursor_at(position).and_then(|cursor| cursor.range()), Some(50..56));
    set.erase(50, 52);
    assert!(set.cursor_at(position).is_none());
  }

  #[test]
  fn swap() {
    let mut rs1: RangeSet<usize> = vec![10..20, 30..32, 45..99].into_iter().collect();
    let mut rs2: RangeSet<usize> = vec![20..24, 70..71].into_iter().collect();
    let rs3 = rs1.clone();
    let rs4 = rs2.clone();

    assert!(rs1 != rs2);
    assert!(rs1 == rs3);
    assert!(rs2 == rs4);

    let position = rs1.cursor_front().position().unwrap();
    rs1.swap(&mut rs2);

    assert!(rs1 == rs4);
    assert!(rs2 == rs3);
    assert!(rs1 != rs3);
    assert_eq!(rs2.cursor_at(position), Some(rs2.cursor_front()));
    assert!(rs1.cursor_at(position).is_none());
  }

  #[test]
  fn clear() {
    let mut set = sample();
    set.clear();
    assert!(set.is_empty());
    assert_eq!(set, RangeSet::new());
  }

  #[test]
  fn signed_bounds() {
    let mut set = RangeSet::new();
    set.insert(i64::MIN, i64::MIN + 10);
    set.insert(-5, 5);
    set.insert(i64::MIN + 10, i64::MIN + 20);
    set.erase(-1, 1);
    assert_eq!(contents(&set), vec![(i64::MIN, i64::MIN + 20), (-5, -1), (1, 5)]);
    assert!(set.contains(&i64::MIN));
    assert!(!set.contains(&0));
  }

  #[test]
  fn stats() {
    let mut set = RangeSet::new();
    set.insert(0usize, 100);
    assert_eq!(set.stats(), Stats { covered: 100, fragmentation: 0.0 });
    set.erase(10, 20);
    assert_eq!(set.stats(), Stats { covered: 90, fragmentation: 10.0 / 90.0 });
    set.erase(40, 50);
    assert_eq!(set.stats(), Stats { covered: 80, fragmentation: (10.0 + 20.0) / 80.0 });
    set.erase(20, 40);
    set.erase(0, 10);
    assert_eq!(set.stats(), Stats { covered: 50, fragmentation: 0.0 });
  }

  #[test]
  fn collection_traits() {
    let set = sample();
    assert_eq!(set.size(), 8 + 9 + 7 + 1 + 6);
    assert_eq!(set.len(), 5);
    assert!(Contains::contains(&set, &15));
    assert!(!IsEmpty::is_empty(&set));
    let empty: RangeSet<u32> = Empty::empty();
    assert!(IsEmpty::is_empty(&empty));
    assert_eq!(empty.size(), 0);
  }

  #[test]
  fn size_counts_values() {
    let mut set = make_range_set(vec![(0, 100)]);
    assert_eq!(set.size(), 100);
    assert_eq!(set.size(), (0..200).filter(|value| set.contains(value)).count() as u32);
    set.erase(10, 20);
    set.insert(150, 160);
    assert_eq!(set.len(), 3);
    assert_eq!(set.size(), 100);
    assert_eq!(set.size(), set.stats().covered);

    let mut signed: RangeSet<i8> = RangeSet::new();
    signed.insert(-128, 127);
    assert_eq!(signed.size(), 255u8);
  }

  #[test]
  fn debug_format() {
    assert_eq!(format!("{:?}", make_range_set(vec![(1, 3), (5, 9)])), "{1..3, 5..9}");
    assert_eq!(format!("{:?}", make_range_set(vec![(1, 3)]).cursor_front()), "Cursor(1..3)");
  }

  #[test]
  fn serde_tokens() {
    let set = make_range_set(vec![(1, 3), (5, 9)]);
    assert_tokens(&set, &[
      Token::Seq { len: Some(2) },
      Token::Tuple { len: 2 },
      Token::U32(1),
      Token::U32(3),
      Token::TupleEnd,
      Token::Tuple { len: 2 },
      Token::U32(5),
      Token::U32(9),
      Token::TupleEnd,
      Token::SeqEnd,
    ]);

    assert_de_tokens_error::<RangeSet<u32>>(&[
      Token::Seq { len: Some(1) },
      Token::Tuple { len: 2 },
      Token::U32(3),
      Token::U32(3),
      Token::TupleEnd,
      Token::SeqEnd,
    ], "invalid value: empty range, expected a range with from < to");
  }
}
