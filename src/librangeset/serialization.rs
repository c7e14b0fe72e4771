// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shared serde representation of range sets: a sequence of `(from, to)` pairs in ascending order.

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Unexpected, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::ops::Range;

pub(crate) fn serialize_ranges<S, T, I>(ranges: I, serializer: S) -> Result<S::Ok, S::Error> where
 S: Serializer,
 T: Serialize,
 I: IntoIterator<Item=Range<T>>,
 I::IntoIter: ExactSizeIterator
{
  serializer.collect_seq(ranges.into_iter().map(|range| (range.start, range.end)))
}

struct RangesVisitor<T>
{
  marker: PhantomData<T>
}

impl<'de, T> Visitor<'de> for RangesVisitor<T> where
 T: Deserialize<'de> + Ord
{
  type Value = Vec<Range<T>>;

  fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.write_str("a sequence of (from, to) pairs")
  }

  fn visit_seq<A>(self, mut seq: A) -> Result<Vec<Range<T>>, A::Error> where
   A: SeqAccess<'de>
  {
    let mut ranges = Vec::with_capacity(seq.size_hint().unwrap_or(0));
    while let Some((from, to)) = seq.next_element::<(T, T)>()? {
      if !(from < to) {
        return Err(de::Error::invalid_value(Unexpected::Other("empty range"), &"a range with from < to"));
      }
      ranges.push(from..to);
    }
    Ok(ranges)
  }
}

/// Reads the ranges without coalescing them; overlapping pairs are merged once inserted in the set.
pub(crate) fn deserialize_ranges<'de, D, T>(deserializer: D) -> Result<Vec<Range<T>>, D::Error> where
 D: Deserializer<'de>,
 T: Deserialize<'de> + Ord
{
  deserializer.deserialize_seq(RangesVisitor { marker: PhantomData })
}
