// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Bound specific operations.

use num_integer::Integer;
use num_traits::{ToPrimitive, Unsigned};
use std::ptr;

/// Distance between the two bounds of a half-open range `[lower, upper)`.
///
/// The distance is represented in an unsigned type `Output` able to hold the distance between `min_value()` and `max_value()`. Signed integers measure it in their unsigned counterpart and pointers in bytes, so ranges spanning the whole domain still have a width.
pub trait Width : Ord + Copy
{
  type Output: Unsigned + Integer + ToPrimitive + Copy;

  fn max_value() -> Self;
  fn min_value() -> Self;
  /// Number of values in `[lower, upper)`, `lower` must not be greater than `upper`.
  fn width(lower: &Self, upper: &Self) -> Self::Output;
}

macro_rules! unsigned_width_impl
{
  ( $( $t: ty ),* ) =>
  {$(
    impl Width for $t
    {
      type Output = $t;

      fn max_value() -> $t {
        <$t>::MAX
      }

      fn min_value() -> $t {
        <$t>::MIN
      }

      fn width(lower: &$t, upper: &$t) -> $t {
        debug_assert!(lower <= upper, "Cannot compute the width of an inverted range.");
        *upper - *lower
      }
    }
  )*}
}

macro_rules! signed_width_impl
{
  ( $( $t: ty, $u: ty ),* ) =>
  {$(
    impl Width for $t
    {
      type Output = $u;

      fn max_value() -> $t {
        <$t>::MAX
      }

      fn min_value() -> $t {
        <$t>::MIN
      }

      fn width(lower: &$t, upper: &$t) -> $u {
        debug_assert!(lower <= upper, "Cannot compute the width of an inverted range.");
        // Two's complement: the wrapping difference of the unsigned images is exact when `lower <= upper`.
        (*upper as $u).wrapping_sub(*lower as $u)
      }
    }
  )*}
}

macro_rules! pointer_width_impl
{
  ( $( $p: ty ),* ) =>
  {$(
    impl<T> Width for $p
    {
      type Output = usize;

      fn max_value() -> $p {
        usize::MAX as $p
      }

      fn min_value() -> $p {
        ptr::null_mut::<T>() as $p
      }

      // Addresses are compared as plain integers, no pointer arithmetic is involved.
      fn width(lower: &$p, upper: &$p) -> usize {
        debug_assert!(lower <= upper, "Cannot compute the width of an inverted range.");
        (*upper as usize) - (*lower as usize)
      }
    }
  )*}
}

unsigned_width_impl!(u8,u16,u32,u64,u128,usize);
signed_width_impl!(i8,u8,i16,u16,i32,u32,i64,u64,i128,u128,isize,usize);
pointer_width_impl!(*const T, *mut T);
