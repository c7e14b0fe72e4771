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

//! This library proposes sets of half-open ranges `[from, to)` over ordered values. Inserting a range coalesces it with the ranges it overlaps or touches, and erasing a range splits the stored ranges it partially covers, so the stored ranges are always disjoint, non-adjacent and sorted by their lower bound.
//!
//! Two structures are provided:
//!
//! * [RangeSet](range_set/index.html) keeps the ranges ordered by their lower bound.
//! * [RangeSizeSet](range_size_set/index.html) additionally orders them by decreasing width, which makes it suitable for allocators looking for the best (or the widest) free block.
//!
//! Both structures are navigated with cursors borrowing the set, and [Position](struct.Position.html) tokens name a stored range independently of any borrow.
//!
//! # Examples
//!
//! For examples see the [range_set module](range_set/index.html) or the [range_size_set module](range_size_set/index.html).
//!
//! # References
//! * [Boost Interval Container Library](http://www.boost.org/doc/libs/1_57_0/libs/icl/doc/html/index.html)
//!

mod index;
pub mod ops;
pub mod range_set;
pub mod range_size_set;
mod serialization;
pub mod stats;

pub use index::Position;
pub use ops::Width;
pub use range_set::RangeSet;
pub use range_size_set::RangeSizeSet;
pub use stats::Stats;
