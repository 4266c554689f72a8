//! Contiguous growable lists with an injected allocator.
//!
//! [`List<T, A>`](List) owns a single buffer of `capacity` slots, of which the
//! first `count` hold live values. It grows by doubling (starting from one
//! slot), shifts elements in place for insertion and removal, and sorts with an
//! in-place heap sort. Storage comes from any
//! [`allocator_api2::alloc::Allocator`], `Global` by default, so an arena such
//! as `&bumpalo::Bump` can back a list directly.
//!
//! Range operations take a [`RangeView`], a borrowed begin/end pair that any
//! contiguous source converts into.
//!
//! ```
//! use arrlist_core::{List, NOT_FOUND};
//!
//! let mut list: List<i32> = List::new();
//! list.add_range(&[5, 3, 1]);
//! list.insert(1, 4).unwrap();
//! list.add(2);
//! assert_eq!(list, [5, 4, 3, 1, 2]);
//!
//! list.sort();
//! assert_eq!(list, [1, 2, 3, 4, 5]);
//! assert_eq!(list.index_of(&9), NOT_FOUND);
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

// This works on std and no_std and is harmless.
extern crate alloc;

pub mod error;
pub mod list;
mod raw;
pub mod sort;

pub use allocator_api2::alloc::{AllocError, Allocator, Global};
pub use arrlist_range_view::RangeView;
pub use error::{ListError, Result};
pub use list::{IntoIter, List, NOT_FOUND};

#[cfg(feature = "bumpalo")]
pub use bumpalo::Bump;

static_assertions::assert_eq_size!(List<u64>, [usize; 3]);
static_assertions::assert_eq_size!(List<u8, &'static Global>, [usize; 4]);
