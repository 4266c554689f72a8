//! Arrlist - growable contiguous lists with pluggable allocators
//!
//! # Overview
//!
//! Arrlist provides [`List<T, A>`](List), an array-backed list whose storage
//! comes from an injected allocator, together with [`RangeView`], a borrowed
//! begin/end view that every range operation accepts. Typical uses:
//!
//! - Arena-backed scratch lists that die with a `bumpalo::Bump`
//! - Lists over a counting or fallible allocator in tests
//! - Plain heap lists with in-place heap sort and predicate search
//!
//! # Quick Start
//!
//! ```
//! use arrlist::{List, RangeView};
//!
//! let mut list: List<&str> = List::new();
//! list.add("pear");
//! list.add_range(&["apple", "fig"]);
//! list.insert(0, "kiwi").unwrap();
//! assert_eq!(list, ["kiwi", "pear", "apple", "fig"]);
//!
//! list.sort();
//! assert_eq!(list.find(|s| s.starts_with('k')), Some(&"kiwi"));
//!
//! let view = RangeView::from(&list);
//! assert_eq!(view.len(), 4);
//! ```
//!
//! # Allocators
//!
//! Any [`Allocator`] can back a list. With the `bumpalo` feature the arena
//! type is re-exported and lists can borrow it directly:
//!
//! ```
//! use arrlist::List;
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let mut list = List::new_in(&arena);
//! list.append_iter(0..16u32);
//! assert_eq!(list.count(), 16);
//! ```
//!
//! # Errors
//!
//! Operations addressed by index return [`Result`] with a [`ListError`].
//! Allocation failure is surfaced by `insert`, `insert_range` and the `try_*`
//! family; the infallible growth operations abort like `Vec` does.

// Re-export public API from arrlist_core
pub use arrlist_core::{IntoIter, List, NOT_FOUND};

// Re-export errors
pub use arrlist_core::{ListError, Result};

// Re-export allocator plumbing and range views
pub use arrlist_core::{AllocError, Allocator, Global, RangeView};
pub use arrlist_core::sort;

#[cfg(feature = "bumpalo")]
pub use arrlist_core::Bump;
