//! Non-owning views over contiguous element ranges.
//!
//! A `RangeView<'a, T>` is a pair of positions, `first` and `last`, delimiting a
//! contiguous run of live `T` values that somebody else owns. It is the
//! parameter type accepted by the range operations of `arrlist_core::List`
//! (`add_range`, `insert_range`, `from_range`, ...), so that any contiguous
//! source can be passed without copying it first:
//!
//! ```
//! use arrlist_range_view::RangeView;
//!
//! let array = [1, 2, 3];
//! let vec = vec![4, 5];
//!
//! let a = RangeView::from(&array);
//! let b = RangeView::of(&vec);
//! assert_eq!(a.len() + b.len(), 5);
//! assert_eq!(b.as_slice(), &[4, 5]);
//! ```
//!
//! # Memory Layout
//!
//! ```text
//! RangeView<T>:  first ──▶ [T][T][T] ◀── last (one past the end)
//! ```
//!
//! The view is two pointers wide and `Copy`. For zero-sized `T` the `last`
//! pointer stores `first + len` as a byte address, since all elements share a
//! single address.
//!
//! # Gotchas
//!
//! - **No validation**: [`RangeView::from_raw_bounds`] trusts its caller. The safe
//!   constructors borrow their source for `'a`, so they cannot dangle.
//! - **Read-only**: the view never hands out mutable access.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::{fmt, marker::PhantomData, mem, ops::Deref, ptr::NonNull, slice};

/// A borrowed, contiguous range of `T` described by its begin/end positions.
///
/// See [crate-level docs](crate) for examples.
pub struct RangeView<'a, T> {
    first: NonNull<T>,
    last: *const T,
    phantom: PhantomData<&'a [T]>,
}

static_assertions::assert_eq_size!(RangeView<u64>, [usize; 2]);
static_assertions::assert_eq_size!(RangeView<()>, [usize; 2]);

const fn is_zst<T>() -> bool {
    mem::size_of::<T>() == 0
}

impl<'a, T> RangeView<'a, T> {
    /// Creates a view spanning all of `items`.
    pub fn new(items: &'a [T]) -> Self {
        let first = NonNull::from(items).cast::<T>();
        let last = if is_zst::<T>() {
            first
                .as_ptr()
                .cast::<u8>()
                .wrapping_add(items.len())
                .cast::<T>()
                .cast_const()
        } else {
            // SAFETY: one past the end of a slice stays within its allocation.
            unsafe { first.as_ptr().add(items.len()).cast_const() }
        };
        RangeView {
            first,
            last,
            phantom: PhantomData,
        }
    }

    /// Adapts any object exposing a contiguous slice of `T`.
    ///
    /// # Example
    ///
    /// ```
    /// use arrlist_range_view::RangeView;
    ///
    /// let owned: Box<[char]> = vec!['a', 'b'].into_boxed_slice();
    /// let view = RangeView::of(&owned);
    /// assert_eq!(view.as_slice(), &['a', 'b']);
    /// ```
    pub fn of<S>(source: &'a S) -> Self
    where
        S: AsRef<[T]> + ?Sized,
    {
        Self::new(source.as_ref())
    }

    /// Builds a view from raw bounds without any validation.
    ///
    /// # Safety
    ///
    /// `first` must be non-null and `first..last` must delimit a region of live,
    /// properly aligned `T` values inside a single allocation, with
    /// `last >= first`. The region must stay alive and unmutated for `'a`.
    /// For zero-sized `T`, `last` is `first` advanced by the element count in
    /// bytes.
    pub unsafe fn from_raw_bounds(first: *const T, last: *const T) -> Self {
        debug_assert!(!first.is_null());
        debug_assert!(last.addr() >= first.addr());
        RangeView {
            // SAFETY: the caller guarantees `first` is non-null.
            first: unsafe { NonNull::new_unchecked(first.cast_mut()) },
            last,
            phantom: PhantomData,
        }
    }

    /// Position of the first element.
    #[inline]
    pub fn begin(&self) -> *const T {
        self.first.as_ptr().cast_const()
    }

    /// Position one past the last element.
    #[inline]
    pub fn end(&self) -> *const T {
        self.last
    }

    #[inline]
    pub fn len(&self) -> usize {
        if is_zst::<T>() {
            self.last.addr() - self.first.as_ptr().addr()
        } else {
            // SAFETY: both pointers delimit the same region and `last >= first`.
            unsafe { self.last.offset_from(self.first.as_ptr()) as usize }
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the viewed elements with the full lifetime of the borrow.
    pub fn as_slice(&self) -> &'a [T] {
        // SAFETY: `first..last` delimits `len` live elements valid for `'a`.
        unsafe { slice::from_raw_parts(self.first.as_ptr(), self.len()) }
    }
}

impl<T> Clone for RangeView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for RangeView<'_, T> {}

impl<T> Deref for RangeView<'_, T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> AsRef<[T]> for RangeView<'_, T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for RangeView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for RangeView<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for RangeView<'_, T> {}

impl<'a, T> IntoIterator for RangeView<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> From<&'a [T]> for RangeView<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Self::new(items)
    }
}

impl<'a, T> From<&'a mut [T]> for RangeView<'a, T> {
    fn from(items: &'a mut [T]) -> Self {
        Self::new(items)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for RangeView<'a, T> {
    fn from(items: &'a [T; N]) -> Self {
        Self::new(items)
    }
}

impl<'a, T> From<&'a Vec<T>> for RangeView<'a, T> {
    fn from(items: &'a Vec<T>) -> Self {
        Self::new(items)
    }
}

// Important: use correct semantics for references.
unsafe impl<T: Sync> Send for RangeView<'_, T> {}
unsafe impl<T: Sync> Sync for RangeView<'_, T> {}
