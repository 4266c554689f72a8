//! The growable list.
//!
//! `List<T, A>` keeps `[0, count)` of its buffer live and `[count, capacity)`
//! uninitialized. Appends past the capacity relocate into a buffer twice as
//! large (one slot when empty); bulk operations grow to `2 * count + added`
//! instead so one relocation covers the whole range.

mod gap;
mod into_iter;


use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    mem::ManuallyDrop,
    ops::{Index, IndexMut},
    ptr, slice,
    slice::SliceIndex,
};

use alloc::vec::Vec;
use allocator_api2::alloc::{Allocator, Global};
use arrlist_range_view::RangeView;

use crate::error::{ListError, Result, handle_error};
use crate::raw::{RawBuf, bulk_capacity, grown_capacity};
use crate::sort::heap_sort_by;

use gap::Gap;
pub use into_iter::IntoIter;

/// Index returned by the index queries when nothing matches.
pub const NOT_FOUND: usize = usize::MAX;

/// A contiguous, growable list of `T` backed by allocator `A`.
///
/// # Example
///
/// ```
/// use arrlist_core::List;
///
/// let mut list = List::new();
/// for word in ["b", "d", "a"] {
///     list.add(word);
/// }
/// list.insert(2, "c").unwrap();
/// assert_eq!(list.count(), 4);
/// assert_eq!(list.find(|w| w.starts_with('d')), Some(&"d"));
///
/// list.sort();
/// assert_eq!(list, ["a", "b", "c", "d"]);
/// ```
pub struct List<T, A: Allocator = Global> {
    buf: RawBuf<T, A>,
    len: usize,
}

// --- Construction ---

impl<T> List<T> {
    /// Creates an empty list. Does not allocate.
    pub const fn new() -> Self {
        Self::new_in(Global)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_in(capacity, Global)
    }

    /// Creates a list of `n` default values with capacity exactly `n`.
    pub fn with_len(n: usize) -> Self
    where
        T: Default,
    {
        Self::with_len_in(n, Global)
    }

    /// Creates a list holding clones of every element of `range`, with
    /// capacity equal to its length.
    pub fn from_range<'r>(range: impl Into<RangeView<'r, T>>) -> Self
    where
        T: Clone + 'r,
    {
        Self::from_range_in(range, Global)
    }
}

impl<T, A: Allocator> List<T, A> {
    pub const fn new_in(alloc: A) -> Self {
        List {
            buf: RawBuf::new_in(alloc),
            len: 0,
        }
    }

    pub fn with_capacity_in(capacity: usize, alloc: A) -> Self {
        let buf = RawBuf::with_capacity_in(capacity, alloc).unwrap_or_else(|err| handle_error(err));
        List { buf, len: 0 }
    }

    pub fn with_len_in(n: usize, alloc: A) -> Self
    where
        T: Default,
    {
        let mut list = Self::with_capacity_in(n, alloc);
        for _ in 0..n {
            // SAFETY: capacity is exactly `n`.
            unsafe { list.push_unchecked(T::default()) };
        }
        list
    }

    pub fn from_range_in<'r>(range: impl Into<RangeView<'r, T>>, alloc: A) -> Self
    where
        T: Clone + 'r,
    {
        let range = range.into();
        let mut list = Self::with_capacity_in(range.len(), alloc);
        for item in range {
            // SAFETY: capacity is exactly `range.len()`.
            unsafe { list.push_unchecked(item.clone()) };
        }
        list
    }

    /// Collects `items` into a list backed by `alloc`.
    pub fn from_iter_in(items: impl IntoIterator<Item = T>, alloc: A) -> Self {
        let mut list = Self::new_in(alloc);
        list.extend(items);
        list
    }

    /// Moves the contents into a new list, leaving `self` empty with no storage.
    ///
    /// ```
    /// use arrlist_core::List;
    ///
    /// let mut a: List<i32> = List::from_range(&[1, 2, 3]);
    /// let b = a.take();
    /// assert_eq!(b, [1, 2, 3]);
    /// assert_eq!((a.count(), a.capacity()), (0, 0));
    /// ```
    pub fn take(&mut self) -> Self
    where
        A: Clone,
    {
        let len = core::mem::replace(&mut self.len, 0);
        List {
            buf: self.buf.take(),
            len,
        }
    }
}

// --- Accessors ---

impl<T, A: Allocator> List<T, A> {
    /// Number of live elements.
    #[inline]
    pub fn count(&self) -> usize {
        self.len
    }

    /// Number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn allocator(&self) -> &A {
        self.buf.allocator()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` is live.
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: `[0, len)` is live and uniquely borrowed.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    pub fn as_ptr(&self) -> *const T {
        self.buf.ptr()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// A view over the live elements, for passing this list to range operations.
    pub fn as_range(&self) -> RangeView<'_, T> {
        RangeView::new(self.as_slice())
    }
}

// --- Queries ---

impl<T, A: Allocator> List<T, A> {
    /// Whether any element satisfies `predicate`.
    pub fn exists(&self, mut predicate: impl FnMut(&T) -> bool) -> bool {
        self.iter().any(|item| predicate(item))
    }

    /// First element satisfying `predicate`.
    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<&T> {
        self.iter().find(|item| predicate(item))
    }

    /// Last element satisfying `predicate`.
    pub fn find_last(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<&T> {
        self.iter().rev().find(|item| predicate(item))
    }

    /// Index of the first element satisfying `predicate`, or [`NOT_FOUND`].
    pub fn find_index(&self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        self.iter().position(|item| predicate(item)).unwrap_or(NOT_FOUND)
    }

    /// Index of the last element satisfying `predicate`, or [`NOT_FOUND`].
    pub fn find_last_index(&self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        self.iter().rposition(|item| predicate(item)).unwrap_or(NOT_FOUND)
    }

    /// Clones every element satisfying `predicate` into a new list using the
    /// same allocator.
    pub fn find_all(&self, mut predicate: impl FnMut(&T) -> bool) -> List<T, A>
    where
        T: Clone,
        A: Clone,
    {
        let mut out = List::new_in(self.allocator().clone());
        for item in self.iter().filter(|item| predicate(item)) {
            out.add(item.clone());
        }
        out
    }
}

impl<T: PartialEq, A: Allocator> List<T, A> {
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }

    /// Index of the first element equal to `value`, or [`NOT_FOUND`].
    pub fn index_of(&self, value: &T) -> usize {
        self.find_index(|item| item == value)
    }

    /// Index of the last element equal to `value`, or [`NOT_FOUND`].
    pub fn last_index_of(&self, value: &T) -> usize {
        self.find_last_index(|item| item == value)
    }

    /// Removes the first element equal to `value`. Returns whether one was found.
    pub fn remove(&mut self, value: &T) -> bool {
        let index = self.index_of(value);
        if index == NOT_FOUND {
            return false;
        }
        self.remove_at(index).is_ok()
    }
}

// --- Insertion ---

impl<T, A: Allocator> List<T, A> {
    /// Writes `value` into the first spare slot.
    ///
    /// # Safety
    ///
    /// `count < capacity`.
    #[inline(always)]
    unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < self.buf.capacity());
        unsafe { self.buf.ptr().add(self.len).write(value) };
        self.len += 1;
    }

    #[cold]
    fn grow_one(&mut self) -> Result<()> {
        let new_cap = grown_capacity(self.buf.capacity())?;
        // SAFETY: `[0, len)` is live and the new capacity exceeds `len`.
        unsafe { self.buf.relocate(self.len, self.len, 0, new_cap) }
    }

    /// Appends `value`, doubling the capacity when full.
    ///
    /// Aborts through [`alloc::alloc::handle_alloc_error`] if the allocator
    /// fails; see [`List::try_add`].
    pub fn add(&mut self, value: T) {
        if let Err(err) = self.try_add(value) {
            handle_error(err)
        }
    }

    /// Appends `value`, reporting allocation failure instead of aborting.
    /// On failure the list is unchanged and `value` is dropped.
    pub fn try_add(&mut self, value: T) -> Result<()> {
        if self.len == self.buf.capacity() {
            self.grow_one()?;
        }
        // SAFETY: there is at least one spare slot.
        unsafe { self.push_unchecked(value) };
        Ok(())
    }

    /// Inserts `value` at `index`, shifting later elements right by one.
    ///
    /// `index == count` appends. When the list is full, the elements are moved
    /// straight into their final positions in a buffer twice as large.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(ListError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        if index == self.len {
            return self.try_add(value);
        }

        if self.len == self.buf.capacity() {
            let new_cap = grown_capacity(self.buf.capacity())?;
            // SAFETY: `[0, len)` is live, `index < len` and `len + 1 <= new_cap`.
            unsafe { self.buf.relocate(self.len, index, 1, new_cap)? };
        } else {
            // SAFETY: there is a spare slot past the tail.
            unsafe {
                let at = self.buf.ptr().add(index);
                ptr::copy(at, at.add(1), self.len - index);
            }
        }
        // SAFETY: slot `index` was vacated above.
        unsafe { self.buf.ptr().add(index).write(value) };
        self.len += 1;
        Ok(())
    }

    /// Ensures room for `additional` more elements, growing to
    /// `2 * count + additional` when the spare capacity is too small.
    pub fn reserve(&mut self, additional: usize) {
        if let Err(err) = self.try_reserve(additional) {
            handle_error(err)
        }
    }

    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        if additional > self.buf.capacity() - self.len {
            let new_cap = bulk_capacity(self.len, additional)?;
            // SAFETY: `[0, len)` is live and `new_cap >= len + additional`.
            unsafe { self.buf.relocate(self.len, self.len, 0, new_cap)? };
        }
        Ok(())
    }

    /// Appends clones of every element of `range`.
    ///
    /// ```
    /// use arrlist_core::List;
    ///
    /// let mut list: List<&str> = List::from_range(&["a"]);
    /// list.add_range(&vec!["b", "c"]);
    /// assert_eq!(list, ["a", "b", "c"]);
    /// assert_eq!(list.capacity(), 4);
    /// ```
    pub fn add_range<'r>(&mut self, range: impl Into<RangeView<'r, T>>)
    where
        T: Clone + 'r,
    {
        if let Err(err) = self.try_add_range(range) {
            handle_error(err)
        }
    }

    pub fn try_add_range<'r>(&mut self, range: impl Into<RangeView<'r, T>>) -> Result<()>
    where
        T: Clone + 'r,
    {
        self.try_append_iter(range.into().iter().cloned())
    }

    /// Appends every item of `items`, moving them into the list.
    pub fn append_iter(&mut self, items: impl IntoIterator<Item = T, IntoIter: ExactSizeIterator>) {
        if let Err(err) = self.try_append_iter(items) {
            handle_error(err)
        }
    }

    pub fn try_append_iter(
        &mut self,
        items: impl IntoIterator<Item = T, IntoIter: ExactSizeIterator>,
    ) -> Result<()> {
        let items = items.into_iter();
        self.try_reserve(items.len())?;
        for item in items {
            self.try_add(item)?;
        }
        Ok(())
    }

    /// Inserts clones of every element of `range` at `index`.
    ///
    /// The tail is shifted right by the range length in place, or moved into
    /// its final position in a buffer of `2 * count + added` slots when the
    /// spare capacity is too small.
    pub fn insert_range<'r>(&mut self, index: usize, range: impl Into<RangeView<'r, T>>) -> Result<()>
    where
        T: Clone + 'r,
    {
        self.insert_iter(index, range.into().iter().cloned())
    }

    /// Inserts every item of `items` at `index`, moving them into the list.
    ///
    /// At most `items.len()` items are taken, wherever `index` lies. If the
    /// iterator yields fewer than its reported length, the remaining gap is
    /// closed.
    pub fn insert_iter(
        &mut self,
        index: usize,
        items: impl IntoIterator<Item = T, IntoIter: ExactSizeIterator>,
    ) -> Result<()> {
        if index > self.len {
            return Err(ListError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        let items = items.into_iter();
        let added = items.len();
        if index == self.len {
            return self.try_append_iter(items.take(added));
        }
        if added == 0 {
            return Ok(());
        }

        let mut gap = self.open_gap(index, added)?;
        gap.fill(items);
        Ok(())
    }

    /// Vacates `gap` slots at `index < count` and returns the guard that fills
    /// them. On error nothing changes.
    fn open_gap(&mut self, index: usize, gap: usize) -> Result<Gap<'_, T, A>> {
        debug_assert!(index < self.len);
        let tail = self.len - index;
        if gap > self.buf.capacity() - self.len {
            let new_cap = bulk_capacity(self.len, gap)?;
            // SAFETY: `[0, len)` is live, `index < len` and `len + gap <= new_cap`.
            unsafe { self.buf.relocate(self.len, index, gap, new_cap)? };
        } else {
            // SAFETY: `len + gap <= capacity`, so the shifted tail stays in bounds.
            unsafe {
                let at = self.buf.ptr().add(index);
                ptr::copy(at, at.add(gap), tail);
            }
        }
        Ok(Gap::new(self, index, gap, tail))
    }
}

// --- Removal ---

impl<T, A: Allocator> List<T, A> {
    /// Removes and returns the element at `index`, shifting later elements left.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(ListError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        // SAFETY: `index` is live; the tail after it is moved down over it.
        unsafe {
            let at = self.buf.ptr().add(index);
            let value = at.read();
            ptr::copy(at.add(1), at, self.len - index - 1);
            self.len -= 1;
            Ok(value)
        }
    }

    /// Drops `count` elements starting at `index` and shifts the tail left.
    pub fn remove_range(&mut self, index: usize, count: usize) -> Result<()> {
        let end = index
            .checked_add(count)
            .filter(|&end| end <= self.len)
            .ok_or(ListError::RangeOutOfBounds {
                index,
                count,
                len: self.len,
            })?;
        if count == 0 {
            return Ok(());
        }

        let old_len = self.len;
        // A panicking destructor leaks the tail instead of dropping it twice.
        self.len = index;
        // SAFETY: `[index, end)` is live and dropped once; the tail moves down over it.
        unsafe {
            let at = self.buf.ptr().add(index);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(at, count));
            ptr::copy(at.add(count), at, old_len - end);
        }
        self.len = old_len - count;
        Ok(())
    }

    /// Drops every element. The capacity is kept.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        // SAFETY: `[len, self.len)` is live and leaves the list before it is dropped.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.buf.ptr().add(len), self.len - len);
            self.len = len;
            ptr::drop_in_place(tail);
        }
    }
}

// --- Structural ---

impl<T, A: Allocator> List<T, A> {
    /// Sets the count to `n` and the capacity to exactly `n`.
    ///
    /// Shrinking drops `[n, count)`; growing fills `[count, n)` with
    /// `T::default()`. `resize(0)` releases the storage.
    pub fn resize(&mut self, n: usize)
    where
        T: Default,
    {
        if let Err(err) = self.try_resize(n) {
            handle_error(err)
        }
    }

    /// Like [`List::resize`], but reports allocation failure. On failure the
    /// list is unchanged.
    pub fn try_resize(&mut self, n: usize) -> Result<()>
    where
        T: Default,
    {
        if n != self.buf.capacity() {
            let new_ptr = self.buf.allocate(n)?;
            self.truncate(n);
            // SAFETY: `[0, len)` is live and `len <= n`.
            unsafe { self.buf.install(new_ptr, n, self.len, self.len, 0) };
        } else {
            self.truncate(n);
        }
        while self.len < n {
            // SAFETY: capacity is `n`.
            unsafe { self.push_unchecked(T::default()) };
        }
        Ok(())
    }

    /// Reverses the order of the elements in place.
    pub fn reverse(&mut self) {
        let len = self.len;
        let items = self.as_mut_slice();
        for i in 0..len / 2 {
            items.swap(i, len - 1 - i);
        }
    }

    /// Sorts by the natural ordering with an in-place heap sort. Not stable.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp);
    }

    /// Sorts with a three-way comparator. See [`heap_sort_by`].
    pub fn sort_by(&mut self, compare: impl FnMut(&T, &T) -> Ordering) {
        heap_sort_by(self.as_mut_slice(), compare);
    }

    pub fn sort_by_key<K: Ord>(&mut self, mut key: impl FnMut(&T) -> K) {
        self.sort_by(|a, b| key(a).cmp(&key(b)));
    }

    /// Clones every element into the front of `dest`.
    pub fn copy_to(&self, dest: &mut [T]) -> Result<()>
    where
        T: Clone,
    {
        if dest.len() < self.len {
            return Err(ListError::DestinationTooShort {
                needed: self.len,
                available: dest.len(),
            });
        }
        dest[..self.len].clone_from_slice(self.as_slice());
        Ok(())
    }

    /// Maps every element through `converter`, preserving order and count.
    ///
    /// ```
    /// use arrlist_core::List;
    ///
    /// let numbers: List<i32> = List::from_range(&[1, 2, 3]);
    /// let labels = numbers.convert_all(|n| format!("#{n}"));
    /// assert_eq!(labels, ["#1", "#2", "#3"]);
    /// ```
    pub fn convert_all<U>(&self, mut converter: impl FnMut(&T) -> U) -> List<U, A>
    where
        A: Clone,
    {
        let mut out = List::with_capacity_in(self.len, self.allocator().clone());
        for item in self.iter() {
            // SAFETY: capacity is exactly `self.len`.
            unsafe { out.push_unchecked(converter(item)) };
        }
        out
    }
}

#[cfg(feature = "bumpalo")]
impl<'b, T> List<T, &'b bumpalo::Bump> {
    /// Creates an empty list whose storage lives in `bump`.
    pub fn new_in_bump(bump: &'b bumpalo::Bump) -> Self {
        Self::new_in(bump)
    }
}

// --- Trait impls ---

impl<T, A: Allocator> Drop for List<T, A> {
    fn drop(&mut self) {
        // SAFETY: `[0, len)` is live; `buf` releases the storage afterwards.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr(), self.len)) }
    }
}

impl<T, A: Allocator + Default> Default for List<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T: Clone, A: Allocator + Clone> Clone for List<T, A> {
    /// Deep copy with capacity equal to the count.
    fn clone(&self) -> Self {
        Self::from_range_in(self.as_slice(), self.allocator().clone())
    }

    /// Reuses the existing storage when it can hold every element of `source`.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        if self.buf.capacity() < source.len {
            self.buf = RawBuf::with_capacity_in(source.len, self.allocator().clone())
                .unwrap_or_else(|err| handle_error(err));
        }
        for item in source.iter() {
            // SAFETY: capacity is at least `source.len`.
            unsafe { self.push_unchecked(item.clone()) };
        }
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for List<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Hash, A: Allocator> Hash for List<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, U, A: Allocator, B: Allocator> PartialEq<List<U, B>> for List<T, A>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &List<U, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, A: Allocator> Eq for List<T, A> {}

impl<T, U, A: Allocator> PartialEq<[U]> for List<T, A>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, A: Allocator> PartialEq<&[U]> for List<T, A>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, A: Allocator, const N: usize> PartialEq<[U; N]> for List<T, A>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U, A: Allocator> PartialEq<Vec<U>> for List<T, A>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, A: Allocator, I: SliceIndex<[T]>> Index<I> for List<T, A> {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, A: Allocator, I: SliceIndex<[T]>> IndexMut<I> for List<T, A> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T, A: Allocator> AsRef<[T]> for List<T, A> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator> AsMut<[T]> for List<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, A: Allocator> Extend<T> for List<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T: Copy + 'a, A: Allocator> Extend<&'a T> for List<T, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_in(iter, Global)
    }
}

impl<T: Clone> From<&[T]> for List<T> {
    fn from(items: &[T]) -> Self {
        Self::from_range(items)
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(items: [T; N]) -> Self {
        let mut list = Self::with_capacity(N);
        list.append_iter(items);
        list
    }
}

impl<'a, T, A: Allocator> From<&'a List<T, A>> for RangeView<'a, T> {
    fn from(list: &'a List<T, A>) -> Self {
        list.as_range()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a List<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut List<T, A> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, A: Allocator> IntoIterator for List<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> Self::IntoIter {
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so the buffer has a single owner.
        let buf = unsafe { ptr::read(&this.buf) };
        IntoIter::new(buf, this.len)
    }
}
