//! Owned, uninitialized backing storage for [`List`](crate::List).
//!
//! `RawBuf` pairs every allocation with its deallocation and knows nothing
//! about which slots are live; the list tracks that.

use core::{
    alloc::Layout,
    marker::PhantomData,
    mem,
    ptr::{self, NonNull},
};

use allocator_api2::alloc::{Allocator, Global};

use crate::error::{ListError, Result};

pub(crate) struct RawBuf<T, A: Allocator = Global> {
    ptr: NonNull<T>,
    cap: usize,
    alloc: A,
    _marker: PhantomData<T>,
}

const fn is_zst<T>() -> bool {
    mem::size_of::<T>() == 0
}

/// Capacity after a single-element overflow: 1 from empty, doubled otherwise.
pub(crate) fn grown_capacity(cap: usize) -> Result<usize> {
    if cap == 0 {
        Ok(1)
    } else {
        cap.checked_mul(2).ok_or(ListError::CapacityOverflow)
    }
}

/// Capacity after a bulk overflow of `additional` elements onto `len`.
pub(crate) fn bulk_capacity(len: usize, additional: usize) -> Result<usize> {
    len.checked_mul(2)
        .and_then(|doubled| doubled.checked_add(additional))
        .ok_or(ListError::CapacityOverflow)
}

impl<T, A: Allocator> RawBuf<T, A> {
    pub(crate) const fn new_in(alloc: A) -> Self {
        RawBuf {
            ptr: NonNull::dangling(),
            cap: 0,
            alloc,
            _marker: PhantomData,
        }
    }

    pub(crate) fn with_capacity_in(cap: usize, alloc: A) -> Result<Self> {
        let mut buf = Self::new_in(alloc);
        buf.ptr = buf.allocate(cap)?;
        buf.cap = cap;
        Ok(buf)
    }

    #[inline(always)]
    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    pub(crate) fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Obtains storage for `cap` slots from the allocator.
    ///
    /// Zero slots and zero-sized types never reach the allocator.
    pub(crate) fn allocate(&self, cap: usize) -> Result<NonNull<T>> {
        if cap == 0 || is_zst::<T>() {
            return Ok(NonNull::dangling());
        }
        let layout = Layout::array::<T>(cap).map_err(|_| ListError::CapacityOverflow)?;
        match self.alloc.allocate(layout) {
            Ok(block) => Ok(block.cast()),
            Err(_) => {
                tracing::debug!(
                    size = layout.size(),
                    align = layout.align(),
                    "list allocation failed"
                );
                Err(ListError::AllocFailed { layout })
            }
        }
    }

    /// Returns `cap` slots at `ptr` to the allocator.
    ///
    /// # Safety
    ///
    /// `ptr` must come from [`RawBuf::allocate`] on this buffer with the same
    /// `cap`, and must not be used afterwards.
    unsafe fn release(&self, ptr: NonNull<T>, cap: usize) {
        if cap == 0 || is_zst::<T>() {
            return;
        }
        // SAFETY: the same layout was validated when the block was allocated.
        unsafe {
            let layout = Layout::from_size_align_unchecked(mem::size_of::<T>() * cap, mem::align_of::<T>());
            self.alloc.deallocate(ptr.cast(), layout);
        }
    }

    /// Moves the `len` live elements into `new_ptr` and installs it, leaving
    /// `gap` uninitialized slots at `index`. The old storage is released.
    ///
    /// # Safety
    ///
    /// The first `len` slots must be live, `index <= len`, `new_ptr` must come
    /// from [`RawBuf::allocate`] with `new_cap` and `len + gap <= new_cap`.
    pub(crate) unsafe fn install(
        &mut self,
        new_ptr: NonNull<T>,
        new_cap: usize,
        len: usize,
        index: usize,
        gap: usize,
    ) {
        debug_assert!(index <= len);
        debug_assert!(len + gap <= new_cap);
        // SAFETY: both blocks are distinct allocations large enough for the copies.
        unsafe {
            let old = self.ptr.as_ptr();
            let new = new_ptr.as_ptr();
            ptr::copy_nonoverlapping(old, new, index);
            ptr::copy_nonoverlapping(old.add(index), new.add(index + gap), len - index);
            self.release(self.ptr, self.cap);
        }
        tracing::trace!(
            old_capacity = self.cap,
            new_capacity = new_cap,
            "relocated list storage"
        );
        self.ptr = new_ptr;
        self.cap = new_cap;
    }

    /// Allocates `new_cap` slots and moves the live elements there, opening a
    /// gap of `gap` slots at `index`. On error nothing changes.
    ///
    /// # Safety
    ///
    /// Same as [`RawBuf::install`], minus the pointer requirement.
    pub(crate) unsafe fn relocate(
        &mut self,
        len: usize,
        index: usize,
        gap: usize,
        new_cap: usize,
    ) -> Result<()> {
        let new_ptr = self.allocate(new_cap)?;
        // SAFETY: forwarded from the caller; `new_ptr` was allocated with `new_cap`.
        unsafe { self.install(new_ptr, new_cap, len, index, gap) };
        Ok(())
    }
}

impl<T, A: Allocator + Clone> RawBuf<T, A> {
    /// Moves the storage out, leaving an empty buffer using the same allocator.
    pub(crate) fn take(&mut self) -> Self {
        let empty = Self::new_in(self.alloc.clone());
        mem::replace(self, empty)
    }
}

impl<T, A: Allocator> Drop for RawBuf<T, A> {
    fn drop(&mut self) {
        // SAFETY: the buffer owns `ptr` with `cap` slots.
        unsafe { self.release(self.ptr, self.cap) }
    }
}

// The buffer owns its `T`s the way `Box<[T]>` does.
unsafe impl<T: Send, A: Allocator + Send> Send for RawBuf<T, A> {}
unsafe impl<T: Sync, A: Allocator + Sync> Sync for RawBuf<T, A> {}
