use core::{fmt, iter::FusedIterator, ptr, slice};

use allocator_api2::alloc::{Allocator, Global};

use crate::raw::RawBuf;

/// Owning iterator returned by [`List::into_iter`](super::List).
///
/// Elements not yet yielded are dropped with the iterator, which then returns
/// the storage to the list's allocator.
pub struct IntoIter<T, A: Allocator = Global> {
    buf: RawBuf<T, A>,
    start: usize,
    end: usize,
}

impl<T, A: Allocator> IntoIter<T, A> {
    pub(super) fn new(buf: RawBuf<T, A>, len: usize) -> Self {
        IntoIter {
            buf,
            start: 0,
            end: len,
        }
    }

    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[start, end)` is still live.
        unsafe { slice::from_raw_parts(self.buf.ptr().add(self.start), self.end - self.start) }
    }
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `start` is live and is read exactly once.
        let item = unsafe { self.buf.ptr().add(self.start).read() };
        self.start += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: `end` was live and is read exactly once.
        Some(unsafe { self.buf.ptr().add(self.end).read() })
    }
}

impl<T, A: Allocator> ExactSizeIterator for IntoIter<T, A> {}

impl<T, A: Allocator> FusedIterator for IntoIter<T, A> {}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, A: Allocator> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        // SAFETY: `[start, end)` is live and dropped once; `buf` frees the storage.
        unsafe {
            let rest = ptr::slice_from_raw_parts_mut(self.buf.ptr().add(self.start), self.end - self.start);
            ptr::drop_in_place(rest);
        }
    }
}
