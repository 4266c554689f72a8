//! Drop guard for filling a gap opened inside the live region.
//!
//! While the guard exists the list reports `count == index`, so a panic in
//! the element source cannot expose the uninitialized gap. When the guard
//! drops (normally or during unwinding) whatever part of the gap was not
//! filled is closed by moving the tail down, and the count is restored.

use core::ptr;

use allocator_api2::alloc::Allocator;

use super::List;

pub(super) struct Gap<'l, T, A: Allocator> {
    list: &'l mut List<T, A>,
    index: usize,
    gap: usize,
    filled: usize,
    tail: usize,
}

impl<'l, T, A: Allocator> Gap<'l, T, A> {
    /// Takes over a list whose `[index, index + gap)` slots are vacant and
    /// whose `tail` trailing elements start at `index + gap`.
    pub(super) fn new(list: &'l mut List<T, A>, index: usize, gap: usize, tail: usize) -> Self {
        debug_assert!(index + gap + tail <= list.capacity());
        list.len = index;
        Gap {
            list,
            index,
            gap,
            filled: 0,
            tail,
        }
    }

    /// Moves items into the gap until it is full or `items` runs out.
    pub(super) fn fill(&mut self, items: impl Iterator<Item = T>) {
        for item in items.take(self.gap - self.filled) {
            // SAFETY: slot `index + filled` is inside the vacant gap.
            unsafe { self.list.buf.ptr().add(self.index + self.filled).write(item) };
            self.filled += 1;
        }
    }
}

impl<T, A: Allocator> Drop for Gap<'_, T, A> {
    fn drop(&mut self) {
        let filled_end = self.index + self.filled;
        if self.filled < self.gap {
            // SAFETY: the tail is live at `index + gap`; its new home is vacant.
            unsafe {
                let base = self.list.buf.ptr();
                ptr::copy(base.add(self.index + self.gap), base.add(filled_end), self.tail);
            }
        }
        self.list.len = filled_end + self.tail;
    }
}
