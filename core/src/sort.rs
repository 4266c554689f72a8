//! In-place heap sort.
//!
//! Runs in O(n log n) time with O(1) extra space and is not stable. Every
//! comparison goes through the caller's three-way comparator, so the natural
//! ordering is just `T::cmp`.

use core::cmp::Ordering;

/// Sorts `items` with a three-way comparator.
///
/// Builds a max-heap over the whole slice, then repeatedly swaps the root
/// into the last unsorted position and restores the heap over what remains.
///
/// # Example
///
/// ```
/// use arrlist_core::sort::heap_sort_by;
///
/// let mut v = [5, 3, 1, 4, 2];
/// heap_sort_by(&mut v, |a, b| b.cmp(a));
/// assert_eq!(v, [5, 4, 3, 2, 1]);
/// ```
pub fn heap_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    if len < 2 {
        return;
    }

    for start in (0..len / 2).rev() {
        sift_down(items, start, len, &mut compare);
    }

    for end in (1..len).rev() {
        items.swap(0, end);
        sift_down(items, 0, end, &mut compare);
    }
}

/// Moves `items[root]` down until neither child within `..end` is larger.
fn sift_down<T, F>(items: &mut [T], mut root: usize, end: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            break;
        }
        if child + 1 < end && compare(&items[child], &items[child + 1]) == Ordering::Less {
            child += 1;
        }
        if compare(&items[root], &items[child]) != Ordering::Less {
            break;
        }
        items.swap(root, child);
        root = child;
    }
}
