//! Error type for fallible list operations.
//!
//! Absence is never an error: index queries return [`NOT_FOUND`](crate::NOT_FOUND),
//! lookups return `Option` and [`List::remove`](crate::List::remove) returns `bool`.

use core::alloc::Layout;

use thiserror::Error;

/// Errors reported by [`List`](crate::List) operations.
///
/// Every operation that returns one of these has left the list exactly as it
/// was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// An index lies outside the valid positions for the operation.
    #[error("index {index} is out of bounds for a list of {len} element(s)")]
    IndexOutOfBounds { index: usize, len: usize },

    /// `index + count` lies past the end of the list (or overflows).
    #[error("range of {count} element(s) starting at {index} is out of bounds for a list of {len} element(s)")]
    RangeOutOfBounds {
        index: usize,
        count: usize,
        len: usize,
    },

    /// The destination of a copy cannot hold every element.
    #[error("destination holds {available} slot(s) but {needed} are required")]
    DestinationTooShort { needed: usize, available: usize },

    /// The requested capacity does not fit in `isize::MAX` bytes.
    #[error("capacity overflow")]
    CapacityOverflow,

    /// The allocator could not provide storage.
    #[error("allocation of {} byte(s) failed", .layout.size())]
    AllocFailed { layout: Layout },
}

impl ListError {
    /// Whether this error comes from the allocator or the growth arithmetic
    /// rather than from the caller's arguments.
    pub fn is_resource_error(&self) -> bool {
        matches!(
            self,
            ListError::CapacityOverflow | ListError::AllocFailed { .. }
        )
    }
}

/// Result alias for list operations.
pub type Result<T, E = ListError> = core::result::Result<T, E>;

/// Turns a resource error into the process-level failure used by infallible
/// operations, the way `Vec` does.
#[cold]
pub(crate) fn handle_error(err: ListError) -> ! {
    match err {
        ListError::AllocFailed { layout } => alloc::alloc::handle_alloc_error(layout),
        ListError::CapacityOverflow => panic!("capacity overflow"),
        other => panic!("{other}"),
    }
}
