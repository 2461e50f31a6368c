//! Container error types.

use std::alloc::Layout;
use std::error::Error;
use std::fmt;

use smallvec::CollectionAllocErr;

/// Errors reported by the fallible (`try_*`) and checked container APIs.
///
/// The infallible counterparts (`push`, `resize`, `reserve`) never return
/// these: they panic on overflow and abort through
/// [`std::alloc::handle_alloc_error`] when the allocator refuses, the same
/// way `Vec` does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TieredError {
    /// The requested length or spine capacity does not fit in `usize`.
    CapacityOverflow,
    /// The allocator refused a spine or block allocation.
    AllocFailed {
        /// Layout of the allocation that failed.
        layout: Layout,
    },
    /// A checked accessor was given an index at or past the length.
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the container at the time of the call.
        len: usize,
    },
}

impl fmt::Display for TieredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow => write!(f, "capacity overflow"),
            Self::AllocFailed { layout } => {
                write!(
                    f,
                    "allocation of {} bytes (align {}) failed",
                    layout.size(),
                    layout.align()
                )
            }
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
        }
    }
}

impl Error for TieredError {}

impl From<CollectionAllocErr> for TieredError {
    fn from(err: CollectionAllocErr) -> Self {
        match err {
            CollectionAllocErr::CapacityOverflow => Self::CapacityOverflow,
            CollectionAllocErr::AllocErr { layout } => Self::AllocFailed { layout },
        }
    }
}

/// Unwrap the result of a growth operation for the infallible APIs.
pub(crate) fn infallible<R>(result: Result<R, TieredError>) -> R {
    match result {
        Ok(value) => value,
        Err(TieredError::AllocFailed { layout }) => std::alloc::handle_alloc_error(layout),
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_out_of_range() {
        let err = TieredError::OutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of range for length 3");
    }

    #[test]
    fn display_alloc_failed_reports_size() {
        let layout = Layout::array::<u64>(1024).unwrap();
        let err = TieredError::AllocFailed { layout };
        assert_eq!(err.to_string(), "allocation of 8192 bytes (align 8) failed");
    }

    #[test]
    fn converts_smallvec_errors() {
        assert_eq!(
            TieredError::from(CollectionAllocErr::CapacityOverflow),
            TieredError::CapacityOverflow
        );
        let layout = Layout::new::<usize>();
        assert_eq!(
            TieredError::from(CollectionAllocErr::AllocErr { layout }),
            TieredError::AllocFailed { layout }
        );
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn infallible_panics_on_overflow() {
        infallible::<()>(Err(TieredError::CapacityOverflow));
    }
}
