//! Two-level growable array with stable block addresses.
//!
//! [`TieredVec`] offers the familiar `Vec` surface (amortised O(1) push,
//! O(1) random access) but stores its elements in fixed-size blocks of
//! [`BLOCK_LEN`] slots rather than one contiguous buffer. Growing the
//! container never relocates a block that already exists, so the address of
//! every element stays put until that element's block is released.
//!
//! # Architecture
//!
//! ```text
//! TieredVec<T>
//! ├── Spine (SmallVec<[Block<T>; 8]> + explicit block capacity)
//! │   ├── Inline: up to 8 block pointers stored in the container itself
//! │   └── Heap: 16, 32, 64, … block pointers, doubled on overflow
//! └── Block<T> = Box<[T; 1024]> (fully default-constructed at allocation)
//! ```
//!
//! A logical index decomposes into `(index >> 10, index & 1023)`; see
//! [`layout::locate`].
//!
//! # Growth and shrink policy
//!
//! - A block is allocated when a push lands on offset 0 of a block that does
//!   not exist yet.
//! - `pop` releases the trailing block only once more than
//!   [`TieredConfig::shrink_slack`] spare blocks trail the live data.
//! - `resize` downward never releases blocks; they are reused by later
//!   growth.
//! - `reserve` grows the spine only. [`TieredVec::capacity`] therefore
//!   reports addressable spine capacity, not resident block memory.
//!
//! # Concurrency
//!
//! No internal synchronisation. Once sized under exclusive access, disjoint
//! blocks can be handed to different threads through
//! [`TieredVec::blocks_mut`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod algo;
pub mod block;
pub mod config;
pub mod cursor;
pub mod error;
pub mod iter;
pub mod layout;
mod raw;
pub mod span;
pub mod spine;
pub mod vec;

// Public re-exports for the primary API surface.
pub use algo::{RandomAccess, RandomAccessMut};
pub use config::TieredConfig;
pub use cursor::{Cursor, CursorMut};
pub use error::TieredError;
pub use iter::{IntoIter, Iter, IterMut};
pub use layout::{BLOCK_LEN, INLINE_SPINE};
pub use span::{Span, SpanMut};
pub use spine::SpineMode;
pub use vec::TieredVec;
