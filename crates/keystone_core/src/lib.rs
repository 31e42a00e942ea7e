//! # KEYSTONE Core
//!
//! Small, self-contained primitives shared by the rest of the system:
//! - [`DoubleBuffer`]: "this frame" and "last frame" values with O(1) role swap
//! - [`Ownership`]: compile-time classification of smart handle types
//! - [`bits`]: packing bytes and words into wider integers
//! - [`ValidationError`]: the two validation failure kinds
//!
//! ## Architecture Rules
//!
//! 1. **No heap allocations in hot path** - the double buffer never reallocates
//! 2. **No hidden synchronization** - owners lock if they share
//! 3. **Compile-time over runtime** - classification is resolved by the type system
//!
//! ## Example
//!
//! ```rust
//! use keystone_core::DoubleBuffer;
//!
//! let mut state: DoubleBuffer<u32> = DoubleBuffer::new();
//! *state.current_mut() = 7;
//! state.advance_clear();
//! assert_eq!(*state.prev(), 7);
//! assert_eq!(*state.current(), 0);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod bits;
pub mod error;
pub mod ownership;
pub mod sync;

pub use bits::{pack_u32, pack_u64, unpack_u32, unpack_u64};
pub use error::{ValidationError, ValidationResult};
pub use ownership::{
    is_shared_handle, is_smart_handle, is_unique_handle, ownership_of, Ownership, OwnershipKind,
};
pub use sync::DoubleBuffer;
