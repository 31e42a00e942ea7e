//! # Double Buffering
//!
//! Iterative processes often need "this frame's value" next to "last frame's
//! value" so a new state can be compared against the one before it.
//!
//! ## The Solution: Two Slots, One Bit
//!
//! ```text
//! Frame N:
//!   Write current (slot 0)
//!   Compare against prev (slot 1)
//!
//! Frame N+1:
//!   ADVANCE (index flip, nothing moves)
//!   Write current (slot 1)
//!   Compare against prev (slot 0)
//! ```
//!
//! No copies. No allocations. No locks: the owner decides how to share.

mod double_buffer;

pub use double_buffer::DoubleBuffer;
