//! # Double Buffer
//!
//! Two fixed slots and a selector for O(1) current/previous role swaps.
//!
//! ## Layout
//!
//! ```text
//!        ┌─────────────────────────────┐
//!        │       DoubleBuffer<T>       │
//!        │                             │
//!        │  ┌─────────┐  ┌─────────┐   │
//!        │  │ Slot 0  │  │ Slot 1  │   │
//!        │  └────┬────┘  └────┬────┘   │
//!        │       │            │        │
//!        │  ┌────┴────────────┴────┐   │
//!        │  │   Current Index 0/1  │   │
//!        │  └──────────────────────┘   │
//!        └─────────────────────────────┘
//! ```
//!
//! The previous slot is always `current ^ 1`.
//!
//! ## Thread Safety
//!
//! None built in. The container is owned exclusively by whoever holds it;
//! wrap it in a lock if it must be mutated from several threads.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// Double buffer holding a current and a previous value of `T`.
///
/// `advance` swaps which slot is current without moving either value, so
/// cycling costs the same regardless of how large `T` is.
///
/// ## Usage
///
/// ```rust
/// use keystone_core::DoubleBuffer;
///
/// let mut frames: DoubleBuffer<Vec<f32>> = DoubleBuffer::new();
///
/// for step in 0..3 {
///     frames.advance_clear();
///     frames.current_mut().push(step as f32);
///     // Compare against last frame...
///     let _delta = frames.current().len() as isize - frames.prev().len() as isize;
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoubleBuffer<T> {
    /// The two slots. Which one is current depends on `current`.
    slots: [T; 2],

    /// Index of the current slot (0 or 1).
    /// Previous slot is always (current ^ 1).
    #[serde(deserialize_with = "deserialize_slot_index")]
    current: usize,

    /// Advances since construction or the last clear.
    generation: u64,
}

/// Rejects any persisted slot index other than 0 or 1.
fn deserialize_slot_index<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let index = usize::deserialize(deserializer)?;
    if index > 1 {
        tracing::warn!(index, "rejected double buffer with invalid slot index");
        return Err(serde::de::Error::custom(ValidationError::fail(format!(
            "double buffer slot index must be 0 or 1, got {index}"
        ))));
    }
    Ok(index)
}

impl<T: Default> DoubleBuffer<T> {
    /// Creates a double buffer with both slots default-initialized.
    ///
    /// Slot 0 starts as current.
    #[must_use]
    pub fn new() -> Self {
        Self::from_slots(T::default(), T::default())
    }

    /// Advances, then resets the new current slot to `T::default()`.
    ///
    /// The old current value stays readable through [`prev`](Self::prev)
    /// for one more cycle.
    pub fn advance_clear(&mut self) {
        self.advance();
        self.slots[self.current] = T::default();
    }

    /// Resets both slots to `T::default()` and slot 0 back to current.
    pub fn clear(&mut self) {
        tracing::trace!(generation = self.generation, "double buffer cleared");

        self.slots[0] = T::default();
        self.slots[1] = T::default();
        self.current = 0;
        self.generation = 0;
    }
}

impl<T> DoubleBuffer<T> {
    /// Creates a double buffer from explicit values.
    #[must_use]
    pub const fn from_slots(current: T, prev: T) -> Self {
        Self {
            slots: [current, prev],
            current: 0,
            generation: 0,
        }
    }

    /// Returns the current value.
    #[inline]
    #[must_use]
    pub fn current(&self) -> &T {
        &self.slots[self.current]
    }

    /// Returns the current value mutably.
    #[inline]
    pub fn current_mut(&mut self) -> &mut T {
        &mut self.slots[self.current]
    }

    /// Returns the previous value.
    #[inline]
    #[must_use]
    pub fn prev(&self) -> &T {
        &self.slots[self.current ^ 1]
    }

    /// Returns the previous value mutably.
    #[inline]
    pub fn prev_mut(&mut self) -> &mut T {
        &mut self.slots[self.current ^ 1]
    }

    /// Borrows `(current, prev)` mutably at the same time.
    ///
    /// Lets a step compute the new state from the old one in place.
    #[inline]
    pub fn both_mut(&mut self) -> (&mut T, &mut T) {
        let [first, second] = &mut self.slots;
        if self.current == 0 {
            (first, second)
        } else {
            (second, first)
        }
    }

    /// Swaps roles: current becomes prev and prev becomes current.
    ///
    /// Neither slot's contents are touched.
    #[inline]
    pub fn advance(&mut self) {
        self.current ^= 1;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Returns the physical slot (0 or 1) currently playing the current role.
    #[inline]
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// Returns the number of advances since construction or the last clear.
    #[inline]
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Consumes the buffer, returning `(current, prev)`.
    #[must_use]
    pub fn into_slots(self) -> (T, T) {
        let [first, second] = self.slots;
        if self.current == 0 {
            (first, second)
        } else {
            (second, first)
        }
    }
}

impl<T: Default> Default for DoubleBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}
