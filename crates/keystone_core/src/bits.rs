//! # Bit Packing
//!
//! Composing wide integers from bytes and halves.
//!
//! ```text
//! pack_u32(b0, b1, b2, b3):
//!   bits  0..8  = b0
//!   bits  8..16 = b1
//!   bits 16..24 = b2
//!   bits 24..32 = b3
//!
//! pack_u64(high, low):
//!   bits  0..32 = low
//!   bits 32..64 = high
//! ```

/// Packs four bytes into a `u32`, `b0` in the lowest byte.
///
/// ```rust
/// assert_eq!(keystone_core::pack_u32(0x01, 0x02, 0x03, 0x04), 0x0403_0201);
/// ```
#[inline]
#[must_use]
pub const fn pack_u32(b0: u8, b1: u8, b2: u8, b3: u8) -> u32 {
    u32::from_le_bytes([b0, b1, b2, b3])
}

/// Packs two `u32` halves into a `u64`, `high` in the upper 32 bits.
///
/// ```rust
/// assert_eq!(
///     keystone_core::pack_u64(0x1122_3344, 0x5566_7788),
///     0x1122_3344_5566_7788,
/// );
/// ```
#[inline]
#[must_use]
pub const fn pack_u64(high: u32, low: u32) -> u64 {
    let h = high.to_le_bytes();
    let l = low.to_le_bytes();
    u64::from_le_bytes([l[0], l[1], l[2], l[3], h[0], h[1], h[2], h[3]])
}

/// Splits a `u32` into its four bytes, lowest first.
///
/// Inverse of [`pack_u32`].
#[inline]
#[must_use]
pub const fn unpack_u32(value: u32) -> [u8; 4] {
    value.to_le_bytes()
}

/// Splits a `u64` into `(high, low)` halves.
///
/// Inverse of [`pack_u64`].
#[inline]
#[must_use]
pub const fn unpack_u64(value: u64) -> (u32, u32) {
    let b = value.to_le_bytes();
    (
        u32::from_le_bytes([b[4], b[5], b[6], b[7]]),
        u32::from_le_bytes([b[0], b[1], b[2], b[3]]),
    )
}
