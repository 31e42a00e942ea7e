//! # Ownership Classification
//!
//! Compile-time tags telling generic code whether a type is an
//! exclusive-ownership handle, a shared-ownership handle, or a plain value.
//!
//! ```text
//! Box<T>          -> Unique
//! Rc<T>, Arc<T>   -> Shared
//! everything else -> Plain   (tagged with impl_plain_ownership!)
//! ```
//!
//! All queries are `const` and resolve during compilation.
//!
//! ## Example
//!
//! ```rust
//! use keystone_core::{is_smart_handle, is_unique_handle, Ownership};
//! use std::sync::Arc;
//!
//! const BOXED: bool = is_unique_handle::<Box<u32>>();
//! assert!(BOXED);
//! assert!(<Arc<str> as Ownership>::IS_SHARED);
//! assert!(!is_smart_handle::<u64>());
//! ```

use std::rc::Rc;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// How a type owns what it points to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OwnershipKind {
    /// Owns its referent uniquely.
    Unique,
    /// Referent may be owned jointly; freed when the last holder drops.
    Shared,
    /// Not a smart handle.
    Plain,
}

/// Compile-time ownership tag.
///
/// Implement it for your own types with [`impl_plain_ownership!`](crate::impl_plain_ownership)
/// or by hand for custom handle types.
pub trait Ownership {
    /// The ownership kind of this type.
    const KIND: OwnershipKind;

    /// True for exclusive-ownership handles.
    const IS_UNIQUE: bool = matches!(Self::KIND, OwnershipKind::Unique);

    /// True for shared-ownership handles.
    const IS_SHARED: bool = matches!(Self::KIND, OwnershipKind::Shared);

    /// True for either kind of smart handle.
    const IS_SMART_HANDLE: bool = Self::IS_UNIQUE || Self::IS_SHARED;
}

impl<T: ?Sized> Ownership for Box<T> {
    const KIND: OwnershipKind = OwnershipKind::Unique;
}

impl<T: ?Sized> Ownership for Rc<T> {
    const KIND: OwnershipKind = OwnershipKind::Shared;
}

impl<T: ?Sized> Ownership for Arc<T> {
    const KIND: OwnershipKind = OwnershipKind::Shared;
}

/// Tags each listed type as [`OwnershipKind::Plain`].
///
/// ```rust
/// use keystone_core::{impl_plain_ownership, is_smart_handle};
///
/// struct Frame;
/// impl_plain_ownership!(Frame);
///
/// assert!(!is_smart_handle::<Frame>());
/// ```
#[macro_export]
macro_rules! impl_plain_ownership {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::ownership::Ownership for $ty {
                const KIND: $crate::ownership::OwnershipKind =
                    $crate::ownership::OwnershipKind::Plain;
            }
        )*
    };
}

impl_plain_ownership!(
    (), bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
    String, str,
);

impl<T> Ownership for Vec<T> {
    const KIND: OwnershipKind = OwnershipKind::Plain;
}

impl<T> Ownership for Option<T> {
    const KIND: OwnershipKind = OwnershipKind::Plain;
}

impl<T: ?Sized> Ownership for &T {
    const KIND: OwnershipKind = OwnershipKind::Plain;
}

/// Returns the ownership kind of `T`.
#[inline]
#[must_use]
pub const fn ownership_of<T: Ownership + ?Sized>() -> OwnershipKind {
    T::KIND
}

/// Returns true if `T` is an exclusive-ownership handle.
#[inline]
#[must_use]
pub const fn is_unique_handle<T: Ownership + ?Sized>() -> bool {
    T::IS_UNIQUE
}

/// Returns true if `T` is a shared-ownership handle.
#[inline]
#[must_use]
pub const fn is_shared_handle<T: Ownership + ?Sized>() -> bool {
    T::IS_SHARED
}

/// Returns true if `T` is either kind of smart handle.
#[inline]
#[must_use]
pub const fn is_smart_handle<T: Ownership + ?Sized>() -> bool {
    T::IS_SMART_HANDLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_handle() {
        assert!(is_unique_handle::<Box<i32>>());
        assert!(!is_shared_handle::<Box<i32>>());
        assert!(is_smart_handle::<Box<[u8]>>());
        assert_eq!(ownership_of::<Box<dyn Fn()>>(), OwnershipKind::Unique);
    }

    #[test]
    fn test_shared_handles() {
        assert!(!is_unique_handle::<Rc<String>>());
        assert!(is_shared_handle::<Rc<String>>());
        assert!(is_shared_handle::<Arc<str>>());
        assert!(is_smart_handle::<Arc<Vec<u8>>>());
    }

    #[test]
    fn test_plain_values() {
        assert!(!is_unique_handle::<u32>());
        assert!(!is_shared_handle::<u32>());
        assert!(!is_smart_handle::<String>());
        assert!(!is_smart_handle::<Vec<Box<u8>>>());
        assert!(!is_smart_handle::<Option<Arc<u8>>>());
        assert!(!is_smart_handle::<&Arc<u8>>());
        assert_eq!(ownership_of::<str>(), OwnershipKind::Plain);
    }

    const _: () = assert!(is_shared_handle::<Arc<u64>>());
    const _: () = assert!(!is_smart_handle::<f64>());

    #[test]
    fn test_resolves_in_const_context() {
        const PLAIN: OwnershipKind = ownership_of::<f64>();
        assert_eq!(PLAIN, OwnershipKind::Plain);
    }
}
