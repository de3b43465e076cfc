//! Generic conversions between enumeration values and native numbers
//!
//! [`Bridge<T>`] works for any `T: bytemuck::Pod` without knowing `T`'s
//! storage width statically: the width is resolved once per type and the
//! value is moved through a [`Pattern`] of that width.
//!
//! Every function here is total. A type whose storage is not 1, 2, 4 or 8
//! bytes wide is not rejected; `to_enum` yields the all-zero value and
//! every reader yields 0. This is a defensive fallback for types the
//! width check cannot exclude at compile time, not a validated contract.

use crate::pattern::{Pattern, Source};
use crate::width::{Width, try_width};

use bytemuck::{Pod, Zeroable};

use std::marker::PhantomData;

/// Conversions for the enumeration type `T`.
///
/// `T` is expected to be an open enumeration: a `#[repr(transparent)]`
/// newtype over an integer with associated constants for its cases. No
/// check is made that a produced value matches one of those cases.
pub struct Bridge<T>(PhantomData<fn() -> T>);

impl<T: Pod> Bridge<T> {
    /// Storage size of `T` in bytes.
    pub fn width() -> usize {
        crate::width::width_of::<T>()
    }

    /// Writes `value` into the storage of a zeroed `T`.
    ///
    /// The low bytes of `value` are kept when `T` is narrower; when `T` is
    /// wider the remaining high bytes stay zero, also for negative signed
    /// values. Floats are truncated toward zero first.
    #[inline]
    pub fn to_enum<V: Source>(value: V) -> T {
        try_width::<T>()
            .and_then(|width| Pattern::from_source(value, width).store::<T>())
            .unwrap_or_else(|_| <T as Zeroable>::zeroed())
    }

    /// Lowest byte of `value`, unsigned, whatever the width of `T`.
    #[inline]
    pub fn to_u8(value: T) -> u8 {
        Self::pattern(value).map_or(0, Pattern::to_u8)
    }

    /// Lowest byte of `value`, signed, whatever the width of `T`.
    #[inline]
    pub fn to_i8(value: T) -> i8 {
        Self::pattern(value).map_or(0, Pattern::to_i8)
    }

    /// Zero-extends 1-byte storage, otherwise keeps the low 2 bytes.
    #[inline]
    pub fn to_u16(value: T) -> u16 {
        Self::pattern(value).map_or(0, Pattern::to_u16)
    }

    /// Sign-extends 1-byte storage, otherwise keeps the low 2 bytes.
    #[inline]
    pub fn to_i16(value: T) -> i16 {
        Self::pattern(value).map_or(0, Pattern::to_i16)
    }

    /// Zero-extends 1- and 2-byte storage, otherwise keeps the low 4 bytes.
    #[inline]
    pub fn to_u32(value: T) -> u32 {
        Self::pattern(value).map_or(0, Pattern::to_u32)
    }

    /// Sign-extends 1- and 2-byte storage, otherwise keeps the low 4 bytes.
    #[inline]
    pub fn to_i32(value: T) -> i32 {
        Self::pattern(value).map_or(0, Pattern::to_i32)
    }

    /// Zero-extends the storage of `value` to 64 bits.
    #[inline]
    pub fn to_u64(value: T) -> u64 {
        Self::pattern(value).map_or(0, Pattern::to_u64)
    }

    /// Sign-extends the storage of `value` from its own width to 64 bits.
    #[inline]
    pub fn to_i64(value: T) -> i64 {
        Self::pattern(value).map_or(0, Pattern::to_i64)
    }

    #[inline]
    fn pattern(value: T) -> Option<Pattern> {
        try_width::<T>()
            .and_then(|width: Width| Pattern::load(value, width))
            .ok()
    }
}
