//! Conversions between patterns and 8-bit integers
//!
//! The 8-bit readers always look at the lowest byte of the pattern only,
//! whatever its width.

use super::{Source, sealed::Sealed};
use crate::pattern::Pattern;

impl Sealed for u8 {}
impl Sealed for i8 {}

impl Source for u8 {
    #[inline]
    fn bits(self) -> u64 {
        self as u64
    }
}

/// Reinterpreted as `u8` first: `-1i8` contributes `0xFF`, not
/// `0xFFFF_FFFF_FFFF_FFFF`.
impl Source for i8 {
    #[inline]
    fn bits(self) -> u64 {
        self as u8 as u64
    }
}

impl Pattern {
    /// Lowest byte of the pattern, unsigned.
    #[inline]
    pub const fn to_u8(self) -> u8 {
        match self {
            Pattern::One(v) => v,
            Pattern::Two(v) => v as u8,
            Pattern::Four(v) => v as u8,
            Pattern::Eight(v) => v as u8,
        }
    }

    /// Lowest byte of the pattern, signed.
    #[inline]
    pub const fn to_i8(self) -> i8 {
        self.to_u8() as i8
    }
}
