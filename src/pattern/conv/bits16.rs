//! Conversions between patterns and 16-bit integers

use super::{Source, sealed::Sealed};
use crate::pattern::Pattern;

impl Sealed for u16 {}
impl Sealed for i16 {}

impl Source for u16 {
    #[inline]
    fn bits(self) -> u64 {
        self as u64
    }
}

impl Source for i16 {
    #[inline]
    fn bits(self) -> u64 {
        self as u16 as u64
    }
}

impl Pattern {
    /// Zero-extends a 1-byte pattern, otherwise keeps the low 2 bytes.
    #[inline]
    pub const fn to_u16(self) -> u16 {
        match self {
            Pattern::One(v) => v as u16,
            Pattern::Two(v) => v,
            Pattern::Four(v) => v as u16,
            Pattern::Eight(v) => v as u16,
        }
    }

    /// Sign-extends a 1-byte pattern, otherwise keeps the low 2 bytes.
    #[inline]
    pub const fn to_i16(self) -> i16 {
        match self {
            Pattern::One(v) => v as i8 as i16,
            Pattern::Two(v) => v as i16,
            Pattern::Four(v) => v as i16,
            Pattern::Eight(v) => v as i16,
        }
    }
}
