//! Conversions between patterns and 32-bit integers

use super::{Source, sealed::Sealed};
use crate::pattern::Pattern;

impl Sealed for u32 {}
impl Sealed for i32 {}

impl Source for u32 {
    #[inline]
    fn bits(self) -> u64 {
        self as u64
    }
}

impl Source for i32 {
    #[inline]
    fn bits(self) -> u64 {
        self as u32 as u64
    }
}

impl Pattern {
    /// Zero-extends 1- and 2-byte patterns, keeps the low 4 bytes of an
    /// 8-byte pattern.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        match self {
            Pattern::One(v) => v as u32,
            Pattern::Two(v) => v as u32,
            Pattern::Four(v) => v,
            Pattern::Eight(v) => v as u32,
        }
    }

    /// Sign-extends 1- and 2-byte patterns, keeps the low 4 bytes of an
    /// 8-byte pattern.
    #[inline]
    pub const fn to_i32(self) -> i32 {
        match self {
            Pattern::One(v) => v as i8 as i32,
            Pattern::Two(v) => v as i16 as i32,
            Pattern::Four(v) => v as i32,
            Pattern::Eight(v) => v as i32,
        }
    }
}
