//! Conversions between patterns and 64-bit integers

use super::{Source, sealed::Sealed};
use crate::pattern::Pattern;

impl Sealed for u64 {}
impl Sealed for i64 {}

impl Source for u64 {
    #[inline]
    fn bits(self) -> u64 {
        self
    }
}

impl Source for i64 {
    #[inline]
    fn bits(self) -> u64 {
        self as u64
    }
}

impl Pattern {
    /// Zero-extends the pattern to 64 bits.
    #[inline]
    pub const fn to_u64(self) -> u64 {
        self.bits()
    }

    /// Sign-extends the pattern from its own width to 64 bits.
    #[inline]
    pub const fn to_i64(self) -> i64 {
        match self {
            Pattern::One(v) => v as i8 as i64,
            Pattern::Two(v) => v as i16 as i64,
            Pattern::Four(v) => v as i32 as i64,
            Pattern::Eight(v) => v as i64,
        }
    }
}
