//! Floating-point sources
//!
//! Floats are truncated toward zero into `i64` and then follow the 64-bit
//! signed rule. `as` saturates: NaN becomes 0, infinities and
//! out-of-range values clamp to `i64::MIN` / `i64::MAX`.

use super::{Source, sealed::Sealed};

impl Sealed for f32 {}
impl Sealed for f64 {}

impl Source for f32 {
    #[inline]
    fn bits(self) -> u64 {
        (self as i64).bits()
    }
}

impl Source for f64 {
    #[inline]
    fn bits(self) -> u64 {
        (self as i64).bits()
    }
}
