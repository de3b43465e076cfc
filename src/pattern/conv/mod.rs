//! Width-aware conversions between patterns and native numbers
//!
//! Split by native width: each module implements [`Source`] for the
//! signed and unsigned integers of its width and the two readers that
//! produce them.
//!
//! Write rule: the source is reinterpreted as the unsigned integer of its
//! own width and zero-extended, then [`Pattern::from_bits`] keeps the low
//! bytes. A signed source is therefore never sign-extended into a wider
//! pattern.
//!
//! Read rule: the pattern is reinterpreted with the reader's signedness at
//! the pattern's own width, then widened (sign or zero extension) or
//! truncated to the reader's width.
//!
//! [`Pattern::from_bits`]: super::Pattern::from_bits

mod bits16;
mod bits32;
mod bits64;
mod bits8;
mod float;

mod sealed {
    pub trait Sealed {}
}

/// A native number that can be written into an enumeration's storage.
///
/// Implemented for every fixed-width integer up to 64 bits and for `f32`
/// and `f64`.
pub trait Source: sealed::Sealed + Copy {
    /// The value's bit pattern read as the unsigned integer of the
    /// value's own width, zero-extended to 64 bits.
    ///
    /// Floating-point values are first truncated toward zero into `i64`.
    fn bits(self) -> u64;
}
