//! Bit-pattern bridge between enumeration values and native numbers
//!
//! Generic code can be written over "any enumeration type" and still need
//! to turn an integer into a case of that type, or a case back into an
//! integer, without knowing how wide the enumeration's storage is. This
//! crate closes that gap by reinterpreting raw storage instead of going
//! through per-type conversion tables.
//!
//! Enumeration types here are open, plain-old-data newtypes:
//!
//! ```
//! use bytemuck::{Pod, Zeroable};
//!
//! #[repr(transparent)]
//! #[derive(Copy, Clone, Debug, PartialEq, Eq, Pod, Zeroable)]
//! struct Opcode(u16);
//!
//! impl Opcode {
//!     const NOP: Self = Self(0);
//!     const JUMP: Self = Self(0x0104);
//! }
//!
//! assert_eq!(enumcast::to_enum::<Opcode, _>(0x0104u32), Opcode::JUMP);
//! assert_eq!(enumcast::to_i64(Opcode::NOP), 0);
//! ```
//!
//! # Module overview
//!
//! - `width`
//!   Resolution of a type's storage width (1, 2, 4 or 8 bytes), measured
//!   once per type and memoized in a process-wide registry.
//!
//! - `pattern`
//!   The raw bit pattern of an enumeration value and the width-aware
//!   truncation, zero-fill and sign/zero-extension rules between patterns
//!   and native numbers.
//!
//! - `bridge`
//!   The total conversion functions, generic over the enumeration type.
//!
//! # Conversion rules
//!
//! - Writing keeps the low bytes of the source when the enumeration is
//!   narrower, and leaves the high bytes zero when it is wider. Signed
//!   sources are not sign-extended: `-1i8` written into 4-byte storage
//!   reads back as `255` through `to_i32`.
//! - Floats are truncated toward zero into `i64` before writing.
//! - Reading reinterprets the stored pattern with the reader's signedness,
//!   then sign- or zero-extends it, or keeps only its low bytes.
//! - Storage of any other width writes and reads as zero.
//!
//! No value produced by this crate is checked against the declared cases
//! of an enumeration.

mod bridge;
mod error;
mod pattern;
mod width;

use bytemuck::Pod;

pub use bridge::Bridge;
pub use error::{Error, Result};
pub use pattern::{Pattern, Source};
pub use width::{Width, WidthRegistry, try_width, width_of};

/// Writes `value` into a zeroed `T`, see [`Bridge::to_enum`].
pub fn to_enum<T: Pod, V: Source>(value: V) -> T {
    Bridge::<T>::to_enum(value)
}

/// Lowest byte of `value`, unsigned.
pub fn to_u8<T: Pod>(value: T) -> u8 {
    Bridge::<T>::to_u8(value)
}

/// Lowest byte of `value`, signed.
pub fn to_i8<T: Pod>(value: T) -> i8 {
    Bridge::<T>::to_i8(value)
}

/// Reads `value` as `u16`, see [`Bridge::to_u16`].
pub fn to_u16<T: Pod>(value: T) -> u16 {
    Bridge::<T>::to_u16(value)
}

/// Reads `value` as `i16`, see [`Bridge::to_i16`].
pub fn to_i16<T: Pod>(value: T) -> i16 {
    Bridge::<T>::to_i16(value)
}

/// Reads `value` as `u32`, see [`Bridge::to_u32`].
pub fn to_u32<T: Pod>(value: T) -> u32 {
    Bridge::<T>::to_u32(value)
}

/// Reads `value` as `i32`, see [`Bridge::to_i32`].
pub fn to_i32<T: Pod>(value: T) -> i32 {
    Bridge::<T>::to_i32(value)
}

/// Reads `value` as `u64`, see [`Bridge::to_u64`].
pub fn to_u64<T: Pod>(value: T) -> u64 {
    Bridge::<T>::to_u64(value)
}

/// Reads `value` as `i64`, see [`Bridge::to_i64`].
pub fn to_i64<T: Pod>(value: T) -> i64 {
    Bridge::<T>::to_i64(value)
}
