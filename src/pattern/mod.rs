//! Raw bit patterns of enumeration values
//!
//! A [`Pattern`] is the storage of an enumeration value read as the
//! unsigned integer of exactly the same width. Working on the integer
//! rather than on raw bytes keeps "low bytes" meaning the numerically
//! least significant bytes on every target.
//!
//! Patterns are built from source values through [`Source`] and moved in
//! and out of `bytemuck::Pod` types with [`Pattern::load`] and
//! [`Pattern::store`]. The per-width read rules live in `conv`, split by
//! destination width.

mod conv;

pub use conv::Source;

use crate::error::Result;
use crate::width::Width;

use bytemuck::Pod;

/// Bit pattern of an enumeration value, one variant per supported width.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    One(u8),
    Two(u16),
    Four(u32),
    Eight(u64),
}

impl Pattern {
    /// Keeps the low `width` bytes of `bits`.
    ///
    /// Sources narrower than `width` arrive zero-extended, so their high
    /// bytes stay zero.
    #[inline]
    pub const fn from_bits(bits: u64, width: Width) -> Self {
        match width {
            Width::One => Pattern::One(bits as u8),
            Width::Two => Pattern::Two(bits as u16),
            Width::Four => Pattern::Four(bits as u32),
            Width::Eight => Pattern::Eight(bits),
        }
    }

    /// Builds the pattern a source value leaves in storage of `width`.
    #[inline]
    pub fn from_source<V: Source>(value: V, width: Width) -> Self {
        Self::from_bits(value.bits(), width)
    }

    /// The pattern zero-extended to 64 bits.
    #[inline]
    pub const fn bits(self) -> u64 {
        match self {
            Pattern::One(v) => v as u64,
            Pattern::Two(v) => v as u64,
            Pattern::Four(v) => v as u64,
            Pattern::Eight(v) => v,
        }
    }

    /// Reads the storage of `value` as a pattern of `width`.
    ///
    /// Fails when `T` is not exactly `width` bytes wide.
    pub fn load<T: Pod>(value: T, width: Width) -> Result<Self> {
        Ok(match width {
            Width::One => Pattern::One(bytemuck::try_cast(value)?),
            Width::Two => Pattern::Two(bytemuck::try_cast(value)?),
            Width::Four => Pattern::Four(bytemuck::try_cast(value)?),
            Width::Eight => Pattern::Eight(bytemuck::try_cast(value)?),
        })
    }

    /// Writes the pattern into a fresh `T`.
    ///
    /// Fails when `T` is not exactly as wide as the pattern.
    pub fn store<T: Pod>(self) -> Result<T> {
        Ok(match self {
            Pattern::One(v) => bytemuck::try_cast(v)?,
            Pattern::Two(v) => bytemuck::try_cast(v)?,
            Pattern::Four(v) => bytemuck::try_cast(v)?,
            Pattern::Eight(v) => bytemuck::try_cast(v)?,
        })
    }
}
