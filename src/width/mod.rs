//! Representation width resolution
//!
//! An enumeration type's width is the byte size of its underlying storage.
//! Only 1, 2, 4 and 8 byte storages are bridged; anything else is reported
//! as unsupported and the conversion layer degrades to the zero value.
//!
//! Widths are measured once per type and memoized in a process-wide
//! [`WidthRegistry`]. Once a type is registered, each lookup costs one
//! uncontended read lock on the global registry; nothing is written again.
//! With the `inline-width` feature enabled the registry is bypassed and the
//! monomorphised `size_of::<T>()` constant is used directly, with no lock.

mod registry;

pub use registry::WidthRegistry;

use crate::error::{Error, Result};

use std::fmt::{Display, Formatter};

/// Validated storage width of an enumeration type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Width {
    /// 1-byte storage (`u8`, `i8`)
    One,
    /// 2-byte storage (`u16`, `i16`)
    Two,
    /// 4-byte storage (`u32`, `i32`)
    Four,
    /// 8-byte storage (`u64`, `i64`)
    Eight,
}

impl Width {
    /// Number of bytes occupied by a value of this width.
    pub const fn bytes(self) -> usize {
        match self {
            Width::One => 1,
            Width::Two => 2,
            Width::Four => 4,
            Width::Eight => 8,
        }
    }

    /// Number of bits occupied by a value of this width.
    pub const fn bits(self) -> u32 {
        (self.bytes() as u32) * 8
    }
}

/// Classifies a measured storage size.
///
/// Fails with [`Error::UnsupportedWidth`] for every size other than
/// 1, 2, 4 or 8.
impl TryFrom<usize> for Width {
    type Error = Error;

    fn try_from(bytes: usize) -> Result<Self> {
        match bytes {
            1 => Ok(Width::One),
            2 => Ok(Width::Two),
            4 => Ok(Width::Four),
            8 => Ok(Width::Eight),
            other => Err(Error::UnsupportedWidth(other)),
        }
    }
}

impl From<Width> for usize {
    fn from(value: Width) -> Self {
        value.bytes()
    }
}

impl Display for Width {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} bytes", self.bytes())
    }
}

/// Returns the storage size of `T` in bytes.
///
/// The first call for a given `T` measures it and records the result in
/// the global registry; later calls are a read-locked lookup. The returned
/// size is not validated, see [`try_width`].
#[cfg(not(feature = "inline-width"))]
pub fn width_of<T: 'static>() -> usize {
    WidthRegistry::global().resolve::<T>()
}

/// Returns the storage size of `T` in bytes.
#[cfg(feature = "inline-width")]
pub fn width_of<T: 'static>() -> usize {
    std::mem::size_of::<T>()
}

/// Resolves and validates the width of `T`.
pub fn try_width<T: 'static>() -> Result<Width> {
    Width::try_from(width_of::<T>())
}
