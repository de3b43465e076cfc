use bytemuck::PodCastError;
use thiserror::Error;

/// Error definition for the fallible internals of this crate.
///
/// The public conversion functions never return these; they fall back to
/// the all-zero value instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Returned when a type's storage is not 1, 2, 4 or 8 bytes wide
    #[error("unsupported representation width: {0} bytes")]
    UnsupportedWidth(usize),
    /// Returned when `bytemuck` refuses to reinterpret a bit pattern
    #[error("bit pattern cast failed: {0:?}")]
    Cast(PodCastError),
}

impl From<PodCastError> for Error {
    fn from(value: PodCastError) -> Self {
        Error::Cast(value)
    }
}

/// Alias for Result<T, enumcast::Error>
pub type Result<T> = std::result::Result<T, Error>;
