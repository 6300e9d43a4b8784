#[cfg(feature = "std")]
use std::collections::TryReserveError;

#[cfg(not(feature = "std"))]
use alloc::collections::TryReserveError;

#[cfg(feature = "std")]
use thiserror::Error;

/// Storage errors.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug)]
pub enum StoreError {
    /// The allocator could not satisfy a grow request.
    #[cfg_attr(feature = "std", error("allocation failure: {0}"))]
    Alloc(TryReserveError),

    /// Out-of-bounds access.
    #[cfg_attr(feature = "std", error("index {0} out of bounds"))]
    OutOfBounds(usize),
}

impl From<TryReserveError> for StoreError {
    fn from(err: TryReserveError) -> Self {
        StoreError::Alloc(err)
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for StoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StoreError::Alloc(e) => write!(f, "allocation failure: {}", e),
            StoreError::OutOfBounds(i) => write!(f, "index {} out of bounds", i),
        }
    }
}
