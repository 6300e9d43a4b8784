use raw_store::StoreError;

#[cfg(feature = "std")]
use thiserror::Error;

/// Errors reported by fallible [`BitSet`](crate::BitSet) operations.
///
/// The only recoverable failure is allocation: index and range
/// arguments are caller-enforced preconditions and are never checked
/// in release builds.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug)]
pub enum BitSetError {
    /// The allocator could not satisfy an allocation or resize request.
    /// The buffer is left untouched.
    #[cfg_attr(feature = "std", error("out of memory: {0}"))]
    OutOfMemory(StoreError),
}

impl From<StoreError> for BitSetError {
    fn from(err: StoreError) -> Self {
        BitSetError::OutOfMemory(err)
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitSetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitSetError::OutOfMemory(e) => write!(f, "out of memory: {}", e),
        }
    }
}
