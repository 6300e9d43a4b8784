//! # raw_store
//!
//! Exclusively-owned, growable typed storage with fallible allocation.
//!
//! Every operation that can grow the underlying buffer goes through the
//! `try_reserve` family, so running out of memory surfaces as a
//! [`StoreError`] the caller can handle instead of an abort.
//!
//! ```rust
//! use raw_store::Container;
//!
//! let mut bytes = Container::<u8>::zeroed(4).expect("allocation failed");
//! bytes[0] = 0xAB;
//! assert_eq!(bytes.as_slice(), &[0xAB, 0, 0, 0]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod container;
pub mod error;
#[doc(hidden)]
pub mod storage;

pub use container::Container;
pub use error::StoreError;
pub use storage::Storage;
