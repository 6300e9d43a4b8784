//! # bitset
//!
//! A bit-addressable growable buffer.
//!
//! Bits are packed eight to a byte, LSB-first: bit `i` lives in byte
//! `i / 8`, at position `i % 8` counting from the least significant bit.
//! The buffer supports single-bit access, arbitrary-offset multi-bit
//! read/write, range clearing, and dynamic resizing with optional
//! zero-fill.
//!
//! ```rust
//! use bitset::BitSet;
//!
//! let mut bits = BitSet::zeroed(16).expect("failed to allocate");
//! bits.set(3, true);
//!
//! assert!(bits.get(3));
//! assert!(!bits.get(0));
//!
//! // Write a 12-bit pattern starting at bit 5, then read it back.
//! bits.resize_zeroed(24).unwrap();
//! bits.write_bits(5, &[0x66, 0x0B], 12);
//!
//! let mut out = [0u8; 2];
//! bits.read_bits(5, &mut out, 12);
//! assert_eq!(out, [0x66, 0x0B]);
//! ```
//!
//! There is no internal synchronization. Sharing a [`BitSet`] across
//! threads requires external mutual exclusion.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub use error::BitSetError;

mod bit_ops;

pub mod set;
pub use set::{BitSet, byte_len};
