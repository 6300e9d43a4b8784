//! The bit-addressable growable buffer.
//!
//! # Examples
//!
//! ```rust
//! use bitset::BitSet;
//!
//! let mut bits = BitSet::zeroed(16).expect("failed to allocate");
//! bits.set(3, true);
//! assert!(bits.get(3));
//!
//! bits.clear_range(0, 8);
//! assert!(!bits.get(3));
//! ```

use crate::BitSetError;
use crate::bit_ops;
use raw_store::Container;

type Result<T> = core::result::Result<T, BitSetError>;

/// Computes the number of bytes needed to store `num_bits` bits.
///
/// # Examples
/// ```
/// use bitset::byte_len;
///
/// assert_eq!(byte_len(0), 0);
/// assert_eq!(byte_len(9), 2);
/// assert_eq!(byte_len(16), 2);
/// assert_eq!(byte_len(17), 3);
/// ```
pub const fn byte_len(num_bits: usize) -> usize {
    num_bits.div_ceil(8)
}

/// A growable buffer of individually addressable bits.
///
/// Bits are packed eight to a byte, LSB-first. The structure tracks a
/// logical `size` (bits in use) against a byte-aligned `capacity`
/// (`byte_count() * 8`); `size <= capacity` always holds.
///
/// Index and range arguments are caller-enforced preconditions: they
/// are checked with `debug_assert!` only, so debug builds fail fast
/// while release builds do no bounds checking of their own beyond what
/// the underlying slice indexing provides.
///
/// Bits at index `>= size` have no defined content unless explicitly
/// cleared or zero-filled on allocation/resize. `Clone` produces a deep
/// copy of the full capacity.
#[derive(Debug, Clone, Default)]
pub struct BitSet {
    data: Container<u8>,
    capacity: usize,
    size: usize,
}

impl BitSet {
    /// Creates an empty buffer with zero capacity and size.
    ///
    /// Never allocates and never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitset::BitSet;
    ///
    /// let bits = BitSet::new();
    /// assert_eq!(bits.len(), 0);
    /// assert_eq!(bits.byte_count(), 0);
    /// ```
    pub const fn new() -> Self {
        Self {
            data: Container::new(),
            capacity: 0,
            size: 0,
        }
    }

    /// Allocates a buffer holding `num_bits` bits, all zero.
    ///
    /// Capacity is rounded up to the next whole byte.
    ///
    /// # Errors
    ///
    /// Returns [`BitSetError::OutOfMemory`] when the allocator cannot
    /// satisfy the request.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitset::BitSet;
    ///
    /// let bits = BitSet::zeroed(12).unwrap();
    /// assert_eq!(bits.len(), 12);
    /// assert_eq!(bits.capacity(), 16);
    /// assert!(!bits.get(11));
    /// ```
    pub fn zeroed(num_bits: usize) -> Result<Self> {
        let bytes = byte_len(num_bits);
        Ok(Self {
            data: Container::zeroed(bytes)?,
            capacity: bytes * 8,
            size: num_bits,
        })
    }

    /// Allocates a buffer holding `num_bits` bits without promising any
    /// particular bit content.
    ///
    /// Unlike [`zeroed`], callers must not rely on the initial state of
    /// any bit; write or clear before reading.
    ///
    /// # Errors
    ///
    /// Returns [`BitSetError::OutOfMemory`] when the allocator cannot
    /// satisfy the request.
    ///
    /// [`zeroed`]: BitSet::zeroed
    pub fn with_size(num_bits: usize) -> Result<Self> {
        Self::zeroed(num_bits)
    }

    /// Logical number of bits in use.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Total bit storage currently allocated; always a multiple of 8.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of bytes stored (`capacity / 8`).
    #[inline]
    pub fn byte_count(&self) -> usize {
        self.capacity / 8
    }

    /// A byte-level view of the buffer.
    ///
    /// The borrow cannot outlive a resize, which may reallocate.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.data.as_slice()
    }

    /// A mutable byte-level view of the buffer.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.data.as_mut_slice()
    }

    /// Returns the state of bit `index`.
    ///
    /// Precondition: `index < len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitset::BitSet;
    ///
    /// let mut bits = BitSet::zeroed(8).unwrap();
    /// bits.set(1, true);
    /// assert!(bits.get(1));
    /// assert!(!bits.get(0));
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        debug_assert!(index < self.size, "bit index {index} out of bounds");
        (self.data.as_slice()[index >> 3] >> (index & 7)) & 1 != 0
    }

    /// Sets bit `index` to `state` without disturbing any other bit of
    /// its byte. Setting a bit to its current value is a no-op.
    ///
    /// Precondition: `index < len()`.
    #[inline]
    pub fn set(&mut self, index: usize, state: bool) {
        debug_assert!(index < self.size, "bit index {index} out of bounds");
        let bit = index & 7;
        let byte = &mut self.data.as_mut_slice()[index >> 3];
        *byte = (*byte & !(1 << bit)) | ((state as u8) << bit);
    }

    /// Zeroes bits `[begin, end)` and returns the number of bits
    /// cleared (`end - begin`). Bits outside the range are untouched.
    ///
    /// Preconditions: `begin <= end` and `end <= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitset::BitSet;
    ///
    /// let mut bits = BitSet::zeroed(16).unwrap();
    /// for i in 0..16 {
    ///     bits.set(i, true);
    /// }
    ///
    /// assert_eq!(bits.clear_range(4, 12), 8);
    /// assert!(bits.get(3));
    /// assert!(!bits.get(4));
    /// assert!(!bits.get(11));
    /// assert!(bits.get(12));
    /// ```
    pub fn clear_range(&mut self, begin: usize, end: usize) -> usize {
        debug_assert!(begin <= end, "range start {begin} past end {end}");
        debug_assert!(end <= self.size, "range end {end} out of bounds");
        bit_ops::clear_bits(self.data.as_mut_slice(), begin, end);
        end - begin
    }

    /// Zeroes `count` bits starting at `index`; returns `count`.
    ///
    /// Convenience equivalent to `clear_range(index, index + count)`.
    pub fn clear_n(&mut self, index: usize, count: usize) -> usize {
        self.clear_range(index, index + count)
    }

    /// Zeroes every bit in `[0, len())` with a single bulk byte clear
    /// over the whole buffer; returns the number of logical bits
    /// cleared.
    pub fn clear_all(&mut self) -> usize {
        self.data.fill_zero();
        self.size
    }

    /// Resizes the buffer to `new_size` bits, reallocating the byte
    /// buffer to exactly `byte_len(new_size)` bytes.
    ///
    /// Returns the signed size delta `old - new`: positive on shrink,
    /// negative on growth, zero when the size is unchanged. Bits
    /// retained from before the resize keep their content; content of
    /// newly exposed bits is unspecified (use [`resize_zeroed`] when
    /// that matters).
    ///
    /// # Errors
    ///
    /// Returns [`BitSetError::OutOfMemory`] when reallocation fails, in
    /// which case the buffer, capacity, and size are all left exactly
    /// as they were.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitset::BitSet;
    ///
    /// let mut bits = BitSet::zeroed(20).unwrap();
    /// assert_eq!(bits.resize(8).unwrap(), 12);
    /// assert_eq!(bits.byte_count(), 1);
    /// assert_eq!(bits.resize(24).unwrap(), -16);
    /// ```
    ///
    /// [`resize_zeroed`]: BitSet::resize_zeroed
    pub fn resize(&mut self, new_size: usize) -> Result<isize> {
        let delta = self.size as isize - new_size as isize;
        let bytes = byte_len(new_size);
        self.data.resize_exact(bytes)?;
        self.capacity = bytes * 8;
        self.size = new_size;
        Ok(delta)
    }

    /// Resizes like [`resize`], then zeroes exactly the newly exposed
    /// bit range `[old_size, new_size)` when growing.
    ///
    /// # Errors
    ///
    /// Returns [`BitSetError::OutOfMemory`] when reallocation fails,
    /// leaving the buffer untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitset::BitSet;
    ///
    /// let mut bits = BitSet::zeroed(4).unwrap();
    /// bits.resize_zeroed(12).unwrap();
    /// assert!((4..12).all(|i| !bits.get(i)));
    /// ```
    ///
    /// [`resize`]: BitSet::resize
    pub fn resize_zeroed(&mut self, new_size: usize) -> Result<isize> {
        let old_size = self.size;
        let delta = self.resize(new_size)?;
        if new_size > old_size {
            self.clear_range(old_size, new_size);
        }
        Ok(delta)
    }

    /// Copies the low `count` bits of `src` into the buffer starting at
    /// bit `index`, preserving all other bits in partially-touched
    /// boundary bytes. Returns `count`.
    ///
    /// Preconditions: `index + count <= len()` and
    /// `src.len() * 8 >= count`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitset::BitSet;
    ///
    /// let mut bits = BitSet::zeroed(24).unwrap();
    /// bits.write_bits(5, &[0x66, 0x0B], 12);
    /// assert!(bits.get(6));
    /// assert!(!bits.get(5));
    /// ```
    pub fn write_bits(&mut self, index: usize, src: &[u8], count: usize) -> usize {
        debug_assert!(index + count <= self.size, "bit range out of bounds");
        debug_assert!(src.len() * 8 >= count, "source too short for {count} bits");
        bit_ops::copy_bits_in(self.data.as_mut_slice(), index, src, count);
        count
    }

    /// Copies `count` bits starting at bit `index` into the low bits of
    /// `dst`, OR-merging into whatever `dst` already holds. Returns
    /// `count`.
    ///
    /// Bits of the final partial destination byte beyond `count` are
    /// left as provided by the caller, so pre-zero `dst` to get exactly
    /// the read bits.
    ///
    /// Preconditions: `index + count <= len()` and
    /// `dst.len() * 8 >= count`.
    pub fn read_bits(&self, index: usize, dst: &mut [u8], count: usize) -> usize {
        debug_assert!(index + count <= self.size, "bit range out of bounds");
        debug_assert!(dst.len() * 8 >= count, "destination too short for {count} bits");
        bit_ops::copy_bits_out(self.data.as_slice(), index, dst, count);
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer() {
        let bits = BitSet::new();
        assert_eq!(bits.len(), 0);
        assert_eq!(bits.capacity(), 0);
        assert_eq!(bits.byte_count(), 0);
        assert!(bits.is_empty());
    }

    #[test]
    fn capacity_is_byte_aligned() -> Result<()> {
        for n in [1, 7, 8, 9, 16, 17, 100] {
            let bits = BitSet::zeroed(n)?;
            assert_eq!(bits.len(), n);
            assert_eq!(bits.capacity() % 8, 0);
            assert_eq!(bits.byte_count(), n.div_ceil(8));
        }
        Ok(())
    }

    #[test]
    fn set_get_idempotent() -> Result<()> {
        let mut bits = BitSet::zeroed(16)?;

        bits.set(3, true);
        bits.set(3, true);
        assert!(bits.get(3));
        assert!(!bits.get(2));
        assert!(!bits.get(4));
        assert_eq!(bits.as_bytes(), &[0b0000_1000, 0]);

        bits.set(3, false);
        bits.set(3, false);
        assert!(!bits.get(3));
        assert_eq!(bits.as_bytes(), &[0, 0]);

        Ok(())
    }

    #[test]
    fn write_read_scenario() -> Result<()> {
        // 12-bit pattern 0b101101100110, LSB-first: bytes [0x66, 0x0B].
        let mut bits = BitSet::zeroed(24)?;
        bits.set(3, true);

        assert_eq!(bits.write_bits(5, &[0x66, 0x0B], 12), 12);

        let mut out = [0u8; 2];
        assert_eq!(bits.read_bits(5, &mut out, 12), 12);
        assert_eq!(out, [0x66, 0x0B]);

        // Bits [0, 5) and [17, 24) are unaffected.
        assert!(bits.get(3));
        for i in [0, 1, 2, 4] {
            assert!(!bits.get(i), "bit {i} disturbed");
        }
        for i in 17..24 {
            assert!(!bits.get(i), "bit {i} disturbed");
        }

        assert_eq!(bits.clear_range(4, 12), 8);
        assert!(bits.get(3));
        for i in 4..12 {
            assert!(!bits.get(i), "bit {i} not cleared");
        }
        // Pattern bits at 13, 14 and 16 survive the clear.
        assert!(bits.get(13));
        assert!(bits.get(14));
        assert!(bits.get(16));

        Ok(())
    }

    #[test]
    fn write_read_every_alignment() -> Result<()> {
        let pattern = [0xA5u8, 0x3C, 0x7E];
        for shift in 0..8 {
            for count in [1usize, 7, 8, 9, 15, 16, 17] {
                let mut bits = BitSet::zeroed(40)?;
                bits.write_bits(shift, &pattern, count);

                let mut out = [0u8; 3];
                bits.read_bits(shift, &mut out, count);

                for k in 0..count {
                    let expected = (pattern[k / 8] >> (k % 8)) & 1 != 0;
                    assert_eq!(
                        (out[k / 8] >> (k % 8)) & 1 != 0,
                        expected,
                        "bit {k} wrong at shift {shift}, count {count}"
                    );
                }
            }
        }
        Ok(())
    }

    #[test]
    fn clear_n_and_clear_all() -> Result<()> {
        let mut bits = BitSet::zeroed(20)?;
        for i in 0..20 {
            bits.set(i, true);
        }

        assert_eq!(bits.clear_n(6, 5), 5);
        for i in 0..20 {
            assert_eq!(bits.get(i), !(6..11).contains(&i), "bit {i}");
        }

        assert_eq!(bits.clear_all(), 20);
        assert!((0..20).all(|i| !bits.get(i)));
        assert_eq!(bits.as_bytes(), &[0, 0, 0]);

        Ok(())
    }

    #[test]
    fn resize_deltas() -> Result<()> {
        let mut bits = BitSet::zeroed(20)?;

        assert_eq!(bits.resize(8)?, 12);
        assert_eq!(bits.len(), 8);
        assert_eq!(bits.byte_count(), 1);

        assert_eq!(bits.resize(32)?, -24);
        assert_eq!(bits.len(), 32);
        assert_eq!(bits.byte_count(), 4);

        assert_eq!(bits.resize(32)?, 0);

        assert_eq!(bits.resize(0)?, 32);
        assert_eq!(bits.byte_count(), 0);
        assert_eq!(bits.capacity(), 0);

        Ok(())
    }

    #[test]
    fn resize_preserves_retained_bits() -> Result<()> {
        let mut bits = BitSet::zeroed(16)?;
        bits.set(2, true);
        bits.set(9, true);

        bits.resize(24)?;
        assert!(bits.get(2));
        assert!(bits.get(9));

        bits.resize(8)?;
        assert!(bits.get(2));

        Ok(())
    }

    #[test]
    fn resize_zeroed_clears_stale_bits() -> Result<()> {
        let mut bits = BitSet::zeroed(8)?;
        for i in 0..8 {
            bits.set(i, true);
        }

        // Shrink to 3 bits; bits 3..8 of the retained byte go stale.
        bits.resize(3)?;

        // A zeroing grow must expose only zero bits in [3, 10).
        bits.resize_zeroed(10)?;
        for i in 0..3 {
            assert!(bits.get(i), "retained bit {i}");
        }
        for i in 3..10 {
            assert!(!bits.get(i), "stale bit {i} leaked");
        }

        Ok(())
    }

    #[test]
    fn clone_is_deep() -> Result<()> {
        let mut bits = BitSet::zeroed(12)?;
        bits.set(5, true);

        let copy = bits.clone();
        bits.set(5, false);
        bits.set(7, true);

        assert!(copy.get(5));
        assert!(!copy.get(7));
        assert_eq!(copy.len(), 12);

        Ok(())
    }
}
