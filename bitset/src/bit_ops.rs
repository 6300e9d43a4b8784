//! Slice-level bit manipulation primitives.
//!
//! All operations index bits LSB-first: bit `i` of the slice lives in
//! byte `i / 8` at position `i % 8` from the least significant bit.
//! Masks are built with explicit unsigned arithmetic only; no
//! sign-propagating shifts.

/// A mask of the `width` lowest bits of a byte. Saturates at 8.
pub(crate) const fn low_mask(width: usize) -> u8 {
    if width >= 8 {
        !0
    } else {
        (1u8 << width).wrapping_sub(1)
    }
}

/// A mask of `width` bits starting at `start`, truncated at the byte
/// boundary. `start` must be in `0..8`.
pub(crate) const fn window_mask(start: usize, width: usize) -> u8 {
    low_mask(width) << start
}

/// Zeroes bits `[begin, end)` of `buf`, leaving every other bit intact.
///
/// Interior whole bytes are cleared in bulk; the boundary bytes get a
/// masked edit. A byte-aligned `end` never touches `buf[end / 8]`, so
/// `end == buf.len() * 8` stays in bounds.
pub(crate) fn clear_bits(buf: &mut [u8], begin: usize, end: usize) {
    if begin == end {
        return;
    }

    let first = begin >> 3;
    let last = end >> 3;
    let begin_bit = begin & 7;
    let end_bit = end & 7;

    if first == last {
        buf[first] &= !window_mask(begin_bit, end - begin);
        return;
    }

    let full_start = first + (begin_bit != 0) as usize;
    buf[full_start..last].fill(0);

    if begin_bit != 0 {
        buf[first] &= low_mask(begin_bit);
    }
    if end_bit != 0 {
        buf[last] &= !low_mask(end_bit);
    }
}

/// Copies the low `count` bits of `src` into `dst` starting at bit
/// `index`, preserving all other bits in partially-touched bytes.
///
/// Each source byte is split across at most two destination bytes with
/// `shift = index % 8` as the crossover point; the final partial byte
/// uses a mask truncated to the remaining bit count.
pub(crate) fn copy_bits_in(dst: &mut [u8], index: usize, src: &[u8], count: usize) {
    let shift = index & 7;
    let mut pos = index >> 3;
    let mut remaining = count;
    let mut i = 0;

    // Bits below the write cursor in the first touched byte.
    let keep = low_mask(shift);

    while remaining >= 8 {
        let s = src[i];
        dst[pos] = (dst[pos] & keep) | (s << shift);
        if shift != 0 {
            dst[pos + 1] = (dst[pos + 1] & !keep) | (s >> (8 - shift));
        }
        pos += 1;
        i += 1;
        remaining -= 8;
    }

    if remaining > 0 {
        let s = src[i];
        let window = window_mask(shift, remaining);
        dst[pos] = (dst[pos] & !window) | ((s << shift) & window);

        let end = shift + remaining;
        if end > 8 {
            let spill = low_mask(end - 8);
            dst[pos + 1] = (dst[pos + 1] & !spill) | ((s >> (8 - shift)) & spill);
        }
    }
}

/// Copies `count` bits of `src` starting at bit `index` into the low
/// bits of `dst`, OR-merging into whatever `dst` already holds.
///
/// Callers that need exactly the read bits pre-zero `dst`; bits of the
/// final partial destination byte beyond `count` are left as provided.
pub(crate) fn copy_bits_out(src: &[u8], index: usize, dst: &mut [u8], count: usize) {
    let shift = index & 7;
    let mut pos = index >> 3;
    let mut remaining = count;
    let mut i = 0;

    while remaining >= 8 {
        dst[i] |= src[pos] >> shift;
        if shift != 0 {
            dst[i] |= src[pos + 1] << (8 - shift);
        }
        pos += 1;
        i += 1;
        remaining -= 8;
    }

    if remaining > 0 {
        let window = window_mask(shift, remaining);
        dst[i] |= (src[pos] & window) >> shift;

        let end = shift + remaining;
        if end > 8 {
            let spill = low_mask(end - 8);
            dst[i] |= (src[pos + 1] & spill) << (8 - shift);
        }
    }
}
