//! Utility functions used across the library.

use crate::error::CryptocteonError;

/// XORs `mask` into `block` in place.
///
/// Used by the CBC chaining in [`crate::crypto::cbc`]. Both slices are one cipher
/// block long; only the common prefix is touched otherwise.
#[inline(always)]
pub fn xor_in_place(block: &mut [u8], mask: &[u8]) {
    for (b, m) in block.iter_mut().zip(mask) {
        *b ^= m;
    }
}

/// Number of bytes needed to hold `bits` bits (`ceil(bits / 8)`).
#[inline(always)]
pub const fn key_len_from_bits(bits: usize) -> usize {
    bits.div_ceil(8)
}

/// Checks that `[offset, offset + len)` lies inside a buffer of `total` bytes.
///
/// Returns the exclusive end of the range.
#[inline]
pub fn check_range(offset: usize, len: usize, total: usize) -> Result<usize, CryptocteonError> {
    match offset.checked_add(len) {
        Some(end) if end <= total => Ok(end),
        _ => Err(CryptocteonError::InvalidArgument(format!(
            "range {offset}+{len} exceeds buffer of {total} bytes"
        ))),
    }
}
