//! Caller-supplied key material.

use crate::error::CryptocteonError;
use crate::utils::key_len_from_bits;
use std::fmt;
use zeroize::Zeroizing;

/// Key bytes plus the bit length the caller declared for them.
///
/// The usable key is the first `ceil(bit_len / 8)` bytes.
#[derive(Clone)]
pub struct KeyMaterial {
    bytes: Zeroizing<Vec<u8>>,
    bit_len: usize,
}

impl KeyMaterial {
    /// Key whose bit length is the full byte length of `bytes`.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        let bytes = Zeroizing::new(bytes.into());
        let bit_len = bytes.len() * 8;
        Self { bytes, bit_len }
    }

    #[must_use]
    pub fn with_bit_len(bytes: impl Into<Vec<u8>>, bit_len: usize) -> Self {
        Self {
            bytes: Zeroizing::new(bytes.into()),
            bit_len,
        }
    }

    pub const fn bit_len(&self) -> usize {
        self.bit_len
    }

    pub const fn byte_len(&self) -> usize {
        key_len_from_bits(self.bit_len)
    }

    /// The usable key bytes, checked against a buffer of `limit` bytes.
    ///
    /// # Errors
    ///
    /// [`CryptocteonError::InvalidArgument`] if the declared length exceeds
    /// `limit` or the bytes actually supplied.
    pub fn effective(&self, limit: usize) -> Result<&[u8], CryptocteonError> {
        let len = self.byte_len();
        if len > limit {
            return Err(CryptocteonError::InvalidArgument(format!(
                "key of {len} bytes exceeds the {limit}-byte key buffer"
            )));
        }
        if len > self.bytes.len() {
            return Err(CryptocteonError::InvalidArgument(format!(
                "key declares {} bits but only {} bytes were supplied",
                self.bit_len,
                self.bytes.len()
            )));
        }
        Ok(&self.bytes[..len])
    }
}

impl From<&[u8]> for KeyMaterial {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("bit_len", &self.bit_len)
            .field("bytes", &"<redacted>")
            .finish()
    }
}
