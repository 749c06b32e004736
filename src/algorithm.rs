//! # Algorithm Identifiers
//!
//! The closed set of algorithms a session can name, split into the two roles a
//! descriptor can play: cipher or mac.
//!
//! The NULL algorithms are recognised so they count towards the "one cipher, one
//! mac" limit, but no primitive exists for them and session creation rejects them.

use crate::consts::{
    AES_IV_LEN, CRYPTO_3DES_CBC, CRYPTO_AES_CBC, CRYPTO_DES_CBC, CRYPTO_MD5_HMAC,
    CRYPTO_NULL_CBC, CRYPTO_NULL_HMAC, CRYPTO_SHA1_HMAC, DES_IV_LEN, MD5_DIGEST_LEN,
    SHA1_DIGEST_LEN,
};
use crate::error::CryptocteonError;
use std::fmt;

/// An algorithm named by a creation or request descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    NullCbc,
    DesCbc,
    TripleDesCbc,
    AesCbc,
    NullHmac,
    Md5Hmac,
    Sha1Hmac,
}

/// Cipher algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherKind {
    Null,
    Des,
    TripleDes,
    Aes,
}

/// HMAC algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacKind {
    Null,
    Md5,
    Sha1,
}

/// The role an [`AlgorithmId`] plays in a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmClass {
    Cipher(CipherKind),
    Mac(MacKind),
}

impl AlgorithmId {
    pub const fn class(self) -> AlgorithmClass {
        match self {
            Self::NullCbc => AlgorithmClass::Cipher(CipherKind::Null),
            Self::DesCbc => AlgorithmClass::Cipher(CipherKind::Des),
            Self::TripleDesCbc => AlgorithmClass::Cipher(CipherKind::TripleDes),
            Self::AesCbc => AlgorithmClass::Cipher(CipherKind::Aes),
            Self::NullHmac => AlgorithmClass::Mac(MacKind::Null),
            Self::Md5Hmac => AlgorithmClass::Mac(MacKind::Md5),
            Self::Sha1Hmac => AlgorithmClass::Mac(MacKind::Sha1),
        }
    }

    /// The host framework's numeric identifier.
    pub const fn number(self) -> u32 {
        match self {
            Self::NullCbc => CRYPTO_NULL_CBC,
            Self::DesCbc => CRYPTO_DES_CBC,
            Self::TripleDesCbc => CRYPTO_3DES_CBC,
            Self::AesCbc => CRYPTO_AES_CBC,
            Self::NullHmac => CRYPTO_NULL_HMAC,
            Self::Md5Hmac => CRYPTO_MD5_HMAC,
            Self::Sha1Hmac => CRYPTO_SHA1_HMAC,
        }
    }
}

impl TryFrom<u32> for AlgorithmId {
    type Error = CryptocteonError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            CRYPTO_NULL_CBC => Ok(Self::NullCbc),
            CRYPTO_DES_CBC => Ok(Self::DesCbc),
            CRYPTO_3DES_CBC => Ok(Self::TripleDesCbc),
            CRYPTO_AES_CBC => Ok(Self::AesCbc),
            CRYPTO_NULL_HMAC => Ok(Self::NullHmac),
            CRYPTO_MD5_HMAC => Ok(Self::Md5Hmac),
            CRYPTO_SHA1_HMAC => Ok(Self::Sha1Hmac),
            other => Err(CryptocteonError::InvalidArgument(format!(
                "unsupported algorithm number {other}"
            ))),
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NullCbc => "NULL-CBC",
            Self::DesCbc => "DES-CBC",
            Self::TripleDesCbc => "3DES-CBC",
            Self::AesCbc => "AES-CBC",
            Self::NullHmac => "NULL-HMAC",
            Self::Md5Hmac => "MD5-HMAC",
            Self::Sha1Hmac => "SHA1-HMAC",
        };
        f.write_str(name)
    }
}

impl CipherKind {
    pub const fn id(self) -> AlgorithmId {
        match self {
            Self::Null => AlgorithmId::NullCbc,
            Self::Des => AlgorithmId::DesCbc,
            Self::TripleDes => AlgorithmId::TripleDesCbc,
            Self::Aes => AlgorithmId::AesCbc,
        }
    }

    /// IV bytes consumed per request. Equal to the cipher block size.
    pub const fn iv_size(self) -> usize {
        match self {
            Self::Null => 0,
            Self::Des | Self::TripleDes => DES_IV_LEN,
            Self::Aes => AES_IV_LEN,
        }
    }

    pub const fn block_size(self) -> usize {
        self.iv_size()
    }
}

impl MacKind {
    pub const fn id(self) -> AlgorithmId {
        match self {
            Self::Null => AlgorithmId::NullHmac,
            Self::Md5 => AlgorithmId::Md5Hmac,
            Self::Sha1 => AlgorithmId::Sha1Hmac,
        }
    }

    /// Untruncated digest length. Bounds the ICV length a session may ask for.
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Null => 0,
            Self::Md5 => MD5_DIGEST_LEN,
            Self::Sha1 => SHA1_DIGEST_LEN,
        }
    }
}
