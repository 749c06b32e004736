// src/primitives/mod.rs

//! Bound primitives.
//!
//! A session binds exactly one [`BoundPrimitive`] at creation time, chosen from
//! the compatibility matrix by its (cipher, mac) pair:
//!
//! | cipher \ mac   | none          | MD5-HMAC     | SHA1-HMAC     |
//! |----------------|---------------|--------------|---------------|
//! | none           | invalid       | `Md5Hmac`    | `Sha1Hmac`    |
//! | DES / 3DES-CBC | `DesCbc`      | `DesCbcMd5`  | `DesCbcSha1`  |
//! | AES-CBC        | `AesCbc`      | `AesCbcMd5`  | `AesCbcSha1`  |
//!
//! Any pairing that involves NULL-CBC or NULL-HMAC is invalid.

mod ops;
pub mod params;

pub use params::{AuthLayout, CipherParams, PrimitiveInput, Region};

use crate::algorithm::{CipherKind, MacKind};
use crate::buffer::ByteRegion;
use crate::error::CryptocteonError;

/// One case per supported (cipher, mac) pairing.
///
/// DES and 3DES share the DES family; the session's cipher kind picks the
/// key schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundPrimitive {
    DesCbc,
    DesCbcMd5,
    DesCbcSha1,
    AesCbc,
    AesCbcMd5,
    AesCbcSha1,
    Md5Hmac,
    Sha1Hmac,
}

impl BoundPrimitive {
    /// Look up the primitive for a (cipher, mac) pair.
    ///
    /// # Errors
    ///
    /// [`CryptocteonError::InvalidArgument`] for pairs outside the matrix.
    pub fn select(
        cipher: Option<CipherKind>,
        mac: Option<MacKind>,
    ) -> Result<Self, CryptocteonError> {
        use CipherKind as C;
        use MacKind as M;

        match (cipher, mac) {
            (Some(C::Des | C::TripleDes), None) => Ok(Self::DesCbc),
            (Some(C::Des | C::TripleDes), Some(M::Md5)) => Ok(Self::DesCbcMd5),
            (Some(C::Des | C::TripleDes), Some(M::Sha1)) => Ok(Self::DesCbcSha1),
            (Some(C::Aes), None) => Ok(Self::AesCbc),
            (Some(C::Aes), Some(M::Md5)) => Ok(Self::AesCbcMd5),
            (Some(C::Aes), Some(M::Sha1)) => Ok(Self::AesCbcSha1),
            (None, Some(M::Md5)) => Ok(Self::Md5Hmac),
            (None, Some(M::Sha1)) => Ok(Self::Sha1Hmac),
            (None, None) => Err("session needs a cipher or a mac".into()),
            (Some(C::Null), _) | (_, Some(M::Null)) => Err(CryptocteonError::InvalidArgument(
                format!(
                    "no primitive for {} with {}",
                    cipher.map_or("no cipher".to_string(), |c| c.id().to_string()),
                    mac.map_or("no mac".to_string(), |m| m.id().to_string()),
                ),
            )),
        }
    }

    pub const fn mac_kind(self) -> Option<MacKind> {
        match self {
            Self::DesCbcMd5 | Self::AesCbcMd5 | Self::Md5Hmac => Some(MacKind::Md5),
            Self::DesCbcSha1 | Self::AesCbcSha1 | Self::Sha1Hmac => Some(MacKind::Sha1),
            Self::DesCbc | Self::AesCbc => None,
        }
    }

    /// Encrypt direction: CBC-encrypt then write the ICV, as applicable.
    pub fn encrypt(
        self,
        input: &PrimitiveInput<'_>,
        buf: &mut dyn ByteRegion,
    ) -> Result<(), CryptocteonError> {
        match self {
            Self::DesCbc | Self::AesCbc => ops::cipher_encrypt(input.cipher()?, buf),
            Self::DesCbcMd5 | Self::DesCbcSha1 | Self::AesCbcMd5 | Self::AesCbcSha1 => {
                let (layout, state) = input.auth()?;
                ops::encrypt_then_mac(input.cipher()?, layout, state, buf)
            }
            Self::Md5Hmac | Self::Sha1Hmac => {
                let (layout, state) = input.auth()?;
                ops::write_icv(layout, state, buf)
            }
        }
    }

    /// Decrypt direction: verify the ICV then CBC-decrypt, as applicable.
    pub fn decrypt(
        self,
        input: &PrimitiveInput<'_>,
        buf: &mut dyn ByteRegion,
    ) -> Result<(), CryptocteonError> {
        match self {
            Self::DesCbc | Self::AesCbc => ops::cipher_decrypt(input.cipher()?, buf),
            Self::DesCbcMd5 | Self::DesCbcSha1 | Self::AesCbcMd5 | Self::AesCbcSha1 => {
                let (layout, state) = input.auth()?;
                ops::verify_then_decrypt(input.cipher()?, layout, state, buf)
            }
            Self::Md5Hmac | Self::Sha1Hmac => {
                let (layout, state) = input.auth()?;
                ops::verify_icv(layout, state, buf)
            }
        }
    }
}
