//! src/crypto/cbc.rs
//! CBC-mode block engines, in place, no padding

use crate::algorithm::CipherKind;
use crate::consts::{DES_KEY_LEN, TRIPLE_DES_KEY_LEN};
use crate::error::CryptocteonError;
use crate::utils::xor_in_place;
use aes::cipher::{Block, BlockDecrypt, BlockEncrypt, BlockSizeUser, KeyInit};
use aes::{Aes128, Aes192, Aes256};
use des::{Des, TdesEde3};
use std::fmt;
use zeroize::Zeroizing;

/// A keyed block cipher ready for CBC processing.
///
/// DES and 3DES share one family. Which one is used is fixed by the session's
/// cipher kind, and the key must have exactly that kind's length.
pub enum CbcEngine {
    Des(Des),
    TripleDes(TdesEde3),
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl CbcEngine {
    /// Key a block engine for `kind`.
    ///
    /// # Errors
    ///
    /// [`CryptocteonError::InvalidArgument`] if `kind` is NULL or the key length
    /// does not fit the cipher (DES 8, 3DES 24, AES 16/24/32 bytes).
    pub fn new(kind: CipherKind, key: &[u8]) -> Result<Self, CryptocteonError> {
        let engine = match (kind, key.len()) {
            (CipherKind::Des, DES_KEY_LEN) => Des::new_from_slice(key).map(Self::Des),
            (CipherKind::TripleDes, TRIPLE_DES_KEY_LEN) => {
                TdesEde3::new_from_slice(key).map(Self::TripleDes)
            }
            (CipherKind::Aes, 16) => Aes128::new_from_slice(key).map(Self::Aes128),
            (CipherKind::Aes, 24) => Aes192::new_from_slice(key).map(Self::Aes192),
            (CipherKind::Aes, 32) => Aes256::new_from_slice(key).map(Self::Aes256),
            (kind, len) => {
                return Err(CryptocteonError::InvalidArgument(format!(
                    "{} cannot use a {len}-byte key",
                    kind.id()
                )))
            }
        };
        engine.map_err(|e| CryptocteonError::InvalidArgument(format!("cipher key rejected: {e}")))
    }

    /// Check that a key of `len` bytes would be accepted for `kind`, without keying.
    pub fn accepts_key_len(kind: CipherKind, len: usize) -> bool {
        matches!(
            (kind, len),
            (CipherKind::Des, DES_KEY_LEN)
                | (CipherKind::TripleDes, TRIPLE_DES_KEY_LEN)
                | (CipherKind::Aes, 16 | 24 | 32)
        )
    }

    pub fn block_size(&self) -> usize {
        match self {
            Self::Des(_) => Des::block_size(),
            Self::TripleDes(_) => TdesEde3::block_size(),
            Self::Aes128(_) => Aes128::block_size(),
            Self::Aes192(_) => Aes192::block_size(),
            Self::Aes256(_) => Aes256::block_size(),
        }
    }

    /// CBC-encrypt `data` in place, chaining from `iv`.
    pub fn encrypt(&self, iv: &[u8], data: &mut [u8]) -> Result<(), CryptocteonError> {
        self.check_shape(iv, data)?;
        match self {
            Self::Des(c) => cbc_encrypt(c, iv, data),
            Self::TripleDes(c) => cbc_encrypt(c, iv, data),
            Self::Aes128(c) => cbc_encrypt(c, iv, data),
            Self::Aes192(c) => cbc_encrypt(c, iv, data),
            Self::Aes256(c) => cbc_encrypt(c, iv, data),
        }
        Ok(())
    }

    /// CBC-decrypt `data` in place, chaining from `iv`.
    pub fn decrypt(&self, iv: &[u8], data: &mut [u8]) -> Result<(), CryptocteonError> {
        self.check_shape(iv, data)?;
        match self {
            Self::Des(c) => cbc_decrypt(c, iv, data),
            Self::TripleDes(c) => cbc_decrypt(c, iv, data),
            Self::Aes128(c) => cbc_decrypt(c, iv, data),
            Self::Aes192(c) => cbc_decrypt(c, iv, data),
            Self::Aes256(c) => cbc_decrypt(c, iv, data),
        }
        Ok(())
    }

    fn check_shape(&self, iv: &[u8], data: &[u8]) -> Result<(), CryptocteonError> {
        let bs = self.block_size();
        if iv.len() != bs {
            return Err(CryptocteonError::InvalidArgument(format!(
                "IV must be {bs} bytes, got {}",
                iv.len()
            )));
        }
        if data.len() % bs != 0 {
            return Err(CryptocteonError::InvalidArgument(format!(
                "crypt length {} is not a multiple of the {bs}-byte block",
                data.len()
            )));
        }
        Ok(())
    }
}

#[inline(always)]
fn cbc_encrypt<C: BlockEncrypt>(cipher: &C, iv: &[u8], data: &mut [u8]) {
    let mut chain = Zeroizing::new(iv.to_vec());
    for chunk in data.chunks_exact_mut(C::block_size()) {
        xor_in_place(chunk, &chain);
        cipher.encrypt_block(Block::<C>::from_mut_slice(chunk));
        chain.copy_from_slice(chunk);
    }
}

#[inline(always)]
fn cbc_decrypt<C: BlockDecrypt>(cipher: &C, iv: &[u8], data: &mut [u8]) {
    let mut chain = Zeroizing::new(iv.to_vec());
    let mut saved = Zeroizing::new(vec![0u8; C::block_size()]);
    for chunk in data.chunks_exact_mut(C::block_size()) {
        saved.copy_from_slice(chunk);
        cipher.decrypt_block(Block::<C>::from_mut_slice(chunk));
        xor_in_place(chunk, &chain);
        chain.copy_from_slice(&saved);
    }
}

impl fmt::Debug for CbcEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Des(_) => "Des",
            Self::TripleDes(_) => "TripleDes",
            Self::Aes128(_) => "Aes128",
            Self::Aes192(_) => "Aes192",
            Self::Aes256(_) => "Aes256",
        };
        f.debug_tuple("CbcEngine").field(&name).finish()
    }
}
