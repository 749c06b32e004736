//! src/session/entity.rs
//! One bound algorithm/key configuration

use crate::algorithm::{CipherKind, MacKind};
use crate::aliases::{CipherKey64, MacKey64};
use secure_gate::{RevealSecret, RevealSecretMut};
use crate::consts::{MAX_CIPHER_KEYLEN, MAX_HASH_KEYLEN};
use crate::crypto::{compute_auth_state, AuthState};
use crate::error::CryptocteonError;
use crate::primitives::BoundPrimitive;
use std::fmt;
use tracing::debug;

/// A live session.
///
/// The algorithm kinds and the bound primitive are fixed at creation. Only the
/// keys and the derived HMAC state change afterwards, and only through an
/// explicit per-request key override.
pub struct Session {
    cipher: Option<CipherKind>,
    cipher_key: CipherKey64,
    cipher_key_len: usize,

    mac: Option<MacKind>,
    mac_key: MacKey64,
    mac_key_len: usize,

    iv_size: usize,
    icv_len: usize,

    /// `Some` exactly while the mac key is "set": the state matches `mac_key`.
    auth_state: Option<AuthState>,
    auth_epoch: u64,

    primitive: BoundPrimitive,
}

/// Read-only snapshot of a session's configuration. Carries no key bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    pub cipher: Option<CipherKind>,
    pub mac: Option<MacKind>,
    pub primitive: BoundPrimitive,
    pub iv_size: usize,
    pub icv_len: usize,
    pub cipher_key_len: usize,
    pub mac_key_len: usize,
    pub mac_key_set: bool,
    /// Number of times the HMAC state has been derived for this session.
    pub auth_epoch: u64,
}

impl Session {
    /// Assemble a session with empty keys. Only the selector calls this.
    pub(crate) fn new(
        cipher: Option<CipherKind>,
        mac: Option<MacKind>,
        primitive: BoundPrimitive,
        icv_len: usize,
    ) -> Self {
        Self {
            cipher,
            cipher_key: CipherKey64::new([0u8; MAX_CIPHER_KEYLEN]),
            cipher_key_len: 0,
            mac,
            mac_key: MacKey64::new([0u8; MAX_HASH_KEYLEN]),
            mac_key_len: 0,
            iv_size: cipher.map_or(0, CipherKind::iv_size),
            icv_len,
            auth_state: None,
            auth_epoch: 0,
            primitive,
        }
    }

    pub fn cipher(&self) -> Option<CipherKind> {
        self.cipher
    }

    pub fn mac(&self) -> Option<MacKind> {
        self.mac
    }

    pub fn primitive(&self) -> BoundPrimitive {
        self.primitive
    }

    pub fn iv_size(&self) -> usize {
        self.iv_size
    }

    pub fn icv_len(&self) -> usize {
        self.icv_len
    }

    pub fn mac_key_set(&self) -> bool {
        self.auth_state.is_some()
    }

    pub(crate) fn cipher_key(&self) -> &[u8] {
        &self.cipher_key.expose_secret()[..self.cipher_key_len]
    }

    pub(crate) fn mac_key(&self) -> &[u8] {
        &self.mac_key.expose_secret()[..self.mac_key_len]
    }

    pub(crate) fn auth_state(&self) -> Option<&AuthState> {
        self.auth_state.as_ref()
    }

    /// Overwrite the cipher key in place.
    pub(crate) fn set_cipher_key(&mut self, key: &[u8]) -> Result<(), CryptocteonError> {
        if key.len() > MAX_CIPHER_KEYLEN {
            return Err(CryptocteonError::InvalidArgument(format!(
                "cipher key of {} bytes exceeds {MAX_CIPHER_KEYLEN}",
                key.len()
            )));
        }
        let buf = self.cipher_key.expose_secret_mut();
        buf.fill(0);
        buf[..key.len()].copy_from_slice(key);
        self.cipher_key_len = key.len();
        Ok(())
    }

    /// Overwrite the mac key in place and drop the derived state.
    pub(crate) fn set_mac_key(&mut self, key: &[u8]) -> Result<(), CryptocteonError> {
        if key.len() > MAX_HASH_KEYLEN {
            return Err(CryptocteonError::InvalidArgument(format!(
                "mac key of {} bytes exceeds {MAX_HASH_KEYLEN}",
                key.len()
            )));
        }
        let buf = self.mac_key.expose_secret_mut();
        buf.fill(0);
        buf[..key.len()].copy_from_slice(key);
        self.mac_key_len = key.len();
        self.auth_state = None;
        Ok(())
    }

    /// Derive the HMAC state from the current mac key unless it is already set.
    pub(crate) fn ensure_auth_state(&mut self) -> Result<(), CryptocteonError> {
        if self.auth_state.is_some() {
            return Ok(());
        }
        let Some(mac) = self.mac else {
            return Err("session has no mac algorithm".into());
        };
        let state = compute_auth_state(mac, self.mac_key())?;
        self.auth_state = Some(state);
        self.auth_epoch += 1;
        debug!(mac = %mac.id(), epoch = self.auth_epoch, "derived HMAC state");
        Ok(())
    }

    pub fn info(&self) -> SessionInfo {
        SessionInfo {
            cipher: self.cipher,
            mac: self.mac,
            primitive: self.primitive,
            iv_size: self.iv_size,
            icv_len: self.icv_len,
            cipher_key_len: self.cipher_key_len,
            mac_key_len: self.mac_key_len,
            mac_key_set: self.mac_key_set(),
            auth_epoch: self.auth_epoch,
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("cipher", &self.cipher)
            .field("mac", &self.mac)
            .field("primitive", &self.primitive)
            .field("iv_size", &self.iv_size)
            .field("icv_len", &self.icv_len)
            .field("mac_key_set", &self.mac_key_set())
            .finish_non_exhaustive()
    }
}
