//! src/session/selector.rs
//! Session creation: validate the algorithm list and build a [`Session`]

use super::entity::Session;
use crate::algorithm::{AlgorithmClass, AlgorithmId, CipherKind, MacKind};
use crate::consts::{DEFAULT_ICV_LEN, MAX_CHAIN_LEN, MAX_CIPHER_KEYLEN, MAX_HASH_KEYLEN};
use crate::error::CryptocteonError;
use crate::key::KeyMaterial;
use crate::primitives::BoundPrimitive;

/// One entry of a session-creation list.
#[derive(Debug, Clone)]
pub struct SessionInit {
    pub algorithm: AlgorithmId,
    pub key: Option<KeyMaterial>,
    /// Requested ICV length. `None` or `Some(0)` means unspecified.
    pub icv_len: Option<usize>,
}

impl SessionInit {
    #[must_use]
    pub fn new(algorithm: AlgorithmId) -> Self {
        Self {
            algorithm,
            key: None,
            icv_len: None,
        }
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<KeyMaterial>) -> Self {
        self.key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_icv_len(mut self, icv_len: usize) -> Self {
        self.icv_len = Some(icv_len);
        self
    }

    fn requested_icv_len(&self) -> Option<usize> {
        self.icv_len.filter(|&n| n != 0)
    }
}

/// Validates creation lists against the compatibility matrix.
#[derive(Debug, Clone, Copy)]
pub struct AlgorithmSelector {
    default_icv_len: usize,
}

impl Default for AlgorithmSelector {
    fn default() -> Self {
        Self::new(DEFAULT_ICV_LEN)
    }
}

impl AlgorithmSelector {
    pub const fn new(default_icv_len: usize) -> Self {
        Self { default_icv_len }
    }

    pub const fn default_icv_len(&self) -> usize {
        self.default_icv_len
    }

    /// Build a fully keyed session from at most one cipher and one mac entry.
    ///
    /// Nothing is allocated in any table here: a failure leaves no trace.
    ///
    /// # Errors
    ///
    /// [`CryptocteonError::InvalidArgument`] when
    /// - the list is empty or longer than two entries
    /// - two entries share a role (two ciphers or two macs)
    /// - a key does not fit its 64-byte buffer
    /// - the (cipher, mac) pair is not in the matrix
    /// - a mac session would get an ICV of zero bytes or one longer than its digest
    pub fn build(&self, inits: &[SessionInit]) -> Result<Session, CryptocteonError> {
        if inits.len() > MAX_CHAIN_LEN {
            return Err(CryptocteonError::InvalidArgument(format!(
                "cannot handle chains of {} algorithms",
                inits.len()
            )));
        }

        let mut enc: Option<(&SessionInit, CipherKind)> = None;
        let mut mac: Option<(&SessionInit, MacKind)> = None;
        for init in inits {
            match init.algorithm.class() {
                AlgorithmClass::Cipher(kind) => {
                    if enc.is_some() {
                        return Err("cannot handle chained cipher/cipher combos".into());
                    }
                    enc = Some((init, kind));
                }
                AlgorithmClass::Mac(kind) => {
                    if mac.is_some() {
                        return Err("cannot handle chained hash/hash combos".into());
                    }
                    mac = Some((init, kind));
                }
            }
        }
        if enc.is_none() && mac.is_none() {
            return Err("bad cipher/hash or combination".into());
        }

        let cipher_key = enc
            .and_then(|(init, _)| init.key.as_ref())
            .map(|k| k.effective(MAX_CIPHER_KEYLEN))
            .transpose()?;
        let mac_key = mac
            .and_then(|(init, _)| init.key.as_ref())
            .map(|k| k.effective(MAX_HASH_KEYLEN))
            .transpose()?;

        let icv_len = enc
            .and_then(|(init, _)| init.requested_icv_len())
            .or_else(|| mac.and_then(|(init, _)| init.requested_icv_len()))
            .unwrap_or(self.default_icv_len);

        let cipher_kind = enc.map(|(_, kind)| kind);
        let mac_kind = mac.map(|(_, kind)| kind);
        let primitive = BoundPrimitive::select(cipher_kind, mac_kind)?;

        if let Some(kind) = primitive.mac_kind() {
            if !(1..=kind.digest_len()).contains(&icv_len) {
                return Err(CryptocteonError::InvalidArgument(format!(
                    "ICV length {icv_len} is outside 1..={} for {}",
                    kind.digest_len(),
                    kind.id()
                )));
            }
        }

        let mut session = Session::new(cipher_kind, mac_kind, primitive, icv_len);
        if let Some(key) = cipher_key {
            session.set_cipher_key(key)?;
        }
        if let Some(key) = mac_key {
            session.set_mac_key(key)?;
        }
        if mac_kind.is_some() {
            session.ensure_auth_state()?;
        }
        Ok(session)
    }
}
