//! src/crypto/auth_state.rs
//! Precomputed HMAC state
//!
//! A keyed [`Hmac`](hmac::Hmac) already holds the digest cores with the
//! ipad and opad blocks absorbed, so the key is only processed when it is
//! set. Each request clones that state and hashes its own data.

use crate::algorithm::MacKind;
use crate::aliases::{HmacMd5, HmacSha1};
use crate::consts::MAX_HASH_KEYLEN;
use crate::error::CryptocteonError;
use hmac::Mac;
use std::fmt;
use zeroize::Zeroizing;

/// Keyed HMAC context derived from one session key.
#[derive(Clone)]
pub enum AuthState {
    Md5(HmacMd5),
    Sha1(HmacSha1),
}

/// Derive the keyed HMAC state for `mac` keyed with `key`.
///
/// An empty key is valid HMAC input. Keys longer than
/// [`MAX_HASH_KEYLEN`] are rejected, never hashed down.
pub fn compute_auth_state(mac: MacKind, key: &[u8]) -> Result<AuthState, CryptocteonError> {
    if key.len() > MAX_HASH_KEYLEN {
        return Err(CryptocteonError::InvalidArgument(format!(
            "mac key of {} bytes exceeds {MAX_HASH_KEYLEN}",
            key.len()
        )));
    }

    match mac {
        MacKind::Md5 => <HmacMd5 as Mac>::new_from_slice(key)
            .map(AuthState::Md5)
            .map_err(|e| CryptocteonError::InvalidArgument(format!("MD5-HMAC key: {e}"))),
        MacKind::Sha1 => <HmacSha1 as Mac>::new_from_slice(key)
            .map(AuthState::Sha1)
            .map_err(|e| CryptocteonError::InvalidArgument(format!("SHA1-HMAC key: {e}"))),
        MacKind::Null => Err("NULL-HMAC has no digest state".into()),
    }
}

#[inline(always)]
fn finish<M: Mac + Clone>(keyed: &M, data: &[u8]) -> Zeroizing<Vec<u8>> {
    let mut mac = keyed.clone();
    mac.update(data);
    Zeroizing::new(mac.finalize().into_bytes().to_vec())
}

impl AuthState {
    pub fn mac_kind(&self) -> MacKind {
        match self {
            Self::Md5(_) => MacKind::Md5,
            Self::Sha1(_) => MacKind::Sha1,
        }
    }

    /// Full (untruncated) HMAC of `data`. The state itself is not consumed.
    pub fn digest(&self, data: &[u8]) -> Zeroizing<Vec<u8>> {
        match self {
            Self::Md5(keyed) => finish(keyed, data),
            Self::Sha1(keyed) => finish(keyed, data),
        }
    }
}

impl fmt::Debug for AuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthState")
            .field("mac", &self.mac_kind())
            .field("state", &"<redacted>")
            .finish()
    }
}
