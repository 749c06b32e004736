//! src/primitives/params.rs
//! Pre-sliced inputs handed to a bound primitive

use crate::algorithm::{CipherKind, MacKind};
use crate::crypto::{AuthState, CbcEngine};
use crate::error::CryptocteonError;
use crate::utils::check_range;

/// A `[offset, offset + len)` window of the request buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub offset: usize,
    pub len: usize,
}

impl Region {
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    pub fn check(&self, total: usize) -> Result<(), CryptocteonError> {
        check_range(self.offset, self.len, total).map(|_| ())
    }
}

/// Everything the CBC half of a primitive needs.
#[derive(Debug, Clone, Copy)]
pub struct CipherParams<'a> {
    pub kind: CipherKind,
    pub key: &'a [u8],
    pub iv: &'a [u8],
    pub region: Region,
}

impl CipherParams<'_> {
    /// Checks key size, IV size, block alignment and bounds against a buffer of
    /// `total` bytes. Touches nothing.
    pub fn validate(&self, total: usize) -> Result<(), CryptocteonError> {
        if !CbcEngine::accepts_key_len(self.kind, self.key.len()) {
            return Err(CryptocteonError::InvalidArgument(format!(
                "{} cannot use a {}-byte key",
                self.kind.id(),
                self.key.len()
            )));
        }
        if self.iv.len() != self.kind.iv_size() {
            return Err(CryptocteonError::InvalidArgument(format!(
                "{} needs a {}-byte IV, got {}",
                self.kind.id(),
                self.kind.iv_size(),
                self.iv.len()
            )));
        }
        if self.region.len % self.kind.block_size() != 0 {
            return Err(CryptocteonError::InvalidArgument(format!(
                "crypt length {} is not a multiple of the {}-byte block",
                self.region.len,
                self.kind.block_size()
            )));
        }
        self.region.check(total)
    }
}

/// Where the authenticated bytes and the ICV live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthLayout {
    pub region: Region,
    pub icv_offset: usize,
    pub icv_len: usize,
}

impl AuthLayout {
    pub fn validate(&self, total: usize, mac: MacKind) -> Result<(), CryptocteonError> {
        if self.icv_len == 0 || self.icv_len > mac.digest_len() {
            return Err(CryptocteonError::InvalidArgument(format!(
                "ICV length {} is outside 1..={} for {}",
                self.icv_len,
                mac.digest_len(),
                mac.id()
            )));
        }
        self.region.check(total)?;
        check_range(self.icv_offset, self.icv_len, total).map(|_| ())
    }
}

/// One invocation's worth of parameters.
///
/// Cipher-only primitives ignore `auth`, mac-only primitives ignore `cipher`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimitiveInput<'a> {
    pub cipher: Option<CipherParams<'a>>,
    pub auth: Option<(AuthLayout, &'a AuthState)>,
}

impl<'a> PrimitiveInput<'a> {
    pub(crate) fn cipher(&self) -> Result<&CipherParams<'a>, CryptocteonError> {
        self.cipher
            .as_ref()
            .ok_or_else(|| "primitive needs cipher parameters".into())
    }

    pub(crate) fn auth(&self) -> Result<(&AuthLayout, &'a AuthState), CryptocteonError> {
        self.auth
            .as_ref()
            .map(|(layout, state)| (layout, *state))
            .ok_or_else(|| "primitive needs authentication parameters".into())
    }

    pub fn validate(&self, total: usize) -> Result<(), CryptocteonError> {
        if let Some(cipher) = &self.cipher {
            cipher.validate(total)?;
        }
        if let Some((layout, state)) = &self.auth {
            layout.validate(total, state.mac_kind())?;
        }
        Ok(())
    }
}
