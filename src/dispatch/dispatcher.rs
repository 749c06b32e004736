//! src/dispatch/dispatcher.rs
//! Per-request processing
//!
//! Validate → Match → PrepareKeysAndIV → Dispatch → Complete.
//!
//! The session lock is held from Match to Complete. Every check that can
//! reject the request runs before the session is touched, so a rejected
//! request never leaves a half-applied rekey behind.

use super::descriptor::{CryptoRequest, Direction, OpDescriptor};
use super::matcher::{match_descriptors, MatchedChain};
use crate::aliases::Iv16;
use secure_gate::{RevealSecret, RevealSecretMut};
use crate::buffer::ByteRegion;
use crate::consts::{MAX_CIPHER_KEYLEN, MAX_HASH_KEYLEN};
use crate::error::CryptocteonError;
use crate::primitives::{AuthLayout, CipherParams, PrimitiveInput, Region};
use crate::session::{Session, SessionTable};
use std::sync::PoisonError;
use tracing::debug;

/// Resolves descriptor chains against sessions in a [`SessionTable`] and runs
/// the bound primitive.
#[derive(Debug, Clone, Copy)]
pub struct RequestDispatcher<'t> {
    table: &'t SessionTable,
}

impl<'t> RequestDispatcher<'t> {
    pub fn new(table: &'t SessionTable) -> Self {
        Self { table }
    }

    /// Process one request. The returned value is its completion status.
    ///
    /// # Errors
    ///
    /// - [`CryptocteonError::InvalidArgument`] for a missing chain or buffer,
    ///   descriptors that do not match the session, or bad sizes/offsets
    /// - [`CryptocteonError::NotFound`] for an unknown handle
    /// - [`CryptocteonError::VerificationFailed`] when decrypt-path ICV
    ///   verification fails
    pub fn process(&self, request: CryptoRequest<'_>) -> Result<(), CryptocteonError> {
        let CryptoRequest {
            handle,
            descriptors,
            buffer,
        } = request;

        let Some(buf) = buffer else {
            return Err("missing request buffer".into());
        };
        if descriptors.is_empty() {
            return Err("missing descriptor chain".into());
        }

        let shared = self.table.lookup(handle)?;
        let mut session = shared.lock().unwrap_or_else(PoisonError::into_inner);

        let matched = match_descriptors(&session, descriptors)?;
        run(&mut session, matched, buf)
    }
}

/// Offsets derived from whichever descriptors are present.
struct Layout {
    crypt: Option<Region>,
    auth: Option<AuthLayout>,
}

fn layout(matched: &MatchedChain<'_>, icv_len: usize) -> Layout {
    let auth = matched.mac.map(|mac| AuthLayout {
        region: Region::new(mac.skip, mac.len),
        icv_offset: mac.inject,
        icv_len,
    });
    let crypt = matched.enc.map(|enc| Region::new(enc.skip, enc.len));
    Layout { crypt, auth }
}

fn resolve_iv(
    session: &Session,
    enc: &OpDescriptor,
    buf: &dyn ByteRegion,
) -> Result<(Iv16, usize), CryptocteonError> {
    let size = session.iv_size();
    let mut iv = Iv16::new([0u8; 16]);
    match &enc.explicit_iv {
        Some(explicit) if explicit.len() == size => {
            iv.expose_secret_mut()[..size].copy_from_slice(explicit);
        }
        Some(explicit) => {
            return Err(CryptocteonError::InvalidArgument(format!(
                "explicit IV of {} bytes, session needs {size}",
                explicit.len()
            )));
        }
        None => buf.read_at(enc.inject, &mut iv.expose_secret_mut()[..size])?,
    }
    Ok((iv, size))
}

fn override_key(
    desc: Option<&OpDescriptor>,
    limit: usize,
) -> Result<Option<&[u8]>, CryptocteonError> {
    desc.and_then(|d| d.explicit_key.as_ref())
        .map(|key| key.effective(limit))
        .transpose()
}

fn run(
    session: &mut Session,
    matched: MatchedChain<'_>,
    buf: &mut dyn ByteRegion,
) -> Result<(), CryptocteonError> {
    let total = buf.len();
    let Layout { crypt, auth } = layout(&matched, session.icv_len());

    let iv = match (matched.enc, session.cipher()) {
        (Some(enc), Some(_)) => Some(resolve_iv(session, enc, buf)?),
        _ => None,
    };

    let cipher_override = override_key(matched.enc, MAX_CIPHER_KEYLEN)?;
    let mac_override = override_key(matched.mac, MAX_HASH_KEYLEN)?;

    // Check the request with the keys it will run under before changing anything.
    if let (Some(kind), Some(region), Some((iv, iv_len))) = (session.cipher(), crypt, &iv) {
        CipherParams {
            kind,
            key: cipher_override.unwrap_or_else(|| session.cipher_key()),
            iv: &iv.expose_secret()[..*iv_len],
            region,
        }
        .validate(total)?;
    }
    if let (Some(mac), Some(layout)) = (session.mac(), &auth) {
        layout.validate(total, mac)?;
    }

    if let Some(key) = cipher_override {
        session.set_cipher_key(key)?;
    }
    if let Some(key) = mac_override {
        session.set_mac_key(key)?;
    }
    if session.mac().is_some() && !session.mac_key_set() {
        session.ensure_auth_state()?;
    }

    let input = PrimitiveInput {
        cipher: match (session.cipher(), crypt, &iv) {
            (Some(kind), Some(region), Some((iv, iv_len))) => Some(CipherParams {
                kind,
                key: session.cipher_key(),
                iv: &iv.expose_secret()[..*iv_len],
                region,
            }),
            _ => None,
        },
        auth: match (auth, session.auth_state()) {
            (Some(layout), Some(state)) => Some((layout, state)),
            _ => None,
        },
    };

    let direction = matched
        .enc
        .map_or(Direction::Encrypt, |enc| enc.direction);
    let primitive = session.primitive();
    let status = match direction {
        Direction::Encrypt => primitive.encrypt(&input, buf),
        Direction::Decrypt => primitive.decrypt(&input, buf),
    };
    if let Err(e) = &status {
        debug!(?primitive, ?direction, error = %e, "primitive failed");
    }
    status
}
