//! src/primitives/ops.rs
//! Combined operations over a byte region
//!
//! Every routine copies the region it needs into a zeroizing scratch buffer,
//! works on the copy, and writes back only once all checks have passed.
//! Ordering is encrypt-then-MAC: the ICV always covers ciphertext.

use super::params::{AuthLayout, CipherParams, Region};
use crate::buffer::ByteRegion;
use crate::crypto::{AuthState, CbcEngine};
use crate::error::CryptocteonError;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

fn read_region(
    buf: &dyn ByteRegion,
    region: Region,
) -> Result<Zeroizing<Vec<u8>>, CryptocteonError> {
    region.check(buf.len())?;
    let mut scratch = Zeroizing::new(vec![0u8; region.len]);
    buf.read_at(region.offset, &mut scratch)?;
    Ok(scratch)
}

fn compute_icv(
    layout: &AuthLayout,
    state: &AuthState,
    buf: &dyn ByteRegion,
) -> Result<Zeroizing<Vec<u8>>, CryptocteonError> {
    let data = read_region(buf, layout.region)?;
    let mut icv = state.digest(&data);
    icv.truncate(layout.icv_len);
    Ok(icv)
}

fn check_icv(
    layout: &AuthLayout,
    state: &AuthState,
    buf: &dyn ByteRegion,
) -> Result<(), CryptocteonError> {
    let computed = compute_icv(layout, state, buf)?;
    let stored = read_region(buf, Region::new(layout.icv_offset, layout.icv_len))?;
    if bool::from(computed.as_slice().ct_eq(stored.as_slice())) {
        Ok(())
    } else {
        Err(CryptocteonError::VerificationFailed)
    }
}

pub(crate) fn cipher_encrypt(
    params: &CipherParams<'_>,
    buf: &mut dyn ByteRegion,
) -> Result<(), CryptocteonError> {
    params.validate(buf.len())?;
    let engine = CbcEngine::new(params.kind, params.key)?;
    let mut scratch = read_region(buf, params.region)?;
    engine.encrypt(params.iv, &mut scratch)?;
    buf.write_at(params.region.offset, &scratch)
}

pub(crate) fn cipher_decrypt(
    params: &CipherParams<'_>,
    buf: &mut dyn ByteRegion,
) -> Result<(), CryptocteonError> {
    params.validate(buf.len())?;
    let engine = CbcEngine::new(params.kind, params.key)?;
    let mut scratch = read_region(buf, params.region)?;
    engine.decrypt(params.iv, &mut scratch)?;
    buf.write_at(params.region.offset, &scratch)
}

/// Computes the ICV over the auth region and writes it at the ICV offset.
pub(crate) fn write_icv(
    layout: &AuthLayout,
    state: &AuthState,
    buf: &mut dyn ByteRegion,
) -> Result<(), CryptocteonError> {
    layout.validate(buf.len(), state.mac_kind())?;
    let icv = compute_icv(layout, state, buf)?;
    buf.write_at(layout.icv_offset, &icv)
}

/// Recomputes the ICV over the auth region and compares it with the stored one.
pub(crate) fn verify_icv(
    layout: &AuthLayout,
    state: &AuthState,
    buf: &dyn ByteRegion,
) -> Result<(), CryptocteonError> {
    layout.validate(buf.len(), state.mac_kind())?;
    check_icv(layout, state, buf)
}

pub(crate) fn encrypt_then_mac(
    cipher: &CipherParams<'_>,
    layout: &AuthLayout,
    state: &AuthState,
    buf: &mut dyn ByteRegion,
) -> Result<(), CryptocteonError> {
    layout.validate(buf.len(), state.mac_kind())?;
    cipher_encrypt(cipher, buf)?;
    write_icv(layout, state, buf)
}

/// Buffer is left untouched when the ICV does not match.
pub(crate) fn verify_then_decrypt(
    cipher: &CipherParams<'_>,
    layout: &AuthLayout,
    state: &AuthState,
    buf: &mut dyn ByteRegion,
) -> Result<(), CryptocteonError> {
    cipher.validate(buf.len())?;
    verify_icv(layout, state, buf)?;
    cipher_decrypt(cipher, buf)
}
