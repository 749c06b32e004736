//! tests/common.rs
//! Shared keys, packet layouts and an independent HMAC oracle

#![allow(dead_code)] // each test file uses a different subset

use cryptocteon_rs::{AlgorithmId, Direction, OpDescriptor, SessionInit};
use hmac::{Hmac, Mac};
use md5::Md5;
use sha1::Sha1;

/// NIST SP 800-38A AES-128 key.
pub const AES128_KEY: [u8; 16] = [
    0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
];

/// NIST SP 800-38A CBC IV.
pub const NIST_IV: [u8; 16] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
];

pub const DES_KEY: [u8; 8] = [0x13, 0x34, 0x57, 0x79, 0x9b, 0xbc, 0xdf, 0xf1];

pub const TDES_KEY: [u8; 24] = [
    0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0x01,
    0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0x01, 0x23,
];

pub const MAC_KEY: &[u8] = b"0123456789abcdef0123";
pub const OTHER_MAC_KEY: &[u8] = b"a completely different hmac key";

pub const PAYLOAD: &[u8; 32] = b"thirty-two bytes of plain text!!";

pub fn cipher_key(alg: AlgorithmId) -> &'static [u8] {
    match alg {
        AlgorithmId::DesCbc => &DES_KEY,
        AlgorithmId::TripleDesCbc => &TDES_KEY,
        _ => &AES128_KEY,
    }
}

pub fn cipher_init(alg: AlgorithmId) -> SessionInit {
    SessionInit::new(alg).with_key(cipher_key(alg))
}

pub fn mac_init(alg: AlgorithmId) -> SessionInit {
    SessionInit::new(alg).with_key(MAC_KEY)
}

pub fn iv_len(alg: AlgorithmId) -> usize {
    match alg {
        AlgorithmId::AesCbc => 16,
        _ => 8,
    }
}

/// `[ IV | payload | ICV ]` with the ICV zeroed.
pub fn packet(iv: &[u8], payload: &[u8], icv_len: usize) -> Vec<u8> {
    [iv, payload, &vec![0u8; icv_len][..]].concat()
}

/// Cipher over the payload with the IV read from offset 0, mac over IV and
/// payload, ICV right behind.
pub fn esp_chain(
    cipher: AlgorithmId,
    mac: AlgorithmId,
    direction: Direction,
    iv_len: usize,
    payload_len: usize,
) -> Vec<OpDescriptor> {
    vec![
        OpDescriptor::new(cipher)
            .with_direction(direction)
            .with_region(iv_len, payload_len)
            .with_inject(0),
        OpDescriptor::new(mac)
            .with_region(0, iv_len + payload_len)
            .with_inject(iv_len + payload_len),
    ]
}

pub fn hmac_md5(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = <Hmac<Md5> as Mac>::new_from_slice(key).expect("HMAC takes any key length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

pub fn hmac_sha1(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = <Hmac<Sha1> as Mac>::new_from_slice(key).expect("HMAC takes any key length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

pub fn oracle(mac: AlgorithmId, key: &[u8], data: &[u8]) -> Vec<u8> {
    match mac {
        AlgorithmId::Md5Hmac => hmac_md5(key, data),
        AlgorithmId::Sha1Hmac => hmac_sha1(key, data),
        other => panic!("{other} is not an HMAC"),
    }
}
