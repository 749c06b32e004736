//! tests/primitive_vector_tests.rs
//! Known-answer tests for the primitive library (RFC 2202, NIST SP 800-38A)

mod common;

use common::{hmac_md5, hmac_sha1};
use cryptocteon_rs::{compute_auth_state, CbcEngine, CipherKind, CryptocteonError, MacKind};
use hmac::{Hmac, Mac};
use sha1::Sha1;

struct HmacVector {
    desc: &'static str,
    mac: MacKind,
    key: Vec<u8>,
    data: Vec<u8>,
    digest: &'static str,
}

fn rfc2202() -> Vec<HmacVector> {
    vec![
        HmacVector {
            desc: "MD5 case 1",
            mac: MacKind::Md5,
            key: vec![0x0b; 16],
            data: b"Hi There".to_vec(),
            digest: "9294727a3638bb1c13f48ef8158bfc9d",
        },
        HmacVector {
            desc: "MD5 case 2",
            mac: MacKind::Md5,
            key: b"Jefe".to_vec(),
            data: b"what do ya want for nothing?".to_vec(),
            digest: "750c783e6ab0b503eaa86e310a5db738",
        },
        HmacVector {
            desc: "MD5 case 3",
            mac: MacKind::Md5,
            key: vec![0xaa; 16],
            data: vec![0xdd; 50],
            digest: "56be34521d144c88dbb8c733f0e8b3f6",
        },
        HmacVector {
            desc: "SHA1 case 1",
            mac: MacKind::Sha1,
            key: vec![0x0b; 20],
            data: b"Hi There".to_vec(),
            digest: "b617318655057264e28bc0b6fb378c8ef146be00",
        },
        HmacVector {
            desc: "SHA1 case 2",
            mac: MacKind::Sha1,
            key: b"Jefe".to_vec(),
            data: b"what do ya want for nothing?".to_vec(),
            digest: "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79",
        },
        HmacVector {
            desc: "SHA1 case 3",
            mac: MacKind::Sha1,
            key: vec![0xaa; 20],
            data: vec![0xdd; 50],
            digest: "125d7342b9ac11cd91a39af48aa17b4f63f175d3",
        },
    ]
}

#[test]
fn auth_state_matches_rfc2202() {
    for v in rfc2202() {
        let state = compute_auth_state(v.mac, &v.key)
            .unwrap_or_else(|e| panic!("{}: {e}", v.desc));
        assert_eq!(state.mac_kind(), v.mac);
        assert_eq!(hex::encode(state.digest(&v.data).as_slice()), v.digest, "{}", v.desc);
    }
}

#[test]
fn auth_state_matches_oracle_across_key_lengths() {
    let data: Vec<u8> = (0u8..=255).cycle().take(300).collect();
    for key_len in [0usize, 1, 16, 20, 63, 64] {
        let key: Vec<u8> = (0..key_len).map(|i| (i * 7 + 3) as u8).collect();

        let md5 = compute_auth_state(MacKind::Md5, &key).unwrap();
        assert_eq!(md5.digest(&data).as_slice(), hmac_md5(&key, &data), "MD5 key {key_len}");

        let sha1 = compute_auth_state(MacKind::Sha1, &key).unwrap();
        assert_eq!(sha1.digest(&data).as_slice(), hmac_sha1(&key, &data), "SHA1 key {key_len}");
    }
}

#[test]
fn auth_state_is_reusable() {
    let state = compute_auth_state(MacKind::Sha1, b"Jefe").unwrap();
    let first = state.digest(b"what do ya want for nothing?");
    let second = state.digest(b"what do ya want for nothing?");
    assert_eq!(first.as_slice(), second.as_slice());
    assert_eq!(state.digest(b"").as_slice(), hmac_sha1(b"Jefe", b""));
}

#[test]
fn auth_state_matches_one_keyed_hmac_cloned_per_message() {
    let key = b"keyed once per session";
    let keyed = <Hmac<Sha1> as Mac>::new_from_slice(key).unwrap();
    let state = compute_auth_state(MacKind::Sha1, key).unwrap();

    for len in [1usize, 11, 200] {
        let data: Vec<u8> = (0..len).map(|i| (i * 31 + 5) as u8).collect();
        let mut mac = keyed.clone();
        mac.update(&data);
        assert_eq!(
            state.digest(&data).as_slice(),
            mac.finalize().into_bytes().as_slice(),
            "{len}-byte message"
        );
    }
}

#[test]
fn auth_state_rejects_long_keys_and_null() {
    assert!(matches!(
        compute_auth_state(MacKind::Sha1, &[0u8; 65]),
        Err(CryptocteonError::InvalidArgument(_))
    ));
    assert!(matches!(
        compute_auth_state(MacKind::Null, b"key"),
        Err(CryptocteonError::InvalidArgument(_))
    ));
}

#[test]
fn cbc_aes128_matches_sp800_38a() {
    let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
    let iv = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let plaintext = hex::decode(concat!(
        "6bc1bee22e409f96e93d7e117393172a",
        "ae2d8a571e03ac9c9eb76fac45af8e51",
        "30c81c46a35ce411e5fbc1191a0a52ef",
        "f69f2445df4f9b17ad2b417be66c3710",
    ))
    .unwrap();
    let ciphertext = hex::decode(concat!(
        "7649abac8119b246cee98e9b12e9197d",
        "5086cb9b507219ee95db113a917678b2",
        "73bed6b8e3c1743b7116e69e22229516",
        "3ff1caa1681fac09120eca307586e1a7",
    ))
    .unwrap();

    let engine = CbcEngine::new(CipherKind::Aes, &key).unwrap();
    assert_eq!(engine.block_size(), 16);

    let mut data = plaintext.clone();
    engine.encrypt(&iv, &mut data).unwrap();
    assert_eq!(data, ciphertext);

    engine.decrypt(&iv, &mut data).unwrap();
    assert_eq!(data, plaintext);
}

#[test]
fn cbc_key_sizes() {
    let cases = [
        (CipherKind::Des, 8usize, true),
        (CipherKind::Des, 16, false),
        (CipherKind::TripleDes, 24, true),
        (CipherKind::TripleDes, 16, false),
        (CipherKind::Aes, 16, true),
        (CipherKind::Aes, 24, true),
        (CipherKind::Aes, 32, true),
        (CipherKind::Aes, 20, false),
        (CipherKind::Null, 0, false),
    ];
    for (kind, len, ok) in cases {
        assert_eq!(CbcEngine::accepts_key_len(kind, len), ok, "{kind:?} with {len}");
        assert_eq!(CbcEngine::new(kind, &vec![0x5a; len]).is_ok(), ok, "{kind:?} with {len}");
    }
}

#[test]
fn cbc_rejects_bad_shapes() {
    let engine = CbcEngine::new(CipherKind::TripleDes, &common::TDES_KEY).unwrap();
    let mut data = vec![0u8; 12];
    assert!(engine.encrypt(&[0u8; 8], &mut data).is_err(), "unaligned data");
    let mut data = vec![0u8; 16];
    assert!(engine.encrypt(&[0u8; 16], &mut data).is_err(), "IV too long");
    assert!(engine.decrypt(&[0u8; 4], &mut data).is_err(), "IV too short");
    assert_eq!(data, vec![0u8; 16], "untouched on failure");
}

#[test]
fn cbc_empty_region_is_a_no_op() {
    let engine = CbcEngine::new(CipherKind::Des, &common::DES_KEY).unwrap();
    let mut data: Vec<u8> = Vec::new();
    engine.encrypt(&[0u8; 8], &mut data).unwrap();
    assert!(data.is_empty());
}
