//! tests/batch_ops_tests.rs
//! Parallel request batches (feature `batch-ops`)

#[cfg(feature = "batch-ops")]
mod common;

#[cfg(feature = "batch-ops")]
use common::*;
#[cfg(feature = "batch-ops")]
use cryptocteon_rs::{
    process_batch, AlgorithmId, Cryptocteon, CryptocteonError, Direction, OpDescriptor,
    SegmentedBuffer, SessionHandle,
};

#[cfg(feature = "batch-ops")]
fn aes_sha1(engine: &Cryptocteon) -> SessionHandle {
    engine
        .new_session(&[cipher_init(AlgorithmId::AesCbc), mac_init(AlgorithmId::Sha1Hmac)])
        .unwrap()
}

#[cfg(feature = "batch-ops")]
fn aes_sha1_chain(direction: Direction) -> Vec<OpDescriptor> {
    esp_chain(AlgorithmId::AesCbc, AlgorithmId::Sha1Hmac, direction, 16, PAYLOAD.len())
}

#[cfg(feature = "batch-ops")]
#[test]
fn batch_roundtrip_sanity_check() {
    let engine = Cryptocteon::new();
    let handles: Vec<_> = (0..4).map(|_| aes_sha1(&engine)).collect();

    let mut batch: Vec<_> = handles
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let iv = [i as u8; 16];
            (*h, aes_sha1_chain(Direction::Encrypt), packet(&iv, PAYLOAD, 12))
        })
        .collect();
    let statuses = process_batch(&engine, &mut batch);
    assert!(statuses.iter().all(Result::is_ok), "{statuses:?}");

    for (_, chain, _) in batch.iter_mut() {
        *chain = aes_sha1_chain(Direction::Decrypt);
    }
    let statuses = process_batch(&engine, &mut batch);
    assert!(statuses.iter().all(Result::is_ok), "{statuses:?}");
    for (_, _, buf) in &batch {
        assert_eq!(&buf[16..48], PAYLOAD);
    }
}

#[cfg(feature = "batch-ops")]
#[test]
fn batch_empty_batch() {
    let engine = Cryptocteon::new();
    let mut batch: Vec<(SessionHandle, Vec<OpDescriptor>, Vec<u8>)> = Vec::new();
    assert!(process_batch(&engine, &mut batch).is_empty());
}

#[cfg(feature = "batch-ops")]
#[test]
fn batch_statuses_follow_input_order() {
    let engine = Cryptocteon::new();
    let good = aes_sha1(&engine);
    let freed = aes_sha1(&engine);
    engine.free_session(freed).unwrap();

    let mut batch = vec![
        (good, aes_sha1_chain(Direction::Encrypt), packet(&NIST_IV, PAYLOAD, 12)),
        (freed, aes_sha1_chain(Direction::Encrypt), packet(&NIST_IV, PAYLOAD, 12)),
        (good, aes_sha1_chain(Direction::Decrypt), packet(&NIST_IV, PAYLOAD, 12)),
        (good, vec![], packet(&NIST_IV, PAYLOAD, 12)),
    ];
    let statuses = process_batch(&engine, &mut batch);

    assert_eq!(statuses.len(), 4);
    assert!(statuses[0].is_ok());
    assert_eq!(statuses[1], Err(CryptocteonError::NotFound(freed.raw())));
    assert_eq!(statuses[2], Err(CryptocteonError::VerificationFailed));
    assert!(matches!(statuses[3], Err(CryptocteonError::InvalidArgument(_))));
}

#[cfg(feature = "batch-ops")]
#[test]
fn batch_shared_session_with_segmented_buffers() {
    let engine = Cryptocteon::new();
    let h = aes_sha1(&engine);

    let mut batch: Vec<_> = (0..16u8)
        .map(|i| {
            let buf = SegmentedBuffer::split(&packet(&[i; 16], PAYLOAD, 12), &[7, 13, 21]);
            (h, aes_sha1_chain(Direction::Encrypt), buf)
        })
        .collect();
    let statuses = process_batch(&engine, &mut batch);
    assert!(statuses.iter().all(Result::is_ok));

    for (i, (_, _, buf)) in batch.iter().enumerate() {
        let flat = buf.to_vec();
        assert_eq!(&flat[..16], &[i as u8; 16]);
        assert_eq!(&flat[48..], &hmac_sha1(MAC_KEY, &flat[..48])[..12]);
    }
}
