// benches/batch.rs
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cryptocteon_rs::{
    process_batch, AlgorithmId, CryptoRequest, Cryptocteon, OpDescriptor, SessionHandle,
    SessionInit,
};
use std::hint::black_box;

const PAYLOAD: usize = 64 * 1024;

fn chain() -> Vec<OpDescriptor> {
    vec![
        OpDescriptor::encrypt(AlgorithmId::AesCbc)
            .with_region(16, PAYLOAD)
            .with_inject(0),
        OpDescriptor::new(AlgorithmId::Sha1Hmac)
            .with_region(0, 16 + PAYLOAD)
            .with_inject(16 + PAYLOAD),
    ]
}

fn session(engine: &Cryptocteon) -> SessionHandle {
    engine
        .new_session(&[
            SessionInit::new(AlgorithmId::AesCbc).with_key(&[0x2b; 16][..]),
            SessionInit::new(AlgorithmId::Sha1Hmac).with_key(&b"benchmark"[..]),
        ])
        .unwrap()
}

fn bench_batch(c: &mut Criterion) {
    let engine = Cryptocteon::new();
    let mut group = c.benchmark_group("batch-ops");

    for n_requests in [1, 2, 4, 8, 16] {
        // One session per request so nothing serializes on a session lock.
        let handles: Vec<_> = (0..n_requests).map(|_| session(&engine)).collect();

        group.bench_with_input(
            BenchmarkId::new("parallel", n_requests),
            &n_requests,
            |b, _| {
                let mut batch: Vec<_> = handles
                    .iter()
                    .map(|h| (*h, chain(), vec![0u8; 16 + PAYLOAD + 12]))
                    .collect();
                b.iter(|| black_box(process_batch(&engine, &mut batch)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("sequential", n_requests),
            &n_requests,
            |b, _| {
                let chain = chain();
                let mut bufs = vec![vec![0u8; 16 + PAYLOAD + 12]; handles.len()];
                b.iter(|| {
                    for (h, buf) in handles.iter().zip(bufs.iter_mut()) {
                        engine
                            .process(CryptoRequest::new(*h, &chain, buf))
                            .unwrap();
                    }
                });
            },
        );

        for h in handles {
            engine.free_session(h).unwrap();
        }
    }

    group.finish();
}

criterion_group!(benches, bench_batch);
criterion_main!(benches);
