//! Parallel processing of independent requests (feature `batch-ops`).

#[cfg(feature = "batch-ops")]
use rayon::prelude::*;

#[cfg(feature = "batch-ops")]
use crate::buffer::ByteRegion;
#[cfg(feature = "batch-ops")]
use crate::dispatch::{CryptoRequest, OpDescriptor};
#[cfg(feature = "batch-ops")]
use crate::session::SessionHandle;
#[cfg(feature = "batch-ops")]
use crate::{Cryptocteon, CryptocteonError};

/// Process every `(handle, chain, buffer)` entry in parallel.
///
/// Returns one completion status per entry, in input order. Entries naming the
/// same session are serialized on that session's lock.
#[cfg(feature = "batch-ops")]
pub fn process_batch<R>(
    engine: &Cryptocteon,
    batch: &mut [(SessionHandle, Vec<OpDescriptor>, R)],
) -> Vec<Result<(), CryptocteonError>>
where
    R: ByteRegion + Send,
{
    batch
        .par_iter_mut()
        .map(|(handle, chain, buf)| engine.process(CryptoRequest::new(*handle, chain, buf)))
        .collect()
}
