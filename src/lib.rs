// src/lib.rs

//! Session management and request dispatch for combined cipher-then-HMAC
//! offload primitives.
//!
//! ```
//! use cryptocteon_rs::{AlgorithmId, Cryptocteon, CryptoRequest, OpDescriptor, SessionInit};
//!
//! let engine = Cryptocteon::new();
//! let handle = engine.new_session(&[
//!     SessionInit::new(AlgorithmId::AesCbc).with_key(&[0x2b; 16][..]),
//!     SessionInit::new(AlgorithmId::Sha1Hmac).with_key(&b"auth key"[..]),
//! ])?;
//!
//! // [ IV (16) | payload (32) | ICV (12) ]
//! let mut packet = vec![0u8; 60];
//! let chain = [
//!     OpDescriptor::encrypt(AlgorithmId::AesCbc).with_region(16, 32).with_inject(0),
//!     OpDescriptor::new(AlgorithmId::Sha1Hmac).with_region(0, 48).with_inject(48),
//! ];
//! engine.process(CryptoRequest::new(handle, &chain, &mut packet))?;
//!
//! engine.free_session(handle)?;
//! # Ok::<(), cryptocteon_rs::CryptocteonError>(())
//! ```

pub mod aliases;
pub mod algorithm;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod buffer;
pub mod builders;
pub mod consts;
pub mod crypto;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod key;
pub mod primitives;
pub mod session;
pub mod utils;

// High-level API
pub use engine::Cryptocteon;
pub use error::CryptocteonError;

pub use algorithm::{AlgorithmId, CipherKind, MacKind};
pub use buffer::{ByteRegion, SegmentedBuffer};
pub use builders::CryptocteonBuilder;
pub use dispatch::{CryptoRequest, Direction, OpDescriptor};
pub use key::KeyMaterial;
pub use primitives::BoundPrimitive;
pub use session::{SessionHandle, SessionInfo, SessionInit};

// The primitive library, for hosts that bypass session management.
pub use crypto::{compute_auth_state, AuthState, CbcEngine};

#[cfg(feature = "batch-ops")]
pub use batch_ops::process_batch;
