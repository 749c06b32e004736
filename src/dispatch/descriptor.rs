//! src/dispatch/descriptor.rs
//! Request-scoped operation descriptors

use crate::algorithm::AlgorithmId;
use crate::buffer::ByteRegion;
use crate::key::KeyMaterial;
use crate::session::SessionHandle;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Encrypt,
    /// Also the meaning of a cipher descriptor that is not flagged encrypt.
    #[default]
    Decrypt,
}

/// One cipher or mac operation of a request.
///
/// For a cipher descriptor `skip`/`len` frame the crypt region and `inject` is
/// where the IV sits in the buffer. For a mac descriptor they frame the auth
/// region and `inject` is the ICV offset.
#[derive(Debug, Clone)]
pub struct OpDescriptor {
    pub algorithm: AlgorithmId,
    pub skip: usize,
    pub len: usize,
    pub inject: usize,
    pub explicit_iv: Option<Vec<u8>>,
    pub explicit_key: Option<KeyMaterial>,
    pub direction: Direction,
}

impl OpDescriptor {
    /// A descriptor with no flags set, covering nothing.
    #[must_use]
    pub fn new(algorithm: AlgorithmId) -> Self {
        Self {
            algorithm,
            skip: 0,
            len: 0,
            inject: 0,
            explicit_iv: None,
            explicit_key: None,
            direction: Direction::Decrypt,
        }
    }

    #[must_use]
    pub fn encrypt(algorithm: AlgorithmId) -> Self {
        Self::new(algorithm).with_direction(Direction::Encrypt)
    }

    #[must_use]
    pub fn decrypt(algorithm: AlgorithmId) -> Self {
        Self::new(algorithm).with_direction(Direction::Decrypt)
    }

    /// Frame the region this descriptor covers.
    #[must_use]
    pub fn with_region(mut self, skip: usize, len: usize) -> Self {
        self.skip = skip;
        self.len = len;
        self
    }

    #[must_use]
    pub fn with_inject(mut self, inject: usize) -> Self {
        self.inject = inject;
        self
    }

    #[must_use]
    pub fn with_iv(mut self, iv: impl Into<Vec<u8>>) -> Self {
        self.explicit_iv = Some(iv.into());
        self
    }

    /// Per-request key that also replaces the session's stored key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<KeyMaterial>) -> Self {
        self.explicit_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

/// A request against one session: a descriptor chain and the buffer it covers.
///
/// Either part may be missing, in which case the request completes with
/// `InvalidArgument`.
pub struct CryptoRequest<'a> {
    pub handle: SessionHandle,
    pub descriptors: &'a [OpDescriptor],
    pub buffer: Option<&'a mut dyn ByteRegion>,
}

impl<'a> CryptoRequest<'a> {
    pub fn new(
        handle: SessionHandle,
        descriptors: &'a [OpDescriptor],
        buffer: &'a mut dyn ByteRegion,
    ) -> Self {
        Self {
            handle,
            descriptors,
            buffer: Some(buffer),
        }
    }
}

impl fmt::Debug for CryptoRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CryptoRequest")
            .field("handle", &self.handle)
            .field("descriptors", &self.descriptors)
            .field("buffer_len", &self.buffer.as_ref().map(|b| b.len()))
            .finish()
    }
}
