//! src/builders/engine_builder.rs
//! Front-end configuration

use crate::consts::{
    DEFAULT_ICV_LEN, DEFAULT_SESSION_CAPACITY, MAX_SESSION_CAPACITY, MIN_SESSION_CAPACITY,
};
use crate::engine::Cryptocteon;
use crate::session::{AlgorithmSelector, SessionTable};

/// Builder for [`Cryptocteon`].
///
/// Defaults: [`DEFAULT_SESSION_CAPACITY`] initial slots, growth up to
/// [`MAX_SESSION_CAPACITY`], [`DEFAULT_ICV_LEN`]-byte ICVs.
#[derive(Debug, Clone)]
pub struct CryptocteonBuilder {
    initial_capacity: usize,
    max_capacity: usize,
    default_icv_len: usize,
}

impl CryptocteonBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            initial_capacity: DEFAULT_SESSION_CAPACITY,
            max_capacity: MAX_SESSION_CAPACITY,
            default_icv_len: DEFAULT_ICV_LEN,
        }
    }

    /// Slots allocated on first use, slot 0 included (minimum 2).
    #[must_use]
    pub fn with_initial_capacity(mut self, slots: usize) -> Self {
        self.initial_capacity = slots.max(MIN_SESSION_CAPACITY);
        self
    }

    /// Growth stops here; allocation past it is `ResourceExhausted`.
    #[must_use]
    pub fn with_max_capacity(mut self, slots: usize) -> Self {
        self.max_capacity = slots.clamp(MIN_SESSION_CAPACITY, MAX_SESSION_CAPACITY);
        self
    }

    /// ICV length for sessions whose creation list names none (minimum 1).
    #[must_use]
    pub fn with_default_icv_len(mut self, bytes: usize) -> Self {
        self.default_icv_len = bytes.max(1);
        self
    }

    #[must_use]
    pub const fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    #[must_use]
    pub const fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    #[must_use]
    pub const fn default_icv_len(&self) -> usize {
        self.default_icv_len
    }

    #[must_use]
    pub fn build(self) -> Cryptocteon {
        Cryptocteon::from_parts(
            SessionTable::with_capacity(self.initial_capacity, self.max_capacity),
            AlgorithmSelector::new(self.default_icv_len),
        )
    }
}

impl Default for CryptocteonBuilder {
    fn default() -> Self {
        Self::new()
    }
}
