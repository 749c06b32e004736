//! # Builders
//!
//! - [`engine_builder`] - configuration for [`Cryptocteon`](crate::Cryptocteon)

pub mod engine_builder;

pub use engine_builder::CryptocteonBuilder;
