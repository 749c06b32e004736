// src/crypto/mod.rs

//! Software primitive library.
//!
//! - [`auth_state`]: keyed HMAC state, computed once per key and cloned per request
//! - [`cbc`]: CBC-mode DES, 3DES-EDE3 and AES block engines
//!
//! The combined operations that sessions bind to live in [`crate::primitives`].

pub mod auth_state;
pub mod cbc;

pub use auth_state::{compute_auth_state, AuthState};
pub use cbc::CbcEngine;
