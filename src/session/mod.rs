// src/session/mod.rs

//! Session lifecycle.
//!
//! - [`AlgorithmSelector`] turns a creation list into a [`Session`]
//! - [`SessionTable`] owns live sessions, addressed by [`SessionHandle`]
//! - [`SessionInfo`] is a key-free snapshot for hosts and diagnostics

pub(crate) mod entity;
pub(crate) mod selector;
pub(crate) mod table;

pub use entity::{Session, SessionInfo};
pub use selector::{AlgorithmSelector, SessionInit};
pub use table::{SessionHandle, SessionTable, SharedSession};
