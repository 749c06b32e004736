// src/dispatch/mod.rs

//! Request dispatch.
//!
//! Core API: [`RequestDispatcher::process`] matches a [`CryptoRequest`]'s
//! descriptors against its session and invokes the session's bound primitive.

pub(crate) mod descriptor;
pub(crate) mod dispatcher;
pub(crate) mod matcher;

pub use descriptor::{CryptoRequest, Direction, OpDescriptor};
pub use dispatcher::RequestDispatcher;
