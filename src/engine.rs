//! # Device Front End
//!
//! [`Cryptocteon`] is what a host crypto framework talks to. It exposes the
//! three device methods (new session, free session, process) plus a
//! completion-callback entry point.
//!
//! # Thread Safety
//!
//! `Cryptocteon` is `Send + Sync`. Table shape changes are serialized; requests
//! on one session are serialized; requests on different sessions run in parallel.

use crate::builders::CryptocteonBuilder;
use crate::dispatch::{CryptoRequest, RequestDispatcher};
use crate::error::CryptocteonError;
use crate::session::{AlgorithmSelector, SessionHandle, SessionInfo, SessionInit, SessionTable};
use std::sync::PoisonError;
use tracing::debug;

#[derive(Debug)]
pub struct Cryptocteon {
    table: SessionTable,
    selector: AlgorithmSelector,
}

impl Default for Cryptocteon {
    fn default() -> Self {
        Self::new()
    }
}

impl Cryptocteon {
    /// Front end with default capacity and ICV length.
    pub fn new() -> Self {
        CryptocteonBuilder::new().build()
    }

    pub fn builder() -> CryptocteonBuilder {
        CryptocteonBuilder::new()
    }

    pub(crate) fn from_parts(table: SessionTable, selector: AlgorithmSelector) -> Self {
        Self { table, selector }
    }

    /// Create a session from at most one cipher and one mac entry.
    ///
    /// # Errors
    ///
    /// - [`CryptocteonError::InvalidArgument`] for a list the selector rejects
    /// - [`CryptocteonError::ResourceExhausted`] if the table cannot grow
    pub fn new_session(&self, inits: &[SessionInit]) -> Result<SessionHandle, CryptocteonError> {
        let session = self.selector.build(inits).map_err(|e| {
            debug!(error = %e, "session rejected");
            e
        })?;
        let (cipher, mac) = (session.cipher(), session.mac());
        let handle = self.table.insert(session)?;
        debug!(
            %handle,
            cipher = ?cipher.map(|c| c.id()),
            mac = ?mac.map(|m| m.id()),
            "session created"
        );
        Ok(handle)
    }

    /// Free a session. Handle 0 is accepted and ignored.
    ///
    /// # Errors
    ///
    /// [`CryptocteonError::NotFound`] for an unknown or already freed handle.
    pub fn free_session(&self, handle: SessionHandle) -> Result<(), CryptocteonError> {
        self.table.free(handle)?;
        debug!(%handle, "session freed");
        Ok(())
    }

    /// Run one request to completion. The result is the completion status.
    pub fn process(&self, request: CryptoRequest<'_>) -> Result<(), CryptocteonError> {
        let handle = request.handle;
        let status = RequestDispatcher::new(&self.table).process(request);
        if let Err(e) = &status {
            debug!(%handle, error = %e, "request failed");
        }
        status
    }

    /// Run one request and report its completion status through `on_done`.
    ///
    /// `on_done` is called exactly once, on the calling thread, before
    /// `submit` returns.
    pub fn submit<F>(&self, request: CryptoRequest<'_>, on_done: F)
    where
        F: FnOnce(Result<(), CryptocteonError>),
    {
        on_done(self.process(request));
    }

    /// Key-free snapshot of a live session.
    pub fn session_info(&self, handle: SessionHandle) -> Result<SessionInfo, CryptocteonError> {
        let shared = self.table.lookup(handle)?;
        let session = shared.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(session.info())
    }

    /// Slots currently allocated, including the reserved slot 0.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    pub fn live_sessions(&self) -> usize {
        self.table.live_sessions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn front_end_is_thread_safe() {
        assert_send_sync::<Cryptocteon>();
    }

    #[test]
    fn submit_reports_once() {
        let engine = Cryptocteon::new();
        let mut calls = 0;
        let mut buf = vec![0u8; 16];
        engine.submit(
            CryptoRequest::new(SessionHandle::from_raw(9), &[], &mut buf),
            |status| {
                calls += 1;
                assert!(matches!(status, Err(CryptocteonError::InvalidArgument(_))));
            },
        );
        assert_eq!(calls, 1);
    }
}
