//! src/session/table.rs
//! Growable handle → session store
//!
//! Slot 0 is reserved and never occupied. The table starts empty, allocates its
//! initial capacity on first insert, and doubles (clamped to the configured
//! maximum) whenever every usable slot is taken. It never shrinks.
//!
//! A handle is `generation << 32 | index`. Freeing a slot bumps its generation,
//! so a stale handle to a reused slot is reported as not found.

use super::entity::Session;
use crate::consts::{DEFAULT_SESSION_CAPACITY, MAX_SESSION_CAPACITY, MIN_SESSION_CAPACITY};
use crate::error::CryptocteonError;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::debug;

/// Opaque session identifier. `0` is the permanent "no session" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SessionHandle(u64);

impl SessionHandle {
    pub const NONE: Self = Self(0);

    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    const fn new(index: u32, generation: u32) -> Self {
        Self(((generation as u64) << 32) | index as u64)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Slot index (low 32 bits).
    pub const fn index(self) -> usize {
        (self.0 & 0xffff_ffff) as usize
    }

    pub const fn generation(self) -> u32 {
        (self.0 >> 32) as u32
    }
}

impl fmt::Display for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A session as stored in the table. Dispatch locks it for the whole request.
pub type SharedSession = Arc<Mutex<Session>>;

#[derive(Default)]
struct Slot {
    generation: u32,
    session: Option<SharedSession>,
}

pub struct SessionTable {
    slots: RwLock<Vec<Slot>>,
    initial_capacity: usize,
    max_capacity: usize,
}

impl Default for SessionTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionTable {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_SESSION_CAPACITY, MAX_SESSION_CAPACITY)
    }

    /// `initial` and `max` are clamped to `MIN_SESSION_CAPACITY..=MAX_SESSION_CAPACITY`,
    /// and `initial` to at most `max`.
    pub fn with_capacity(initial: usize, max: usize) -> Self {
        let max_capacity = max.clamp(MIN_SESSION_CAPACITY, MAX_SESSION_CAPACITY);
        let initial_capacity = initial.clamp(MIN_SESSION_CAPACITY, max_capacity);
        Self {
            slots: RwLock::new(Vec::new()),
            initial_capacity,
            max_capacity,
        }
    }

    /// Current number of slots, including the reserved slot 0. Zero until the
    /// first insert.
    pub fn capacity(&self) -> usize {
        self.slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn live_sessions(&self) -> usize {
        self.slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|slot| slot.session.is_some())
            .count()
    }

    /// Store `session` in the first free slot, growing the table if needed.
    ///
    /// # Errors
    ///
    /// [`CryptocteonError::ResourceExhausted`] if the table is at its maximum or
    /// the larger backing store cannot be allocated. The table is unchanged.
    pub fn insert(&self, session: Session) -> Result<SessionHandle, CryptocteonError> {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);

        let free = slots
            .iter()
            .enumerate()
            .skip(1)
            .find_map(|(i, slot)| slot.session.is_none().then_some(i));
        let index = match free {
            Some(i) => i,
            None => {
                let old_len = slots.len();
                self.grow(&mut slots)?;
                old_len.max(1)
            }
        };

        let slot = &mut slots[index];
        slot.session = Some(Arc::new(Mutex::new(session)));
        // index < max_capacity <= u32::MAX
        let handle = SessionHandle::new(index as u32, slot.generation);
        Ok(handle)
    }

    fn grow(&self, slots: &mut Vec<Slot>) -> Result<(), CryptocteonError> {
        let current = slots.len();
        let target = if current == 0 {
            self.initial_capacity
        } else {
            current.saturating_mul(2).min(self.max_capacity)
        };
        if target <= current {
            return Err(CryptocteonError::ResourceExhausted(format!(
                "session table is full at {current} slots"
            )));
        }

        slots.try_reserve_exact(target - current).map_err(|e| {
            CryptocteonError::ResourceExhausted(format!(
                "cannot grow session table to {target} slots: {e}"
            ))
        })?;
        slots.resize_with(target, Slot::default);
        debug!(from = current, to = target, "session table grown");
        Ok(())
    }

    /// # Errors
    ///
    /// [`CryptocteonError::NotFound`] for handle 0, an out-of-range index, an
    /// empty slot or a stale generation.
    pub fn lookup(&self, handle: SessionHandle) -> Result<SharedSession, CryptocteonError> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        if handle.is_none() || handle.index() == 0 {
            return Err(CryptocteonError::NotFound(handle.raw()));
        }
        match slots.get(handle.index()) {
            Some(Slot {
                generation,
                session: Some(session),
            }) if *generation == handle.generation() => Ok(Arc::clone(session)),
            _ => Err(CryptocteonError::NotFound(handle.raw())),
        }
    }

    /// Clear the slot for `handle`. Handle 0 always succeeds and changes nothing.
    ///
    /// A request already holding the session finishes with it; the key material
    /// is wiped when the last reference goes away.
    pub fn free(&self, handle: SessionHandle) -> Result<(), CryptocteonError> {
        if handle.is_none() {
            return Ok(());
        }
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        let index = handle.index();
        if index == 0 {
            return Err(CryptocteonError::NotFound(handle.raw()));
        }
        match slots.get_mut(index) {
            Some(slot) if slot.generation == handle.generation() && slot.session.is_some() => {
                slot.session = None;
                slot.generation = slot.generation.wrapping_add(1);
                Ok(())
            }
            _ => Err(CryptocteonError::NotFound(handle.raw())),
        }
    }
}

impl fmt::Debug for SessionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionTable")
            .field("capacity", &self.capacity())
            .field("live_sessions", &self.live_sessions())
            .field("initial_capacity", &self.initial_capacity)
            .field("max_capacity", &self.max_capacity)
            .finish()
    }
}
