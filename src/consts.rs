//! # Constants
//!
//! This module defines the fixed sizes, defaults and host numbering used
//! throughout the library.

/// Size of the per-session cipher key buffer.
///
/// Keys longer than this are rejected; they are never truncated.
pub const MAX_CIPHER_KEYLEN: usize = 64;

/// Size of the per-session HMAC key buffer.
///
/// Equal to the MD5/SHA1 compression block, so a key never has to be
/// pre-hashed before padding.
pub const MAX_HASH_KEYLEN: usize = 64;

/// ICV length used when no creation descriptor names a truncation length.
pub const DEFAULT_ICV_LEN: usize = 12;

/// Slots allocated the first time a session is created.
///
/// Matches the host framework's software session count. Slot 0 is part of this
/// count and is never handed out.
pub const DEFAULT_SESSION_CAPACITY: usize = 32;

/// Smallest accepted initial capacity: the reserved slot 0 plus one usable slot.
pub const MIN_SESSION_CAPACITY: usize = 2;

/// Upper bound on table growth. The slot index lives in the low 32 bits of a handle.
pub const MAX_SESSION_CAPACITY: usize = u32::MAX as usize;

/// Maximum number of descriptors in a creation list or request chain.
pub const MAX_CHAIN_LEN: usize = 2;

pub const MD5_DIGEST_LEN: usize = 16;
pub const SHA1_DIGEST_LEN: usize = 20;

/// IV size for DES-CBC and 3DES-CBC.
pub const DES_IV_LEN: usize = 8;
/// IV size for AES-CBC.
pub const AES_IV_LEN: usize = 16;
/// Largest IV any supported cipher needs.
pub const MAX_IV_LEN: usize = AES_IV_LEN;

pub const DES_KEY_LEN: usize = 8;
pub const TRIPLE_DES_KEY_LEN: usize = 24;

// Host crypto framework algorithm numbers.
pub const CRYPTO_DES_CBC: u32 = 1;
pub const CRYPTO_3DES_CBC: u32 = 2;
pub const CRYPTO_MD5_HMAC: u32 = 6;
pub const CRYPTO_SHA1_HMAC: u32 = 7;
pub const CRYPTO_AES_CBC: u32 = 11;
pub const CRYPTO_NULL_HMAC: u32 = 15;
pub const CRYPTO_NULL_CBC: u32 = 16;
