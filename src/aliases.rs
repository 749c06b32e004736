//! # Secure-Gate Type Aliases
//!
//! Fixed-size secret buffers backed by [`secure-gate`](https://github.com/Slurp9187/secure-gate).
//! All of them zeroize on drop and require an explicit `.expose_secret()` /
//! `.expose_secret_mut()` to reach the bytes.
//!
//! - [`CipherKey64`] - session cipher key buffer ([`MAX_CIPHER_KEYLEN`](crate::consts::MAX_CIPHER_KEYLEN))
//! - [`MacKey64`] - session HMAC key buffer ([`MAX_HASH_KEYLEN`](crate::consts::MAX_HASH_KEYLEN))
//! - [`Iv16`] - resolved request IV, large enough for every supported cipher

use secure_gate::fixed_alias;

fixed_alias!(pub CipherKey64, 64);
fixed_alias!(pub MacKey64, 64);
fixed_alias!(pub Iv16, 16);

// HMAC primitives
use hmac::Hmac;
use md5::Md5;
use sha1::Sha1;

pub type HmacMd5 = Hmac<Md5>;
pub type HmacSha1 = Hmac<Sha1>;
