//! Fernet tokens.
//!
//! A token is the URL-safe base64 encoding, with padding, of
//!
//! ```text
//! version (0x80) ‖ timestamp (u64, big endian) ‖ IV (16 bytes)
//!     ‖ AES-128-CBC ciphertext with PKCS#7 padding ‖ HMAC-SHA256 (32 bytes)
//! ```
//!
//! where the HMAC covers every byte before it. Tokens interoperate with
//! other Fernet implementations given the same key.
//!
//! Every way a token can be rejected (bad encoding, wrong version, bad
//! signature, bad padding, expiry) surfaces as [`Error::AuthenticationFailed`];
//! the reason is only logged.

use crate::{Error, Result, SymmetricKey};
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit, block_padding::Pkcs7};
use base64ct::{Base64Url, Encoding};
use hmac::Mac;
use rand_core::{CryptoRng, OsRng, TryRngCore};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;

/// Version byte at the start of every token.
pub const VERSION: u8 = 0x80;

/// How far in the future, in seconds, a token's timestamp may lie when a TTL
/// is enforced.
pub const MAX_CLOCK_SKEW: u64 = 60;

const TIMESTAMP_LEN: usize = 8;
const IV_LEN: usize = 16;
const BLOCK_LEN: usize = 16;
const TAG_LEN: usize = 32;
const HEADER_LEN: usize = 1 + TIMESTAMP_LEN + IV_LEN;

/// Encrypt `plaintext` under `key`, stamped with the current time and using
/// an IV from the operating system's random number generator.
pub fn encrypt(key: &SymmetricKey, plaintext: &str) -> Result<String> {
    let mut iv = [0u8; IV_LEN];
    OsRng.try_fill_bytes(&mut iv).map_err(|_| Error::Entropy)?;
    seal(key, plaintext.as_bytes(), unix_time(), iv)
}

/// Encrypt `plaintext` under `key` with an explicit timestamp and IV source.
pub fn encrypt_with<R: CryptoRng + ?Sized>(
    key: &SymmetricKey,
    plaintext: &str,
    timestamp: u64,
    rng: &mut R,
) -> Result<String> {
    let mut iv = [0u8; IV_LEN];
    rng.fill_bytes(&mut iv);
    seal(key, plaintext.as_bytes(), timestamp, iv)
}

/// Decrypt and authenticate `token`, whatever its age.
pub fn decrypt(key: &SymmetricKey, token: &str) -> Result<String> {
    decrypt_at(key, token, unix_time(), None)
}

/// Decrypt and authenticate `token`, rejecting it once it is more than `ttl`
/// seconds old.
pub fn decrypt_with_ttl(key: &SymmetricKey, token: &str, ttl: u64) -> Result<String> {
    decrypt_at(key, token, unix_time(), Some(ttl))
}

/// Decrypt and authenticate `token` as of the Unix time `now`.
///
/// Timestamps are only checked when a `ttl` is given: the token must then be
/// at most `ttl` seconds old and stamped no more than [`MAX_CLOCK_SKEW`]
/// seconds after `now`. Without one, tokens of any age are accepted,
/// including tokens from a sender whose clock runs ahead.
pub fn decrypt_at(key: &SymmetricKey, token: &str, now: u64, ttl: Option<u64>) -> Result<String> {
    let data = Base64Url::decode_vec(token).map_err(|_| rejected("invalid base64"))?;

    if data.len() < HEADER_LEN + BLOCK_LEN + TAG_LEN {
        return Err(rejected("token too short"));
    }
    if data[0] != VERSION {
        return Err(rejected("unknown version"));
    }

    let (signed, tag) = data.split_at(data.len() - TAG_LEN);
    key.mac()
        .chain_update(signed)
        .verify_slice(tag)
        .map_err(|_| rejected("signature mismatch"))?;

    let mut timestamp = [0u8; TIMESTAMP_LEN];
    timestamp.copy_from_slice(&signed[1..1 + TIMESTAMP_LEN]);
    let timestamp = u64::from_be_bytes(timestamp);

    if let Some(ttl) = ttl {
        if timestamp.saturating_add(ttl) < now {
            return Err(rejected("token expired"));
        }
        if now.saturating_add(MAX_CLOCK_SKEW) < timestamp {
            return Err(rejected("token is from the future"));
        }
    }

    let mut iv = [0u8; IV_LEN];
    iv.copy_from_slice(&signed[1 + TIMESTAMP_LEN..HEADER_LEN]);
    let ciphertext = &signed[HEADER_LEN..];
    if ciphertext.len() % BLOCK_LEN != 0 {
        return Err(rejected("ciphertext is not a whole number of blocks"));
    }

    let plaintext = Aes128CbcDec::new(&key.encryption_key().into(), &iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| rejected("invalid padding"))?;

    debug!(timestamp, len = plaintext.len(), "decrypted token");
    String::from_utf8(plaintext).map_err(|_| Error::InvalidUtf8)
}

fn seal(key: &SymmetricKey, plaintext: &[u8], timestamp: u64, iv: [u8; IV_LEN]) -> Result<String> {
    let ciphertext = Aes128CbcEnc::new(&key.encryption_key().into(), &iv.into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut token = Vec::with_capacity(HEADER_LEN + ciphertext.len() + TAG_LEN);
    token.push(VERSION);
    token.extend_from_slice(&timestamp.to_be_bytes());
    token.extend_from_slice(&iv);
    token.extend_from_slice(&ciphertext);

    let tag = key.mac().chain_update(&token).finalize().into_bytes();
    token.extend_from_slice(&tag);

    debug!(timestamp, len = plaintext.len(), "encrypted token");
    Ok(Base64Url::encode_string(&token))
}

fn rejected(reason: &'static str) -> Error {
    warn!(reason, "rejected fernet token");
    Error::AuthenticationFailed
}

fn unix_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}
