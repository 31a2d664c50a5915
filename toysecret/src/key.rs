//! Symmetric keys derived from text and from shared curve points.

use crate::{Error, Result};
use base64ct::{Base64Url, Encoding};
use core::fmt;
use hmac::{
    Hmac,
    digest::{Key, KeyInit},
};
use sha2::Sha256;
use subtle::{Choice, ConstantTimeEq};
use toycurve::CurvePoint;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(feature = "hkdf")]
use hkdf::Hkdf;

/// Size of a [`SymmetricKey`] in bytes.
pub const KEY_LEN: usize = 32;

/// Half of the key used for each of signing and encryption.
const HALF_LEN: usize = KEY_LEN / 2;

#[cfg(feature = "hkdf")]
const HKDF_SALT: &[u8] = b"toysecret shared point v1";

#[cfg(feature = "hkdf")]
const HKDF_INFO: &[u8] = b"fernet key";

/// How key text is turned into [`KEY_LEN`] bytes of key material.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum KeySchedule {
    /// The UTF-8 bytes of the text, padded on the right with ASCII spaces and
    /// cut off after [`KEY_LEN`] bytes.
    ///
    /// Interoperates with keys built as
    /// `base64.urlsafe_b64encode(text.ljust(32).encode())`. Texts that agree
    /// on their first 32 bytes map to the same key.
    #[default]
    Padded,

    /// HKDF-SHA256 over the UTF-8 bytes of the text, with a fixed salt and
    /// info label. Every byte of the text affects the key.
    #[cfg(feature = "hkdf")]
    HkdfSha256,
}

/// Fernet key: 16 bytes of HMAC-SHA256 signing key followed by 16 bytes of
/// AES-128 encryption key.
///
/// Zeroized on drop and compared in constant time.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey {
    bytes: [u8; KEY_LEN],
}

impl SymmetricKey {
    /// Key from raw bytes.
    pub const fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Key from a slice, which must be exactly [`KEY_LEN`] bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes = bytes.try_into().map_err(|_| Error::InvalidKeyLength {
            expected: KEY_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self { bytes })
    }

    /// Key from its URL-safe base64 encoding, the form Fernet keys are
    /// usually exchanged in.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        let mut decoded = Base64Url::decode_vec(encoded).map_err(|_| Error::InvalidKeyEncoding)?;
        let key = Self::from_slice(&decoded);
        decoded.zeroize();
        key
    }

    /// Key derived from the text `(x,y)` of a shared point.
    ///
    /// The point at infinity has no coordinates to derive from and yields
    /// [`Error::MissingInput`].
    pub fn from_point(point: &CurvePoint) -> Result<Self> {
        Self::from_point_with(point, KeySchedule::default())
    }

    /// Key derived from the text of a shared point using `schedule`.
    pub fn from_point_with(point: &CurvePoint, schedule: KeySchedule) -> Result<Self> {
        if point.is_identity() {
            return Err(Error::MissingInput("shared point has no coordinates"));
        }

        let mut text = point.to_string();
        let key = derive_key_with(&text, schedule);
        text.zeroize();
        key
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }

    /// URL-safe base64 encoding of the key, with padding.
    pub fn to_base64(&self) -> String {
        Base64Url::encode_string(&self.bytes)
    }

    /// HMAC-SHA256 instance keyed with the signing half.
    pub(crate) fn mac(&self) -> Hmac<Sha256> {
        // HMAC zero-pads keys shorter than the hash block, so this is the
        // same key as the bare 16 bytes.
        let mut key = Key::<Hmac<Sha256>>::default();
        key[..HALF_LEN].copy_from_slice(&self.bytes[..HALF_LEN]);
        let mac = <Hmac<Sha256> as KeyInit>::new(&key);
        key.as_mut_slice().zeroize();
        mac
    }

    /// AES-128 key, the encryption half.
    pub(crate) fn encryption_key(&self) -> [u8; HALF_LEN] {
        let mut key = [0u8; HALF_LEN];
        key.copy_from_slice(&self.bytes[HALF_LEN..]);
        key
    }
}

impl ConstantTimeEq for SymmetricKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.bytes[..].ct_eq(&other.bytes[..])
    }
}

impl PartialEq for SymmetricKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SymmetricKey {}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymmetricKey").finish_non_exhaustive()
    }
}

/// Derive a key from key text with the default [`KeySchedule::Padded`].
///
/// Empty text is rejected with [`Error::MissingInput`].
pub fn derive_key(source: &str) -> Result<SymmetricKey> {
    derive_key_with(source, KeySchedule::default())
}

/// Derive a key from key text with the given schedule.
pub fn derive_key_with(source: &str, schedule: KeySchedule) -> Result<SymmetricKey> {
    if source.is_empty() {
        return Err(Error::MissingInput("key text is empty"));
    }

    debug!(len = source.len(), ?schedule, "deriving symmetric key");

    let mut bytes = [b' '; KEY_LEN];
    match schedule {
        KeySchedule::Padded => {
            let len = source.len().min(KEY_LEN);
            bytes[..len].copy_from_slice(&source.as_bytes()[..len]);
        }
        #[cfg(feature = "hkdf")]
        KeySchedule::HkdfSha256 => {
            Hkdf::<Sha256>::new(Some(HKDF_SALT), source.as_bytes())
                .expand(HKDF_INFO, &mut bytes)
                .map_err(|_| Error::KeyDerivation)?;
        }
    }

    let key = SymmetricKey::from_bytes(bytes);
    bytes.zeroize();
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::{KEY_LEN, KeySchedule, SymmetricKey, derive_key, derive_key_with};
    use crate::Error;
    use hmac::{Hmac, Mac};
    use sha2::Sha256;
    use toycurve::Curve;

    #[test]
    fn padded_key_matches_ljust() {
        // base64.urlsafe_b64encode(b"(3,4)".ljust(32))
        let key = derive_key("(3,4)").unwrap();
        assert_eq!(
            key.to_base64(),
            "KDMsNCkgICAgICAgICAgICAgICAgICAgICAgICAgICA="
        );
        assert_eq!(&key.as_bytes()[..5], b"(3,4)");
        assert!(key.as_bytes()[5..].iter().all(|&b| b == b' '));
    }

    #[test]
    fn long_text_is_truncated() {
        let exact = "0123456789abcdef0123456789abcdef";
        assert_eq!(exact.len(), KEY_LEN);
        assert_eq!(
            derive_key(exact).unwrap(),
            derive_key(&format!("{exact} and more")).unwrap()
        );
    }

    #[cfg(feature = "hkdf")]
    #[test]
    fn hkdf_uses_the_whole_text() {
        let exact = "0123456789abcdef0123456789abcdef";
        let long = format!("{exact} and more");
        let a = derive_key_with(exact, KeySchedule::HkdfSha256).unwrap();
        let b = derive_key_with(&long, KeySchedule::HkdfSha256).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, derive_key_with(exact, KeySchedule::HkdfSha256).unwrap());
        assert_ne!(a, derive_key(exact).unwrap());
    }

    #[test]
    fn empty_text_is_missing_input() {
        assert!(matches!(derive_key(""), Err(Error::MissingInput(_))));
    }

    #[test]
    fn from_point() {
        let curve = Curve::new(17, 0, 7).unwrap();
        let p = curve.point(5, 8).unwrap();
        assert_eq!(
            SymmetricKey::from_point(&p).unwrap(),
            derive_key("(5,8)").unwrap()
        );
        assert!(matches!(
            SymmetricKey::from_point(&curve.identity()),
            Err(Error::MissingInput(_))
        ));
    }

    #[test]
    fn base64_round_trip() {
        let key = derive_key("(3,4)").unwrap();
        assert_eq!(SymmetricKey::from_base64(&key.to_base64()).unwrap(), key);
        assert_eq!(
            SymmetricKey::from_base64("KDMsNCk="),
            Err(Error::InvalidKeyLength {
                expected: KEY_LEN,
                actual: 5
            })
        );
        assert_eq!(
            SymmetricKey::from_base64("not base64!"),
            Err(Error::InvalidKeyEncoding)
        );
    }

    #[test]
    fn from_slice_checks_length() {
        let key = derive_key("(3,4)").unwrap();
        assert_eq!(SymmetricKey::from_slice(key.as_bytes()).unwrap(), key);
        assert_eq!(
            SymmetricKey::from_slice(&[0; 16]),
            Err(Error::InvalidKeyLength {
                expected: KEY_LEN,
                actual: 16
            })
        );
    }

    #[test]
    fn mac_uses_the_signing_half() {
        let key = derive_key("(3,4)").unwrap();
        let expected = <Hmac<Sha256> as Mac>::new_from_slice(&key.as_bytes()[..16])
            .unwrap()
            .chain_update(b"hello bob")
            .finalize()
            .into_bytes();
        assert_eq!(
            key.mac().chain_update(b"hello bob").finalize().into_bytes(),
            expected
        );
    }

    #[test]
    fn debug_does_not_leak() {
        let key = derive_key("(3,4)").unwrap();
        assert_eq!(format!("{key:?}"), "SymmetricKey { .. }");
    }
}
