//! Diffie-Hellman style key exchange on a toy curve.
//!
//! Alice and Bob agree on a curve and a base point `G`. Each picks a secret
//! scalar, publishes `[secret] G`, and multiplies the other's public point by
//! their own secret. Both arrive at `[a·b] G`, whose coordinates become the
//! Fernet key for their messages.

use crate::{Error, KeySchedule, Result, SymmetricKey};
use core::fmt;
use toycurve::{Curve, CurvePoint, OrderCache, PointCounter};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// How a scalar is applied to a base point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// `[n] G`.
    #[default]
    Forward,

    /// `[n⁻¹] G`, the inverse taken modulo the order of `G`, which undoes a
    /// forward multiplication by `n`.
    ///
    /// The modulus is the subgroup order of `G`, not the field prime `p`.
    /// Inverting modulo `p` generally gives a different point when `p` differs
    /// from the order of `G`, and that point does not map back to `G` under
    /// [`Mode::Forward`].
    Inverse,
}

impl Mode {
    /// Numeric code of the mode in storage keys: 1 forward, 2 inverse.
    pub const fn code(self) -> u8 {
        match self {
            Mode::Forward => 1,
            Mode::Inverse => 2,
        }
    }
}

/// Apply scalar `n` to `base` in the given mode.
///
/// In [`Mode::Inverse`], `n` must be coprime to the subgroup order of `base`,
/// otherwise [`Error::NotInvertible`] is returned.
pub fn apply<C: PointCounter>(
    mode: Mode,
    n: i64,
    base: &CurvePoint,
    cache: &OrderCache<C>,
) -> Result<CurvePoint> {
    match mode {
        Mode::Forward => Ok(base * n),
        Mode::Inverse => {
            let modulus = cache.subgroup_order(base);
            let inverse =
                inverse_mod(n, modulus).ok_or(Error::NotInvertible { scalar: n, modulus })?;
            debug!(n, modulus, inverse, "inverted scalar");
            Ok(base.multiply_unsigned(inverse))
        }
    }
}

/// Inverse of `n` modulo `m` by the extended Euclidean algorithm.
fn inverse_mod(n: i64, m: u64) -> Option<u64> {
    let m = i128::from(m);
    let (mut r0, mut r1) = (i128::from(n).rem_euclid(m), m);
    let (mut s0, mut s1) = (1i128, 0i128);

    while r1 != 0 {
        let q = r0 / r1;
        (r0, r1) = (r1, r0 - q * r1);
        (s0, s1) = (s1, s0 - q * s1);
    }

    if r0 != 1 {
        return None;
    }
    u64::try_from(s0.rem_euclid(m)).ok()
}

/// Secret scalar of one party.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretScalar {
    value: u64,
}

impl SecretScalar {
    /// Secret `value`, clamped to `bound`.
    ///
    /// Use [`OrderCache::private_key_bound`] for the bound, so that a scalar
    /// never reaches the order of the base point.
    pub fn new(value: u64, bound: u64) -> Self {
        Self {
            value: value.min(bound),
        }
    }

    /// The scalar.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Public point `[secret] base`.
    pub fn public_key(&self, base: &CurvePoint) -> PublicKey {
        PublicKey {
            point: base.multiply_unsigned(self.value),
        }
    }

    /// Shared point `[secret] peer`.
    pub fn diffie_hellman(&self, peer: &PublicKey) -> SharedPoint {
        SharedPoint {
            point: peer.point.multiply_unsigned(self.value),
        }
    }
}

impl fmt::Debug for SecretScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretScalar").finish_non_exhaustive()
    }
}

/// Public point of one party.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey {
    point: CurvePoint,
}

impl PublicKey {
    /// Public key of `secret` for the base point `base`.
    pub fn from_secret(secret: &SecretScalar, base: &CurvePoint) -> Self {
        secret.public_key(base)
    }

    /// Public key published as a bare point.
    pub fn from_point(point: CurvePoint) -> Self {
        Self { point }
    }

    /// The public point.
    pub fn as_point(&self) -> &CurvePoint {
        &self.point
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.point, f)
    }
}

/// Point both parties compute.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SharedPoint {
    point: CurvePoint,
}

impl SharedPoint {
    /// The shared point.
    pub fn as_point(&self) -> &CurvePoint {
        &self.point
    }

    /// Fernet key derived from the shared point's coordinates.
    pub fn symmetric_key(&self) -> Result<SymmetricKey> {
        SymmetricKey::from_point(&self.point)
    }

    /// Fernet key derived with an explicit schedule.
    pub fn symmetric_key_with(&self, schedule: KeySchedule) -> Result<SymmetricKey> {
        SymmetricKey::from_point_with(&self.point, schedule)
    }
}

impl fmt::Debug for SharedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedPoint").finish_non_exhaustive()
    }
}

/// Key under which points placed on a curve are stored, `(p, a, b)` or
/// `(p, a, b, mode)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StoreKey {
    /// Curve the points lie on.
    pub curve: Curve,
    /// Mode the points were produced in, if the view has one.
    pub mode: Option<Mode>,
}

impl StoreKey {
    /// Key for a view without modes.
    pub const fn new(curve: Curve) -> Self {
        Self { curve, mode: None }
    }

    /// Key for a view with a mode selector.
    pub const fn with_mode(curve: Curve, mode: Mode) -> Self {
        Self {
            curve,
            mode: Some(mode),
        }
    }
}

impl From<Curve> for StoreKey {
    fn from(curve: Curve) -> Self {
        Self::new(curve)
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let curve = &self.curve;
        write!(f, "({}, {}, {}", curve.prime(), curve.a(), curve.b())?;
        if let Some(mode) = self.mode {
            write!(f, ", {}", mode.code())?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::{Mode, SecretScalar, StoreKey, apply, inverse_mod};
    use crate::Error;
    use toycurve::{Curve, OrderCache};

    #[test]
    fn inverses() {
        assert_eq!(inverse_mod(5, 19), Some(4));
        assert_eq!(inverse_mod(-5, 19), Some(15));
        assert_eq!(inverse_mod(3, 18), None);
        assert_eq!(inverse_mod(0, 19), None);
        assert_eq!(inverse_mod(7, 1), Some(0));
        assert_eq!(inverse_mod(i64::MIN, 19), Some(1));
    }

    #[test]
    fn forward_and_inverse() {
        let cache = OrderCache::new();
        let curve = Curve::new(17, 2, 2).unwrap();
        let g = curve.point(5, 1).unwrap();

        assert_eq!(apply(Mode::Forward, 5, &g, &cache), Ok(g * 5));
        // 5⁻¹ ≡ 4 (mod 19)
        let h = apply(Mode::Inverse, 5, &g, &cache).unwrap();
        assert_eq!(h, curve.point(3, 1).unwrap());
        assert_eq!(apply(Mode::Forward, 5, &h, &cache), Ok(g));
    }

    #[test]
    fn inverse_needs_a_unit() {
        let cache = OrderCache::new();
        let p = Curve::new(17, 0, 7).unwrap().point(5, 8).unwrap();
        assert_eq!(
            apply(Mode::Inverse, 3, &p, &cache),
            Err(Error::NotInvertible {
                scalar: 3,
                modulus: 3
            })
        );
        assert_eq!(apply(Mode::Inverse, 2, &p, &cache), Ok(p * 2));
    }

    #[test]
    fn inverse_is_modulo_the_subgroup_order() {
        let cache = OrderCache::new();
        let curve = Curve::new(17, 0, 7).unwrap();
        let g = curve.point(5, 8).unwrap();

        // 2⁻¹ ≡ 2 (mod 3), the order of g, but 2⁻¹ ≡ 9 (mod 17)
        let h = apply(Mode::Inverse, 2, &g, &cache).unwrap();
        assert_eq!(h, g * 2);
        assert_ne!(h, g * 9);
        assert_eq!(apply(Mode::Forward, 2, &h, &cache), Ok(g));
    }

    #[test]
    fn secret_is_clamped() {
        assert_eq!(SecretScalar::new(25, 18).value(), 18);
        assert_eq!(SecretScalar::new(7, 18).value(), 7);
    }

    #[test]
    fn store_key_shapes() {
        let curve = Curve::new(17, -1, 7).unwrap();
        assert_eq!(StoreKey::new(curve).to_string(), "(17, 16, 7)");
        assert_eq!(
            StoreKey::with_mode(curve, Mode::Inverse).to_string(),
            "(17, 16, 7, 2)"
        );
        assert_ne!(
            StoreKey::with_mode(curve, Mode::Forward),
            StoreKey::with_mode(curve, Mode::Inverse)
        );
        assert_eq!(StoreKey::from(curve), StoreKey::new(curve));
    }
}
