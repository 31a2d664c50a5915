//! Group and subgroup orders.

use crate::{Curve, CurvePoint, Error, Result};
use core::fmt;
use once_cell::sync::OnceCell;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};
use tracing::{debug, debug_span, trace};

/// Source of group orders for the [`OrderCache`].
///
/// Implemented by [`BruteForce`] and by any `Fn(&Curve) -> u64`, which lets
/// callers substitute a counting function that records how often it runs.
pub trait PointCounter {
    /// Number of points on `curve`, the point at infinity included.
    fn count_points(&self, curve: &Curve) -> u64;
}

impl<F> PointCounter for F
where
    F: Fn(&Curve) -> u64,
{
    fn count_points(&self, curve: &Curve) -> u64 {
        self(curve)
    }
}

/// Counts points by testing the curve equation at every `(x, y)` in
/// `F_p × F_p`.
///
/// Takes `O(p²)` field operations.
#[derive(Clone, Copy, Debug, Default)]
pub struct BruteForce;

impl PointCounter for BruteForce {
    fn count_points(&self, curve: &Curve) -> u64 {
        let _span = debug_span!("count_points", p = curve.prime()).entered();
        let p = curve.prime();

        let mut count = 1;
        for x in 0..p {
            let rhs = curve.rhs(&curve.element(x));
            count += (0..p).filter(|&y| curve.element(y).square() == rhs).count() as u64;
        }

        count
    }
}

/// Memoized group orders, keyed by curve.
///
/// Each curve's order is computed at most once, even when several threads ask
/// for it at the same time, and is never invalidated. The map lock is only
/// held while looking up a curve's slot, so different curves can be counted
/// in parallel.
pub struct OrderCache<C = BruteForce> {
    counter: C,
    orders: Mutex<HashMap<Curve, Arc<OnceCell<u64>>>>,
}

impl OrderCache {
    /// Empty cache counting points by brute force.
    pub fn new() -> Self {
        Self::with_counter(BruteForce)
    }
}

impl Default for OrderCache {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> OrderCache<C> {
    /// Empty cache computing orders with `counter`.
    pub fn with_counter(counter: C) -> Self {
        Self {
            counter,
            orders: Mutex::new(HashMap::new()),
        }
    }

    /// Number of curves with a computed order.
    pub fn len(&self) -> usize {
        self.orders()
            .values()
            .filter(|cell| cell.get().is_some())
            .count()
    }

    /// Has no order been computed yet?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The order of `curve` if it has already been computed.
    pub fn cached(&self, curve: &Curve) -> Option<u64> {
        self.orders()
            .get(curve)
            .and_then(|cell| cell.get().copied())
    }

    fn orders(&self) -> MutexGuard<'_, HashMap<Curve, Arc<OnceCell<u64>>>> {
        // Cells are only ever filled by `OnceCell`, so the map is consistent
        // even if a counter panicked while the lock was held elsewhere.
        self.orders.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C: PointCounter> OrderCache<C> {
    /// Order `N` of the group of points on `curve`, the point at infinity
    /// included.
    pub fn group_order(&self, curve: &Curve) -> u64 {
        let cell = Arc::clone(self.orders().entry(*curve).or_default());

        *cell.get_or_init(|| {
            let order = self.counter.count_points(curve);
            debug!(%curve, order, "computed group order");
            order
        })
    }

    /// Order of the cyclic subgroup generated by `point`: the least `d > 0`
    /// with `[d] point = ∞`.
    ///
    /// By Lagrange's theorem `d` divides the group order, so only divisors are
    /// tried, in ascending order. Singular cubics do not satisfy Lagrange's
    /// theorem; when no divisor works the multiples are walked one by one.
    ///
    /// # Panics
    ///
    /// If the point never returns to the identity, which the group law rules
    /// out.
    pub fn subgroup_order(&self, point: &CurvePoint) -> u64 {
        if point.is_identity() {
            return 1;
        }

        let n = self.group_order(&point.curve());
        for d in divisors(n) {
            trace!(divisor = d, "trying subgroup order");
            if point.multiply_unsigned(d).is_identity() {
                return d;
            }
        }

        debug!(curve = %point.curve(), %point, "no divisor of the group order annihilates point");

        let mut multiple = *point;
        for d in 1..=2 * n {
            if multiple.is_identity() {
                return d;
            }
            multiple += point;
        }

        unreachable!("{point} has no finite order on {}", point.curve())
    }

    /// Every element of the subgroup generated by `point`, in the order
    /// `[0] point, [1] point, …, [d - 1] point`.
    pub fn subgroup(&self, point: &CurvePoint) -> Vec<CurvePoint> {
        let order = self.subgroup_order(point);
        let mut multiples = Vec::with_capacity(order as usize);

        let mut multiple = point.curve().identity();
        for _ in 0..order {
            multiples.push(multiple);
            multiple += point;
        }

        multiples
    }

    /// Upper bound for a private key on `curve`.
    ///
    /// Without a base point any scalar up to the group order is allowed. With
    /// one, scalars stop one short of its subgroup order, since `[d] G` is
    /// the identity.
    pub fn private_key_bound(&self, curve: &Curve, base: Option<&CurvePoint>) -> Result<u64> {
        match base {
            None => Ok(self.group_order(curve)),
            Some(g) if g.curve() != *curve => Err(Error::CurveMismatch {
                left: g.curve(),
                right: *curve,
            }),
            Some(g) => Ok(self.subgroup_order(g) - 1),
        }
    }
}

impl<C> fmt::Debug for OrderCache<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderCache")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

/// Positive divisors of `n` in ascending order.
///
/// Found by trial division up to `√n`, collecting both factors of each pair.
/// Zero has no divisors.
pub fn divisors(n: u64) -> Vec<u64> {
    let mut small = Vec::new();
    let mut large = Vec::new();

    let mut i = 1;
    while i <= n / i {
        if n % i == 0 {
            small.push(i);
            if i != n / i {
                large.push(n / i);
            }
        }
        i += 1;
    }

    small.extend(large.into_iter().rev());
    small
}
