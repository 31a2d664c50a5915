//! Test vectors for curves small enough to check by hand.

/// Curve `(p, a, b)` with its group order, the point at infinity included.
#[derive(Clone, Copy, Debug)]
pub struct OrderVector {
    /// Field modulus.
    pub p: u64,
    /// Coefficient `a`.
    pub a: i64,
    /// Coefficient `b`.
    pub b: i64,
    /// Group order `N`.
    pub order: u64,
}

/// Point on a curve `(p, a, b)` with the order of the subgroup it generates.
#[derive(Clone, Copy, Debug)]
pub struct SubgroupVector {
    /// Field modulus.
    pub p: u64,
    /// Coefficient `a`.
    pub a: i64,
    /// Coefficient `b`.
    pub b: i64,
    /// Affine coordinates of the point.
    pub point: (u64, u64),
    /// Subgroup order.
    pub order: u64,
}

/// Group orders found by counting points.
///
/// `y² = x³` over `F_17` is singular; it is included because its point count
/// is still well defined.
#[rustfmt::skip]
pub const ORDER_TEST_VECTORS: &[OrderVector] = &[
    OrderVector { p: 2, a: 1, b: 1, order: 3 },
    OrderVector { p: 3, a: 2, b: 1, order: 7 },
    OrderVector { p: 11, a: 1, b: 1, order: 14 },
    OrderVector { p: 13, a: 0, b: 7, order: 7 },
    OrderVector { p: 17, a: 0, b: 0, order: 18 },
    OrderVector { p: 17, a: 0, b: 7, order: 18 },
    OrderVector { p: 17, a: 2, b: 2, order: 19 },
    OrderVector { p: 17, a: -1, b: 0, order: 16 },
    OrderVector { p: 97, a: 2, b: 3, order: 100 },
    OrderVector { p: 541, a: -1, b: 5, order: 564 },
];

/// Subgroup orders.
#[rustfmt::skip]
pub const SUBGROUP_TEST_VECTORS: &[SubgroupVector] = &[
    SubgroupVector { p: 17, a: 0, b: 7, point: (5, 8), order: 3 },
    SubgroupVector { p: 17, a: 0, b: 7, point: (3, 0), order: 2 },
    SubgroupVector { p: 17, a: 2, b: 2, point: (5, 1), order: 19 },
    SubgroupVector { p: 97, a: 2, b: 3, point: (3, 6), order: 5 },
    SubgroupVector { p: 17, a: 0, b: 0, point: (1, 1), order: 17 },
];

/// The textbook curve `y² = x³ + 2x + 2` over `F_17`.
pub const TEXTBOOK_CURVE: (u64, i64, i64) = (17, 2, 2);

/// Generator `G = (5, 1)` of [`TEXTBOOK_CURVE`], whose group has prime
/// order 19.
pub const TEXTBOOK_GENERATOR: (u64, u64) = (5, 1);

/// Multiples `[k] G` of [`TEXTBOOK_GENERATOR`] for `k = 1, …, 19`, with
/// `None` standing for the point at infinity.
pub const MUL_TEST_VECTORS: &[Option<(u64, u64)>; 19] = &[
    Some((5, 1)),
    Some((6, 3)),
    Some((10, 6)),
    Some((3, 1)),
    Some((9, 16)),
    Some((16, 13)),
    Some((0, 6)),
    Some((13, 7)),
    Some((7, 6)),
    Some((7, 11)),
    Some((13, 10)),
    Some((0, 11)),
    Some((16, 4)),
    Some((9, 1)),
    Some((3, 16)),
    Some((10, 11)),
    Some((6, 14)),
    Some((5, 16)),
    None,
];
