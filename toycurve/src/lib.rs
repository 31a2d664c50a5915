#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

mod affine;
mod curve;
mod dev;
mod error;
mod mul;
mod order;
mod point_arithmetic;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

pub use crate::{
    affine::CurvePoint,
    curve::{Curve, Points},
    error::{Error, Result},
    order::{BruteForce, OrderCache, PointCounter, divisors},
};
pub use toyfield::{self, FieldElement, PRIMES};
