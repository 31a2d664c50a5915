#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

pub mod exchange;
pub mod fernet;

mod error;
mod key;
mod message;

pub use crate::{
    error::{Error, Result},
    exchange::{Mode, PublicKey, SecretScalar, SharedPoint, StoreKey},
    key::{KEY_LEN, KeySchedule, SymmetricKey, derive_key, derive_key_with},
    message::MessageBox,
};
pub use toycurve;
