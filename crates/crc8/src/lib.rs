//! CRC8 and single-byte checksum variants.
//!
//! This crate provides table-driven implementations of the common CRC8
//! standards plus the simple accumulator checksums (XOR fold, modular
//! sum, Fletcher-8), and a fully-parameterized entry point for
//! arbitrary polynomials.
//!
//! # Supported Algorithms
//!
//! | Name | Poly | Init | Xorout | Refin/out | Check |
//! |------|------|------|--------|-----------|-------|
//! | [`crc8()`] | 0x07 | 0x00 | 0x00 | false | 0xF4 |
//! | [`itu8`] | 0x07 | 0x00 | 0x55 | false | 0xA1 |
//! | [`rohc`] | 0x07 | 0xFF | 0x00 | true | 0xD0 |
//! | [`maxim8`] | 0x31 | 0x00 | 0x00 | true | 0xA1 |
//! | [`smbus`] | 0x07 | 0x00 | 0x00 | false | 0xF4 |
//! | [`autosar8`] | 0x2F | 0xFF | 0xFF | false | 0xDF |
//! | [`lte8`] | 0x9B | 0x00 | 0x00 | false | 0xEA |
//! | [`wcdma`] | 0x9B | 0x00 | 0x00 | true | 0x25 |
//! | [`sae_j1855`] | 0x1D | 0xFF | 0xFF | false | 0x4B |
//! | [`icode`] | 0x1D | 0xFD | 0x00 | false | 0x7E |
//! | [`gsm8_a`] | 0x1D | 0x00 | 0x00 | false | 0x37 |
//! | [`gsm8_b`] | 0x49 | 0x00 | 0xFF | false | 0x94 |
//! | [`nrsc_5`] | 0x31 | 0xFF | 0x00 | false | 0xF7 |
//! | [`bluetooth`] | 0xA7 | 0x00 | 0x00 | true | 0x26 |
//! | [`dvb_s2`] | 0xD5 | 0x00 | 0x00 | false | 0xBC |
//! | [`ebu8`] | 0x1D | 0xFF | 0x00 | true | 0x97 |
//! | [`darc`] | 0x39 | 0x00 | 0x00 | true | 0x15 |
//! | [`opensafety8`] | 0x2F | 0x00 | 0x00 | false | 0x3E |
//! | [`lrc`]/[`bcc`]/[`intel`] | XOR fold | 0x00 | - | - | 0x31 |
//! | [`sum8`] | mod-256 sum | 0x00 | - | - | 0xDD |
//! | [`fletcher8`] | two mod-15 lanes | - | - | - | 0x0C |
//!
//! "Check" is the result over the ASCII bytes of `"123456789"`.
//!
//! # Example
//!
//! ```rust
//! use crc8::{Crc8Kind, Custom};
//!
//! // One-shot named variants
//! assert_eq!(crc8::maxim8(b"123456789"), 0xA1);
//! assert_eq!(Crc8Kind::Bluetooth.checksum(b"123456789"), 0x26);
//!
//! // Arbitrary parameters ("hacker" path)
//! let params = Custom { polynomial: 0x07, initial: 0xFF, xor_out: 0x00, reflect: true };
//! assert_eq!(params.checksum(b"123456789"), 0xD0);
//! ```
//!
//! # Tables and Caching
//!
//! Each named variant's 256-entry lookup table is generated on first
//! use and memoized behind a one-time initialization primitive for the
//! life of the process. The [`Custom`] path builds a request-scoped
//! table per call and caches nothing. Table generation is also `const`,
//! so fixed tables can be baked at compile time via
//! [`Crc8Params::table`].
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for
//! embedded use:
//!
//! ```toml
//! [dependencies]
//! crc8 = { version = "0.1", default-features = false }
//! ```
//!
//! On targets without atomics the per-variant memoization is
//! unavailable and tables are rebuilt per call.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod common;

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

mod accum;
mod custom;
mod params;
mod variants;

pub use accum::{
  bcc, bcc_with_initial, fletcher8, intel, intel_with_initial, lrc, lrc_with_initial, sum8, sum8_with_initial,
};
pub use common::tables::{reverse8, table8, Convention, Table, TABLE_SIZE};
pub use custom::{hacker8, Custom};
pub use params::Crc8Params;
pub use variants::{
  autosar8, bluetooth, crc8, crc8_with_initial, darc, dvb_s2, ebu8, gsm8_a, gsm8_a_with_initial, gsm8_b, icode,
  icode_with_initial, itu8, itu8_with_initial, lte8, maxim8, maxim8_with_initial, nrsc_5, nrsc_5_with_initial,
  opensafety8, rohc, rohc_with_initial, sae_j1855, sae_j1855_with_initial, smbus, wcdma, Crc8Kind,
};
// Re-export traits for convenience
pub use traits::{Checksum, UnknownAlgorithm};

#[doc(hidden)]
pub mod __internal {
  pub use crate::common::reference::{crc8_high_bitwise, crc8_low_bitwise};
}

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library author string.
pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
