//! Core checksum traits.
//!
//! This crate provides the foundational traits that all checksum
//! implementations in this workspace conform to. It is `no_std`
//! compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Checksum`] | One-shot whole-buffer checksums | CRC8 variants, LRC, SUM8 |
//!
//! # Error Types
//!
//! - [`UnknownAlgorithm`] - Returned when a checksum algorithm name
//!   does not match any registered variant
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod checksum;
pub mod error;

pub use checksum::Checksum;
pub use error::UnknownAlgorithm;
