//! Shared CRC8 building blocks: table generation, folding, caching, and
//! bitwise reference implementations.

pub mod cache;
pub mod reference;
pub mod tables;
