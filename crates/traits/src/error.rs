//! Error types for checksum operations.
//!
//! Minimal `core`-only error types. Individual crates may define
//! additional errors as needed.

use core::fmt;

/// Checksum algorithm name lookup failed.
///
/// Returned when a caller-supplied algorithm name does not match any
/// registered checksum variant.
///
/// # Examples
///
/// ```
/// use traits::UnknownAlgorithm;
///
/// fn lookup(name: &str) -> Result<u8, UnknownAlgorithm> {
///   match name {
///     "crc8" => Ok(0x07),
///     _ => Err(UnknownAlgorithm::new()),
///   }
/// }
///
/// assert!(lookup("md5").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct UnknownAlgorithm;

impl UnknownAlgorithm {
  /// Create a new lookup error.
  ///
  /// This is the only way to construct this error from outside the crate,
  /// ensuring forward compatibility if fields are added in the future.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for UnknownAlgorithm {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for UnknownAlgorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("unknown checksum algorithm")
  }
}

impl core::error::Error for UnknownAlgorithm {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};

  use super::*;

  #[test]
  fn display_message() {
    assert_eq!(UnknownAlgorithm::new().to_string(), "unknown checksum algorithm");
  }

  #[test]
  fn debug_impl() {
    let dbg = format!("{:?}", UnknownAlgorithm::new());
    assert_eq!(dbg, "UnknownAlgorithm");
  }

  #[test]
  fn is_copy() {
    let e = UnknownAlgorithm::new();
    let e2 = e; // Copy
    let e3 = e; // Still valid
    assert_eq!(e2, e3);
  }

  #[test]
  fn result_err_path() {
    fn lookup_miss() -> Result<(), UnknownAlgorithm> {
      Err(UnknownAlgorithm::new())
    }
    let err = lookup_miss().unwrap_err();
    assert_eq!(err, UnknownAlgorithm::new());
  }

  #[test]
  fn trait_bounds() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<UnknownAlgorithm>();
    assert_sync::<UnknownAlgorithm>();
  }

  #[test]
  fn error_trait_impl() {
    use core::error::Error;

    let err = UnknownAlgorithm::new();
    assert!(err.source().is_none());
  }

  #[test]
  fn size_is_zero() {
    assert_eq!(core::mem::size_of::<UnknownAlgorithm>(), 0);
  }
}
