//! Fully-parameterized CRC8 computation (the "hacker" path).
//!
//! Unlike the named variants, a [`Custom`] configuration builds a fresh
//! table on every call. Correctness and flexibility are prioritized
//! over the cost of regenerating 256 entries; there is no shared state,
//! so this path is inherently race-free.

use traits::Checksum;

use crate::common::tables::{fold, generate_table, reverse8, Convention};

/// Caller-supplied CRC8 parameters.
///
/// The table is always built with the shift-right (LSB-first)
/// recurrence; setting `reflect` bit-reverses the polynomial first, so
/// a documented reflected standard can be expressed with its catalogue
/// polynomial.
///
/// # Examples
///
/// ```
/// use crc8::Custom;
///
/// // CRC8/MAXIM via its documented polynomial.
/// let maxim = Custom { polynomial: 0x31, initial: 0x00, xor_out: 0x00, reflect: true };
/// assert_eq!(maxim.checksum(b"123456789"), 0xA1);
///
/// // Defaults: poly 0x31, init 0xFF, xorout 0x00, no reflection.
/// assert_eq!(Custom::new().checksum(b""), 0xFF);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Custom {
  /// Polynomial as supplied by the caller.
  pub polynomial: u8,
  /// Initial value for the CRC register.
  pub initial: u8,
  /// XOR value applied to the final register.
  pub xor_out: u8,
  /// Bit-reverse the polynomial before building the table.
  pub reflect: bool,
}

impl Custom {
  /// Create a configuration with the default parameters
  /// (poly 0x31, init 0xFF, xorout 0x00, no reflection).
  #[must_use]
  pub const fn new() -> Self {
    Self {
      polynomial: 0x31,
      initial: 0xFF,
      xor_out: 0x00,
      reflect: false,
    }
  }

  /// Compute the checksum of `data` with these parameters.
  ///
  /// Builds a request-scoped table, folds, and applies the output mask.
  #[must_use]
  pub const fn checksum(&self, data: &[u8]) -> u8 {
    let poly = if self.reflect { reverse8(self.polynomial) } else { self.polynomial };
    let table = generate_table(poly, Convention::Low);
    fold(&table, self.initial, data) ^ self.xor_out
  }
}

impl Default for Custom {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl Checksum for Custom {
  const OUTPUT_SIZE: usize = 1;
  type Output = u8;

  #[inline]
  fn checksum(&self, data: &[u8]) -> u8 {
    Custom::checksum(self, data)
  }
}

/// Compute a CRC8 with caller-supplied parameters in one call.
///
/// Convenience wrapper over [`Custom::checksum`].
///
/// # Examples
///
/// ```
/// use crc8::{hacker8, Custom};
///
/// // CRC8/ROHC via the generic path.
/// let rohc = Custom { polynomial: 0x07, initial: 0xFF, xor_out: 0x00, reflect: true };
/// assert_eq!(hacker8(b"123456789", rohc), 0xD0);
/// ```
#[inline]
#[must_use]
pub const fn hacker8(data: &[u8], params: Custom) -> u8 {
  params.checksum(data)
}
