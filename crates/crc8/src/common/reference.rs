//! Bitwise reference implementations.
//!
//! Table-less, one-bit-at-a-time CRC8 computation. These are the
//! canonical source of truth: the table-driven engine must produce
//! identical results. Intentionally slow; use as test oracles and for
//! auditing, not in production paths.

// All array indexing uses bounded loop indices (0..data.len()).
#![allow(clippy::indexing_slicing)]

/// Bitwise MSB-first CRC8 computation.
///
/// `poly` is the documented (non-reflected) polynomial. Returns the raw
/// register state; the caller applies any final XOR.
#[must_use]
pub const fn crc8_high_bitwise(poly: u8, init: u8, data: &[u8]) -> u8 {
  let mut crc = init;
  let mut i = 0usize;
  while i < data.len() {
    crc ^= data[i];
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & 0x80 != 0 { (crc << 1) ^ poly } else { crc << 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// Bitwise LSB-first CRC8 computation.
///
/// `poly` is the reflected polynomial (bit-reversal of the documented
/// form). Returns the raw register state; the caller applies any final
/// XOR.
#[must_use]
pub const fn crc8_low_bitwise(poly: u8, init: u8, data: &[u8]) -> u8 {
  let mut crc = init;
  let mut i = 0usize;
  while i < data.len() {
    crc ^= data[i];
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & 0x01 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn high_check_value() {
    assert_eq!(crc8_high_bitwise(0x07, 0x00, b"123456789"), 0xF4);
  }

  #[test]
  fn low_check_value() {
    // CRC8/MAXIM: reflected polynomial of 0x31 is 0x8C.
    assert_eq!(crc8_low_bitwise(0x8C, 0x00, b"123456789"), 0xA1);
  }

  #[test]
  fn empty_input_is_init() {
    assert_eq!(crc8_high_bitwise(0x07, 0x55, &[]), 0x55);
    assert_eq!(crc8_low_bitwise(0x8C, 0x55, &[]), 0x55);
  }
}
