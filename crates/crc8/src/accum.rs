//! Simple accumulator checksums: XOR fold, modular sum, Fletcher-8.
//!
//! None of these use lookup tables; they are direct folds over the
//! input buffer. `lrc`, `bcc`, and `intel` are three conventional names
//! for the identical XOR fold.

// All array indexing uses bounded loop indices (0..data.len()).
#![allow(clippy::indexing_slicing)]

/// XOR fold of `data` starting from `initial`.
#[must_use]
pub const fn lrc_with_initial(data: &[u8], initial: u8) -> u8 {
  let mut acc = initial;
  let mut i = 0usize;
  while i < data.len() {
    acc ^= data[i];
    i += 1;
  }
  acc
}

/// Longitudinal redundancy check (XOR fold) of `data` [init 0x00].
///
/// ```
/// assert_eq!(crc8::lrc(&[0x01, 0x02, 0x03]), 0x00);
/// ```
#[inline]
#[must_use]
pub const fn lrc(data: &[u8]) -> u8 {
  lrc_with_initial(data, 0x00)
}

/// Block check character of `data` [init 0x00]. Identical to [`lrc`].
#[inline]
#[must_use]
pub const fn bcc(data: &[u8]) -> u8 {
  lrc_with_initial(data, 0x00)
}

/// As [`bcc`], starting from a caller-supplied initial value.
#[inline]
#[must_use]
pub const fn bcc_with_initial(data: &[u8], initial: u8) -> u8 {
  lrc_with_initial(data, initial)
}

/// Intel hexadecimal record checksum of `data` [init 0x00]. Identical
/// to [`lrc`].
#[inline]
#[must_use]
pub const fn intel(data: &[u8]) -> u8 {
  lrc_with_initial(data, 0x00)
}

/// As [`intel`], starting from a caller-supplied initial value.
#[inline]
#[must_use]
pub const fn intel_with_initial(data: &[u8], initial: u8) -> u8 {
  lrc_with_initial(data, initial)
}

/// Modulo-256 byte sum of `data` starting from `initial`.
#[must_use]
pub const fn sum8_with_initial(data: &[u8], initial: u8) -> u8 {
  let mut acc = initial;
  let mut i = 0usize;
  while i < data.len() {
    acc = acc.wrapping_add(data[i]);
    i += 1;
  }
  acc
}

/// Modulo-256 byte sum of `data` [init 0x00].
///
/// ```
/// assert_eq!(crc8::sum8(b"123456789"), 0xDD);
/// ```
#[inline]
#[must_use]
pub const fn sum8(data: &[u8]) -> u8 {
  sum8_with_initial(data, 0x00)
}

/// Fletcher-8 checksum of `data`.
///
/// Two mod-15 running sums; the result packs the second sum into the
/// upper nibble and the first into the lower nibble. Both lanes always
/// start at zero, so there is no initial-value form.
///
/// ```
/// assert_eq!(crc8::fletcher8(b"123456789"), 0x0C);
/// ```
#[must_use]
pub const fn fletcher8(data: &[u8]) -> u8 {
  let mut low: u8 = 0;
  let mut high: u8 = 0;
  let mut i = 0usize;
  while i < data.len() {
    low = ((low as u16 + data[i] as u16) % 15) as u8;
    high = ((high as u16 + low as u16) % 15) as u8;
    i += 1;
  }
  (high << 4) | low
}
