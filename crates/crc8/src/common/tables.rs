//! Const-fn CRC8 lookup table generation and byte-wise folding.
//!
//! Two incompatible bit conventions exist for CRC8 table generation:
//!
//! | Convention | Recurrence | Polynomial form |
//! |------------|------------|-----------------|
//! | [`Convention::High`] | MSB-first, shift-left | as documented |
//! | [`Convention::Low`] | LSB-first, shift-right | bit-reversed beforehand |
//!
//! A table is a pure function of `(polynomial, convention)`; callers that
//! need a reflected CRC reverse the documented polynomial (see
//! [`reverse8`]) before handing it to the `Low` builder. The fold loop
//! itself is convention-agnostic: the shift direction is baked into the
//! table entries, and for an 8-bit register the recurrence collapses to
//! `crc = table[crc ^ byte]` either way.

// All array indexing in this module uses bounded loop indices (0..256) or
// u8-derived indices into 256-entry tables. Clippy cannot prove this in
// const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

/// Number of entries in a CRC8 lookup table.
pub const TABLE_SIZE: usize = 256;

/// A CRC8 lookup table.
pub type Table = [u8; TABLE_SIZE];

/// Bit-order convention used during table generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Convention {
  /// Normal (non-reflected) CRC definition: MSB-first processing, the
  /// polynomial is used as documented.
  High,
  /// Reflected CRC definition: LSB-first processing, the polynomial must
  /// be the bit-reversal of the documented polynomial.
  Low,
}

/// Reverse the bit order of a single byte.
///
/// Converts a polynomial between the documented (MSB-first) form and the
/// reflected (LSB-first) form. Involution: `reverse8(reverse8(x)) == x`.
#[inline]
#[must_use]
pub const fn reverse8(byte: u8) -> u8 {
  byte.reverse_bits()
}

/// Generate a single MSB-first table entry.
#[must_use]
pub const fn table_entry_high(poly: u8, index: u8) -> u8 {
  let mut crc = index;
  let mut bit = 0;
  while bit < 8 {
    crc = if crc & 0x80 != 0 { (crc << 1) ^ poly } else { crc << 1 };
    bit += 1;
  }
  crc
}

/// Generate a single LSB-first table entry.
///
/// `poly` is expected in reflected form (see [`reverse8`]).
#[must_use]
pub const fn table_entry_low(poly: u8, index: u8) -> u8 {
  let mut crc = index;
  let mut bit = 0;
  while bit < 8 {
    crc = if crc & 0x01 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
    bit += 1;
  }
  crc
}

/// Generate the 256-entry lookup table for `(poly, convention)`.
///
/// Pure and total: equal inputs always yield equal tables.
#[must_use]
pub const fn generate_table(poly: u8, convention: Convention) -> Table {
  let mut table = [0u8; TABLE_SIZE];
  let mut i = 0usize;
  while i < TABLE_SIZE {
    table[i] = match convention {
      Convention::High => table_entry_high(poly, i as u8),
      Convention::Low => table_entry_low(poly, i as u8),
    };
    i += 1;
  }
  table
}

/// Fold `data` into a running CRC using a pre-built table.
///
/// For an 8-bit register the MSB-first and LSB-first recurrences both
/// reduce to a plain table lookup, so this function works with tables of
/// either convention.
#[must_use]
pub const fn fold(table: &Table, init: u8, data: &[u8]) -> u8 {
  let mut crc = init;
  let mut i = 0usize;
  while i < data.len() {
    crc = table[(crc ^ data[i]) as usize];
    i += 1;
  }
  crc
}

/// Build the lookup table for a raw polynomial byte, selecting the
/// convention from the polynomial's top bit.
///
/// Polynomial bytes with bit 7 set are treated as reflected polynomials
/// and use the shift-right builder; all others use the shift-left
/// builder. Documented CRC8 polynomials are odd, so their reflected
/// forms always have the top bit set, which is what this heuristic keys
/// on.
///
/// # Examples
///
/// ```
/// // 0x8C is the reflected Dallas/Maxim polynomial (reverse of 0x31).
/// let table = crc8::table8(0x8C);
/// assert_eq!(&table[..4], &[0x00, 0x5E, 0xBC, 0xE2]);
/// ```
#[must_use]
pub const fn table8(poly: u8) -> Table {
  if poly & 0x80 != 0 {
    generate_table(poly, Convention::Low)
  } else {
    generate_table(poly, Convention::High)
  }
}
