//! Named CRC8 variants and their memoized lookup tables.
//!
//! [`Crc8Kind`] is the closed set of supported standards. Every kind is
//! a parameterization of the same table-driven fold: the parameter
//! tuples live in [`Crc8Params`] and the 256-entry table for each kind
//! is built on first use and cached for the life of the process.

use core::fmt;
use core::str::FromStr;

use traits::{Checksum, UnknownAlgorithm};

use crate::common::tables::fold;
#[cfg(any(feature = "std", target_has_atomic = "ptr"))]
use crate::common::{cache::OnceCache, tables::Table};
use crate::params::Crc8Params;

/// A named CRC8 variant.
///
/// Each kind fixes a `(polynomial, initial, xorout, convention)` tuple;
/// see [`Crc8Params`] for the literal constants and published check
/// values.
///
/// # Examples
///
/// ```
/// use crc8::Crc8Kind;
///
/// assert_eq!(Crc8Kind::Maxim8.checksum(b"123456789"), 0xA1);
/// assert_eq!(Crc8Kind::from_name("rohc"), Ok(Crc8Kind::Rohc));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Crc8Kind {
  /// Plain CRC8 (poly 0x07).
  Crc8,
  /// CRC8/ITU (I.432.1).
  Itu8,
  /// CRC8/ROHC (RFC 3095).
  Rohc,
  /// CRC8/MAXIM (Dallas 1-Wire).
  Maxim8,
  /// CRC8/SMBUS packet error code.
  Smbus,
  /// CRC8/AUTOSAR.
  Autosar8,
  /// CRC8/LTE.
  Lte8,
  /// CRC8/WCDMA.
  Wcdma,
  /// CRC8/SAE-J1850.
  SaeJ1855,
  /// CRC8/I-CODE.
  Icode,
  /// CRC8/GSM-A.
  Gsm8A,
  /// CRC8/GSM-B.
  Gsm8B,
  /// CRC8/NRSC-5.
  Nrsc5,
  /// CRC8/BLUETOOTH.
  Bluetooth,
  /// CRC8/DVB-S2.
  DvbS2,
  /// CRC8/EBU (TECH-3250 / AES).
  Ebu8,
  /// CRC8/DARC.
  Darc,
  /// CRC8/OPENSAFETY.
  Opensafety8,
}

/// Number of named variants.
const KIND_COUNT: usize = 18;

/// Per-kind memoized lookup tables, indexed by discriminant.
///
/// Built at most once per kind and never invalidated. The one-time
/// initialization primitive makes the unbuilt-to-built transition
/// race-free; concurrent first calls observe a single completed table.
#[cfg(any(feature = "std", target_has_atomic = "ptr"))]
static TABLES: [OnceCache<Table>; KIND_COUNT] = [const { OnceCache::new() }; KIND_COUNT];

impl Crc8Kind {
  /// All named variants, in declaration order.
  pub const ALL: [Self; KIND_COUNT] = [
    Self::Crc8,
    Self::Itu8,
    Self::Rohc,
    Self::Maxim8,
    Self::Smbus,
    Self::Autosar8,
    Self::Lte8,
    Self::Wcdma,
    Self::SaeJ1855,
    Self::Icode,
    Self::Gsm8A,
    Self::Gsm8B,
    Self::Nrsc5,
    Self::Bluetooth,
    Self::DvbS2,
    Self::Ebu8,
    Self::Darc,
    Self::Opensafety8,
  ];

  /// This variant's parameter tuple.
  #[must_use]
  pub const fn params(self) -> Crc8Params {
    match self {
      Self::Crc8 => Crc8Params::CRC8,
      Self::Itu8 => Crc8Params::ITU8,
      Self::Rohc => Crc8Params::ROHC,
      Self::Maxim8 => Crc8Params::MAXIM8,
      Self::Smbus => Crc8Params::SMBUS,
      Self::Autosar8 => Crc8Params::AUTOSAR8,
      Self::Lte8 => Crc8Params::LTE8,
      Self::Wcdma => Crc8Params::WCDMA,
      Self::SaeJ1855 => Crc8Params::SAE_J1855,
      Self::Icode => Crc8Params::ICODE,
      Self::Gsm8A => Crc8Params::GSM8_A,
      Self::Gsm8B => Crc8Params::GSM8_B,
      Self::Nrsc5 => Crc8Params::NRSC_5,
      Self::Bluetooth => Crc8Params::BLUETOOTH,
      Self::DvbS2 => Crc8Params::DVB_S2,
      Self::Ebu8 => Crc8Params::EBU8,
      Self::Darc => Crc8Params::DARC,
      Self::Opensafety8 => Crc8Params::OPENSAFETY8,
    }
  }

  /// This variant's exported name.
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Crc8 => "crc8",
      Self::Itu8 => "itu8",
      Self::Rohc => "rohc",
      Self::Maxim8 => "maxim8",
      Self::Smbus => "smbus",
      Self::Autosar8 => "autosar8",
      Self::Lte8 => "lte8",
      Self::Wcdma => "wcdma",
      Self::SaeJ1855 => "sae_j1855",
      Self::Icode => "icode",
      Self::Gsm8A => "gsm8_a",
      Self::Gsm8B => "gsm8_b",
      Self::Nrsc5 => "nrsc_5",
      Self::Bluetooth => "bluetooth",
      Self::DvbS2 => "dvb_s2",
      Self::Ebu8 => "ebu8",
      Self::Darc => "darc",
      Self::Opensafety8 => "opensafety8",
    }
  }

  /// Look up a variant by its exported name.
  ///
  /// # Errors
  ///
  /// Returns [`UnknownAlgorithm`] when `name` does not match any
  /// registered variant.
  pub fn from_name(name: &str) -> Result<Self, UnknownAlgorithm> {
    match name {
      "crc8" => Ok(Self::Crc8),
      "itu8" => Ok(Self::Itu8),
      "rohc" => Ok(Self::Rohc),
      "maxim8" => Ok(Self::Maxim8),
      "smbus" => Ok(Self::Smbus),
      "autosar8" => Ok(Self::Autosar8),
      "lte8" => Ok(Self::Lte8),
      "wcdma" => Ok(Self::Wcdma),
      "sae_j1855" => Ok(Self::SaeJ1855),
      "icode" => Ok(Self::Icode),
      "gsm8_a" => Ok(Self::Gsm8A),
      "gsm8_b" => Ok(Self::Gsm8B),
      "nrsc_5" => Ok(Self::Nrsc5),
      "bluetooth" => Ok(Self::Bluetooth),
      "dvb_s2" => Ok(Self::DvbS2),
      "ebu8" => Ok(Self::Ebu8),
      "darc" => Ok(Self::Darc),
      "opensafety8" => Ok(Self::Opensafety8),
      _ => Err(UnknownAlgorithm::new()),
    }
  }

  /// This variant's lookup table, built on first use.
  ///
  /// The returned reference is stable for the life of the process:
  /// repeated calls reuse the same table without recomputation.
  #[cfg(any(feature = "std", target_has_atomic = "ptr"))]
  #[allow(clippy::indexing_slicing)] // discriminants are contiguous in 0..KIND_COUNT
  #[must_use]
  pub fn table(self) -> &'static Table {
    TABLES[self as usize].get_or_init_ref(|| self.params().table())
  }

  /// Compute this variant's checksum of `data` in one shot.
  #[inline]
  #[must_use]
  pub fn checksum(self, data: &[u8]) -> u8 {
    self.checksum_with_initial(data, self.params().initial)
  }

  /// Compute this variant's checksum starting from `initial` instead of
  /// the variant's default initial value.
  ///
  /// The variant's output XOR mask is still applied, so an empty buffer
  /// yields `initial ^ xor_out`.
  #[must_use]
  pub fn checksum_with_initial(self, data: &[u8], initial: u8) -> u8 {
    let params = self.params();

    #[cfg(any(feature = "std", target_has_atomic = "ptr"))]
    let crc = fold(self.table(), initial, data);

    // No synchronization primitive available: rebuild the table locally.
    #[cfg(not(any(feature = "std", target_has_atomic = "ptr")))]
    let crc = fold(&params.table(), initial, data);

    crc ^ params.xor_out
  }
}

impl Checksum for Crc8Kind {
  const OUTPUT_SIZE: usize = 1;
  type Output = u8;

  #[inline]
  fn checksum(&self, data: &[u8]) -> u8 {
    Crc8Kind::checksum(*self, data)
  }
}

impl fmt::Display for Crc8Kind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Crc8Kind {
  type Err = UnknownAlgorithm;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_name(s)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// One-shot function surface
// ─────────────────────────────────────────────────────────────────────────────

define_oneshot! {
  /// Plain CRC8 of `data` [poly 0x07, init 0x00, xorout 0x00].
  ///
  /// ```
  /// assert_eq!(crc8::crc8(b"123456789"), 0xF4);
  /// ```
  crc8, crc8_with_initial => Crc8
}

define_oneshot! {
  /// CRC8/ITU of `data` [poly 0x07, init 0x00, xorout 0x55].
  ///
  /// ```
  /// assert_eq!(crc8::itu8(b"123456789"), 0xA1);
  /// ```
  itu8, itu8_with_initial => Itu8
}

define_oneshot! {
  /// CRC8/ROHC of `data` [poly 0x07, init 0xFF, reflected].
  ///
  /// ```
  /// assert_eq!(crc8::rohc(b"123456789"), 0xD0);
  /// ```
  rohc, rohc_with_initial => Rohc
}

define_oneshot! {
  /// CRC8/MAXIM of `data` [poly 0x31, init 0x00, reflected], as used by
  /// Dallas 1-Wire devices such as the DS18B20.
  ///
  /// ```
  /// assert_eq!(crc8::maxim8(b"123456789"), 0xA1);
  /// ```
  maxim8, maxim8_with_initial => Maxim8
}

define_oneshot! {
  /// CRC8/SMBUS packet error code of `data` [poly 0x07, init 0x00].
  ///
  /// ```
  /// assert_eq!(crc8::smbus(b"123456789"), 0xF4);
  /// ```
  smbus => Smbus
}

define_oneshot! {
  /// CRC8/AUTOSAR of `data` [poly 0x2F, init 0xFF, xorout 0xFF].
  ///
  /// ```
  /// assert_eq!(crc8::autosar8(b"123456789"), 0xDF);
  /// ```
  autosar8 => Autosar8
}

define_oneshot! {
  /// CRC8/LTE of `data` [poly 0x9B, init 0x00].
  ///
  /// ```
  /// assert_eq!(crc8::lte8(b"123456789"), 0xEA);
  /// ```
  lte8 => Lte8
}

define_oneshot! {
  /// CRC8/WCDMA of `data` [poly 0x9B, init 0x00, reflected].
  ///
  /// ```
  /// assert_eq!(crc8::wcdma(b"123456789"), 0x25);
  /// ```
  wcdma => Wcdma
}

define_oneshot! {
  /// CRC8/SAE-J1850 of `data` [poly 0x1D, init 0xFF, xorout 0xFF].
  ///
  /// ```
  /// assert_eq!(crc8::sae_j1855(b"123456789"), 0x4B);
  /// ```
  sae_j1855, sae_j1855_with_initial => SaeJ1855
}

define_oneshot! {
  /// CRC8/I-CODE of `data` [poly 0x1D, init 0xFD].
  ///
  /// ```
  /// assert_eq!(crc8::icode(b"123456789"), 0x7E);
  /// ```
  icode, icode_with_initial => Icode
}

define_oneshot! {
  /// CRC8/GSM-A of `data` [poly 0x1D, init 0x00].
  ///
  /// ```
  /// assert_eq!(crc8::gsm8_a(b"123456789"), 0x37);
  /// ```
  gsm8_a, gsm8_a_with_initial => Gsm8A
}

define_oneshot! {
  /// CRC8/GSM-B of `data` [poly 0x49, init 0x00, xorout 0xFF].
  ///
  /// ```
  /// assert_eq!(crc8::gsm8_b(b"123456789"), 0x94);
  /// ```
  gsm8_b => Gsm8B
}

define_oneshot! {
  /// CRC8/NRSC-5 of `data` [poly 0x31, init 0xFF].
  ///
  /// ```
  /// assert_eq!(crc8::nrsc_5(b"123456789"), 0xF7);
  /// ```
  nrsc_5, nrsc_5_with_initial => Nrsc5
}

define_oneshot! {
  /// CRC8/BLUETOOTH of `data` [poly 0xA7, init 0x00, reflected].
  ///
  /// ```
  /// assert_eq!(crc8::bluetooth(b"123456789"), 0x26);
  /// ```
  bluetooth => Bluetooth
}

define_oneshot! {
  /// CRC8/DVB-S2 of `data` [poly 0xD5, init 0x00].
  ///
  /// ```
  /// assert_eq!(crc8::dvb_s2(b"123456789"), 0xBC);
  /// ```
  dvb_s2 => DvbS2
}

define_oneshot! {
  /// CRC8/EBU of `data` [poly 0x1D, init 0xFF, reflected].
  ///
  /// ```
  /// assert_eq!(crc8::ebu8(b"123456789"), 0x97);
  /// ```
  ebu8 => Ebu8
}

define_oneshot! {
  /// CRC8/DARC of `data` [poly 0x39, init 0x00, reflected].
  ///
  /// ```
  /// assert_eq!(crc8::darc(b"123456789"), 0x15);
  /// ```
  darc => Darc
}

define_oneshot! {
  /// CRC8/OPENSAFETY of `data` [poly 0x2F, init 0x00].
  ///
  /// ```
  /// assert_eq!(crc8::opensafety8(b"123456789"), 0x3E);
  /// ```
  opensafety8 => Opensafety8
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::string::ToString;

  use super::*;

  #[test]
  fn all_is_exhaustive_and_ordered() {
    assert_eq!(Crc8Kind::ALL.len(), KIND_COUNT);
    for (i, kind) in Crc8Kind::ALL.iter().enumerate() {
      assert_eq!(*kind as usize, i);
    }
  }

  #[test]
  fn name_round_trips() {
    for kind in Crc8Kind::ALL {
      assert_eq!(Crc8Kind::from_name(kind.name()), Ok(kind));
      assert_eq!(kind.name().parse::<Crc8Kind>(), Ok(kind));
    }
  }

  #[test]
  fn unknown_name_is_an_error() {
    assert!(Crc8Kind::from_name("crc16").is_err());
    assert!(Crc8Kind::from_name("").is_err());
    assert!("MAXIM8".parse::<Crc8Kind>().is_err());
  }

  #[test]
  fn display_matches_name() {
    assert_eq!(Crc8Kind::SaeJ1855.to_string(), "sae_j1855");
  }

  #[cfg(any(feature = "std", target_has_atomic = "ptr"))]
  #[test]
  fn tables_are_memoized() {
    for kind in Crc8Kind::ALL {
      assert!(core::ptr::eq(kind.table(), kind.table()));
      assert_eq!(kind.table(), &kind.params().table());
    }
  }

  #[cfg(any(feature = "std", target_has_atomic = "ptr"))]
  #[test]
  fn distinct_kinds_use_private_caches() {
    // crc8 and smbus share parameters but not cache slots.
    assert!(!core::ptr::eq(Crc8Kind::Crc8.table(), Crc8Kind::Smbus.table()));
    assert_eq!(Crc8Kind::Crc8.table(), Crc8Kind::Smbus.table());
  }
}
