//! CRC8 algorithm parameters.
//!
//! This module defines the parameter tuples for the named CRC8 variants
//! following the conventions from the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).
//!
//! # Reflection
//!
//! "Reflected" means bit-reversed. Reflected variants (refin/refout
//! true) map to LSB-first processing: their documented polynomial is
//! bit-reversed here and fed to the shift-right table builder. The
//! convention per variant is not a free parameter; it is fixed by which
//! convention reproduces the variant's published check value over the
//! ASCII bytes of `"123456789"`.

use crate::common::tables::{generate_table, reverse8, Convention, Table};

/// CRC8 algorithm parameters.
///
/// Captures everything needed to define a named CRC8 variant:
///
/// - `polynomial`: the byte fed to the table builder (already
///   bit-reversed for LSB-first variants)
/// - `initial`: initial value for the CRC register
/// - `xor_out`: value XORed with the final register
/// - `convention`: which table-generation recurrence to use
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crc8Params {
  /// Polynomial in the form expected by the builder for `convention`.
  pub polynomial: u8,
  /// Initial value for the CRC register.
  pub initial: u8,
  /// XOR value applied to the final register.
  pub xor_out: u8,
  /// Table-generation bit convention.
  pub convention: Convention,
}

impl Crc8Params {
  /// CRC8 (plain) - poly 0x07, init 0x00, non-reflected. Check: 0xF4.
  pub const CRC8: Self = Self {
    polynomial: 0x07,
    initial: 0x00,
    xor_out: 0x00,
    convention: Convention::High,
  };

  /// CRC8/ITU (I.432.1) - ATM HEC. As plain CRC8 with xorout 0x55.
  /// Check: 0xA1.
  pub const ITU8: Self = Self {
    polynomial: 0x07,
    initial: 0x00,
    xor_out: 0x55,
    convention: Convention::High,
  };

  /// CRC8/ROHC (RFC 3095) - robust header compression. Reflected
  /// poly 0x07, init 0xFF. Check: 0xD0.
  pub const ROHC: Self = Self {
    polynomial: reverse8(0x07),
    initial: 0xFF,
    xor_out: 0x00,
    convention: Convention::Low,
  };

  /// CRC8/MAXIM - Dallas/Maxim 1-Wire bus (e.g. DS18B20). Reflected
  /// poly 0x31. Check: 0xA1.
  pub const MAXIM8: Self = Self {
    polynomial: reverse8(0x31),
    initial: 0x00,
    xor_out: 0x00,
    convention: Convention::Low,
  };

  /// CRC8/SMBUS - System Management Bus PEC. Same parameters as plain
  /// CRC8. Check: 0xF4.
  pub const SMBUS: Self = Self {
    polynomial: 0x07,
    initial: 0x00,
    xor_out: 0x00,
    convention: Convention::High,
  };

  /// CRC8/AUTOSAR - poly 0x2F, init 0xFF, xorout 0xFF. Check: 0xDF.
  pub const AUTOSAR8: Self = Self {
    polynomial: 0x2F,
    initial: 0xFF,
    xor_out: 0xFF,
    convention: Convention::High,
  };

  /// CRC8/LTE - 3GPP TS 36.212 short blocks. Poly 0x9B. Check: 0xEA.
  pub const LTE8: Self = Self {
    polynomial: 0x9B,
    initial: 0x00,
    xor_out: 0x00,
    convention: Convention::High,
  };

  /// CRC8/WCDMA - 3GPP TS 25.212. Reflected poly 0x9B. Check: 0x25.
  pub const WCDMA: Self = Self {
    polynomial: reverse8(0x9B),
    initial: 0x00,
    xor_out: 0x00,
    convention: Convention::Low,
  };

  /// CRC8/SAE-J1850 - automotive class B data communication. Poly 0x1D,
  /// init 0xFF, xorout 0xFF. Check: 0x4B.
  pub const SAE_J1855: Self = Self {
    polynomial: 0x1D,
    initial: 0xFF,
    xor_out: 0xFF,
    convention: Convention::High,
  };

  /// CRC8/I-CODE - Philips/NXP I-CODE RFID. Poly 0x1D, init 0xFD.
  /// Check: 0x7E.
  pub const ICODE: Self = Self {
    polynomial: 0x1D,
    initial: 0xFD,
    xor_out: 0x00,
    convention: Convention::High,
  };

  /// CRC8/GSM-A - GSM 04.64. Poly 0x1D. Check: 0x37.
  pub const GSM8_A: Self = Self {
    polynomial: 0x1D,
    initial: 0x00,
    xor_out: 0x00,
    convention: Convention::High,
  };

  /// CRC8/GSM-B - GSM 04.64. Poly 0x49, xorout 0xFF. Check: 0x94.
  pub const GSM8_B: Self = Self {
    polynomial: 0x49,
    initial: 0x00,
    xor_out: 0xFF,
    convention: Convention::High,
  };

  /// CRC8/NRSC-5 - HD Radio. Poly 0x31, init 0xFF. Check: 0xF7.
  pub const NRSC_5: Self = Self {
    polynomial: 0x31,
    initial: 0xFF,
    xor_out: 0x00,
    convention: Convention::High,
  };

  /// CRC8/BLUETOOTH - Bluetooth HEC. Reflected poly 0xA7. Check: 0x26.
  pub const BLUETOOTH: Self = Self {
    polynomial: reverse8(0xA7),
    initial: 0x00,
    xor_out: 0x00,
    convention: Convention::Low,
  };

  /// CRC8/DVB-S2 - DVB-S2 physical layer. Poly 0xD5. Check: 0xBC.
  pub const DVB_S2: Self = Self {
    polynomial: 0xD5,
    initial: 0x00,
    xor_out: 0x00,
    convention: Convention::High,
  };

  /// CRC8/EBU (TECH-3250 / AES) - digital audio interfaces. Reflected
  /// poly 0x1D, init 0xFF. Check: 0x97.
  pub const EBU8: Self = Self {
    polynomial: reverse8(0x1D),
    initial: 0xFF,
    xor_out: 0x00,
    convention: Convention::Low,
  };

  /// CRC8/DARC - Data Radio Channel (ETSI EN 300 751). Reflected
  /// poly 0x39. Check: 0x15.
  pub const DARC: Self = Self {
    polynomial: reverse8(0x39),
    initial: 0x00,
    xor_out: 0x00,
    convention: Convention::Low,
  };

  /// CRC8/OPENSAFETY - openSAFETY fieldbus profile. Poly 0x2F.
  /// Check: 0x3E.
  pub const OPENSAFETY8: Self = Self {
    polynomial: 0x2F,
    initial: 0x00,
    xor_out: 0x00,
    convention: Convention::High,
  };

  /// Build this variant's 256-entry lookup table.
  ///
  /// Pure: equal parameters always yield equal tables. Named variants
  /// memoize the result (see [`Crc8Kind`](crate::Crc8Kind)); this method
  /// itself never caches.
  #[must_use]
  pub const fn table(&self) -> Table {
    generate_table(self.polynomial, self.convention)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reflected_variants_store_reversed_polynomials() {
    assert_eq!(Crc8Params::MAXIM8.polynomial, 0x8C);
    assert_eq!(Crc8Params::ROHC.polynomial, 0xE0);
    assert_eq!(Crc8Params::WCDMA.polynomial, 0xD9);
    assert_eq!(Crc8Params::BLUETOOTH.polynomial, 0xE5);
    assert_eq!(Crc8Params::EBU8.polynomial, 0xB8);
    assert_eq!(Crc8Params::DARC.polynomial, 0x9C);
  }

  #[test]
  fn reflected_variants_use_low_convention() {
    for params in [
      Crc8Params::MAXIM8,
      Crc8Params::ROHC,
      Crc8Params::WCDMA,
      Crc8Params::BLUETOOTH,
      Crc8Params::EBU8,
      Crc8Params::DARC,
    ] {
      assert_eq!(params.convention, Convention::Low);
    }
  }

  #[test]
  fn table_is_pure() {
    assert_eq!(Crc8Params::SMBUS.table(), Crc8Params::SMBUS.table());
    assert_eq!(Crc8Params::SMBUS.table(), Crc8Params::CRC8.table());
  }
}
