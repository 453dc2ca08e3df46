//! Property-based tests for the CRC8 engine.
//!
//! These verify invariants that must hold for all inputs, not just
//! specific test vectors. Uses proptest for randomized input generation.

use crc8::__internal::{crc8_high_bitwise, crc8_low_bitwise};
use crc8::{Convention, Crc8Kind, Custom};
use proptest::prelude::*;

/// Generate arbitrary byte vectors up to 4KB.
fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  prop::collection::vec(any::<u8>(), 0..4096)
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(512))]

  #[test]
  fn reverse8_is_an_involution(byte in any::<u8>()) {
    prop_assert_eq!(crc8::reverse8(crc8::reverse8(byte)), byte);
  }

  #[test]
  fn table_generation_is_pure(poly in any::<u8>()) {
    prop_assert_eq!(
      crc8::Crc8Params { polynomial: poly, initial: 0, xor_out: 0, convention: Convention::High }.table(),
      crc8::Crc8Params { polynomial: poly, initial: 0, xor_out: 0, convention: Convention::High }.table()
    );
    prop_assert_eq!(crc8::table8(poly), crc8::table8(poly));
  }

  #[test]
  fn empty_buffer_yields_init_xor_mask(initial in any::<u8>(), xor_out in any::<u8>(), poly in any::<u8>(), reflect in any::<bool>()) {
    let params = Custom { polynomial: poly, initial, xor_out, reflect };
    prop_assert_eq!(params.checksum(&[]), initial ^ xor_out);
  }

  #[test]
  fn custom_matches_bitwise_reference(data in arb_data(), poly in any::<u8>(), initial in any::<u8>(), xor_out in any::<u8>()) {
    let params = Custom { polynomial: poly, initial, xor_out, reflect: false };
    prop_assert_eq!(params.checksum(&data), crc8_low_bitwise(poly, initial, &data) ^ xor_out);
  }

  #[test]
  fn custom_reflect_matches_maxim8(data in arb_data()) {
    let params = Custom { polynomial: 0x31, initial: 0x00, xor_out: 0x00, reflect: true };
    prop_assert_eq!(params.checksum(&data), crc8::maxim8(&data));
  }

  #[test]
  fn custom_reflect_matches_rohc(data in arb_data()) {
    let params = Custom { polynomial: 0x07, initial: 0xFF, xor_out: 0x00, reflect: true };
    prop_assert_eq!(params.checksum(&data), crc8::rohc(&data));
  }

  #[test]
  fn every_kind_matches_its_reference(data in arb_data()) {
    for kind in Crc8Kind::ALL {
      let params = kind.params();
      let raw = match params.convention {
        Convention::High => crc8_high_bitwise(params.polynomial, params.initial, &data),
        Convention::Low => crc8_low_bitwise(params.polynomial, params.initial, &data),
      };
      prop_assert_eq!(kind.checksum(&data), raw ^ params.xor_out);
    }
  }

  #[test]
  fn xor_fold_splits_additively(a in arb_data(), b in arb_data()) {
    let whole: Vec<u8> = a.iter().chain(b.iter()).copied().collect();
    prop_assert_eq!(crc8::lrc(&whole), crc8::lrc(&a) ^ crc8::lrc(&b));
  }

  #[test]
  fn xor_fold_initial_chains(data in arb_data(), initial in any::<u8>()) {
    prop_assert_eq!(crc8::lrc_with_initial(&data, initial), initial ^ crc8::lrc(&data));
  }

  #[test]
  fn sum8_splits_additively(a in arb_data(), b in arb_data()) {
    let whole: Vec<u8> = a.iter().chain(b.iter()).copied().collect();
    prop_assert_eq!(crc8::sum8(&whole), crc8::sum8(&a).wrapping_add(crc8::sum8(&b)));
  }

  #[test]
  fn fletcher8_lanes_stay_below_modulus(data in arb_data()) {
    let out = crc8::fletcher8(&data);
    prop_assert!(out & 0x0F < 15);
    prop_assert!(out >> 4 < 15);
  }
}
