//! Differential fuzzing against the bitwise reference implementations.
//!
//! Compares the memoized table-driven engine and the per-call custom
//! engine against the table-less bitwise oracles to catch any
//! discrepancies.

#![no_main]

use arbitrary::Arbitrary;
use crc8::__internal::{crc8_high_bitwise, crc8_low_bitwise};
use crc8::{Convention, Crc8Kind, Custom};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
  data: &'a [u8],
  poly: u8,
  initial: u8,
  xor_out: u8,
  reflect: bool,
}

fuzz_target!(|input: Input<'_>| {
  test_named_variants(input.data);
  test_custom(&input);
});

fn test_named_variants(data: &[u8]) {
  for kind in Crc8Kind::ALL {
    let params = kind.params();
    let reference = match params.convention {
      Convention::High => crc8_high_bitwise(params.polynomial, params.initial, data),
      Convention::Low => crc8_low_bitwise(params.polynomial, params.initial, data),
    } ^ params.xor_out;

    let ours = kind.checksum(data);
    assert_eq!(
      ours,
      reference,
      "{kind} differential mismatch: ours={ours:#04x}, reference={reference:#04x}, len={}",
      data.len()
    );
  }
}

fn test_custom(input: &Input<'_>) {
  let params = Custom {
    polynomial: input.poly,
    initial: input.initial,
    xor_out: input.xor_out,
    reflect: input.reflect,
  };
  let poly = if input.reflect { crc8::reverse8(input.poly) } else { input.poly };
  let reference = crc8_low_bitwise(poly, input.initial, input.data) ^ input.xor_out;

  let ours = params.checksum(input.data);
  assert_eq!(
    ours,
    reference,
    "custom differential mismatch: ours={ours:#04x}, reference={reference:#04x}, len={}",
    input.data.len()
  );
}
