//! One-shot checksum trait.
//!
//! The trait deliberately covers whole-buffer computation only. The
//! algorithms in this workspace are single-byte checksums where the
//! entire input is available in memory; there is no streaming state
//! worth abstracting over.

use core::fmt::Debug;

/// Whole-buffer checksum algorithm.
///
/// Implementors are lightweight value types describing a parameterized
/// algorithm (a named CRC variant, a custom polynomial configuration);
/// [`checksum`](Self::checksum) folds an input buffer into the final
/// output value.
///
/// # Usage
///
/// ```rust,ignore
/// use crc8::{Checksum, Crc8Kind};
///
/// let crc = Crc8Kind::Maxim8.checksum(b"hello world");
/// ```
///
/// # Implementor Requirements
///
/// - `checksum` must be deterministic: equal inputs yield equal outputs
/// - `checksum(&[])` must degenerate to the algorithm's initial value,
///   transformed only by its output mask
pub trait Checksum {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  type Output: Copy + Eq + Debug;

  /// Compute the checksum of `data` in one shot.
  #[must_use]
  fn checksum(&self, data: &[u8]) -> Self::Output;
}
