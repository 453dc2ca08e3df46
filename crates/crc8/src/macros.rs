//! Internal macros for the one-shot CRC8 function surface.
//!
//! The named variants share one table-driven fold path; these macros
//! only generate the thin free-function wrappers so that each exported
//! name stays a one-liner over [`Crc8Kind`](crate::Crc8Kind).

/// Generate a one-shot checksum function for a named variant.
///
/// Two forms:
///
/// - `name => Kind` - fixed initial value
/// - `name, name_with_initial => Kind` - additionally generates the
///   initial-value override form
macro_rules! define_oneshot {
  (
    $(#[$meta:meta])*
    $name:ident => $kind:ident
  ) => {
    $(#[$meta])*
    #[inline]
    #[must_use]
    pub fn $name(data: &[u8]) -> u8 {
      $crate::Crc8Kind::$kind.checksum(data)
    }
  };
  (
    $(#[$meta:meta])*
    $name:ident, $with_initial:ident => $kind:ident
  ) => {
    define_oneshot! {
      $(#[$meta])*
      $name => $kind
    }

    #[doc = concat!("As [`", stringify!($name), "`], starting from a caller-supplied initial value.")]
    ///
    /// The variant's output XOR mask is still applied.
    #[inline]
    #[must_use]
    pub fn $with_initial(data: &[u8], initial: u8) -> u8 {
      $crate::Crc8Kind::$kind.checksum_with_initial(data, initial)
    }
  };
}
