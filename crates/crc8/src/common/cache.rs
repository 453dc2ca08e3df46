//! One-time lazy caching for variant lookup tables.
//!
//! Each named CRC8 variant memoizes its 256-entry table on first use.
//! An unsynchronized built-flag on shared storage would be a data race
//! under a strict memory model even though the table bytes are
//! deterministic, so this module gates the first build with a one-time
//! synchronization primitive.
//!
//! # Caching Strategy
//!
//! - **std**: Uses `OnceLock` for thread-safe lazy initialization
//! - **no_std with atomics**: Uses an atomic state machine
//! - **no_std without atomics**: Per-call computation (unavoidable for
//!   single-threaded embedded; callers rebuild the table locally)

#[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
use core::cell::UnsafeCell;
#[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
use core::mem::MaybeUninit;

/// A one-time-initialized cache cell.
///
/// Properties:
/// - Zero-cost after first initialization (just a pointer load)
/// - Thread-safe on targets with atomics
/// - The initializer runs at most once on std/atomic targets
pub struct OnceCache<T: Copy> {
  #[cfg(feature = "std")]
  inner: std::sync::OnceLock<T>,

  #[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
  state: core::sync::atomic::AtomicU8,
  #[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
  value: UnsafeCell<MaybeUninit<T>>,

  // Marker to consume the type parameter and make the struct !Send/!Sync on
  // no-atomic targets (they're single-threaded anyway, so this is fine)
  #[cfg(all(not(feature = "std"), not(target_has_atomic = "ptr")))]
  _marker: core::marker::PhantomData<*const T>,
}

// SAFETY: The cache is safe to share between threads because:
// - On std: OnceLock handles synchronization
// - On no_std with atomics: We use atomic operations for synchronization
#[allow(unsafe_code)]
#[cfg(feature = "std")]
unsafe impl<T: Copy + Send + Sync> Send for OnceCache<T> {}
#[allow(unsafe_code)]
#[cfg(feature = "std")]
unsafe impl<T: Copy + Send + Sync> Sync for OnceCache<T> {}

#[allow(unsafe_code)]
#[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
unsafe impl<T: Copy + Send + Sync> Send for OnceCache<T> {}
#[allow(unsafe_code)]
#[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
unsafe impl<T: Copy + Send + Sync> Sync for OnceCache<T> {}

impl<T: Copy> OnceCache<T> {
  /// State constants for the atomic state machine
  #[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
  const UNINIT: u8 = 0;
  #[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
  const INITING: u8 = 1;
  #[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
  const READY: u8 = 2;

  /// Create a new empty cache.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      #[cfg(feature = "std")]
      inner: std::sync::OnceLock::new(),

      #[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
      state: core::sync::atomic::AtomicU8::new(0),
      #[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
      value: UnsafeCell::new(MaybeUninit::uninit()),

      #[cfg(all(not(feature = "std"), not(target_has_atomic = "ptr")))]
      _marker: core::marker::PhantomData,
    }
  }

  /// Get a reference to the cached value, initializing with `f` if not yet set.
  ///
  /// On std and no_std-with-atomics targets this is thread-safe and the
  /// initializer is called at most once. Not available on targets without
  /// atomics; callers fall back to per-call computation there.
  #[cfg(any(feature = "std", target_has_atomic = "ptr"))]
  #[inline]
  pub fn get_or_init_ref(&self, f: impl FnOnce() -> T) -> &T {
    #[cfg(feature = "std")]
    {
      self.inner.get_or_init(f)
    }

    #[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
    {
      use core::sync::atomic::Ordering;

      let state = self.state.load(Ordering::Acquire);
      if state != Self::READY {
        if state == Self::UNINIT
          && self
            .state
            .compare_exchange(Self::UNINIT, Self::INITING, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
          let value = f();
          // SAFETY: We hold exclusive access during INITING state
          #[allow(unsafe_code)]
          unsafe {
            (*self.value.get()).write(value);
          }
          self.state.store(Self::READY, Ordering::Release);
        } else {
          // Another thread is initializing - spin wait
          while self.state.load(Ordering::Acquire) != Self::READY {
            core::hint::spin_loop();
          }
        }
      }

      // SAFETY: Value is initialized when state is READY
      #[allow(unsafe_code)]
      unsafe {
        (*self.value.get()).assume_init_ref()
      }
    }
  }
}

impl<T: Copy> Default for OnceCache<T> {
  fn default() -> Self {
    Self::new()
  }
}
