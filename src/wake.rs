//! Portable wake latch for `no_std` environments.
//!
//! A pin-change interrupt carries no payload; it only has to make
//! `enter_low_power` return. This latch is the shared point between the
//! interrupt handler (`signal`) and the platform's power controller
//! (`take`), guarded by critical sections.

use core::cell::Cell;

use critical_section::Mutex;

/// Which armed signal fired the wake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WakeSource {
    Motion,
    Select,
}

/// Interrupt-safe single-slot wake flag.
///
/// Later signals overwrite earlier ones; by the time anyone looks, one
/// wake is as good as another.
pub struct WakeFlag {
    inner: Mutex<Cell<Option<WakeSource>>>,
}

impl WakeFlag {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(None)),
        }
    }

    /// Record a wake event. Safe to call from an interrupt handler.
    pub fn signal(&self, source: WakeSource) {
        critical_section::with(|cs| {
            self.inner.borrow(cs).set(Some(source));
        });
    }

    /// Consume the pending wake event, clearing the latch.
    ///
    /// Power controllers drain this before returning from
    /// `enter_low_power` so a stale event cannot re-trigger later.
    pub fn take(&self) -> Option<WakeSource> {
        critical_section::with(|cs| self.inner.borrow(cs).take())
    }

    /// Peek without clearing.
    pub fn is_signaled(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).get().is_some())
    }
}

impl Default for WakeFlag {
    fn default() -> Self {
        Self::new()
    }
}
