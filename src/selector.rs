//! Image-select input debouncing.

/// Reference press threshold: ticks the signal must stay asserted.
pub const DEFAULT_SELECT_THRESHOLD: u8 = 10;

/// Edge-debounced "wait for release" select input.
///
/// A press counter runs while the signal is asserted and fires once at the
/// threshold; further asserted ticks are latched out until the signal is
/// observed de-asserted, so a single held press never cycles through
/// multiple images.
#[derive(Debug, Clone, Copy)]
pub struct SelectDebounce {
    presses: u8,
    latched: bool,
    threshold: u8,
}

impl SelectDebounce {
    pub const fn new(threshold: u8) -> Self {
        Self {
            presses: 0,
            latched: false,
            threshold,
        }
    }

    /// Feed one control-loop sample of the select signal.
    ///
    /// Returns `true` exactly once per held press, on the tick the counter
    /// reaches the threshold.
    pub fn tick(&mut self, asserted: bool) -> bool {
        if !asserted {
            self.presses = 0;
            self.latched = false;
            return false;
        }
        if self.latched {
            return false;
        }
        self.presses = self.presses.saturating_add(1);
        if self.presses >= self.threshold {
            self.latched = true;
            return true;
        }
        false
    }
}

impl Default for SelectDebounce {
    fn default() -> Self {
        Self::new(DEFAULT_SELECT_THRESHOLD)
    }
}
