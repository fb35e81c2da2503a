//! Motion-gated power states.
//!
//! The motion switch is a coarse, level-triggered proxy for "is this
//! device currently spinning". Slow spins may fail to keep the device
//! awake; accepted limitation of the sensor choice, not handled here.

use embassy_time::{Duration, Instant};

/// Reference idle timeout before the device powers down.
pub const DEFAULT_SLEEP_TIMEOUT: Duration = Duration::from_millis(2000);

/// Machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    /// Rendering scanlines as fast as the sink commits
    Active,
    /// LEDs off, peripherals down, waiting on a wake interrupt
    Sleeping,
}

/// Wake sources to arm before suspending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WakeSources {
    pub motion: bool,
    pub select: bool,
}

/// Decides, from the polled motion signal, when to leave `Active`.
///
/// The timer is level-based and re-arms on every tick that reports motion,
/// not merely at sleep entry.
#[derive(Debug, Clone, Copy)]
pub struct MotionGate {
    state: PowerState,
    last_motion: Instant,
    sleep_timeout: Duration,
}

impl MotionGate {
    /// A device with motion sensing starts powered down and waits for the
    /// first spin; without it the gate pins the state to `Active`.
    pub const fn new(initial: PowerState, sleep_timeout: Duration, now: Instant) -> Self {
        Self {
            state: initial,
            last_motion: now,
            sleep_timeout,
        }
    }

    pub const fn state(&self) -> PowerState {
        self.state
    }

    /// Feed one polled motion sample while `Active`.
    ///
    /// Returns `true` when the signal has been continuously absent for the
    /// sleep timeout and the gate has moved to `Sleeping`; the caller then
    /// performs the actual power-down sequence.
    pub fn tick(&mut self, motion: bool, now: Instant) -> bool {
        if motion {
            self.last_motion = now;
            return false;
        }
        if self.state == PowerState::Active
            && now.duration_since(self.last_motion) >= self.sleep_timeout
        {
            self.state = PowerState::Sleeping;
            return true;
        }
        false
    }

    /// Resume after a wake: back to `Active` with the timing reference
    /// restored to the wake instant.
    pub fn wake(&mut self, now: Instant) {
        self.state = PowerState::Active;
        self.last_motion = now;
    }
}
