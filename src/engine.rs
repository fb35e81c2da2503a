//! Engine control loop.
//!
//! Wraps the renderer in the motion gate: each tick checks the motion
//! state, then the select input, then emits exactly one scanline. There is
//! no frame pacing; visual stability comes from the physical spin rate
//! matching the sink's commit throughput, which is tuned outside the core.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::power::{DEFAULT_SLEEP_TIMEOUT, MotionGate, PowerState, WakeSources};
use crate::renderer::PovRenderer;
use crate::selector::{DEFAULT_SELECT_THRESHOLD, SelectDebounce};
use crate::{LedSink, PowerController, StripPower};

/// Construction flags for the optional components.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Gate rendering on the motion signal; when off the engine never sleeps
    pub motion_enabled: bool,
    /// Cut strip power on sleep instead of committing an all-zero frame
    pub power_cutoff_enabled: bool,
    /// Poll the select signal and cycle catalog images
    pub select_enabled: bool,
    /// Continuous no-motion time before sleep entry
    pub sleep_timeout: Duration,
    /// Ticks the select signal must stay asserted
    pub select_threshold: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            motion_enabled: true,
            power_cutoff_enabled: false,
            select_enabled: true,
            sleep_timeout: DEFAULT_SLEEP_TIMEOUT,
            select_threshold: DEFAULT_SELECT_THRESHOLD,
        }
    }
}

/// One tick's worth of polled input signals.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSample {
    pub motion: bool,
    pub select: bool,
}

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// One scanline was pushed and committed; `line` is the line it showed
    Rendered { line: u16 },
    /// The tick blocked in low power and resumed at `at`
    Woke { at: Instant },
}

/// Placeholder for builds without a hardware strip cutoff.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStripPower;

impl StripPower for NoStripPower {
    fn set_power(&mut self, _on: bool) {}
}

/// The outer control loop: motion gate, image selector and render cycle.
///
/// Exclusively owns the sink. All state mutation happens on the caller's
/// thread of control; the only blocking point is the sleep path inside
/// `tick`.
pub struct PovEngine<'a, S, P, C = NoStripPower, const LED_COUNT: usize = 16>
where
    S: LedSink,
    P: PowerController,
    C: StripPower,
{
    sink: S,
    power: P,
    strip_power: Option<C>,
    renderer: PovRenderer<'a, LED_COUNT>,
    gate: MotionGate,
    selector: SelectDebounce,
    config: EngineConfig,
}

impl<'a, S, P, const LED_COUNT: usize> PovEngine<'a, S, P, NoStripPower, LED_COUNT>
where
    S: LedSink,
    P: PowerController,
{
    /// Create an engine without a hardware strip cutoff.
    pub fn new(
        renderer: PovRenderer<'a, LED_COUNT>,
        sink: S,
        power: P,
        config: EngineConfig,
        now: Instant,
    ) -> Self {
        Self::build(renderer, sink, power, None, config, now)
    }
}

impl<'a, S, P, C, const LED_COUNT: usize> PovEngine<'a, S, P, C, LED_COUNT>
where
    S: LedSink,
    P: PowerController,
    C: StripPower,
{
    /// Create an engine that can cut strip power on sleep entry.
    pub fn with_strip_power(
        renderer: PovRenderer<'a, LED_COUNT>,
        sink: S,
        power: P,
        strip_power: C,
        config: EngineConfig,
        now: Instant,
    ) -> Self {
        Self::build(renderer, sink, power, Some(strip_power), config, now)
    }

    fn build(
        renderer: PovRenderer<'a, LED_COUNT>,
        sink: S,
        power: P,
        strip_power: Option<C>,
        config: EngineConfig,
        now: Instant,
    ) -> Self {
        // With motion sensing the device starts powered down and waits for
        // the first spin; the first tick goes straight to the sleep path.
        let initial = if config.motion_enabled {
            PowerState::Sleeping
        } else {
            PowerState::Active
        };
        Self {
            sink,
            power,
            strip_power,
            renderer,
            gate: MotionGate::new(initial, config.sleep_timeout, now),
            selector: SelectDebounce::new(config.select_threshold),
            config,
        }
    }

    pub const fn power_state(&self) -> PowerState {
        self.gate.state()
    }

    pub const fn renderer(&self) -> &PovRenderer<'a, LED_COUNT> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut PovRenderer<'a, LED_COUNT> {
        &mut self.renderer
    }

    /// Run one control-loop iteration.
    ///
    /// Checks the motion gate, then the select input, then renders one
    /// scanline. When the gate decides to power down, this call blocks in
    /// `PowerController::enter_low_power` until a wake event and returns
    /// `CycleOutcome::Woke`; the next tick renders a fresh frame.
    pub fn tick(&mut self, inputs: InputSample, now: Instant) -> CycleOutcome {
        if self.config.motion_enabled {
            let entering = self.gate.state() == PowerState::Sleeping
                || self.gate.tick(inputs.motion, now);
            if entering {
                let at = self.enter_sleep();
                return CycleOutcome::Woke { at };
            }
        }

        if self.config.select_enabled && self.selector.tick(inputs.select) {
            self.renderer.select_next();
            #[cfg(feature = "esp32-log")]
            println!(
                "image select: {}",
                self.renderer.catalog().active_index()
            );
        }

        let line = self.renderer.current_line();
        let frame = self.renderer.render_line();
        for (index, pixel) in frame.iter().enumerate() {
            self.sink.set_pixel(index, *pixel);
        }
        // A dropped commit shows as a one-line glitch that self-corrects on
        // the next pass; no retry.
        let _ = self.sink.commit();
        self.renderer.advance();

        CycleOutcome::Rendered { line }
    }

    /// Power down, block until a wake event, then restore.
    fn enter_sleep(&mut self) -> Instant {
        #[cfg(feature = "esp32-log")]
        println!("entering sleep");

        let cutoff = self.config.power_cutoff_enabled && self.strip_power.is_some();
        if cutoff {
            if let Some(strip) = self.strip_power.as_mut() {
                strip.set_power(false);
            }
        } else {
            let _ = self.sink.clear_and_commit();
        }

        self.power.disable_peripherals();
        let wake = WakeSources {
            motion: true,
            select: self.config.select_enabled,
        };
        let at = self.power.enter_low_power(wake);
        self.power.restore_peripherals();

        if cutoff {
            if let Some(strip) = self.strip_power.as_mut() {
                strip.set_power(true);
            }
        }

        self.gate.wake(at);
        self.selector = SelectDebounce::new(self.config.select_threshold);
        // Resume at a freshly reset cursor and freshly loaded palette,
        // never mid-frame.
        self.renderer.reload_active();

        #[cfg(feature = "esp32-log")]
        println!("woke from sleep");

        at
    }
}
