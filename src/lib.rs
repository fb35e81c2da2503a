#![no_std]

pub mod catalog;
pub mod color;
pub mod cursor;
pub mod decoder;
pub mod engine;
pub mod image;
pub mod palette;
pub mod power;
pub mod renderer;
pub mod selector;
pub mod wake;

pub use catalog::ImageCatalog;
pub use cursor::ScanlineCursor;
pub use decoder::decode_scanline;
pub use engine::{CycleOutcome, EngineConfig, InputSample, NoStripPower, PovEngine};
pub use image::{ImageDescriptor, ImageError, PixelFormat};
pub use palette::PaletteCache;
pub use power::{MotionGate, PowerState, WakeSources};
pub use renderer::PovRenderer;
pub use selector::SelectDebounce;
pub use wake::{WakeFlag, WakeSource};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED strip sink
///
/// Implement this trait to support different strip transports.
/// The engine is generic over this trait and is its only driver.
pub trait LedSink {
    /// Transport-level commit failure. A failed commit is transient: the
    /// engine drops it and moves on to the next scanline.
    type Error;

    /// Stage one pixel's color. `index` is in `0..led_count`.
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Stage an all-off frame.
    fn clear(&mut self);

    /// Flush staged pixels to the physical strip.
    fn commit(&mut self) -> Result<(), Self::Error>;

    /// Stage and flush an all-off frame. Used on sleep entry when no
    /// hardware power cutoff exists.
    fn clear_and_commit(&mut self) -> Result<(), Self::Error> {
        self.clear();
        self.commit()
    }
}

/// Hardware strip power cutoff.
///
/// Optional alternative to pushing an all-zero frame on sleep entry.
pub trait StripPower {
    fn set_power(&mut self, on: bool);
}

/// Platform low-power capability.
///
/// Register-level sleep/wake sequences live behind this trait, not in the
/// engine. `enter_low_power` suspends the calling context until one of the
/// armed wake sources fires; with nothing armed it never returns, which is
/// the intended "off" state rather than an error.
pub trait PowerController {
    /// Shut down non-essential peripherals before suspending.
    fn disable_peripherals(&mut self);

    /// Bring peripherals back up after a wake.
    fn restore_peripherals(&mut self);

    /// Suspend until a wake event. Returns the instant of the wake so the
    /// motion gate can restore its timing reference. Implementations must
    /// clear the wake arming before returning so a spurious re-trigger does
    /// not immediately loop back into sleep.
    fn enter_low_power(&mut self, wake: WakeSources) -> Instant;
}
