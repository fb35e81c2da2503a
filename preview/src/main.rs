//! Desktop preview for pov-light-engine image decoding
//!
//! Plays a built-in catalog through the real renderer: the top strip is
//! the scanline the spinning strip would show right now, below it the
//! whole image is unrolled so each decoded line becomes one column.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use pov_light_engine::{
    ImageDescriptor, PaletteCache, PixelFormat, PovRenderer, Rgb, decode_scanline,
};

/// Strip length shared by every catalog image.
const LED_COUNT: usize = 16;

/// LED rectangle size in pixels
const LED_SIZE: f32 = 14.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Default scanline rate while playing (lines per second).
const DEFAULT_LINE_RATE: f32 = 60.0;

// Image 0: two-color 1-bit diagonal, 32 scanlines.
static DIAGONAL_PALETTE: [u8; 6] = [0, 0, 16, 255, 60, 0];
static DIAGONAL_PIXELS: [u8; 64] = {
    let mut pixels = [0u8; 64];
    let mut line = 0;
    while line < 32 {
        let led = line % LED_COUNT;
        pixels[line * 2 + led / 8] = 1 << (led % 8);
        line += 1;
    }
    pixels
};

// Image 1: 4-bit vertical bands, 8 scanlines.
static BANDS_PALETTE: [u8; 12] = [0, 0, 0, 255, 0, 0, 0, 255, 0, 0, 0, 255];
static BANDS_PIXELS: [u8; 64] = {
    let mut pixels = [0u8; 64];
    let mut line = 0;
    while line < 8 {
        let mut pair = 0;
        while pair < 8 {
            let first = (pair * 2 / 4 % 3 + 1) as u8;
            let second = ((pair * 2 + 1) / 4 % 3 + 1) as u8;
            pixels[line * 8 + pair] = (first << 4) | second;
            pair += 1;
        }
        line += 1;
    }
    pixels
};

// Image 2: truecolor gradient, 24 scanlines.
static GRADIENT_PIXELS: [u8; 24 * LED_COUNT * 3] = {
    let mut pixels = [0u8; 24 * LED_COUNT * 3];
    let mut line = 0;
    while line < 24 {
        let mut led = 0;
        while led < LED_COUNT {
            let offset = (line * LED_COUNT + led) * 3;
            pixels[offset] = (line * 10) as u8;
            pixels[offset + 1] = (led * 16) as u8;
            pixels[offset + 2] = 255 - (line * 10) as u8;
            led += 1;
        }
        line += 1;
    }
    pixels
};

static IMAGES: [ImageDescriptor<'static>; 3] = [
    ImageDescriptor {
        format: PixelFormat::Palette1,
        scanline_count: 32,
        palette: &DIAGONAL_PALETTE,
        pixels: &DIAGONAL_PIXELS,
    },
    ImageDescriptor {
        format: PixelFormat::Palette4,
        scanline_count: 8,
        palette: &BANDS_PALETTE,
        pixels: &BANDS_PIXELS,
    },
    ImageDescriptor {
        format: PixelFormat::Truecolor,
        scanline_count: 24,
        palette: &[],
        pixels: &GRADIENT_PIXELS,
    },
];

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 500.0])
            .with_title("POV Engine Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "pov-light-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    /// The renderer instance driving the live strip
    renderer: PovRenderer<'static, LED_COUNT>,
    /// Wall-clock reference for line pacing
    last_frame: StdInstant,
    /// Fractional scanlines owed to the renderer
    pending_lines: f32,
    /// Whether the strip is "spinning"
    playing: bool,
    /// Scanlines per second
    line_rate: f32,
    /// LED pixel size for display
    led_size: f32,
}

impl PreviewApp {
    fn new() -> Self {
        let renderer = PovRenderer::<LED_COUNT>::from_images(&IMAGES)
            .expect("built-in catalog is well formed");
        Self {
            renderer,
            last_frame: StdInstant::now(),
            pending_lines: 0.0,
            playing: true,
            line_rate: DEFAULT_LINE_RATE,
            led_size: LED_SIZE,
        }
    }

    /// Advance the renderer by however many scanlines the wall clock owes.
    fn step_lines(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if !self.playing {
            return;
        }
        self.pending_lines += delta.as_secs_f32() * self.line_rate;
        while self.pending_lines >= 1.0 {
            self.renderer.advance();
            self.pending_lines -= 1.0;
        }
    }

    /// Decode every scanline of the active image for the unrolled view.
    fn unrolled(&self) -> Vec<Vec<Rgb>> {
        let image = self.renderer.catalog().active();
        let mut cache = PaletteCache::new();
        cache.load(image);

        (0..image.scanline_count)
            .map(|line| {
                let mut out = [Rgb::new(0, 0, 0); LED_COUNT];
                decode_scanline(image, &cache, line, &mut out);
                out.to_vec()
            })
            .collect()
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.step_lines();
        let strip = self.renderer.render_line().to_vec();
        let current_line = self.renderer.current_line();
        let unrolled = self.unrolled();

        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.playing { "⏸ Pause" } else { "▶ Spin" })
                    .clicked()
                {
                    self.playing = !self.playing;
                }

                if ui.button("Next image").clicked() {
                    self.renderer.select_next();
                }

                ui.add_space(8.0);
                ui.label(format!(
                    "image {} ({}), line {current_line}",
                    self.renderer.catalog().active_index(),
                    self.renderer.catalog().active().format.as_str(),
                ));
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Lines/s:");
                ui.add(egui::Slider::new(&mut self.line_rate, 1.0..=480.0).logarithmic(true));
                ui.add_space(8.0);
                ui.label("Size:");
                ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));
            });

            ui.add_space(12.0);
            ui.label("Strip (current scanline):");

            let led_pitch = self.led_size + LED_GAP;

            #[allow(clippy::cast_precision_loss)]
            let strip_width = LED_COUNT as f32 * led_pitch;
            let (response, painter) = ui.allocate_painter(
                egui::vec2(strip_width, led_pitch),
                egui::Sense::hover(),
            );
            let origin = response.rect.min;
            #[allow(clippy::cast_precision_loss)]
            for (led, pixel) in strip.iter().enumerate() {
                let rect = egui::Rect::from_min_size(
                    egui::pos2(origin.x + led as f32 * led_pitch, origin.y),
                    egui::vec2(self.led_size, self.led_size),
                );
                painter.rect_filled(
                    rect,
                    3.0,
                    egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b),
                );
            }

            ui.add_space(12.0);
            ui.label("Unrolled image (one column per scanline):");

            #[allow(clippy::cast_precision_loss)]
            let width = unrolled.len() as f32 * led_pitch;
            #[allow(clippy::cast_precision_loss)]
            let height = LED_COUNT as f32 * led_pitch;
            let (response, painter) =
                ui.allocate_painter(egui::vec2(width, height), egui::Sense::hover());
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (line, column) in unrolled.iter().enumerate() {
                let highlight = line == usize::from(current_line);
                for (led, pixel) in column.iter().enumerate() {
                    let rect = egui::Rect::from_min_size(
                        egui::pos2(
                            origin.x + line as f32 * led_pitch,
                            origin.y + led as f32 * led_pitch,
                        ),
                        egui::vec2(self.led_size, self.led_size),
                    );
                    let color = if highlight {
                        egui::Color32::from_rgb(
                            pixel.r.saturating_add(40),
                            pixel.g.saturating_add(40),
                            pixel.b.saturating_add(40),
                        )
                    } else {
                        egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b)
                    };
                    painter.rect_filled(rect, 2.0, color);
                }
            }
        });
    }
}
