use smart_leds::RGB8;

pub type Rgb = RGB8;

/// All channels off.
pub const OFF: Rgb = Rgb::new(0, 0, 0);
