mod palette;
mod utils;

pub use palette::{PALETTE, palette_color};
use smart_leds::RGB8;
pub use utils::{dim, offset_dim, rgb_from_u32, scale_color};

pub type Rgb = RGB8;
