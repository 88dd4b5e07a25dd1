pub mod color;
pub mod config;
pub mod drag;
pub mod draw;
pub mod input;
pub mod layout;
pub mod palette;
pub mod raster;
pub mod surface;
pub mod swatch;
pub mod text;

pub use crate::color::{Color, ColorError};
pub use crate::draw::Canvas;
pub use crate::layout::{PaletteLayout, PalettePos, Rect};
pub use crate::raster::{GraphicsContext, Raster};
pub use crate::surface::{PaintSurface, SwatchClick};
