pub mod complex;
pub mod config;
pub mod error;
pub mod escape;
pub mod palette;
pub mod viewport;

pub use complex::Complex;
pub use config::FractalConfig;
pub use error::{ConfigError, GeometryError};
pub use escape::{EscapeTest, EscapeTime};
pub use palette::{Palette, PaletteEntry, Rgb};
pub use viewport::{Geometry, ViewportState};
