//! Viewport state and pixel-to-plane mapping
//!
//! The visible window is a square of half-width `radius / zoom` in the
//! complex plane, stretched over the whole cell grid and translated by
//! the offset terms. Zooming in shrinks the window; panning moves it.

use super::complex::Complex;
use super::error::GeometryError;

/// Amount added to or removed from `zoom` per zoom event.
pub const ZOOM_STEP: f32 = 0.5;

/// Display size in cells, guaranteed large enough to map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    width: u16,
    height: u16,
}

impl Geometry {
    /// Rejects any dimension below 2, where the mapping divides by zero.
    pub fn new(width: u16, height: u16) -> Result<Self, GeometryError> {
        if width < 2 || height < 2 {
            return Err(GeometryError::Degenerate { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Zoom and pan state, owned by the interaction controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    zoom: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl ViewportState {
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Pan distance per key press; shrinks as zoom grows.
    pub fn pan_step(&self) -> f32 {
        1.0 / self.zoom
    }

    pub fn zoom_in(&mut self) {
        self.zoom += ZOOM_STEP;
    }

    /// Returns `false` and leaves the state untouched when the result would not stay positive.
    pub fn zoom_out(&mut self) -> bool {
        let next = self.zoom - ZOOM_STEP;
        if next > 0.0 {
            self.zoom = next;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Map cell `(px, py)` to the complex plane for a window of half-width `radius / zoom`.
    pub fn pixel_to_plane(&self, px: u16, py: u16, geometry: Geometry, radius: f32) -> Complex {
        let esc = radius / self.zoom;
        let span = 2.0 * esc;
        let w = (geometry.width - 1) as f32 / self.zoom;
        let h = (geometry.height - 1) as f32 / self.zoom;

        let re = ((px as f32 / self.zoom) - self.offset_x) / w * span - esc;
        let im = ((py as f32 / self.zoom) - self.offset_y) / h * span - esc;
        Complex::new(re, im)
    }
}
