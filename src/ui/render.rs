//! Frame renderer
//!
//! Paints every cell of an area with the palette color of its escape
//! count. Only the back buffer is touched; flushing belongs to the
//! event loop.

use crate::app::RenderState;
use crate::engine::{Geometry, GeometryError};
use crate::ui::theme::style_for;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Paint `area` of `buf` and return the number of cells painted.
///
/// A degenerate area is left untouched and reported as an error so the
/// caller can skip the frame until the terminal grows again.
pub fn paint_fractal(
    state: &RenderState<'_>,
    area: Rect,
    buf: &mut Buffer,
) -> Result<usize, GeometryError> {
    let geometry = Geometry::new(area.width, area.height)?;

    for i in 0..geometry.width() {
        for j in 0..geometry.height() {
            let z = state
                .viewport
                .pixel_to_plane(i, j, geometry, state.radius);
            let it = state.escape.iterate(z, state.constant);
            let style = style_for(state.palette.entry(it));
            if let Some(cell) = buf.cell_mut((area.x + i, area.y + j)) {
                cell.set_char(' ').set_style(style);
            }
        }
    }

    Ok(geometry.cell_count())
}

/// Widget wrapper so the renderer can be handed to `Frame::render_widget`.
pub struct FractalView<'a> {
    state: RenderState<'a>,
}

impl<'a> FractalView<'a> {
    pub fn new(state: RenderState<'a>) -> Self {
        Self { state }
    }
}

impl Widget for FractalView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match paint_fractal(&self.state, area, buf) {
            Ok(cells) => tracing::trace!(cells, "frame painted"),
            Err(err) => tracing::debug!(%err, "skipping render pass"),
        }
    }
}
