use crate::engine::{Complex, EscapeTime, Palette, ViewportState};

/// Everything the frame renderer reads for one frame
pub struct RenderState<'a> {
    pub constant: Complex,
    pub radius: f32,
    pub escape: EscapeTime,
    pub palette: &'a Palette,
    pub viewport: ViewportState,
}
