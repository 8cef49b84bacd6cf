use thiserror::Error;

/// Rejected startup configuration. The program refuses to start on any of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid color {input:?}: {reason}")]
    InvalidColor { input: String, reason: String },

    #[error("complex constant needs both REAL and IMAGINARY")]
    IncompleteConstant,

    #[error("max iterations must be at least 1")]
    ZeroMaxIterations,

    #[error("escape radius must be a positive finite number, got {0}")]
    InvalidRadius(f32),
}

/// Display size the viewport mapper cannot divide by.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error("display of {width}x{height} cells is too small to render (need at least 2x2)")]
    Degenerate { width: u16, height: u16 },
}
