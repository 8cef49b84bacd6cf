// Immutable fractal configuration, built once at startup and shared by reference.

use super::complex::Complex;
use super::error::ConfigError;
use super::escape::{EscapeTest, EscapeTime};
use super::palette::{Palette, Rgb};

/// Everything that fixes which image is drawn for a given viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct FractalConfig {
    /// Julia parameter `c` (default -0.8 + 0.156i)
    pub constant: Complex,

    /// Iteration cap, also the gradient length (default 100)
    pub max_iterations: u32,

    /// Escape radius (default 2.0)
    pub radius: f32,

    /// Magnitude comparison (default Compatible)
    pub escape_test: EscapeTest,

    /// Gradient start (default 0,255,0) and end (default 0,0,0)
    pub begin_color: Rgb,
    pub end_color: Rgb,
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            constant: Complex::new(-0.8, 0.156),
            max_iterations: 100,
            radius: 2.0,
            escape_test: EscapeTest::Compatible,
            begin_color: Rgb::new(0, 255, 0),
            end_color: Rgb::new(0, 0, 0),
        }
    }
}

impl FractalConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        Ok(())
    }

    pub fn escape_time(&self) -> EscapeTime {
        EscapeTime::new(self.max_iterations, self.radius, self.escape_test)
    }

    pub fn palette(&self) -> Palette {
        Palette::build(self.begin_color, self.end_color, self.max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = FractalConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.constant, Complex::new(-0.8, 0.156));
        assert_eq!(config.max_iterations, 100);
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let config = FractalConfig {
            max_iterations: 0,
            ..FractalConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxIterations));
    }

    #[test]
    fn test_bad_radius_rejected() {
        for radius in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let config = FractalConfig {
                radius,
                ..FractalConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidRadius(_))
            ));
        }
    }

    #[test]
    fn test_palette_matches_iteration_cap() {
        let config = FractalConfig::default();
        assert_eq!(config.palette().len(), 101);
        assert_eq!(config.escape_time().max_iterations, 100);
    }
}
