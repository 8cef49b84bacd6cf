//! Color gradient builder
//!
//! Precomputes one color per iteration count, interpolating linearly
//! between two endpoint colors. Channels are kept as `i32` so that
//! out-of-range inputs survive untouched until they reach the terminal.

use super::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// An RGB triple. Channels are nominally 0-255 but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Rgb {
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Channels clamped into the range a terminal accepts.
    pub fn to_u8(self) -> (u8, u8, u8) {
        let clamp = |c: i32| c.clamp(0, 255) as u8;
        (clamp(self.r), clamp(self.g), clamp(self.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

/// Parses the `R,G,B` list format used on the command line.
impl FromStr for Rgb {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| ConfigError::InvalidColor {
            input: s.to_string(),
            reason,
        };

        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(invalid(format!(
                "expected 3 components, got {}",
                parts.len()
            )));
        }

        let mut channels = [0i32; 3];
        for (channel, part) in channels.iter_mut().zip(&parts) {
            *channel = part
                .parse()
                .map_err(|_| invalid(format!("{:?} is not an integer", part)))?;
        }

        Ok(Rgb::new(channels[0], channels[1], channels[2]))
    }
}

/// What a cell shows for a given escape count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteEntry {
    Gradient(Rgb),
    /// The orbit never escaped (or the index fell outside the gradient).
    Interior,
}

/// Immutable iteration-count to color table.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    gradient: Vec<Rgb>,
}

impl Palette {
    /// Build `steps` interpolated colors followed by the interior marker.
    ///
    /// Index `i` gets `begin + FACTOR * i * (end - begin)` per channel with
    /// `FACTOR = 1 / (steps - 1)`, truncated toward zero.
    pub fn build(begin: Rgb, end: Rgb, steps: u32) -> Self {
        let factor = if steps > 1 {
            1.0 / (steps as f32 - 1.0)
        } else {
            0.0
        };
        let lerp = |b: i32, e: i32, i: u32| (b as f32 + factor * i as f32 * (e - b) as f32) as i32;

        let gradient = (0..steps)
            .map(|i| {
                Rgb::new(
                    lerp(begin.r, end.r, i),
                    lerp(begin.g, end.g, i),
                    lerp(begin.b, end.b, i),
                )
            })
            .collect();

        Self { gradient }
    }

    /// Number of entries including the interior marker, so never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.gradient.len() + 1
    }

    pub fn entry(&self, index: u32) -> PaletteEntry {
        match self.gradient.get(index as usize) {
            Some(color) => PaletteEntry::Gradient(*color),
            None => PaletteEntry::Interior,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const GREEN: Rgb = Rgb::new(0, 255, 0);
    const BLACK: Rgb = Rgb::new(0, 0, 0);

    #[test]
    fn test_palette_has_marker_after_gradient() {
        let palette = Palette::build(GREEN, BLACK, 100);
        assert_eq!(palette.len(), 101);
        assert_eq!(palette.entry(100), PaletteEntry::Interior);
    }

    #[test]
    fn test_palette_endpoints() {
        let palette = Palette::build(GREEN, BLACK, 100);
        assert_eq!(palette.entry(0), PaletteEntry::Gradient(GREEN));
        assert_eq!(palette.entry(99), PaletteEntry::Gradient(BLACK));
    }

    #[test]
    fn test_palette_truncates_toward_zero() {
        // 255 - 255 * 50 / 99 = 126.21...
        let palette = Palette::build(GREEN, BLACK, 100);
        assert_eq!(palette.entry(50), PaletteEntry::Gradient(Rgb::new(0, 126, 0)));
    }

    #[test]
    fn test_zero_step_palette_still_has_marker() {
        let palette = Palette::build(GREEN, BLACK, 0);
        assert_eq!(palette.len(), 1);
        assert_eq!(palette.entry(0), PaletteEntry::Interior);
    }

    #[test]
    fn test_out_of_range_index_is_interior() {
        let palette = Palette::build(GREEN, BLACK, 10);
        assert_eq!(palette.entry(10_000), PaletteEntry::Interior);
    }

    #[test]
    fn test_single_step_palette_is_begin_color() {
        let palette = Palette::build(GREEN, BLACK, 1);
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.entry(0), PaletteEntry::Gradient(GREEN));
        assert_eq!(palette.entry(1), PaletteEntry::Interior);
    }

    #[test]
    fn test_parse_rgb() {
        assert_eq!("0,255,0".parse::<Rgb>(), Ok(GREEN));
        assert_eq!(" 10, 20 ,30 ".parse::<Rgb>(), Ok(Rgb::new(10, 20, 30)));
    }

    #[test]
    fn test_parse_rgb_keeps_out_of_range_channels() {
        assert_eq!("300,-5,0".parse::<Rgb>(), Ok(Rgb::new(300, -5, 0)));
        assert_eq!(Rgb::new(300, -5, 0).to_u8(), (255, 0, 0));
    }

    #[test]
    fn test_parse_rgb_rejects_wrong_arity() {
        assert!(matches!(
            "1,2".parse::<Rgb>(),
            Err(ConfigError::InvalidColor { .. })
        ));
        assert!("1,2,3,4".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_parse_rgb_rejects_non_numeric() {
        assert!("red,0,0".parse::<Rgb>().is_err());
        assert!("".parse::<Rgb>().is_err());
    }

    fn between(value: i32, a: i32, b: i32) -> bool {
        value >= a.min(b) && value <= a.max(b)
    }

    proptest! {
        #[test]
        fn gradient_channels_stay_between_endpoints(
            br in 0i32..=255, bg in 0i32..=255, bb in 0i32..=255,
            er in 0i32..=255, eg in 0i32..=255, eb in 0i32..=255,
            steps in 2u32..300,
        ) {
            let begin = Rgb::new(br, bg, bb);
            let end = Rgb::new(er, eg, eb);
            let palette = Palette::build(begin, end, steps);

            prop_assert_eq!(palette.entry(0), PaletteEntry::Gradient(begin));
            for i in 0..steps {
                match palette.entry(i) {
                    PaletteEntry::Gradient(c) => {
                        prop_assert!(between(c.r, br, er));
                        prop_assert!(between(c.g, bg, eg));
                        prop_assert!(between(c.b, bb, eb));
                    }
                    PaletteEntry::Interior => prop_assert!(false, "gradient index {} was interior", i),
                }
            }
            match palette.entry(steps - 1) {
                PaletteEntry::Gradient(last) => {
                    prop_assert!((last.r - er).abs() <= 1);
                    prop_assert!((last.g - eg).abs() <= 1);
                    prop_assert!((last.b - eb).abs() <= 1);
                }
                PaletteEntry::Interior => prop_assert!(false),
            }
        }
    }
}
