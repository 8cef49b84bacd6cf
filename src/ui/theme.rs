use crate::engine::PaletteEntry;
use ratatui::style::{Color, Style};

/// Cell style for a palette entry.
///
/// Gradient entries paint the cell background; the interior marker keeps
/// the terminal's own background with a black foreground.
pub fn style_for(entry: PaletteEntry) -> Style {
    match entry {
        PaletteEntry::Gradient(rgb) => {
            let (r, g, b) = rgb.to_u8();
            Style::default().bg(Color::Rgb(r, g, b)).fg(Color::Reset)
        }
        PaletteEntry::Interior => Style::default().fg(Color::Black).bg(Color::Reset),
    }
}
