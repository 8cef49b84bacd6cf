pub mod keymap;
pub mod render;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;

pub use keymap::{event_to_app_event, key_to_app_event};
pub use render::{paint_fractal, FractalView};
pub use terminal::{CrosstermEvents, EventSource, TuiManager};
pub use terminal_guard::TerminalGuard;
