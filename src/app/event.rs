/// Pan direction, named after the arrow key that produces it.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Application events
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppEvent {
    Pan(Direction),
    ZoomIn,
    ZoomOut,
    Reset,
    Resize,
    Quit,
}

/// What the event loop must do after an event has been applied.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Transition {
    /// Viewport changed: repaint every cell and flush.
    Redraw,
    /// Display size changed: re-sync the terminal, then repaint.
    Resync,
    /// Nothing changed.
    Unchanged,
    Quit,
}
