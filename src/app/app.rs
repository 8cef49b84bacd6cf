use super::event::{AppEvent, Direction, Transition};
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::engine::{EscapeTime, FractalConfig, Palette, ViewportState};

pub struct App {
    config: FractalConfig,
    escape: EscapeTime,
    palette: Palette,
    viewport: ViewportState,
    mode: AppMode,
}

impl App {
    /// Builds the palette once; it never changes afterwards.
    pub fn new(config: FractalConfig) -> Self {
        let escape = config.escape_time();
        let palette = config.palette();
        Self {
            config,
            escape,
            palette,
            viewport: ViewportState::default(),
            mode: AppMode::Exploring,
        }
    }

    pub fn config(&self) -> &FractalConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn handle_event(&mut self, event: AppEvent) -> Transition {
        let step = self.viewport.pan_step();
        let transition = match event {
            // Arrow keys move the picture, so the window moves the other way.
            AppEvent::Pan(Direction::Right) => {
                self.viewport.offset_x -= step;
                Transition::Redraw
            }
            AppEvent::Pan(Direction::Left) => {
                self.viewport.offset_x += step;
                Transition::Redraw
            }
            AppEvent::Pan(Direction::Up) => {
                self.viewport.offset_y += step;
                Transition::Redraw
            }
            AppEvent::Pan(Direction::Down) => {
                self.viewport.offset_y -= step;
                Transition::Redraw
            }
            AppEvent::ZoomIn => {
                self.viewport.zoom_in();
                Transition::Redraw
            }
            AppEvent::ZoomOut => {
                if self.viewport.zoom_out() {
                    Transition::Redraw
                } else {
                    tracing::debug!(zoom = self.viewport.zoom(), "zoom out rejected");
                    Transition::Unchanged
                }
            }
            AppEvent::Reset => {
                self.viewport.reset();
                Transition::Redraw
            }
            AppEvent::Resize => Transition::Resync,
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
                Transition::Quit
            }
        };

        tracing::debug!(
            ?event,
            ?transition,
            zoom = self.viewport.zoom(),
            offset_x = self.viewport.offset_x,
            offset_y = self.viewport.offset_y,
            "event applied"
        );
        transition
    }

    pub fn get_render_state(&self) -> RenderState<'_> {
        RenderState {
            constant: self.config.constant,
            radius: self.config.radius,
            escape: self.escape,
            palette: &self.palette,
            viewport: self.viewport,
        }
    }
}
