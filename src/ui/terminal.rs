use crate::app::{App, AppMode, Transition};
use crate::error::AppError;
use crate::ui::keymap::event_to_app_event;
use crate::ui::render::FractalView;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Instant;

/// Source of terminal input events. Blocks until the next one arrives.
pub trait EventSource {
    fn next_event(&mut self) -> io::Result<Event>;
}

/// Reads events from the real terminal.
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self) -> io::Result<Event> {
        event::read()
    }
}

pub struct TuiManager<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TuiManager<B> {
    pub fn new(mut terminal: Terminal<B>) -> Result<Self, AppError> {
        terminal
            .clear()
            .map_err(|e| AppError::Display(e.to_string()))?;
        Ok(TuiManager { terminal })
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Draw once, then block on events until the app enters quit mode.
    /// Every frame is finished and flushed before the next event is read.
    pub fn run_event_loop<E: EventSource>(
        &mut self,
        app: &mut App,
        events: &mut E,
    ) -> Result<(), AppError> {
        self.render_frame(app)?;

        loop {
            if app.mode() == AppMode::Quit {
                return Ok(());
            }

            let event = events.next_event()?;
            let Some(app_event) = event_to_app_event(&event) else {
                continue;
            };

            match app.handle_event(app_event) {
                Transition::Redraw => self.render_frame(app)?,
                Transition::Resync => {
                    self.resync()?;
                    self.render_frame(app)?;
                }
                Transition::Unchanged | Transition::Quit => {}
            }
        }
    }

    /// Paint the whole screen into the back buffer and flush it.
    pub fn render_frame(&mut self, app: &App) -> Result<(), AppError> {
        let started = Instant::now();
        let completed = self
            .terminal
            .draw(|frame| {
                let area = frame.area();
                frame.render_widget(FractalView::new(app.get_render_state()), area);
            })
            .map_err(|e| AppError::Display(e.to_string()))?;

        tracing::debug!(
            width = completed.area.width,
            height = completed.area.height,
            elapsed_us = started.elapsed().as_micros() as u64,
            "frame flushed"
        );
        Ok(())
    }

    /// Pick up the new terminal size and force a full repaint on the next draw.
    fn resync(&mut self) -> Result<(), AppError> {
        self.terminal
            .autoresize()
            .map_err(|e| AppError::Display(e.to_string()))?;
        self.terminal
            .clear()
            .map_err(|e| AppError::Display(e.to_string()))?;

        let size = self
            .terminal
            .size()
            .map_err(|e| AppError::Display(e.to_string()))?;
        tracing::info!(width = size.width, height = size.height, "terminal resized");
        Ok(())
    }
}
