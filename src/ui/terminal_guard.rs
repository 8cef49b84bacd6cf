use crossterm::{
    cursor,
    terminal::{self, disable_raw_mode, enable_raw_mode},
    ExecutableCommand,
};
use std::io;
use std::sync::Once;

static PANIC_HOOK_SET: Once = Once::new();

/// Holds the terminal in raw mode on the alternate screen until dropped.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        // Raw mode is on; undo it if the screen switch fails.
        let guard = TerminalGuard;
        io::stdout()
            .execute(terminal::EnterAlternateScreen)?
            .execute(cursor::Hide)?;

        set_panic_hook();
        tracing::debug!("terminal entered raw mode");

        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
        tracing::debug!("terminal restored");
    }
}

fn restore_terminal() {
    let mut stdout = io::stdout();
    let _ = stdout.execute(cursor::Show);
    let _ = stdout.execute(terminal::LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

fn set_panic_hook() {
    PANIC_HOOK_SET.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            restore_terminal();
            tracing::error!(%panic_info, "panic");
            default_hook(panic_info);
        }));
    });
}
