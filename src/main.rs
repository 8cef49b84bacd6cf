use julia_term::app::App;
use julia_term::cli::{self, Launch};
use julia_term::logging;
use julia_term::ui::{CrosstermEvents, TerminalGuard, TuiManager};
use julia_term::AppError;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    match cli::launch_from(std::env::args_os()).and_then(run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Help, usage errors and failures all go to stderr.
            eprintln!("{}", err.report());
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(launch: Launch) -> Result<(), AppError> {
    let Launch { config, log_file } = launch;
    logging::init(logging::log_destination(log_file).as_deref())?;
    tracing::info!(
        c_re = config.constant.re,
        c_im = config.constant.im,
        max_iterations = config.max_iterations,
        radius = config.radius,
        escape_test = ?config.escape_test,
        begin = %config.begin_color,
        end = %config.end_color,
        "starting"
    );

    let mut app = App::new(config);

    // Dropped last, after the terminal, so the screen is restored on every exit path.
    let _guard = TerminalGuard::new()?;
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut tui = TuiManager::new(terminal)?;

    // Blocks until Esc or Ctrl-C
    tui.run_event_loop(&mut app, &mut CrosstermEvents)?;
    tracing::info!("quit");

    Ok(())
}
