//! notes CLI entry point.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use notes::cli::{Cli, CommandDispatcher};
use notes::ui::{create_ui, OutputMode};
use notes::NotesError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("notes=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("notes=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = cli.configuration();
    tracing::debug!("notes starting with {:?}", config);

    let mut ui = create_ui(OutputMode::from_quiet(cli.quiet), cli.no_color);
    let dispatcher = CommandDispatcher::new(config);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => result.process_exit_code(),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            if matches!(e, NotesError::InvalidCommand { .. }) {
                eprintln!("{}", Cli::command().render_usage());
            }
            ExitCode::FAILURE
        }
    }
}
