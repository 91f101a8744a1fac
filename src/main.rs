// stacktty: step-through traces of bounded stacks, queues and call frames

use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use stacktty::cli::Cli;
use stacktty::demos;
use stacktty::logging;
use stacktty::trace::{Recorder, TraceError};
use stacktty::ui::App;

/// Message shown once when the snapshot budget cut the recording short
fn truncation_notice(err: &TraceError) -> Option<String> {
    match err {
        TraceError::SnapshotLimitExceeded { .. } => Some(format!(
            "Warning: {}\nContinuing with the partial trace...",
            err
        )),
        _ => None,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init();

    let settings = cli.demo_settings();
    let mut recorder = Recorder::new(cli.snapshot_limit);

    // Record the whole trace up front
    info!(demo = ?cli.demo, "recording");
    match demos::run(cli.demo, &settings, &mut recorder) {
        Ok(()) => {
            info!(steps = recorder.len(), bytes = recorder.memory_usage(), "recording complete");
        }
        Err(e) => match truncation_notice(&e) {
            Some(notice) => eprintln!("{}", notice),
            None => return Err(e.into()),
        },
    }

    let timeline = recorder.into_timeline();

    if cli.plain {
        print!("{}", timeline.terminal().text());
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(timeline);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
