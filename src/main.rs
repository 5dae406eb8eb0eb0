// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Maptrack terminal app
//!
//! Reads line commands from stdin, renders the map and workout list as text
//! on stdout, and keeps workouts in a JSON data file.

use maptrack::{
    commands::{Command, Flow, HELP},
    config::Config,
    db::{FileStore, WorkoutDb},
    services::{Geolocator, SessionController},
    ui::{TerminalMap, TerminalView},
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Structured JSON logs on stderr; stdout is the UI
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(
        data_file = %config.data_file.display(),
        zoom = config.map_zoom,
        "Starting maptrack"
    );

    let store = FileStore::open(&config.data_file)?;
    let mut session = SessionController::new(
        WorkoutDb::new(store),
        TerminalMap::new(std::io::stdout()),
        TerminalView::new(std::io::stdout()),
        config.session_settings(),
    );
    session.initialize();

    // Requested once; the app stays usable if it never resolves
    let position = Geolocator::from_config(&config).current_position();
    tokio::pin!(position);
    let mut position_pending = true;

    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            result = &mut position, if position_pending => {
                position_pending = false;
                session.on_position_resolved(result);
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<Command>() {
                    Ok(command) => {
                        if command.apply(&mut session) == Flow::Exit {
                            break;
                        }
                    }
                    Err(e) => println!("{}", e),
                }
            }
        }
    }

    tracing::info!(count = session.workouts().len(), "Exiting");
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true)
        .with_writer(std::io::stderr);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("maptrack=info,warn"));

    tracing_subscriber::registry().with(filter).with(format).init();
}
