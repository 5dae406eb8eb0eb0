// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Line commands for the terminal binary.
//!
//! Each command maps onto one controller event. Numeric form fields are kept
//! as text so that validation (not parsing) decides what is acceptable.

use crate::db::KeyValueStore;
use crate::models::{Location, WorkoutId, WorkoutKind};
use crate::services::{SessionController, WorkoutForm};
use crate::ui::{MapView, WorkoutView};
use std::str::FromStr;

pub const HELP: &str = "\
Commands:
  click <lat> <lng>                          pick a location on the map
  submit running <km> <min> <cadence spm>    record a run at the picked location
  submit cycling <km> <min> <elevation m>    record a ride at the picked location
  select <id>                                center the map on a workout
  toggle                                     switch cadence/elevation field
  list                                       show all workouts
  reset                                      delete all stored workouts
  help                                       show this help
  quit                                       exit";

/// A parsed user command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Click(Location),
    Submit(WorkoutForm),
    Select(WorkoutId),
    Toggle,
    List,
    Reset,
    Help,
    Quit,
}

/// Errors from command parsing.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("{0}")]
    InvalidArgument(String),
}

/// What the event loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let name = parts.next().ok_or(CommandError::Empty)?;
        let args: Vec<&str> = parts.collect();

        match (name.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("click", [lat, lng]) => {
                let location = format!("{},{}", lat, lng)
                    .parse::<Location>()
                    .map_err(|e| CommandError::InvalidArgument(e.to_string()))?;
                Ok(Command::Click(location))
            }
            ("click", _) => Err(CommandError::Usage("click <lat> <lng>")),
            ("submit", [kind, distance, duration, param]) => {
                let kind = kind
                    .parse::<WorkoutKind>()
                    .map_err(|e| CommandError::InvalidArgument(e.to_string()))?;
                Ok(Command::Submit(WorkoutForm::from_fields(
                    kind, distance, duration, param,
                )))
            }
            ("submit", _) => Err(CommandError::Usage(
                "submit <running|cycling> <distance> <duration> <cadence|elevation>",
            )),
            ("select", [id]) => Ok(Command::Select(WorkoutId::from(*id))),
            ("select", _) => Err(CommandError::Usage("select <id>")),
            ("toggle", []) => Ok(Command::Toggle),
            ("list", []) => Ok(Command::List),
            ("reset", []) => Ok(Command::Reset),
            ("help", _) | ("?", _) => Ok(Command::Help),
            ("quit", []) | ("exit", []) => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(name.to_string())),
        }
    }
}

impl Command {
    /// Apply this command to the session.
    ///
    /// Errors have already been shown to the user by the controller, so they
    /// only need logging here.
    pub fn apply<S, M, V>(self, session: &mut SessionController<S, M, V>) -> Flow
    where
        S: KeyValueStore,
        M: MapView,
        V: WorkoutView,
    {
        match self {
            Command::Click(location) => session.on_map_location_picked(location),
            Command::Submit(form) => {
                if let Err(e) = session.on_form_submit(form) {
                    tracing::debug!(error = %e, "Submission rejected");
                }
            }
            Command::Select(id) => {
                session.on_workout_selected(&id);
            }
            Command::Toggle => session.toggle_input_mode_hint(),
            Command::List => {
                if session.workouts().is_empty() {
                    println!("No workouts yet");
                }
                for workout in session.workouts() {
                    println!(
                        "[{}] {} at {} ({} selections)",
                        workout.id(),
                        workout.label(),
                        workout.location(),
                        workout.interaction_count()
                    );
                }
            }
            Command::Reset => {
                if let Err(e) = session.reset() {
                    tracing::debug!(error = %e, "Reset failed");
                }
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => return Flow::Exit,
        }
        Flow::Continue
    }
}
