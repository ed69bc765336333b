//! Session commands read line by line.

use std::str::FromStr;

use tripboard_core::trip::EventSortType;

use crate::error::CliError;

/// Help text printed by the `help` command.
pub const HELP: &str = "\
Commands:
  show                     print the board
  sort <event|time|price>  change the sort mode
  edit <n>                 open the form of event n
  close <n>                close the form of event n
  esc                      press Escape
  fav <n>                  toggle favorite on event n
  delete <n>               delete event n
  price <n> <amount>       submit a new base price for event n
  shift <n> <minutes>      submit event n moved by the given minutes
  add                      add an event after the last one
  json                     print the stored events as JSON
  help                     print this help
  quit                     leave";

/// One line of a session. Positions are 1-based, as printed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Show,
    Sort(EventSortType),
    Edit(usize),
    Close(usize),
    Escape,
    Favorite(usize),
    Delete(usize),
    Price(usize, u32),
    Shift(usize, i64),
    Add,
    Json,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CliError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let invalid = || CliError::InvalidCommand(line.trim().to_string());
        let mut words = line.split_whitespace();
        let name = words.next().ok_or_else(invalid)?;
        let args: Vec<&str> = words.collect();

        let position = |idx: usize| -> Result<usize, CliError> {
            args.get(idx)
                .and_then(|arg| arg.parse::<usize>().ok())
                .filter(|n| *n > 0)
                .ok_or_else(invalid)
        };

        let command = match (name.to_lowercase().as_str(), args.len()) {
            ("show", 0) => Command::Show,
            ("sort", 1) => Command::Sort(match args[0] {
                "event" | "day" => EventSortType::Event,
                "time" => EventSortType::Time,
                "price" => EventSortType::Price,
                _ => return Err(invalid()),
            }),
            ("edit", 1) => Command::Edit(position(0)?),
            ("close", 1) => Command::Close(position(0)?),
            ("esc" | "escape", 0) => Command::Escape,
            ("fav" | "favorite", 1) => Command::Favorite(position(0)?),
            ("delete" | "rm", 1) => Command::Delete(position(0)?),
            ("price", 2) => Command::Price(
                position(0)?,
                args[1].parse().map_err(|_| invalid())?,
            ),
            ("shift", 2) => Command::Shift(
                position(0)?,
                args[1].parse().map_err(|_| invalid())?,
            ),
            ("add", 0) => Command::Add,
            ("json", 0) => Command::Json,
            ("help" | "?", 0) => Command::Help,
            ("quit" | "exit" | "q", 0) => Command::Quit,
            _ => return Err(invalid()),
        };

        Ok(command)
    }
}
