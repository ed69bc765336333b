//! tripboard - plan a trip from the terminal.

pub mod app;
pub mod board;
pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod events;
pub mod output;

pub use app::{App, Step};
pub use config::Config;
pub use error::{CliError, Result};
