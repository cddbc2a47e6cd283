pub mod args;
pub mod hub;
pub mod runner;

pub use args::{get_cli, get_log_level_from_verbose, Cli, Commands, HubCommands, ScaffoldArgs};
pub use runner::{run, Runner};
