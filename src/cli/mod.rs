pub mod args;
pub mod runner;

pub use args::{
    get_cli, get_log_level_from_verbose, Cli, Commands, GenerateArgs, RenderArgs, UnlockArgs,
};
pub use runner::{run, Runner};
