//! Command-line interface module.

mod args;
pub mod generate;
pub mod init;

pub use args::{Cli, Commands, GenerateArgs};
