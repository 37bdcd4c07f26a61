//! Command-line interface: argument definitions and subcommand entry points.

mod args;
pub mod build;
pub mod common;
pub mod query;
pub mod serve;
pub mod validate;

pub use args::{BuildArgs, Cli, Commands, QueryArgs, ValidateArgs};
