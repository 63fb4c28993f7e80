//! CLI module - argument parsing, interactive prompts and the prompt flow

mod args;
pub mod flow;
mod prompts;
pub mod questions;
pub mod root;

pub use args::{Cli, Commands};
pub use flow::{generate, resolve_name, resolve_type, select_project, Flow};
pub use prompts::*;
