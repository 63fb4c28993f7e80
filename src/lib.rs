//! mono: Monorepo Project Prompts
//!
//! A library for choosing existing projects and collecting the options for
//! new ones in a plugin monorepo, with the terminal prompts injected so the
//! flow can be driven by a script.

pub mod cli;
pub mod error;
pub mod options;
pub mod project;
pub mod registry;
pub mod report;
pub mod utils;

pub use error::{NameRejection, PromptError};
pub use options::Options;
pub use project::ProjectType;
pub use registry::{FsRegistry, Registry};
