//! Error types for the project prompt flow.
//!
//! Every failure of the flow is returned to the caller as a `PromptError`;
//! turning it into a message and an exit code is left to the binary.

use thiserror::Error;

use crate::project::ProjectType;

/// Errors that can occur while resolving project options.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Supplied type is not one of the known project types.
    #[error("Must be a valid project type, got '{0}'")]
    InvalidType(String),

    /// Supplied project path is not present in the registry.
    #[error("Must be an existing project, got '{0}'")]
    InvalidProject(String),

    /// Known type without a follow-up question set.
    #[error("Sorry! Generating a {0} is not supported yet!")]
    UnsupportedType(ProjectType),

    /// No valid name was obtained before running out of attempts.
    #[error("Invalid project name '{name}': {reason}")]
    InvalidName { name: String, reason: NameRejection },

    /// Follow-up answer key that would shadow a fixed option.
    #[error("'{0}' is a reserved option and can't be used as an answer")]
    ReservedKey(String),

    /// Prompter returned an index outside the offered choices.
    #[error("No choice {index} for '{question}'")]
    InvalidChoice { question: String, index: usize },

    /// A type directory has nothing to choose from.
    #[error("No existing {} found", .0.dir_name())]
    NoProjects(ProjectType),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
}

/// Reason a project name was refused by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameRejection {
    #[error("name cannot be blank")]
    Blank,

    /// Only lowercase letters, digits, `-` and `_` are allowed, and the first
    /// character must be a letter or digit.
    #[error("'{0}' may only contain lowercase letters, digits, '-' and '_'")]
    InvalidCharacters(String),

    #[error("a project named '{0}' already exists")]
    Taken(String),
}

pub type Result<T, E = PromptError> = std::result::Result<T, E>;
