//! Project types known to the monorepo.
//!
//! Each type has two spellings: the plural directory name shown to users
//! (`plugins`) and the singular form used in resolved options (`plugin`).
//! Parsing accepts either, so callers never compare raw strings.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::PromptError;

/// Closed set of project categories under `projects/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProjectType {
    Plugin,
    Package,
    EditorExtension,
    GithubAction,
}

impl ProjectType {
    /// All types, in the order they are offered to the user.
    pub const ALL: [ProjectType; 4] = [
        ProjectType::GithubAction,
        ProjectType::Package,
        ProjectType::Plugin,
        ProjectType::EditorExtension,
    ];

    /// Singular form, e.g. `editor-extension`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Plugin => "plugin",
            ProjectType::Package => "package",
            ProjectType::EditorExtension => "editor-extension",
            ProjectType::GithubAction => "github-action",
        }
    }

    /// Plural form, which is also the directory name under `projects/`.
    pub fn dir_name(&self) -> &'static str {
        match self {
            ProjectType::Plugin => "plugins",
            ProjectType::Package => "packages",
            ProjectType::EditorExtension => "editor-extensions",
            ProjectType::GithubAction => "github-actions",
        }
    }

    /// Build the registry path `"<plural>/<name>"` for a project of this type.
    pub fn project_path(&self, name: &str) -> String {
        format!("{}/{}", self.dir_name(), name)
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ProjectType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == wanted || ty.dir_name() == wanted)
            .ok_or_else(|| PromptError::InvalidType(s.to_string()))
    }
}

impl Serialize for ProjectType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
