//! Registry of existing projects in the monorepo.
//!
//! Projects live at `<root>/projects/<plural type>/<name>/`. The registry is
//! the authority on what exists and on which new names are acceptable.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{NameRejection, Result};
use crate::project::ProjectType;

/// Directory under the monorepo root that holds every project type.
pub const PROJECTS_DIR: &str = "projects";

/// Source of truth for existing projects and naming rules.
pub trait Registry {
    /// Sorted names of the existing projects of one type.
    fn list_directories(&self, project_type: ProjectType) -> Result<Vec<String>>;

    /// Every existing project as `"<plural type>/<name>"`, sorted.
    fn list_all_projects(&self) -> Result<Vec<String>> {
        let mut all = Vec::new();
        for ty in ProjectType::ALL {
            all.extend(
                self.list_directories(ty)?
                    .into_iter()
                    .map(|name| ty.project_path(&name)),
            );
        }
        all.sort();
        Ok(all)
    }

    /// Check a proposed new project name for `project_type`.
    fn check_name(&self, project_type: ProjectType, name: &str) -> Result<(), NameRejection>;

    fn is_valid_name(&self, project_type: ProjectType, name: &str) -> bool {
        self.check_name(project_type, name).is_ok()
    }
}

/// Shape rule shared by every registry: non-blank, lowercase slug.
pub fn check_name_shape(name: &str) -> Result<(), NameRejection> {
    let name = name.trim();
    let mut chars = name.chars();
    let first = chars.next().ok_or(NameRejection::Blank)?;

    let slug_char = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_';
    if !(first.is_ascii_lowercase() || first.is_ascii_digit()) || !chars.all(slug_char) {
        return Err(NameRejection::InvalidCharacters(name.to_string()));
    }
    Ok(())
}

/// Registry backed by the `projects/` tree of a checkout.
#[derive(Debug, Clone)]
pub struct FsRegistry {
    root: PathBuf,
}

impl FsRegistry {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn type_dir(&self, project_type: ProjectType) -> PathBuf {
        self.root.join(PROJECTS_DIR).join(project_type.dir_name())
    }
}

impl Registry for FsRegistry {
    fn list_directories(&self, project_type: ProjectType) -> Result<Vec<String>> {
        let dir = self.type_dir(project_type);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(dir = %dir.display(), "type directory missing");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if !name.starts_with('.') {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    fn check_name(&self, project_type: ProjectType, name: &str) -> Result<(), NameRejection> {
        check_name_shape(name)?;
        let name = name.trim();
        if self.type_dir(project_type).join(name).exists() {
            return Err(NameRejection::Taken(name.to_string()));
        }
        Ok(())
    }
}
