//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::cell::Cell;
use std::collections::VecDeque;
use std::path::Path;

use monocli::cli::Prompter;
use monocli::error::Result;
use monocli::registry::{check_name_shape, Registry};
use monocli::{NameRejection, ProjectType};
use tempfile::TempDir;

/// A scripted answer for one prompt.
#[derive(Debug, Clone)]
pub enum Answer {
    Choose(usize),
    Text(String),
}

/// Prompter that replays a fixed script and records every question asked.
///
/// Panics if the flow asks more questions than were scripted, or asks a
/// select where text was scripted (and vice versa).
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    script: VecDeque<Answer>,
    pub asked: Vec<String>,
    pub choices_seen: Vec<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(script: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            script: script.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Prompter that must never be asked anything.
    pub fn silent() -> Self {
        Self::default()
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, message: &str, choices: &[String]) -> Result<usize> {
        self.asked.push(message.to_string());
        self.choices_seen.push(choices.to_vec());
        match self.script.pop_front() {
            Some(Answer::Choose(index)) => Ok(index),
            other => panic!("unexpected select '{}', script had {:?}", message, other),
        }
    }

    fn input(&mut self, message: &str, _default: Option<&str>) -> Result<String> {
        self.asked.push(message.to_string());
        match self.script.pop_front() {
            Some(Answer::Text(text)) => Ok(text),
            other => panic!("unexpected input '{}', script had {:?}", message, other),
        }
    }
}

pub fn text(s: &str) -> Answer {
    Answer::Text(s.to_string())
}

/// In-memory registry. Names listed in `taken` are rejected as existing.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    pub projects: Vec<(ProjectType, String)>,
    /// When set, the first N name checks fail regardless of the name.
    pub reject_first: Cell<usize>,
    pub checks: Cell<usize>,
}

impl MemoryRegistry {
    pub fn new(projects: &[(ProjectType, &str)]) -> Self {
        Self {
            projects: projects
                .iter()
                .map(|(ty, name)| (*ty, name.to_string()))
                .collect(),
            ..Default::default()
        }
    }

    pub fn rejecting_first(mut self, n: usize) -> Self {
        self.reject_first = Cell::new(n);
        self
    }
}

impl Registry for MemoryRegistry {
    fn list_directories(&self, project_type: ProjectType) -> Result<Vec<String>> {
        let mut names: Vec<String> = self
            .projects
            .iter()
            .filter(|(ty, _)| *ty == project_type)
            .map(|(_, name)| name.clone())
            .collect();
        names.sort();
        Ok(names)
    }

    fn check_name(
        &self,
        project_type: ProjectType,
        name: &str,
    ) -> std::result::Result<(), NameRejection> {
        self.checks.set(self.checks.get() + 1);
        if self.reject_first.get() > 0 {
            self.reject_first.set(self.reject_first.get() - 1);
            return Err(NameRejection::Taken(name.trim().to_string()));
        }
        check_name_shape(name)?;
        let taken = self
            .projects
            .iter()
            .any(|(ty, existing)| *ty == project_type && existing == name.trim());
        if taken {
            return Err(NameRejection::Taken(name.trim().to_string()));
        }
        Ok(())
    }
}

/// Sample registry used by most flow tests.
pub fn sample_registry() -> MemoryRegistry {
    MemoryRegistry::new(&[
        (ProjectType::Plugin, "jetpack"),
        (ProjectType::Plugin, "boost"),
        (ProjectType::Package, "assets"),
        (ProjectType::Package, "connection"),
        (ProjectType::GithubAction, "repo-gardening"),
    ])
}

/// Create a monorepo checkout on disk with the given `"<plural>/<name>"` projects.
pub fn create_monorepo(projects: &[&str]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for project in projects {
        std::fs::create_dir_all(dir.path().join("projects").join(project))
            .expect("Failed to create project dir");
    }
    dir
}

pub fn path_str(path: &Path) -> String {
    path.display().to_string()
}
