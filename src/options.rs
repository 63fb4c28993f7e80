//! Options accumulated across prompts for a single invocation.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::PromptError;
use crate::project::ProjectType;

/// Keys written by the fixed fields of [`Options`]; answers may not use them.
pub const RESERVED_KEYS: &[&str] = &["version", "project", "type", "name", "n"];

/// Layout version of [`Options`], bumped whenever a field changes meaning.
pub const OPTIONS_VERSION: u32 = 1;

/// Resolved answers passed between prompt stages and handed back to the caller.
///
/// Fields start out as whatever the command line supplied and are filled in
/// stage by stage. Follow-up answers are flattened into the serialized form,
/// so `{"type": "package", "name": "x", "desc": "..."}` is what callers see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Options {
    pub version: u32,

    /// Existing project path, `"<plural type>/<name>"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub project_type: Option<ProjectType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Short alias of `name` expected by the scaffolding templates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,

    #[serde(flatten)]
    pub answers: BTreeMap<String, String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            version: OPTIONS_VERSION,
            project: None,
            project_type: None,
            name: None,
            n: None,
            answers: BTreeMap::new(),
        }
    }
}

impl Options {
    /// Options for the "use an existing project" flow.
    pub fn with_project(project: impl Into<String>) -> Self {
        Self {
            project: Some(project.into()),
            ..Default::default()
        }
    }

    /// Options for the "generate a new project" flow.
    pub fn with_type_and_name(project_type: ProjectType, name: impl Into<String>) -> Self {
        Self {
            project_type: Some(project_type),
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Merge follow-up answers; they win over anything already present.
    ///
    /// Fails without merging anything if a key would shadow a fixed field.
    pub fn merge_answers<I>(&mut self, answers: I) -> Result<(), PromptError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let answers: Vec<(String, String)> = answers.into_iter().collect();
        if let Some((key, _)) = answers.iter().find(|(key, _)| is_reserved(key)) {
            return Err(PromptError::ReservedKey(key.clone()));
        }
        self.answers.extend(answers);
        Ok(())
    }

    /// Answer to a follow-up question, if one was collected.
    pub fn answer(&self, key: &str) -> Option<&str> {
        self.answers.get(key).map(String::as_str)
    }
}

pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Parse a `KEY=VALUE` pair supplied on the command line.
pub fn parse_answer(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("'{}' is not of the form KEY=VALUE", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("'{}' has an empty key", s));
    }
    if is_reserved(key) {
        return Err(format!("'{}' is set by its own flag and can't be an answer", key));
    }
    Ok((key.to_string(), value.to_string()))
}
