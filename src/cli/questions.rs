//! Follow-up questions asked when generating a project of a given type.

use crate::error::{PromptError, Result};
use crate::project::ProjectType;

/// How a follow-up question is asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Input { default: Option<&'static str> },
    Select { choices: &'static [&'static str] },
}

/// One follow-up prompt; its answer is stored under `name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub name: &'static str,
    pub message: &'static str,
    pub kind: QuestionKind,
}

const PACKAGE_QUESTIONS: &[Question] = &[Question {
    name: "desc",
    message: "Succinctly describe your package:",
    kind: QuestionKind::Input { default: None },
}];

/// Question set per type. `None` means generation isn't supported yet.
pub static QUESTION_SETS: &[(ProjectType, Option<&[Question]>)] = &[
    (ProjectType::Plugin, None),
    (ProjectType::Package, Some(PACKAGE_QUESTIONS)),
    (ProjectType::EditorExtension, None),
    (ProjectType::GithubAction, None),
];

/// Ordered follow-up questions for `project_type`.
pub fn questions_for(project_type: ProjectType) -> Result<&'static [Question]> {
    QUESTION_SETS
        .iter()
        .find(|(ty, _)| *ty == project_type)
        .and_then(|(_, questions)| *questions)
        .ok_or(PromptError::UnsupportedType(project_type))
}
