//! Prompt flow for choosing an existing project or describing a new one.
//!
//! Every stage takes what the command line already supplied, validates it,
//! and only prompts for what is missing. Prompts happen one at a time; the
//! `Options` value is owned by the flow until it is handed back.

use tracing::{debug, warn};

use super::prompts::Prompter;
use super::questions::{questions_for, Question, QuestionKind};
use crate::error::{PromptError, Result};
use crate::options::Options;
use crate::project::ProjectType;
use crate::registry::Registry;
use crate::utils::{print_error, print_warning};

/// Maximum number of times the user is asked for a new project name.
pub const MAX_NAME_ATTEMPTS: usize = 3;

pub const TYPE_PROMPT: &str = "What type of project are you working on today?";
pub const NAME_PROMPT: &str = "What is your project called?";
pub const PROJECT_PROMPT: &str = "Please choose which project";

/// Orchestrates the prompt stages over injected collaborators.
pub struct Flow<'a, P: Prompter, R: Registry> {
    prompter: &'a mut P,
    registry: &'a R,
}

impl<'a, P: Prompter, R: Registry> Flow<'a, P, R> {
    pub fn new(prompter: &'a mut P, registry: &'a R) -> Self {
        Self { prompter, registry }
    }

    /// Validate a supplied type, or ask for one when none was given.
    pub fn resolve_type(&mut self, supplied: Option<&str>) -> Result<ProjectType> {
        match supplied.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => raw.parse(),
            None => {
                let choices: Vec<String> = ProjectType::ALL
                    .iter()
                    .map(|ty| ty.dir_name().to_string())
                    .collect();
                let index = self.prompter.select(TYPE_PROMPT, &choices)?;
                let ty = ProjectType::ALL
                    .get(index)
                    .copied()
                    .ok_or_else(|| PromptError::InvalidType(index.to_string()))?;
                debug!(project_type = %ty, "type chosen interactively");
                Ok(ty)
            }
        }
    }

    /// Validate a supplied name, or ask until one passes or attempts run out.
    pub fn resolve_name(
        &mut self,
        project_type: ProjectType,
        supplied: Option<&str>,
    ) -> Result<String> {
        if let Some(name) = supplied.filter(|s| !s.trim().is_empty()) {
            match self.registry.check_name(project_type, name) {
                Ok(()) => return Ok(name.trim().to_string()),
                Err(reason) => {
                    warn!(supplied = name, %reason, "supplied name rejected");
                    print_warning(&format!("Ignoring name '{}': {}", name, reason));
                }
            }
        }

        let mut attempts = 0;
        loop {
            attempts += 1;
            let answer = self.prompter.input(NAME_PROMPT, None)?;
            let reason = match self.registry.check_name(project_type, &answer) {
                Ok(()) => {
                    debug!(attempts, "name accepted");
                    return Ok(answer.trim().to_string());
                }
                Err(reason) => reason,
            };

            warn!(attempt = attempts, answer = %answer, %reason, "name rejected");
            if attempts >= MAX_NAME_ATTEMPTS {
                print_error("You are really struggling here. Might be time to take a walk.");
                print_error(&format!("Invalid name: {}", reason));
                return Err(PromptError::InvalidName {
                    name: answer,
                    reason,
                });
            }
            print_warning(&reason.to_string());
        }
    }

    /// Resolve `options.project` to an existing `"<type>/<name>"` path.
    pub fn select_project(&mut self, mut options: Options) -> Result<Options> {
        if let Some(project) = options.project.as_deref().filter(|p| !p.is_empty()) {
            if !self.registry.list_all_projects()?.iter().any(|p| p == project) {
                return Err(PromptError::InvalidProject(project.to_string()));
            }
            debug!(project, "supplied project found");
            return Ok(options);
        }

        let supplied_type = options.project_type.map(|ty| ty.as_str());
        let project_type = self.resolve_type(supplied_type)?;
        let names = self.registry.list_directories(project_type)?;
        if names.is_empty() {
            return Err(PromptError::NoProjects(project_type));
        }

        let index = self.prompter.select(PROJECT_PROMPT, &names)?;
        let name = names
            .get(index)
            .ok_or_else(|| PromptError::InvalidProject(index.to_string()))?;
        options.project = Some(project_type.project_path(name));
        debug!(project = ?options.project, "project chosen interactively");
        Ok(options)
    }

    /// Collect everything needed to generate a new project.
    pub fn generate(&mut self, mut options: Options) -> Result<Options> {
        let supplied_type = options.project_type.map(|ty| ty.as_str());
        let project_type = self.resolve_type(supplied_type)?;

        // Bail before asking for a name the user can't use.
        let questions = questions_for(project_type)?;

        let name = self.resolve_name(project_type, options.name.as_deref())?;
        let answers = self.ask_questions(questions)?;

        options.project_type = Some(project_type);
        options.n = Some(name.clone());
        options.name = Some(name);
        options.merge_answers(answers)?;
        debug!(project_type = %project_type, "generate options resolved");
        Ok(options)
    }

    /// Ask each follow-up question in order, pairing answers with question names.
    pub fn ask_questions(&mut self, questions: &[Question]) -> Result<Vec<(String, String)>> {
        let mut answers = Vec::with_capacity(questions.len());
        for question in questions {
            let answer = match question.kind {
                QuestionKind::Input { default } => {
                    self.prompter.input(question.message, default)?
                }
                QuestionKind::Select { choices } => {
                    let items: Vec<String> = choices.iter().map(|c| c.to_string()).collect();
                    let index = self.prompter.select(question.message, &items)?;
                    items
                        .get(index)
                        .cloned()
                        .ok_or_else(|| PromptError::InvalidChoice {
                            question: question.name.to_string(),
                            index,
                        })?
                }
            };
            answers.push((question.name.to_string(), answer));
        }
        Ok(answers)
    }
}

/// Resolve the project type, prompting if `supplied` is empty.
pub fn resolve_type<P: Prompter, R: Registry>(
    prompter: &mut P,
    registry: &R,
    supplied: Option<&str>,
) -> Result<ProjectType> {
    Flow::new(prompter, registry).resolve_type(supplied)
}

/// Resolve a new project name for `project_type`.
pub fn resolve_name<P: Prompter, R: Registry>(
    prompter: &mut P,
    registry: &R,
    project_type: ProjectType,
    supplied: Option<&str>,
) -> Result<String> {
    Flow::new(prompter, registry).resolve_name(project_type, supplied)
}

/// Resolve an existing project.
pub fn select_project<P: Prompter, R: Registry>(
    prompter: &mut P,
    registry: &R,
    options: Options,
) -> Result<Options> {
    Flow::new(prompter, registry).select_project(options)
}

/// Resolve options for a new project.
pub fn generate<P: Prompter, R: Registry>(
    prompter: &mut P,
    registry: &R,
    options: Options,
) -> Result<Options> {
    Flow::new(prompter, registry).generate(options)
}
