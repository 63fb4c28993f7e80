//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::error::PromptError;
use crate::options::{parse_answer, Options};
use crate::project::ProjectType;

/// mono - Pick existing projects and describe new ones in the monorepo
#[derive(Parser, Debug)]
#[command(name = "mono")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Monorepo root (the directory containing `projects/`).
    /// Defaults to the nearest ancestor of the current directory that has one.
    #[arg(long, global = true, env = "MONO_ROOT")]
    pub root: Option<PathBuf>,

    /// Print the resolved options as JSON instead of a table
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Show debug diagnostics (ignored when RUST_LOG is set)
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Collect the options needed to generate a new project
    Generate {
        /// Project type (plugin, package, editor-extension, github-action; plural accepted)
        #[arg(short = 't', long = "type")]
        project_type: Option<String>,

        /// Name of the new project
        #[arg(short, long)]
        name: Option<String>,

        /// Pre-filled follow-up answer; prompted answers take precedence
        #[arg(long = "answer", value_name = "KEY=VALUE", value_parser = parse_answer)]
        answers: Vec<(String, String)>,
    },

    /// Choose an existing project
    Select {
        /// Existing project path, e.g. plugins/jetpack
        #[arg(short, long)]
        project: Option<String>,

        /// Only offer projects of this type
        #[arg(short = 't', long = "type")]
        project_type: Option<String>,
    },

    /// List existing projects
    List {
        /// Only list projects of this type
        #[arg(short = 't', long = "type")]
        project_type: Option<String>,
    },
}

impl Commands {
    /// Initial options derived from the flags of `generate` or `select`.
    ///
    /// Type strings are validated here so that an unknown type fails before
    /// anything is prompted.
    pub fn to_options(&self) -> Result<Options, PromptError> {
        let parse_type = |raw: &Option<String>| -> Result<Option<ProjectType>, PromptError> {
            match raw.as_deref().map(str::trim) {
                Some(s) if !s.is_empty() => s.parse().map(Some),
                _ => Ok(None),
            }
        };

        let mut options = Options::default();
        match self {
            Commands::Generate {
                project_type,
                name,
                answers,
            } => {
                options.project_type = parse_type(project_type)?;
                options.name = name.clone();
                options.merge_answers(answers.iter().cloned())?;
            }
            Commands::Select {
                project,
                project_type,
            } => {
                options.project = project.clone();
                options.project_type = parse_type(project_type)?;
            }
            Commands::List { project_type } => {
                options.project_type = parse_type(project_type)?;
            }
        }
        Ok(options)
    }
}
