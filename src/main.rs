//! mono: Monorepo Project CLI
//!
//! Picks existing projects and collects the options for new ones, prompting
//! only for what the command line didn't supply.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use monocli::cli::{generate, root::resolve_root, select_project, Cli, Commands, TermPrompter};
use monocli::registry::{FsRegistry, Registry};
use monocli::report::{display_options, ProjectListing};
use monocli::utils::{print_banner, print_completion, print_info};
use monocli::Options;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let root = resolve_root(cli.root.as_deref(), &cwd);
    tracing::debug!(root = %root.display(), "using monorepo root");
    let registry = FsRegistry::new(&root);

    // Validate flags before anything is prompted.
    let options = cli.command.to_options()?;

    if !cli.json {
        print_banner(env!("CARGO_PKG_VERSION"));
    }

    match &cli.command {
        Commands::Generate { .. } => {
            let mut prompter = TermPrompter::new();
            let resolved = generate(&mut prompter, &registry, options)?;
            report(&resolved, cli.json, "Ready to generate")
        }
        Commands::Select { .. } => {
            let mut prompter = TermPrompter::new();
            let resolved = select_project(&mut prompter, &registry, options)?;
            report(&resolved, cli.json, "Project selected")
        }
        Commands::List { .. } => list_projects(&registry, &options, cli.json),
    }
}

fn report(options: &Options, json: bool, done: &str) -> Result<()> {
    if json {
        return print_json(options);
    }
    display_options(options);
    print_completion(done);
    Ok(())
}

fn list_projects(registry: &FsRegistry, options: &Options, json: bool) -> Result<()> {
    let types = match options.project_type {
        Some(ty) => vec![ty],
        None => monocli::ProjectType::ALL.to_vec(),
    };

    let mut listing = ProjectListing::default();
    for ty in types {
        let names = registry
            .list_directories(ty)
            .with_context(|| format!("Failed to list {}", ty.dir_name()))?;
        listing.push(ty, names);
    }

    if json {
        return print_json(&listing);
    }
    if listing.total() == 0 {
        print_info(&format!(
            "No projects found under {}",
            registry.root().join(monocli::registry::PROJECTS_DIR).display()
        ));
        return Ok(());
    }
    listing.display();
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}
