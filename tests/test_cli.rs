//! Tests for CLI argument parsing and the non-interactive command paths

mod common;

use assert_cmd::Command;
use clap::Parser;
use common::{create_monorepo, path_str};
use monocli::cli::{Cli, Commands};
use monocli::{PromptError, ProjectType};
use predicates::prelude::*;

fn mono() -> Command {
    let mut cmd = Command::cargo_bin("mono").unwrap();
    cmd.env_remove("MONO_ROOT").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_generate_flags() {
    let cli = Cli::parse_from([
        "mono",
        "generate",
        "--type",
        "packages",
        "--name",
        "my-pkg",
        "--answer",
        "desc=Hello",
    ]);

    let options = cli.command.to_options().unwrap();
    assert_eq!(options.project_type, Some(ProjectType::Package));
    assert_eq!(options.name.as_deref(), Some("my-pkg"));
    assert_eq!(options.answer("desc"), Some("Hello"));
    assert!(!cli.json);
    assert!(cli.root.is_none());
}

#[test]
fn test_cli_select_flags() {
    let cli = Cli::parse_from(["mono", "--json", "select", "-p", "plugins/jetpack"]);

    assert!(cli.json);
    assert!(matches!(cli.command, Commands::Select { .. }));
    let options = cli.command.to_options().unwrap();
    assert_eq!(options.project.as_deref(), Some("plugins/jetpack"));
    assert!(options.project_type.is_none());
}

#[test]
fn test_cli_global_flags_after_subcommand() {
    let cli = Cli::parse_from(["mono", "list", "--root", "/tmp/repo", "-v"]);

    assert!(cli.verbose);
    assert_eq!(cli.root.as_deref(), Some(std::path::Path::new("/tmp/repo")));
}

#[test]
fn test_cli_invalid_type_fails_before_prompting() {
    let cli = Cli::parse_from(["mono", "generate", "--type", "themes"]);

    let err = cli.command.to_options().unwrap_err();
    assert!(matches!(err, PromptError::InvalidType(ref s) if s == "themes"));
}

#[test]
fn test_cli_rejects_malformed_answer() {
    let result = Cli::try_parse_from(["mono", "generate", "--answer", "no-equals"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_rejects_reserved_answer_keys() {
    for raw in ["name=evil", "type=theme", "n=x", "project=plugins/x", "version=9"] {
        let result = Cli::try_parse_from(["mono", "generate", "--answer", raw]);
        assert!(result.is_err(), "'{}' should not parse", raw);
    }
}

#[test]
fn test_generate_reserved_answer_fails() {
    mono()
        .args([
            "generate",
            "--type",
            "package",
            "--name",
            "my-pkg",
            "--answer",
            "name=evil",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("can't be an answer"));
}

#[test]
fn test_rust_log_enables_debug_output() {
    let repo = create_monorepo(&["plugins/jetpack"]);

    mono()
        .env("RUST_LOG", "debug")
        .args(["--root", &path_str(repo.path()), "--json", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("using monorepo root"));
}

#[test]
fn test_verbose_enables_debug_output() {
    let repo = create_monorepo(&["plugins/jetpack"]);

    mono()
        .args(["--root", &path_str(repo.path()), "--json", "-v", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("using monorepo root"));
}

#[test]
fn test_list_projects_json() {
    let repo = create_monorepo(&["plugins/jetpack", "plugins/boost", "packages/assets"]);

    mono()
        .args(["--root", &path_str(repo.path()), "--json", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"plugin\""))
        .stdout(predicate::str::contains("\"jetpack\""))
        .stdout(predicate::str::contains("\"assets\""));
}

#[test]
fn test_list_projects_table_filtered() {
    let repo = create_monorepo(&["plugins/jetpack", "packages/assets"]);

    mono()
        .args(["--root", &path_str(repo.path()), "list", "--type", "package"])
        .assert()
        .success()
        .stdout(predicate::str::contains("assets"))
        .stdout(predicate::str::contains("jetpack").not());
}

#[test]
fn test_root_from_env() {
    let repo = create_monorepo(&["github-actions/repo-gardening"]);

    mono()
        .env("MONO_ROOT", repo.path())
        .args(["--json", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("repo-gardening"));
}

#[test]
fn test_select_existing_project_non_interactive() {
    let repo = create_monorepo(&["plugins/jetpack"]);

    mono()
        .args([
            "--root",
            &path_str(repo.path()),
            "--json",
            "select",
            "--project",
            "plugins/jetpack",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"project\": \"plugins/jetpack\""));
}

#[test]
fn test_select_unknown_project_fails() {
    let repo = create_monorepo(&["plugins/jetpack"]);

    mono()
        .args([
            "--root",
            &path_str(repo.path()),
            "select",
            "--project",
            "plugins/nope",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Must be an existing project"));
}

#[test]
fn test_generate_unsupported_type_fails() {
    let repo = create_monorepo(&["plugins/jetpack"]);

    mono()
        .args(["--root", &path_str(repo.path()), "generate", "--type", "plugin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not supported yet"));
}

#[test]
fn test_generate_invalid_type_fails() {
    mono()
        .args(["generate", "--type", "themes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Must be a valid project type"));
}
