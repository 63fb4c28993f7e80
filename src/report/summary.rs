//! Tables for resolved options and project listings

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;
use serde::Serialize;

use crate::options::Options;
use crate::project::ProjectType;

/// Build the table shown after a flow resolves.
pub fn options_table(options: &Options) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Option").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    if let Some(project) = &options.project {
        table.add_row(vec![
            Cell::new("📂 project"),
            Cell::new(project).fg(Color::Green),
        ]);
    }
    if let Some(ty) = options.project_type {
        table.add_row(vec![Cell::new("🏷️  type"), Cell::new(ty).fg(Color::Cyan)]);
    }
    if let Some(name) = &options.name {
        table.add_row(vec![
            Cell::new("✏️  name"),
            Cell::new(name)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);
    }
    for (key, value) in &options.answers {
        table.add_row(vec![Cell::new(format!("   {}", key)), Cell::new(value)]);
    }
    table
}

/// Print the resolved options under a heading.
pub fn display_options(options: &Options) {
    println!();
    println!(
        "    {} {}",
        style("📋").cyan(),
        style("RESOLVED OPTIONS").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!();

    // Indent the table
    for line in options_table(options).to_string().lines() {
        println!("    {}", line);
    }
}

/// Existing projects grouped by type.
#[derive(Debug, Default, Serialize)]
pub struct ProjectListing {
    pub groups: Vec<ProjectGroup>,
}

#[derive(Debug, Serialize)]
pub struct ProjectGroup {
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub projects: Vec<String>,
}

impl ProjectListing {
    pub fn push(&mut self, project_type: ProjectType, projects: Vec<String>) {
        self.groups.push(ProjectGroup {
            project_type,
            projects,
        });
    }

    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.projects.len()).sum()
    }

    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Type").add_attribute(Attribute::Bold),
            Cell::new("Project").add_attribute(Attribute::Bold),
        ]);

        for group in &self.groups {
            for name in &group.projects {
                table.add_row(vec![
                    Cell::new(group.project_type.dir_name()).fg(Color::Cyan),
                    Cell::new(name),
                ]);
            }
        }
        table
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {} {}",
            style("📦").cyan(),
            style("PROJECTS").white().bold(),
            style(format!("({})", self.total())).dim()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        for line in self.table().to_string().lines() {
            println!("    {}", line);
        }
    }
}
