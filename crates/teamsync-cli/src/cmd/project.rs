//! `tsy project` — project directory management.

use clap::{Args, Subcommand};
use std::io::Write as _;
use teamsync_core::model::Project;

use crate::cmd::open_synced_store;
use crate::output::{render, render_success, OutputMode};

#[derive(Subcommand, Debug)]
pub enum ProjectCommand {
    #[command(about = "Create a project and push it to the Projects sheet")]
    Add(ProjectAddArgs),

    #[command(about = "List projects")]
    List,
}

#[derive(Args, Debug)]
pub struct ProjectAddArgs {
    /// Project name; doubles as its id.
    pub name: String,

    /// Presentation color as a hex value.
    #[arg(long, default_value = "#DBEAFE")]
    pub color: String,

    /// Free-text description.
    #[arg(long)]
    pub description: Option<String>,
}

pub fn run_project(command: &ProjectCommand, output: OutputMode) -> anyhow::Result<()> {
    match command {
        ProjectCommand::Add(args) => {
            let mut store = open_synced_store()?;
            if !store.add_project(&args.name, &args.color, args.description.as_deref()) {
                anyhow::bail!("project already exists or has no name: '{}'", args.name);
            }
            render_success(output, &format!("Created project {}", args.name))
        }
        ProjectCommand::List => {
            let store = open_synced_store()?;
            let projects: Vec<Project> = store.model().projects.clone();
            render(output, &projects, |projects, w| {
                for project in projects {
                    match &project.description {
                        Some(description) => {
                            writeln!(w, "{:<24} {}", project.name, description)?;
                        }
                        None => writeln!(w, "{}", project.name)?,
                    }
                }
                Ok(())
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_add_defaults_the_color() {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            args: ProjectAddArgs,
        }
        let w = Wrapper::parse_from(["test", "Launch"]);
        assert_eq!(w.args.name, "Launch");
        assert_eq!(w.args.color, "#DBEAFE");
        assert!(w.args.description.is_none());
    }
}
