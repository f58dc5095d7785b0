//! Workspace initialization and project creation/removal.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use dialoguer::Confirm;

use runway::board::models::Project;
use runway::settings::RunwayToml;
use runway::store::{JsonStore, ProjectStore};

use super::{open_board, resolve_project, short_id};

pub fn cmd_init(project_dir: &Path) -> Result<()> {
    let runway_dir = project_dir.join(".runway");
    if runway_dir.exists() {
        println!("Workspace already initialized at {}", runway_dir.display());
        return Ok(());
    }

    std::fs::create_dir_all(&runway_dir)
        .with_context(|| format!("Failed to create {}", runway_dir.display()))?;
    RunwayToml::default().save(&runway_dir.join("runway.toml"))?;
    JsonStore::new(runway_dir.join("projects.json")).init()?;

    println!(
        "{} runway workspace at {}",
        style("Initialized").green(),
        runway_dir.display()
    );
    Ok(())
}

pub fn cmd_add(
    project_dir: &Path,
    name: &str,
    description: &str,
    goal: Option<String>,
    color: Option<String>,
) -> Result<()> {
    let (_config, mut board) = open_board(project_dir)?;

    if board
        .projects()
        .any(|p| p.name.eq_ignore_ascii_case(name))
    {
        anyhow::bail!("A project named '{}' already exists", name);
    }

    let mut project = Project::new(name, description);
    if let Some(goal) = goal {
        project = project.with_goal(&goal);
    }
    if let Some(color) = color {
        project = project.with_color(&color);
    }
    let id = board.add_project(project);

    println!(
        "{} {} ({}) — parked",
        style("Added").green(),
        name,
        short_id(id)
    );
    Ok(())
}

pub fn cmd_remove(project_dir: &Path, query: &str, force: bool) -> Result<()> {
    let (config, board) = open_board(project_dir)?;
    let id = resolve_project(&board, query)?;
    let name = board.get(id).map(|p| p.name.clone()).unwrap_or_default();

    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Permanently delete '{}'?", name))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    // Deletion bypasses the board on purpose: the lifecycle core never
    // hard-deletes, so this talks to the store directly.
    JsonStore::new(config.projects_file()).remove(id)?;
    println!("{} {}", style("Removed").red(), name);
    Ok(())
}
