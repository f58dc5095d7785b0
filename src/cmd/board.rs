//! Board rendering, status summary, and insights.

use std::path::Path;

use anyhow::Result;
use console::style;

use runway::board::models::Lane;

use super::{open_board, short_id};

pub fn cmd_board(project_dir: &Path) -> Result<()> {
    let (_config, board) = open_board(project_dir)?;
    let max_active = board.settings().max_active_projects();

    println!();
    for lane in Lane::ALL {
        let projects = board.projects_in(lane);
        let header = match lane {
            Lane::Active => format!(
                "{} ({}/{})",
                lane.as_str().to_uppercase(),
                projects.len(),
                max_active
            ),
            _ => format!("{} ({})", lane.as_str().to_uppercase(), projects.len()),
        };
        println!("{}", style(header).bold());

        if projects.is_empty() {
            println!("  {}", style("—").dim());
        }
        for project in projects {
            let mut line = format!("  {}  {}", style(short_id(project.id)).dim(), project.name);
            if !project.description.is_empty() {
                line.push_str(&format!(" — {}", style(&project.description).dim()));
            }
            println!("{}", line);
        }
        println!();
    }
    Ok(())
}

pub fn cmd_status(project_dir: &Path) -> Result<()> {
    let (_config, board) = open_board(project_dir)?;
    let settings = board.settings();
    let active = board.active_count();
    let max_active = settings.max_active_projects();

    println!();
    println!("Projects: {}", board.len());
    for lane in Lane::ALL {
        println!("  {:<10} {}", lane.as_str(), board.count_in(lane));
    }
    println!();

    let gauge = format!("{}/{}", active, max_active);
    if active >= max_active as usize {
        println!("Active capacity: {} {}", gauge, style("(full)").yellow());
    } else {
        println!("Active capacity: {}", gauge);
    }
    println!("Team capacity:   {} hours/week", settings.team_capacity());

    let insights = board.insights();
    if !insights.is_empty() {
        println!();
        for insight in insights {
            println!("{} {}", style("hint:").cyan(), insight);
        }
    }
    println!();
    Ok(())
}

pub fn cmd_insights(project_dir: &Path) -> Result<()> {
    let (_config, board) = open_board(project_dir)?;
    let insights = board.insights();

    if insights.is_empty() {
        println!("No insights. The board looks healthy.");
        return Ok(());
    }
    for insight in insights {
        println!("{} {}", style("hint:").cyan(), insight);
    }
    Ok(())
}
