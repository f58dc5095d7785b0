//! Explicit transition commands.
//!
//! All verbs resolve the project, call the board's validated move path,
//! and report the outcome. Rejections are user-level outcomes here, not
//! program errors: capacity and adjacency rejections print a friendly
//! message and leave the board untouched.

use std::path::Path;

use anyhow::Result;
use console::style;
use uuid::Uuid;

use runway::board::models::Lane;
use runway::board::service::{Board, MoveOutcome};
use runway::errors::{BoardError, TransitionError};

use super::{open_board, resolve_project};

pub fn cmd_move(project_dir: &Path, query: &str, lane: &str) -> Result<()> {
    let lane: Lane = lane.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    run_transition(project_dir, query, |board, id| board.move_to(id, lane))
}

pub fn cmd_promote(project_dir: &Path, query: &str) -> Result<()> {
    run_transition(project_dir, query, Board::promote)
}

pub fn cmd_demote(project_dir: &Path, query: &str) -> Result<()> {
    run_transition(project_dir, query, Board::demote)
}

pub fn cmd_queue(project_dir: &Path, query: &str) -> Result<()> {
    run_transition(project_dir, query, Board::toggle_queue)
}

pub fn cmd_archive(project_dir: &Path, query: &str) -> Result<()> {
    run_transition(project_dir, query, Board::archive)
}

pub fn cmd_restore(project_dir: &Path, query: &str) -> Result<()> {
    run_transition(project_dir, query, Board::restore)
}

fn run_transition<F>(project_dir: &Path, query: &str, op: F) -> Result<()>
where
    F: FnOnce(&mut Board, Uuid) -> Result<MoveOutcome, BoardError>,
{
    let (_config, mut board) = open_board(project_dir)?;
    let id = resolve_project(&board, query)?;
    let name = board.get(id).map(|p| p.name.clone()).unwrap_or_default();

    let result = op(&mut board, id);
    let lane = board.lane_of(id);
    report(&name, lane, result);
    Ok(())
}

fn report(name: &str, lane: Option<Lane>, result: Result<MoveOutcome, BoardError>) {
    let lane_str = lane.map(|l| l.as_str()).unwrap_or("?");
    match result {
        Ok(MoveOutcome::Moved) => {
            println!("{} {} → {}", style("Moved").green(), name, lane_str);
        }
        Ok(MoveOutcome::NoChange) => {
            println!("{} is already in {}", name, lane_str);
        }
        Err(BoardError::Transition(TransitionError::CapacityExceeded { limit })) => {
            println!(
                "{} The active lane is full ({} project limit). Finish or park something first.",
                style("Not moved:").yellow(),
                limit
            );
        }
        Err(BoardError::Transition(TransitionError::InvalidTransition { from, to })) => {
            println!(
                "{} a project can't go from {} to {}.",
                style("Not moved:").yellow(),
                from,
                to
            );
        }
        Err(BoardError::UnknownProject { id }) => {
            println!("{} no project with id {}", style("Not moved:").yellow(), id);
        }
    }
}
