//! CLI command implementations.
//!
//! Each submodule owns one or more related `Commands` variants:
//!
//! | Module       | Commands handled                                      |
//! |--------------|-------------------------------------------------------|
//! | `project`    | `Init`, `Add`, `Remove`                               |
//! | `board`      | `Board`, `Status`, `Insights`                         |
//! | `transition` | `Move`, `Promote`, `Demote`, `Queue`, `Archive`, `Restore` |
//! | `config`     | `Config`                                              |

use std::path::Path;

use anyhow::{Result, bail};
use uuid::Uuid;

use runway::board::service::Board;
use runway::settings::RunwayConfig;
use runway::store::JsonStore;

pub mod board;
pub mod config;
pub mod project;
pub mod transition;

pub use board::{cmd_board, cmd_insights, cmd_status};
pub use config::cmd_config;
pub use project::{cmd_add, cmd_init, cmd_remove};
pub use transition::{
    cmd_archive, cmd_demote, cmd_move, cmd_promote, cmd_queue, cmd_restore,
};

/// Load the workspace config and a board populated from its store.
pub(crate) fn open_board(project_dir: &Path) -> Result<(RunwayConfig, Board)> {
    let config = RunwayConfig::new(project_dir.to_path_buf())?;
    if !config.is_initialized() {
        bail!("Not initialized. Run 'runway init' first.");
    }
    let store = JsonStore::new(config.projects_file());
    let board = Board::load(Box::new(store), Box::new(config.toml.clone()))?;
    Ok((config, board))
}

/// Resolve a user-supplied project reference: full id, exact name, or a
/// unique id/name prefix (names case-insensitive).
pub(crate) fn resolve_project(board: &Board, query: &str) -> Result<Uuid> {
    if let Ok(id) = query.parse::<Uuid>() {
        if board.get(id).is_some() {
            return Ok(id);
        }
        bail!("No project with id {}", id);
    }

    let needle = query.to_lowercase();
    if let Some(exact) = board
        .projects()
        .find(|p| p.name.to_lowercase() == needle)
    {
        return Ok(exact.id);
    }

    let matches: Vec<_> = board
        .projects()
        .filter(|p| {
            p.name.to_lowercase().starts_with(&needle) || p.id.to_string().starts_with(&needle)
        })
        .collect();
    match matches.as_slice() {
        [] => bail!("No project matching '{}'", query),
        [only] => Ok(only.id),
        many => {
            let names: Vec<&str> = many.iter().map(|p| p.name.as_str()).collect();
            bail!(
                "Ambiguous project '{}' — matches: {}",
                query,
                names.join(", ")
            );
        }
    }
}

/// Short display form of a project id.
pub(crate) fn short_id(id: Uuid) -> String {
    id.to_string()[..8].to_string()
}
