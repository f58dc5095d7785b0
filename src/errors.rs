//! Typed error hierarchy for the board core.
//!
//! Two enums cover the two rejection layers:
//! - `TransitionError` — a proposed lane change failed validation
//! - `BoardError` — board-level failures (unknown project, or a nested
//!   transition rejection)
//!
//! Persistence failures never appear here: the board treats its store as a
//! fire-and-forget sink and logs write errors instead of propagating them.

use thiserror::Error;
use uuid::Uuid;

use crate::board::models::Lane;

/// Rejection reasons from the transition validator.
///
/// Adjacency is always checked before capacity, so `CapacityExceeded` is
/// only ever reported for a structurally legal edge into the active lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("cannot move a project from {from} to {to}")]
    InvalidTransition { from: Lane, to: Lane },

    #[error("active lane is full ({limit} project limit)")]
    CapacityExceeded { limit: u32 },
}

/// Errors from board-level operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("no project with id {id}")]
    UnknownProject { id: Uuid },

    #[error(transparent)]
    Transition(#[from] TransitionError),
}
