//! Lane derivation — the pure mapping from a project's persisted fields
//! to the lane it appears in on the board.

use tracing::warn;

use super::models::{Lane, Project, ProjectStatus};

/// Derive the lane a project currently occupies.
///
/// Total and pure: every `(status, is_queued)` combination maps to a lane.
/// The queued flag is only meaningful for parked projects; on active or
/// archived projects it is ignored here and cleared by [`normalize`].
pub fn derive_lane(project: &Project) -> Lane {
    match (project.status, project.is_queued) {
        (ProjectStatus::Active, _) => Lane::Active,
        (ProjectStatus::Archived, _) => Lane::Archived,
        (ProjectStatus::Parked, true) => Lane::Queued,
        (ProjectStatus::Parked, false) => Lane::Parked,
    }
}

/// Clear a stray queued flag on a non-parked project.
///
/// `is_queued == true` with any status other than `parked` is a defect in
/// the stored record. Returns whether the record was repaired.
pub fn normalize(project: &mut Project) -> bool {
    if project.is_queued && project.status != ProjectStatus::Parked {
        warn!(
            project = %project.id,
            status = %project.status,
            "clearing queued flag on non-parked project"
        );
        project.is_queued = false;
        return true;
    }
    false
}
