//! Applies an accepted transition to a project's persisted fields.

use chrono::{Duration, Utc};

use super::lane::derive_lane;
use super::models::{Lane, Project, ProjectStatus};

/// Rewrite a project's persisted fields for the target lane and refresh
/// its update timestamp. Returns whether the project was mutated.
///
/// Validation happens upstream; this function maps any lane onto the
/// `(status, is_queued)` pair unconditionally. A move onto the project's
/// current lane is a no-op: no field change and no timestamp bump.
pub fn apply_transition(project: &mut Project, to: Lane) -> bool {
    if derive_lane(project) == to {
        return false;
    }

    let (status, is_queued) = match to {
        Lane::Active => (ProjectStatus::Active, false),
        Lane::Queued => (ProjectStatus::Parked, true),
        Lane::Parked => (ProjectStatus::Parked, false),
        Lane::Archived => (ProjectStatus::Archived, false),
    };
    project.status = status;
    project.is_queued = is_queued;
    touch(project);
    true
}

/// Advance `updated_at` to now, strictly.
///
/// Two transitions can land on the same clock reading; the timestamp must
/// still strictly increase so "last write" stays unambiguous.
fn touch(project: &mut Project) {
    let now = Utc::now();
    project.updated_at = if now > project.updated_at {
        now
    } else {
        project.updated_at + Duration::microseconds(1)
    };
}
