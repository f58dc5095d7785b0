//! Capacity gate for the active lane.

use crate::settings::SettingsProvider;

use super::lane::derive_lane;
use super::models::{Lane, Project};

/// True iff one more project may enter the active lane.
///
/// Stateless: callers pass a count taken from a fresh snapshot of the
/// collection. Lowering the configured maximum below the current active
/// count is not retroactively enforced; projects already in the active
/// lane stay there, and the gate only blocks new entries.
pub fn can_enter_active(active_count: usize, settings: &dyn SettingsProvider) -> bool {
    active_count < settings.max_active_projects() as usize
}

/// Count the projects currently occupying the active lane.
pub fn active_count<'a, I>(projects: I) -> usize
where
    I: IntoIterator<Item = &'a Project>,
{
    projects
        .into_iter()
        .filter(|p| derive_lane(p) == Lane::Active)
        .count()
}
