//! Portfolio-level hints derived from the lane distribution.
//!
//! Purely advisory: the advisor never mutates anything, and the host
//! recomputes it whenever the collection changes.

use super::lane::derive_lane;
use super::models::{Lane, Project};

/// Upper bound on hints emitted per pass.
pub const MAX_INSIGHTS: usize = 2;

/// A single non-authoritative hint for the banner display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insight {
    /// Nothing is active but the queue has candidates.
    PromoteFromQueue,
    /// The queue is empty while parked projects pile up.
    ReviewParked,
}

impl Insight {
    pub fn message(&self) -> &'static str {
        match self {
            Self::PromoteFromQueue => {
                "Nothing is active but the queue isn't empty; consider promoting a project"
            }
            Self::ReviewParked => {
                "The queue is empty; consider reviewing parked projects for candidates"
            }
        }
    }
}

impl std::fmt::Display for Insight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Bucket the collection by lane and emit at most [`MAX_INSIGHTS`] hints.
pub fn insights<'a, I>(projects: I) -> Vec<Insight>
where
    I: IntoIterator<Item = &'a Project>,
{
    let mut active = 0usize;
    let mut queued = 0usize;
    let mut parked = 0usize;
    for project in projects {
        match derive_lane(project) {
            Lane::Active => active += 1,
            Lane::Queued => queued += 1,
            Lane::Parked => parked += 1,
            Lane::Archived => {}
        }
    }

    let mut out = Vec::new();
    if active == 0 && queued > 0 {
        out.push(Insight::PromoteFromQueue);
    }
    if queued == 0 && parked > 0 {
        out.push(Insight::ReviewParked);
    }
    out.truncate(MAX_INSIGHTS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::models::ProjectStatus;

    fn in_lane(lane: Lane) -> Project {
        let mut p = Project::new("p", "");
        match lane {
            Lane::Parked => {}
            Lane::Queued => p.is_queued = true,
            Lane::Active => p.status = ProjectStatus::Active,
            Lane::Archived => p.status = ProjectStatus::Archived,
        }
        p
    }

    #[test]
    fn test_empty_board_has_no_insights() {
        assert!(insights(std::iter::empty()).is_empty());
    }

    #[test]
    fn test_idle_queue_suggests_promoting() {
        let projects = [in_lane(Lane::Queued), in_lane(Lane::Queued)];
        assert_eq!(insights(projects.iter()), vec![Insight::PromoteFromQueue]);
    }

    #[test]
    fn test_empty_queue_with_parked_suggests_review() {
        let projects = [in_lane(Lane::Parked), in_lane(Lane::Active)];
        assert_eq!(insights(projects.iter()), vec![Insight::ReviewParked]);
    }

    #[test]
    fn test_no_insight_when_work_is_flowing() {
        let projects = [in_lane(Lane::Active), in_lane(Lane::Queued)];
        assert!(insights(projects.iter()).is_empty());
    }

    #[test]
    fn test_archived_projects_are_invisible_to_the_advisor() {
        let projects = [in_lane(Lane::Archived), in_lane(Lane::Archived)];
        assert!(insights(projects.iter()).is_empty());
    }

    #[test]
    fn test_parked_only_board_gets_review_hint() {
        // No active, nothing queued, parked backlog: promoting has no
        // candidates, so only the review hint applies.
        let projects = [in_lane(Lane::Parked)];
        assert_eq!(insights(projects.iter()), vec![Insight::ReviewParked]);
    }

    #[test]
    fn test_never_more_than_the_cap() {
        let projects = [in_lane(Lane::Parked), in_lane(Lane::Queued)];
        assert!(insights(projects.iter()).len() <= MAX_INSIGHTS);
    }
}
