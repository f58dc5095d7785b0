//! The `Board` aggregate — owns the project collection and funnels every
//! mutation through the validator/mutator pair.
//!
//! The board is dependency-injected: whoever constructs it hands over the
//! persistence sink and the settings provider, so there is no ambient
//! state anywhere in the core. Explicit commands (promote, demote,
//! toggle-queue, archive, restore) and drag boundary crossings both end up
//! in [`Board::move_to`], which is the only place a transition is
//! validated and applied.

use std::collections::HashMap;

use tracing::warn;
use uuid::Uuid;

use crate::errors::{BoardError, TransitionError};
use crate::settings::SettingsProvider;
use crate::store::ProjectStore;

use super::advisor::{self, Insight};
use super::capacity;
use super::lane::{derive_lane, normalize};
use super::models::{Lane, Project};
use super::mutator;
use super::transition;

/// What a move request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// The project was already in the target lane; nothing was touched.
    NoChange,
}

pub struct Board {
    projects: HashMap<Uuid, Project>,
    store: Box<dyn ProjectStore>,
    settings: Box<dyn SettingsProvider>,
}

impl Board {
    /// Create an empty board.
    pub fn new(store: Box<dyn ProjectStore>, settings: Box<dyn SettingsProvider>) -> Self {
        Self {
            projects: HashMap::new(),
            store,
            settings,
        }
    }

    /// Create a board populated from the store.
    ///
    /// Records carrying a stray queued flag are repaired on the way in and
    /// the repaired snapshot is written back.
    pub fn load(
        store: Box<dyn ProjectStore>,
        settings: Box<dyn SettingsProvider>,
    ) -> anyhow::Result<Self> {
        let mut projects = HashMap::new();
        for mut project in store.load_all()? {
            if normalize(&mut project)
                && let Err(e) = store.persist(&project)
            {
                warn!(project = %project.id, error = %e, "failed to persist repaired record");
            }
            projects.insert(project.id, project);
        }
        Ok(Self {
            projects,
            store,
            settings,
        })
    }

    // ── Collection access ─────────────────────────────────────────────

    pub fn get(&self, id: Uuid) -> Option<&Project> {
        self.projects.get(&id)
    }

    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.values()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// The lane a project currently appears in.
    pub fn lane_of(&self, id: Uuid) -> Option<Lane> {
        self.projects.get(&id).map(derive_lane)
    }

    /// Projects in one lane, oldest first.
    pub fn projects_in(&self, lane: Lane) -> Vec<&Project> {
        let mut in_lane: Vec<&Project> = self
            .projects
            .values()
            .filter(|p| derive_lane(p) == lane)
            .collect();
        in_lane.sort_by_key(|p| p.created_at);
        in_lane
    }

    pub fn count_in(&self, lane: Lane) -> usize {
        self.projects.values().filter(|p| derive_lane(p) == lane).count()
    }

    pub fn active_count(&self) -> usize {
        capacity::active_count(self.projects.values())
    }

    pub fn settings(&self) -> &dyn SettingsProvider {
        self.settings.as_ref()
    }

    // ── Creation ──────────────────────────────────────────────────────

    /// Add a project to the board and dispatch it to the store.
    pub fn add_project(&mut self, mut project: Project) -> Uuid {
        normalize(&mut project);
        let id = project.id;
        self.dispatch_persist(&project);
        self.projects.insert(id, project);
        id
    }

    // ── Transition surface ────────────────────────────────────────────

    /// Move a project to a target lane.
    ///
    /// The single validated mutation path: adjacency first, then capacity
    /// for moves into the active lane, then the field rewrite and a
    /// fire-and-forget store dispatch. Dropping a project onto its own
    /// lane is a no-op with no timestamp bump.
    pub fn move_to(&mut self, id: Uuid, to: Lane) -> Result<MoveOutcome, BoardError> {
        let active = capacity::active_count(self.projects.values());
        let Some(project) = self.projects.get_mut(&id) else {
            return Err(BoardError::UnknownProject { id });
        };

        let from = derive_lane(project);
        if from == to {
            return Ok(MoveOutcome::NoChange);
        }

        transition::can_transition(from, to, active, self.settings.as_ref())?;

        mutator::apply_transition(project, to);
        let snapshot = project.clone();
        self.dispatch_persist(&snapshot);
        Ok(MoveOutcome::Moved)
    }

    /// Move a project into the active lane.
    pub fn promote(&mut self, id: Uuid) -> Result<MoveOutcome, BoardError> {
        self.move_to(id, Lane::Active)
    }

    /// Take an active project back to parked.
    pub fn demote(&mut self, id: Uuid) -> Result<MoveOutcome, BoardError> {
        self.move_to(id, Lane::Parked)
    }

    /// Flip a project between parked and queued.
    pub fn toggle_queue(&mut self, id: Uuid) -> Result<MoveOutcome, BoardError> {
        let Some(current) = self.lane_of(id) else {
            return Err(BoardError::UnknownProject { id });
        };
        match current {
            Lane::Parked => self.move_to(id, Lane::Queued),
            Lane::Queued => self.move_to(id, Lane::Parked),
            other => Err(TransitionError::InvalidTransition {
                from: other,
                to: Lane::Queued,
            }
            .into()),
        }
    }

    /// Archive a project.
    pub fn archive(&mut self, id: Uuid) -> Result<MoveOutcome, BoardError> {
        self.move_to(id, Lane::Archived)
    }

    /// Bring an archived project back to parked.
    pub fn restore(&mut self, id: Uuid) -> Result<MoveOutcome, BoardError> {
        self.move_to(id, Lane::Parked)
    }

    // ── Insights ──────────────────────────────────────────────────────

    pub fn insights(&self) -> Vec<Insight> {
        advisor::insights(self.projects.values())
    }

    // ── Persistence dispatch ──────────────────────────────────────────

    /// Hand a snapshot to the store without observing the outcome beyond
    /// a diagnostic. The in-memory collection is already updated; a failed
    /// write means board and store diverge until the next successful one.
    fn dispatch_persist(&self, project: &Project) {
        if let Err(e) = self.store.persist(project) {
            warn!(project = %project.id, error = %e, "project write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::FixedSettings;
    use crate::store::{FailingStore, MemoryStore};

    fn board_with_limit(max_active: u32) -> (Board, MemoryStore) {
        let store = MemoryStore::new();
        let settings = FixedSettings {
            max_active_projects: max_active,
            team_capacity: 30,
        };
        let board = Board::new(Box::new(store.clone()), Box::new(settings));
        (board, store)
    }

    fn add(board: &mut Board, name: &str) -> Uuid {
        board.add_project(Project::new(name, ""))
    }

    // =========================================
    // Collection tests
    // =========================================

    #[test]
    fn test_add_project_lands_in_parked_and_store() {
        let (mut board, store) = board_with_limit(3);
        let id = add(&mut board, "website");

        assert_eq!(board.lane_of(id), Some(Lane::Parked));
        assert_eq!(store.get(id).unwrap().name, "website");
    }

    #[test]
    fn test_load_repairs_stray_queued_flag() {
        let store = MemoryStore::new();
        let mut corrupt = Project::new("corrupt", "");
        corrupt.status = crate::board::models::ProjectStatus::Active;
        corrupt.is_queued = true;
        store.persist(&corrupt).unwrap();

        let board = Board::load(
            Box::new(store.clone()),
            Box::new(FixedSettings::default()),
        )
        .unwrap();

        assert_eq!(board.lane_of(corrupt.id), Some(Lane::Active));
        assert!(!board.get(corrupt.id).unwrap().is_queued);
        // Repair was written back.
        assert!(!store.get(corrupt.id).unwrap().is_queued);
    }

    #[test]
    fn test_projects_in_sorts_oldest_first() {
        let (mut board, _store) = board_with_limit(3);
        let first = add(&mut board, "first");
        let second = add(&mut board, "second");
        // Force distinct creation order regardless of clock resolution.
        {
            let p = board.projects.get_mut(&second).unwrap();
            p.created_at = p.created_at + chrono::Duration::seconds(1);
        }

        let parked = board.projects_in(Lane::Parked);
        assert_eq!(parked[0].id, first);
        assert_eq!(parked[1].id, second);
    }

    // =========================================
    // Command path tests
    // =========================================

    #[test]
    fn test_scenario_queue_then_promote() {
        // Create parked, toggle into queue, promote with capacity free.
        let (mut board, _store) = board_with_limit(3);
        let id = add(&mut board, "p1");

        assert_eq!(board.toggle_queue(id).unwrap(), MoveOutcome::Moved);
        assert_eq!(board.lane_of(id), Some(Lane::Queued));

        assert_eq!(board.promote(id).unwrap(), MoveOutcome::Moved);
        assert_eq!(board.lane_of(id), Some(Lane::Active));
        assert!(!board.get(id).unwrap().is_queued);
    }

    #[test]
    fn test_capacity_blocks_fourth_promotion() {
        let (mut board, _store) = board_with_limit(3);
        for name in ["a", "b", "c"] {
            let id = add(&mut board, name);
            board.promote(id).unwrap();
        }
        let fourth = add(&mut board, "d");

        let result = board.promote(fourth);
        assert_eq!(
            result,
            Err(BoardError::Transition(TransitionError::CapacityExceeded {
                limit: 3
            }))
        );
        assert_eq!(board.active_count(), 3);
        assert_eq!(board.lane_of(fourth), Some(Lane::Parked));
    }

    #[test]
    fn test_toggle_queue_rejected_outside_parked_and_queued() {
        let (mut board, _store) = board_with_limit(3);
        let id = add(&mut board, "p");
        board.promote(id).unwrap();

        let result = board.toggle_queue(id);
        assert!(matches!(
            result,
            Err(BoardError::Transition(
                TransitionError::InvalidTransition { from: Lane::Active, .. }
            ))
        ));
    }

    #[test]
    fn test_archive_and_restore_round_trip() {
        let (mut board, _store) = board_with_limit(3);
        let id = add(&mut board, "p");

        board.archive(id).unwrap();
        assert_eq!(board.lane_of(id), Some(Lane::Archived));

        board.restore(id).unwrap();
        assert_eq!(board.lane_of(id), Some(Lane::Parked));
        assert!(!board.get(id).unwrap().is_queued);
    }

    #[test]
    fn test_archived_cannot_be_promoted() {
        let (mut board, _store) = board_with_limit(3);
        let id = add(&mut board, "p");
        board.archive(id).unwrap();

        let result = board.promote(id);
        assert!(matches!(
            result,
            Err(BoardError::Transition(
                TransitionError::InvalidTransition { .. }
            ))
        ));
        assert_eq!(board.lane_of(id), Some(Lane::Archived));
    }

    #[test]
    fn test_round_trip_restores_fields_and_bumps_timestamp() {
        let (mut board, _store) = board_with_limit(3);
        let id = add(&mut board, "p");
        let t0 = board.get(id).unwrap().updated_at;

        board.promote(id).unwrap();
        let t1 = board.get(id).unwrap().updated_at;
        board.demote(id).unwrap();
        let p = board.get(id).unwrap();

        assert_eq!(p.status, crate::board::models::ProjectStatus::Parked);
        assert!(!p.is_queued);
        assert!(t1 > t0);
        assert!(p.updated_at > t1);
    }

    #[test]
    fn test_move_to_same_lane_is_noop() {
        let (mut board, _store) = board_with_limit(3);
        let id = add(&mut board, "p");
        let before = board.get(id).unwrap().updated_at;

        assert_eq!(board.move_to(id, Lane::Parked).unwrap(), MoveOutcome::NoChange);
        assert_eq!(board.get(id).unwrap().updated_at, before);
    }

    #[test]
    fn test_unknown_project_is_an_error() {
        let (mut board, _store) = board_with_limit(3);
        let ghost = Uuid::new_v4();
        assert_eq!(
            board.move_to(ghost, Lane::Active),
            Err(BoardError::UnknownProject { id: ghost })
        );
    }

    // =========================================
    // Persistence dispatch tests
    // =========================================

    #[test]
    fn test_transitions_are_persisted() {
        let (mut board, store) = board_with_limit(3);
        let id = add(&mut board, "p");
        board.promote(id).unwrap();

        let stored = store.get(id).unwrap();
        assert_eq!(stored.status, crate::board::models::ProjectStatus::Active);
    }

    #[test]
    fn test_noop_moves_are_not_persisted_again() {
        let (mut board, store) = board_with_limit(3);
        let id = add(&mut board, "p");
        let stored_before = store.get(id).unwrap().updated_at;

        board.move_to(id, Lane::Parked).unwrap();
        assert_eq!(store.get(id).unwrap().updated_at, stored_before);
    }

    #[test]
    fn test_failed_write_does_not_block_the_board() {
        // The store is a fire-and-forget sink: a failing write leaves the
        // in-memory collection updated and diverging from the store.
        let settings = FixedSettings::default();
        let mut board = Board::new(Box::new(FailingStore), Box::new(settings));
        let id = board.add_project(Project::new("p", ""));

        assert_eq!(board.promote(id).unwrap(), MoveOutcome::Moved);
        assert_eq!(board.lane_of(id), Some(Lane::Active));
    }

    // =========================================
    // Insight tests
    // =========================================

    #[test]
    fn test_insights_follow_the_collection() {
        let (mut board, _store) = board_with_limit(3);
        assert!(board.insights().is_empty());

        let id = add(&mut board, "p");
        assert_eq!(board.insights(), vec![Insight::ReviewParked]);

        board.toggle_queue(id).unwrap();
        assert_eq!(board.insights(), vec![Insight::PromoteFromQueue]);

        board.promote(id).unwrap();
        assert!(board.insights().is_empty());
    }
}
