//! Drag gesture coordination.
//!
//! One coordinator instance tracks one pointer gesture at a time:
//! **Idle → Picked-up → (Hovering)\* → Idle**. The host's drag framework
//! drives the three hooks; everything else is derived.
//!
//! Transitions commit live on every lane boundary crossing rather than on
//! release, so the card under the pointer always shows its real, persisted
//! lane. Each crossing is therefore individually validated: a rejected
//! crossing is logged and otherwise ignored, and the card simply stays
//! where it was. Release never mutates; it only discards the session.

use tracing::{debug, warn};
use uuid::Uuid;

use super::models::Lane;
use super::service::Board;

/// What the pointer is currently over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// Hovering over another project's card; the target lane is wherever
    /// that card currently is.
    OnProject(Uuid),
    /// Hovering over a lane's empty surface.
    OnLane(Lane),
}

/// Transient record of one in-progress gesture. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    /// The project being moved.
    pub project_id: Uuid,
    /// The lane it was picked up from.
    pub origin: Lane,
}

/// Coordinates a single pointer-driven reordering gesture.
///
/// The host guarantees at most one gesture per input device, and the
/// whole flow is synchronous, so there is no locking here.
#[derive(Debug, Default)]
pub struct DragCoordinator {
    session: Option<DragSession>,
}

impl DragCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The in-flight session, if a gesture is underway.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Start a gesture: record what is being moved and where it sits.
    /// No mutation happens on pick-up.
    pub fn on_pick_up(&mut self, board: &Board, project_id: Uuid) {
        let Some(origin) = board.lane_of(project_id) else {
            warn!(project = %project_id, "pick-up of unknown project ignored");
            return;
        };
        if let Some(stale) = self.session.take() {
            warn!(project = %stale.project_id, "discarding stale drag session");
        }
        self.session = Some(DragSession { project_id, origin });
    }

    /// Process a hover event.
    ///
    /// Resolves the target to a lane. When that lane differs from the
    /// dragged project's *current* lane (a boundary crossing), the
    /// transition is attempted immediately through the board's one
    /// validated path. Hovering over the dragged card itself, or over the
    /// lane it already occupies, does nothing.
    pub fn on_hover(&mut self, board: &mut Board, target: DropTarget) {
        let Some(session) = self.session else {
            return;
        };

        let target_lane = match target {
            DropTarget::OnProject(id) if id == session.project_id => return,
            DropTarget::OnProject(id) => match board.lane_of(id) {
                Some(lane) => lane,
                None => {
                    debug!(target = %id, "hover over unknown project ignored");
                    return;
                }
            },
            DropTarget::OnLane(lane) => lane,
        };

        let Some(current) = board.lane_of(session.project_id) else {
            // Dragged project vanished mid-gesture (external delete).
            warn!(project = %session.project_id, "dragged project no longer exists");
            self.session = None;
            return;
        };
        if target_lane == current {
            return;
        }

        if let Err(e) = board.move_to(session.project_id, target_lane) {
            debug!(
                project = %session.project_id,
                from = %current,
                to = %target_lane,
                "drag crossing rejected: {e}"
            );
        }
    }

    /// End the gesture. Cleanup is unconditional: valid drop, invalid
    /// drop, and drop over nothing all look the same, because any mutation
    /// already happened on crossing.
    pub fn on_release(&mut self) {
        self.session = None;
    }
}
