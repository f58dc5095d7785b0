//! The board core — project lifecycle state machine and drag engine.
//!
//! ## Overview
//!
//! Projects move through a four-lane board (parked → queued → active →
//! archived). Two entry points mutate them: explicit commands (the CLI's
//! promote/demote/queue/archive/restore verbs) and pointer-driven drag
//! gestures. Both funnel through one validated path so lane legality and
//! the active-capacity gate are enforced identically.
//!
//! ## Module Map
//!
//! ```text
//!   commands ──────────────┐                ┌──> transition.rs (adjacency)
//!   (cmd/, hosts)          │                │      └─ capacity.rs (gate)
//!                          v                │
//!                     service.rs ── move_to ┤
//!                          ^                │
//!   drag hooks ────> drag.rs                └──> mutator.rs (field rewrite)
//!   (on_pick_up /         │                           │
//!    on_hover /           │                           v
//!    on_release)          └── lane_of ──> lane.rs   store (fire-and-forget)
//! ```
//!
//! | Module       | Responsibility                                        |
//! |--------------|-------------------------------------------------------|
//! | `models`     | Shared types: `Project`, `ProjectStatus`, `Lane`      |
//! | `lane`       | Lane derivation + queued-flag normalization           |
//! | `capacity`   | Active-lane entry gate                                |
//! | `transition` | Directed adjacency table + validation                 |
//! | `mutator`    | Field mapping per target lane, timestamp bump         |
//! | `service`    | `Board` aggregate: collection, commands, DI           |
//! | `drag`       | `DragCoordinator`: one gesture, commit on crossing    |
//! | `advisor`    | Read-only portfolio hints                             |

pub mod advisor;
pub mod capacity;
pub mod drag;
pub mod lane;
pub mod models;
pub mod mutator;
pub mod service;
pub mod transition;
