//! Persistence collaborator for the board.
//!
//! The board treats its store as a fire-and-forget sink: writes are
//! dispatched synchronously and their outcome is logged, never awaited or
//! propagated. The store interface is deliberately thin: a document per
//! project, last write wins, no versioning. `JsonStore` keeps the whole
//! collection in a single pretty-printed JSON file under `.runway/`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::board::models::Project;

/// Where the board writes project snapshots and the CLI reads them back.
pub trait ProjectStore {
    /// Read every stored project.
    fn load_all(&self) -> Result<Vec<Project>>;
    /// Insert or replace one project snapshot.
    fn persist(&self, project: &Project) -> Result<()>;
    /// Hard-delete one project. The board core never calls this; deletion
    /// belongs to the surrounding application layer.
    fn remove(&self, id: Uuid) -> Result<()>;
}

// ── JSON file store ───────────────────────────────────────────────────

/// On-disk document format for the project collection.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ProjectsFile {
    #[serde(default)]
    projects: Vec<Project>,
}

/// File-backed store holding the collection in one JSON document.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write an empty collection if no document exists yet.
    pub fn init(&self) -> Result<()> {
        if !self.path.exists() {
            self.write(&ProjectsFile::default())?;
        }
        Ok(())
    }

    fn read(&self) -> Result<ProjectsFile> {
        if !self.path.exists() {
            return Ok(ProjectsFile::default());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read projects file: {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse projects JSON: {}", self.path.display()))
    }

    fn write(&self, file: &ProjectsFile) -> Result<()> {
        let content =
            serde_json::to_string_pretty(file).context("Failed to serialize projects to JSON")?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write projects file: {}", self.path.display()))?;
        Ok(())
    }
}

impl ProjectStore for JsonStore {
    fn load_all(&self) -> Result<Vec<Project>> {
        Ok(self.read()?.projects)
    }

    fn persist(&self, project: &Project) -> Result<()> {
        let mut file = self.read()?;
        match file.projects.iter_mut().find(|p| p.id == project.id) {
            Some(existing) => *existing = project.clone(),
            None => file.projects.push(project.clone()),
        }
        self.write(&file)
    }

    fn remove(&self, id: Uuid) -> Result<()> {
        let mut file = self.read()?;
        file.projects.retain(|p| p.id != id);
        self.write(&file)
    }
}

// ── In-memory store ───────────────────────────────────────────────────

/// In-memory store (for testing). Clones share the same backing map, so a
/// test can hold one handle while the board owns another and assert on
/// what actually got persisted.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<HashMap<Uuid, Project>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of one persisted project, if any.
    pub fn get(&self, id: Uuid) -> Option<Project> {
        self.inner.lock().ok()?.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProjectStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<Project>> {
        let map = self
            .inner
            .lock()
            .map_err(|e| anyhow::anyhow!("Store lock poisoned: {}", e))?;
        Ok(map.values().cloned().collect())
    }

    fn persist(&self, project: &Project) -> Result<()> {
        let mut map = self
            .inner
            .lock()
            .map_err(|e| anyhow::anyhow!("Store lock poisoned: {}", e))?;
        map.insert(project.id, project.clone());
        Ok(())
    }

    fn remove(&self, id: Uuid) -> Result<()> {
        let mut map = self
            .inner
            .lock()
            .map_err(|e| anyhow::anyhow!("Store lock poisoned: {}", e))?;
        map.remove(&id);
        Ok(())
    }
}

/// Store whose writes always fail (for testing). The board's contract is
/// that a failed write never blocks or rolls back an in-memory mutation,
/// so tests point a board at this to pin that behavior down.
pub struct FailingStore;

impl ProjectStore for FailingStore {
    fn load_all(&self) -> Result<Vec<Project>> {
        Ok(Vec::new())
    }

    fn persist(&self, _project: &Project) -> Result<()> {
        anyhow::bail!("store unavailable")
    }

    fn remove(&self, _id: Uuid) -> Result<()> {
        anyhow::bail!("store unavailable")
    }
}
