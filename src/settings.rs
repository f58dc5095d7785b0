//! Configuration for runway, read from `.runway/runway.toml`.
//!
//! # Configuration File Format
//!
//! ```toml
//! [board]
//! max_active_projects = 3
//! team_capacity = 30
//! ```
//!
//! `max_active_projects` gates how many projects may occupy the active lane
//! at once (1–10). `team_capacity` is a weekly hours figure displayed by
//! `runway status`; it does not participate in transition validation
//! (5–200). Out-of-range file values are clamped on read and reported by
//! [`RunwayToml::validate`].

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const MAX_ACTIVE_RANGE: (u32, u32) = (1, 10);
pub const TEAM_CAPACITY_RANGE: (u32, u32) = (5, 200);

/// Read-only view of the settings the board core consumes.
///
/// The board never reads configuration ambiently; whatever owns the board
/// injects a provider, and every capacity check re-reads it.
pub trait SettingsProvider {
    /// Maximum number of projects allowed in the active lane (1–10).
    fn max_active_projects(&self) -> u32;
    /// Team capacity in hours per week (5–200), displayed but not enforced.
    fn team_capacity(&self) -> u32;
}

/// Fixed in-memory settings, for tests and embedding hosts.
#[derive(Debug, Clone, Copy)]
pub struct FixedSettings {
    pub max_active_projects: u32,
    pub team_capacity: u32,
}

impl Default for FixedSettings {
    fn default() -> Self {
        Self {
            max_active_projects: default_max_active_projects(),
            team_capacity: default_team_capacity(),
        }
    }
}

impl SettingsProvider for FixedSettings {
    fn max_active_projects(&self) -> u32 {
        self.max_active_projects
    }

    fn team_capacity(&self) -> u32 {
        self.team_capacity
    }
}

/// The `[board]` section of runway.toml.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardSection {
    #[serde(default = "default_max_active_projects")]
    pub max_active_projects: u32,
    #[serde(default = "default_team_capacity")]
    pub team_capacity: u32,
}

fn default_max_active_projects() -> u32 {
    3
}

fn default_team_capacity() -> u32 {
    30
}

impl Default for BoardSection {
    fn default() -> Self {
        Self {
            max_active_projects: default_max_active_projects(),
            team_capacity: default_team_capacity(),
        }
    }
}

/// The complete runway.toml configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunwayToml {
    #[serde(default)]
    pub board: BoardSection,
}

impl RunwayToml {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse runway.toml")
    }

    /// Load configuration from `<runway_dir>/runway.toml`, falling back to
    /// defaults if the file doesn't exist.
    pub fn load_or_default(runway_dir: &Path) -> Result<Self> {
        let config_path = runway_dir.join("runway.toml");
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize runway.toml")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Validate the configuration and return any warnings.
    ///
    /// Out-of-range values are warnings rather than errors because the
    /// accessors clamp them; the board keeps working either way.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let (lo, hi) = MAX_ACTIVE_RANGE;
        if !(lo..=hi).contains(&self.board.max_active_projects) {
            warnings.push(format!(
                "max_active_projects = {} is outside {}..={}; clamped on read",
                self.board.max_active_projects, lo, hi
            ));
        }

        let (lo, hi) = TEAM_CAPACITY_RANGE;
        if !(lo..=hi).contains(&self.board.team_capacity) {
            warnings.push(format!(
                "team_capacity = {} is outside {}..={}; clamped on read",
                self.board.team_capacity, lo, hi
            ));
        }

        warnings
    }
}

impl SettingsProvider for RunwayToml {
    fn max_active_projects(&self) -> u32 {
        let (lo, hi) = MAX_ACTIVE_RANGE;
        self.board.max_active_projects.clamp(lo, hi)
    }

    fn team_capacity(&self) -> u32 {
        let (lo, hi) = TEAM_CAPACITY_RANGE;
        self.board.team_capacity.clamp(lo, hi)
    }
}

/// Resolved workspace paths plus the parsed configuration.
#[derive(Debug, Clone)]
pub struct RunwayConfig {
    /// Path to the project directory
    pub project_dir: PathBuf,
    /// Path to the .runway directory
    pub runway_dir: PathBuf,
    /// Parsed runway.toml configuration
    pub toml: RunwayToml,
}

impl RunwayConfig {
    /// Create a new RunwayConfig from a project directory.
    pub fn new(project_dir: PathBuf) -> Result<Self> {
        let project_dir = project_dir
            .canonicalize()
            .context("Failed to resolve project directory")?;
        let runway_dir = project_dir.join(".runway");
        let toml = RunwayToml::load_or_default(&runway_dir)?;

        Ok(Self {
            project_dir,
            runway_dir,
            toml,
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.runway_dir.exists()
    }

    /// Get path to the config file.
    pub fn config_file(&self) -> PathBuf {
        self.runway_dir.join("runway.toml")
    }

    /// Get path to the project document store.
    pub fn projects_file(&self) -> PathBuf {
        self.runway_dir.join("projects.json")
    }
}
