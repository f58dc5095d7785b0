//! Configuration inspection — `runway config`.

use std::path::Path;

use anyhow::Result;
use console::style;

use runway::settings::{RunwayConfig, SettingsProvider};

pub fn cmd_config(project_dir: &Path, validate_only: bool) -> Result<()> {
    let config = RunwayConfig::new(project_dir.to_path_buf())?;
    let warnings = config.toml.validate();

    if !validate_only {
        println!("Config file: {}", config.config_file().display());
        println!();
        println!("[board]");
        println!(
            "max_active_projects = {}",
            config.toml.max_active_projects()
        );
        println!("team_capacity = {}", config.toml.team_capacity());
        println!();
    }

    if warnings.is_empty() {
        println!("{}", style("Configuration OK").green());
    } else {
        for warning in &warnings {
            println!("{} {}", style("warning:").yellow(), warning);
        }
    }
    Ok(())
}
