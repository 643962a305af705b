//! Embedded starter configuration
//!
//! `histmark init` writes this file; it documents the crate's own history
//! types and doubles as a fixture for the generators.

use crate::project_config::{ProjectConfig, ProjectConfigError};

/// File name the CLI reads by default
pub const CONFIG_FILE_NAME: &str = "histmark.toml";

/// Starter histmark.toml content
pub const STARTER_CONFIG: &str = include_str!("templates/histmark.toml");

/// Parse the embedded starter configuration
pub fn starter_config() -> Result<ProjectConfig, ProjectConfigError> {
    ProjectConfig::parse(STARTER_CONFIG)
}
