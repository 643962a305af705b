//! Packaging manifest generation
//!
//! Builds a `pyproject.toml` style manifest (`[build-system]`, `[project]`,
//! `[project.urls]`) from the package metadata in histmark.toml.

use crate::project_config::ProjectConfig;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during manifest generation
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("TOML serialize error: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Failed to write manifest to {path}: {source}", path = .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Complete manifest document
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    #[serde(rename = "build-system")]
    pub build_system: BuildSystem,
    pub project: Project,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildSystem {
    pub requires: Vec<String>,
    #[serde(rename = "build-backend")]
    pub build_backend: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub name: String,
    pub version: String,
    pub description: String,
    pub readme: String,
    #[serde(rename = "requires-python", skip_serializing_if = "Option::is_none")]
    pub requires_python: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    pub authors: Vec<Author>,
    pub classifiers: Vec<String>,
    pub dependencies: Vec<String>,
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub urls: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Author {
    pub name: String,
    pub email: String,
}

impl Manifest {
    /// Build the manifest from project configuration
    pub fn from_config(config: &ProjectConfig) -> Self {
        let package = &config.package;

        let mut urls = BTreeMap::new();
        if let Some(url) = &package.url {
            let base = url.trim_end_matches('/');
            urls.insert("Homepage".to_string(), url.clone());
            urls.insert("Bug Tracker".to_string(), format!("{}/issues", base));
        }

        let authors = if package.author.is_empty() {
            Vec::new()
        } else {
            vec![Author {
                name: package.author.clone(),
                email: package.email.clone(),
            }]
        };

        Self {
            build_system: BuildSystem {
                requires: config.build_system.requires.clone(),
                build_backend: config.build_system.backend.clone(),
            },
            project: Project {
                name: package.name.clone(),
                version: package.version.clone(),
                description: package.description.clone(),
                readme: package.readme.clone(),
                requires_python: package.requires_python.clone(),
                license: package.license.clone(),
                authors,
                classifiers: package.classifiers.clone(),
                dependencies: package.dependencies.clone(),
                keywords: package.keywords.clone(),
                urls,
            },
        }
    }

    /// Render the manifest as TOML
    pub fn render(&self) -> Result<String, ManifestError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the rendered manifest to `path`, replacing any existing file
    pub fn save(&self, path: &Path) -> Result<(), ManifestError> {
        let content = self.render()?;
        fs::write(path, content).map_err(|source| ManifestError::WriteError {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Wrote manifest for {} to {}", self.project.name, path.display());
        Ok(())
    }
}
