//! Project configuration from histmark.toml

use crate::api_item::{ApiFunction, ApiType};
use crate::markdown_document::FootnoteLayout;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main project configuration from histmark.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Package metadata shared by the README and the manifest
    pub package: PackageInfo,

    /// Build backend written to the manifest
    #[serde(default)]
    pub build_system: BuildSystemInfo,

    /// README content
    #[serde(default)]
    pub readme: ReadmeConfig,
}

/// Package metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageInfo {
    /// Package name (e.g., "py_simple_history")
    pub name: String,

    /// Package version
    pub version: String,

    /// One-line description
    #[serde(default)]
    pub description: String,

    /// Author name
    #[serde(default)]
    pub author: String,

    /// Author email
    #[serde(default)]
    pub email: String,

    /// License identifier
    #[serde(default)]
    pub license: Option<String>,

    /// Project homepage; the bug tracker is derived from it
    #[serde(default)]
    pub url: Option<String>,

    /// README file name referenced by the manifest
    #[serde(default = "default_readme_file")]
    pub readme: String,

    /// Supported interpreter range, e.g. ">=3.8"
    #[serde(default)]
    pub requires_python: Option<String>,

    #[serde(default)]
    pub classifiers: Vec<String>,

    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// Build backend declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildSystemInfo {
    pub requires: Vec<String>,
    pub backend: String,
}

impl Default for BuildSystemInfo {
    fn default() -> Self {
        Self {
            requires: vec!["setuptools>=61.0".to_string()],
            backend: "setuptools.build_meta".to_string(),
        }
    }
}

/// Footnote rendering selected in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FootnoteStyle {
    /// Definitions concatenated after the body
    #[default]
    Inline,
    /// Definitions under their own heading
    Section,
}

/// README content configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadmeConfig {
    #[serde(default)]
    pub slogan: Option<String>,

    #[serde(default)]
    pub about: String,

    #[serde(default)]
    pub installation: String,

    /// Example code shown under the Usage section
    #[serde(default)]
    pub example: Option<String>,

    /// Number table of contents entries instead of using bullets
    #[serde(default)]
    pub numbered_toc: bool,

    #[serde(default)]
    pub footnote_style: FootnoteStyle,

    #[serde(default = "default_footnote_title")]
    pub footnote_title: String,

    #[serde(default = "default_footnote_heading_level")]
    pub footnote_heading_level: usize,

    /// Images shown below the slogan
    #[serde(default)]
    pub images: Vec<ImageEntry>,

    /// Types documented under Usage
    #[serde(default)]
    pub types: Vec<ApiType>,

    /// Free functions documented under Usage
    #[serde(default)]
    pub functions: Vec<ApiFunction>,
}

impl Default for ReadmeConfig {
    fn default() -> Self {
        Self {
            slogan: None,
            about: String::new(),
            installation: String::new(),
            example: None,
            numbered_toc: false,
            footnote_style: FootnoteStyle::default(),
            footnote_title: default_footnote_title(),
            footnote_heading_level: default_footnote_heading_level(),
            images: Vec::new(),
            types: Vec::new(),
            functions: Vec::new(),
        }
    }
}

impl ReadmeConfig {
    /// Footnote layout for the document builder
    pub fn footnote_layout(&self) -> FootnoteLayout {
        match self.footnote_style {
            FootnoteStyle::Inline => FootnoteLayout::Inline,
            FootnoteStyle::Section => FootnoteLayout::Section {
                title: self.footnote_title.clone(),
                level: self.footnote_heading_level,
            },
        }
    }
}

/// Image caption and source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageEntry {
    pub caption: String,
    pub source: String,
}

fn default_readme_file() -> String {
    "README.md".to_string()
}

fn default_footnote_title() -> String {
    "Notes:".to_string()
}

fn default_footnote_heading_level() -> usize {
    2
}

impl ProjectConfig {
    /// Load configuration from a histmark.toml file
    ///
    /// # Parameters
    /// * `path` - Path to the histmark.toml configuration file
    ///
    /// # Returns
    /// * `Ok(ProjectConfig)` - Successfully loaded configuration
    /// * `Err(ProjectConfigError)` - Error reading or parsing the configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ProjectConfigError> {
        let content = fs::read_to_string(&path).map_err(ProjectConfigError::IoError)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ProjectConfigError> {
        toml::from_str(content).map_err(ProjectConfigError::ParseError)
    }

    /// Save configuration to a histmark.toml file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ProjectConfigError> {
        let content = toml::to_string_pretty(self).map_err(ProjectConfigError::SerializeError)?;

        fs::write(&path, content).map_err(ProjectConfigError::IoError)?;

        Ok(())
    }

    /// Title used for the README: `<name> <version>`
    pub fn title(&self) -> String {
        format!("{} {}", self.package.name, self.package.version)
    }
}

/// Errors that can occur when loading or saving project configuration
#[derive(Debug)]
#[allow(clippy::enum_variant_names)]
pub enum ProjectConfigError {
    /// IO error when reading or writing file
    IoError(std::io::Error),

    /// Error parsing TOML
    ParseError(toml::de::Error),

    /// Error serializing to TOML
    SerializeError(toml::ser::Error),
}

impl std::fmt::Display for ProjectConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ProjectConfigError::ParseError(e) => write!(f, "TOML parse error: {}", e),
            ProjectConfigError::SerializeError(e) => write!(f, "TOML serialize error: {}", e),
        }
    }
}

impl std::error::Error for ProjectConfigError {}
