//! Command-line interface definitions for histmark

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI structure for the histmark application
#[derive(Parser)]
#[command(name = "histmark")]
#[command(version)]
#[command(about = "README and manifest generator for history-tracking packages", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for histmark
#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter histmark.toml
    Init {
        /// Directory to initialize (defaults to current directory)
        path: Option<PathBuf>,

        /// Overwrite an existing histmark.toml
        #[arg(short, long)]
        force: bool,

        /// Package name to put in the configuration
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Generate the README from histmark.toml
    Readme {
        /// Configuration file
        #[arg(short, long, default_value = "histmark.toml")]
        config: PathBuf,

        /// Output file
        #[arg(short, long, default_value = "README.md")]
        output: PathBuf,

        /// Number table of contents entries
        #[arg(long)]
        numbered_toc: bool,

        /// Also print the README to stdout
        #[arg(long)]
        stdout: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Regenerate the packaging manifest from histmark.toml
    Manifest {
        /// Configuration file
        #[arg(short, long, default_value = "histmark.toml")]
        config: PathBuf,

        /// Output file
        #[arg(short, long, default_value = "pyproject.toml")]
        output: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}
