//! histmark - README and manifest generator
//!
//! A CLI tool that writes a package's README and packaging manifest from a
//! single histmark.toml.

#![deny(unsafe_code)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use histmark::manifest::Manifest;
use histmark::project_config::ProjectConfig;
use histmark::readme::{self, ReadmeOptions};
use histmark::templates;
use std::path::{Path, PathBuf};

/// Main entry point for the histmark CLI application
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { path, force, name } => {
            init_logging(false);
            handle_init_command(path, force, name)?;
        }

        Commands::Readme {
            config,
            output,
            numbered_toc,
            stdout,
            verbose,
        } => {
            init_logging(verbose);
            handle_readme_command(&config, &output, numbered_toc, stdout)?;
        }

        Commands::Manifest {
            config,
            output,
            verbose,
        } => {
            init_logging(verbose);
            handle_manifest_command(&config, &output)?;
        }
    }

    Ok(())
}

/// Initialize logging; `--verbose` raises the level to info
fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Info);
    }
    builder.init();
}

/// Handle the init command
fn handle_init_command(path: Option<PathBuf>, force: bool, name: Option<String>) -> Result<()> {
    let target_path = path.unwrap_or_else(|| PathBuf::from("."));
    let config_path = target_path.join(templates::CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it",
            config_path.display()
        );
    }

    if !target_path.exists() {
        std::fs::create_dir_all(&target_path)
            .with_context(|| format!("Failed to create directory {}", target_path.display()))?;
    }

    match name {
        Some(name) => {
            let mut config =
                templates::starter_config().context("Embedded starter config is invalid")?;
            config.package.name = name;
            config
                .save(&config_path)
                .with_context(|| format!("Failed to write {}", config_path.display()))?;
        }
        None => {
            std::fs::write(&config_path, templates::STARTER_CONFIG)
                .with_context(|| format!("Failed to write {}", config_path.display()))?;
        }
    }

    println!("✓ Created {}", config_path.display());
    println!("\nNext steps:");
    println!("  1. Edit {} to describe your package", templates::CONFIG_FILE_NAME);
    println!("  2. Run 'histmark readme' to generate README.md");
    println!("  3. Run 'histmark manifest' to regenerate pyproject.toml");

    Ok(())
}

/// Handle the readme command
fn handle_readme_command(
    config_path: &Path,
    output: &Path,
    numbered_toc: bool,
    stdout: bool,
) -> Result<()> {
    let config = load_config(config_path)?;

    println!("Generating README...");
    let doc = readme::generate(&config, ReadmeOptions { numbered_toc })
        .with_context(|| format!("Failed to generate README for {}", config.title()))?;

    if stdout {
        println!("{}", doc.assemble());
    }

    doc.save(output)
        .with_context(|| format!("Failed to save README to {}", output.display()))?;
    println!("✓ Successfully wrote: {}", output.display());

    Ok(())
}

/// Handle the manifest command
fn handle_manifest_command(config_path: &Path, output: &Path) -> Result<()> {
    let config = load_config(config_path)?;

    Manifest::from_config(&config)
        .save(output)
        .with_context(|| format!("Failed to write manifest to {}", output.display()))?;
    println!("✓ Successfully wrote: {}", output.display());

    Ok(())
}

/// Load histmark.toml, pointing at `histmark init` when it is missing
fn load_config(path: &Path) -> Result<ProjectConfig> {
    if !path.exists() {
        anyhow::bail!(
            "Configuration file {} not found. Run 'histmark init' to create one",
            path.display()
        );
    }
    log::info!("Loading configuration from {}", path.display());
    ProjectConfig::load(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))
}
