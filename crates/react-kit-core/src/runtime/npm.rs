//! npm invocations: base generation and dependency installation
//!
//! Both calls inherit the terminal so npm's own progress output stays
//! visible, block until the process exits (no timeout - installs may
//! legitimately take a while), and surface a non-zero exit as a single
//! fatal error.

use crate::config::ProjectConfig;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use tokio::process::Command;

/// Arguments for the `npm create vite` invocation
pub fn vite_create_args(config: &ProjectConfig) -> Vec<String> {
    vec![
        "create".to_string(),
        "vite@latest".to_string(),
        config.project_name.clone(),
        "--".to_string(),
        "--template".to_string(),
        config.language.vite_template().to_string(),
        "--yes".to_string(),
    ]
}

/// Run the base generator in `cwd`, producing the initial project tree
pub async fn create_vite_project(cwd: &Path, config: &ProjectConfig) -> Result<()> {
    let args = vite_create_args(config);
    println!(
        "{} {}",
        "Running:".dimmed(),
        format!("npm {}", args.join(" ")).yellow()
    );

    let status = Command::new("npm")
        .args(args)
        .current_dir(cwd)
        .status()
        .await
        .context("Failed to run npm create vite")?;

    if !status.success() {
        anyhow::bail!(
            "npm create vite exited with code {}",
            status.code().unwrap_or(-1)
        );
    }

    Ok(())
}

/// Install packages into the project root; an empty list is a no-op
pub async fn install_packages(project_root: &Path, packages: &[&str]) -> Result<()> {
    if packages.is_empty() {
        return Ok(());
    }

    println!(
        "{} {}",
        "Running:".dimmed(),
        format!("npm install {}", packages.join(" ")).yellow()
    );

    let status = Command::new("npm")
        .arg("install")
        .args(packages)
        .current_dir(project_root)
        .status()
        .await
        .context("Failed to run npm install")?;

    if !status.success() {
        anyhow::bail!("npm install exited with code {}", status.code().unwrap_or(-1));
    }

    Ok(())
}
