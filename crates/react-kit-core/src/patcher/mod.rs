//! Config patching for the shadcn/ui add-on
//!
//! Makes an already-generated project shadcn-ready by rewriting a fixed set
//! of files. Every sub-step is idempotent and tolerant of absence: a missing
//! target file is a skip, and an already-applied marker is a skip. The one
//! exception is `tsconfig.json`, which the tool parses as structured data -
//! a file that fails to parse is a real error, not something to overwrite
//! blindly.
//!
//! There is no rollback. A failure part-way leaves earlier patches in place;
//! the caller reports the whole setup step as failed.

pub mod manifest;
pub mod tsconfig;
pub mod utils_file;
pub mod vite;

use crate::config::Language;
use anyhow::Result;
use std::path::Path;
use thiserror::Error;

pub use manifest::{components_manifest, write_manifest};
pub use tsconfig::patch_tsconfig;
pub use utils_file::patch_utils_file;
pub use vite::patch_vite_config;

/// Errors from patch steps that operate on structured data
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("tsconfig.json is not valid JSON: {0}")]
    MalformedTsconfig(#[source] serde_json::Error),

    #[error("tsconfig.json has an unexpected shape: {0}")]
    UnexpectedTsconfigShape(&'static str),
}

/// Run all shadcn/ui patch steps against the project root, in order.
///
/// Partial patching is left in place on error.
pub async fn setup_shadcn(project_root: &Path, language: Language) -> Result<()> {
    manifest::write_manifest(project_root, language).await?;
    tsconfig::patch_tsconfig(project_root).await?;
    vite::patch_vite_config(project_root, language).await?;
    utils_file::patch_utils_file(project_root, language).await?;
    Ok(())
}
