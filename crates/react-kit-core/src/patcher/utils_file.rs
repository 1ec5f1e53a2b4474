//! Shared utilities module augmentation
//!
//! Adds the shadcn `cn` helper to the overlay's `src/libs/utils` module:
//! clsx/tailwind-merge imports are prepended and the helper appended, with
//! the existing content kept in between. Any mention of clsx counts as
//! already patched.

use crate::config::Language;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

const ALREADY_PATCHED_MARKER: &str = "clsx";

const TS_IMPORTS: &str =
    "import { type ClassValue, clsx } from \"clsx\";\nimport { twMerge } from \"tailwind-merge\";\n\n";
const JS_IMPORTS: &str =
    "import { clsx } from \"clsx\";\nimport { twMerge } from \"tailwind-merge\";\n\n";

const TS_HELPER: &str = "\n// shadcn/ui utility function\nexport function cn(...inputs: ClassValue[]) {\n  return twMerge(clsx(inputs));\n}";
const JS_HELPER: &str = "\n// shadcn/ui utility function\nexport function cn(...inputs) {\n  return twMerge(clsx(inputs));\n}";

/// Location of the utilities module relative to the project root
fn utils_path(project_root: &Path, language: Language) -> PathBuf {
    project_root
        .join("src")
        .join("libs")
        .join(language.utils_file())
}

/// Wrap the existing content with the class-merging imports and helper.
///
/// Returns `None` when the content already references clsx.
pub fn augment_utils(content: &str, language: Language) -> Option<String> {
    if content.contains(ALREADY_PATCHED_MARKER) {
        return None;
    }

    let (imports, helper) = match language {
        Language::TypeScript => (TS_IMPORTS, TS_HELPER),
        Language::JavaScript => (JS_IMPORTS, JS_HELPER),
    };

    Some(format!("{}{}{}", imports, content, helper))
}

/// Patch the utilities module under the project root; absence is a skip
pub async fn patch_utils_file(project_root: &Path, language: Language) -> Result<()> {
    let path = utils_path(project_root, language);
    if !path.exists() {
        return Ok(());
    }

    let content = fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    if let Some(augmented) = augment_utils(&content, language) {
        fs::write(&path, augmented)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(())
}
