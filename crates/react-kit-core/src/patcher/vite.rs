//! vite config text patch
//!
//! Best-effort text surgery against the generator's known output format: two
//! independent, marker-guarded substitutions add a `path` import and a
//! `resolve.alias` block. The anchors are an external contract owned by the
//! base generator; when an anchor is missing the substitution is silently
//! skipped rather than escalated. This must never throw on a near-miss.

use crate::config::Language;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// Anchor line produced by every vite react template
const DEFINE_CONFIG_IMPORT: &str = "import { defineConfig } from \"vite\";";

/// Marker: the path module is already imported
const PATH_IMPORT_MARKER: &str = "import path from";

const PATH_IMPORT: &str = "import path from \"path\";";

/// Anchor: the plugin array as emitted after the overlay lands
const PLUGINS_LINE: &str = "plugins: [react(), tailwindcss()],";

/// Marker: the alias key is already present
const ALIAS_MARKER: &str = "\"@\":";

const ALIAS_BLOCK: &str = "plugins: [react(), tailwindcss()],\n  resolve: {\n    alias: {\n      \"@\": path.resolve(__dirname, \"./src\"),\n    },\n  },";

/// Apply both substitutions to the config text.
///
/// Each is guarded by its own marker, so the transformation is idempotent
/// and the two halves apply independently.
pub fn apply_alias_patch(content: &str) -> String {
    let mut patched = content.to_string();

    if !patched.contains(PATH_IMPORT_MARKER) {
        patched = patched.replacen(
            DEFINE_CONFIG_IMPORT,
            &format!("{}\n{}", PATH_IMPORT, DEFINE_CONFIG_IMPORT),
            1,
        );
    }

    if !patched.contains(ALIAS_MARKER) {
        patched = patched.replacen(PLUGINS_LINE, ALIAS_BLOCK, 1);
    }

    patched
}

/// Patch the language-specific vite config under the project root.
///
/// A missing file is a skip; an unchanged patch result performs no write.
pub async fn patch_vite_config(project_root: &Path, language: Language) -> Result<()> {
    let path = project_root.join(language.vite_config_file());
    if !path.exists() {
        return Ok(());
    }

    let content = fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let patched = apply_alias_patch(&content);
    if patched != content {
        fs::write(&path, patched)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(())
}
