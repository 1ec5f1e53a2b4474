//! tsconfig.json augmentation
//!
//! Unlike the vite config patch, this step treats its target as structured
//! data: the file is parsed, two compiler options are injected, and the
//! document is re-serialized with 2-space indentation. A tsconfig that does
//! not parse is a hard error - overwriting a file we cannot read would
//! corrupt user content.

use super::PatchError;
use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::path::Path;
use tokio::fs;

const TSCONFIG_FILE: &str = "tsconfig.json";

/// Inject `baseUrl` and the `@/*` path alias into the compiler options.
///
/// Re-applying to already-patched content yields identical output.
pub fn inject_path_aliases(content: &str) -> Result<String, PatchError> {
    let mut doc: Value =
        serde_json::from_str(content).map_err(PatchError::MalformedTsconfig)?;

    let root = doc
        .as_object_mut()
        .ok_or(PatchError::UnexpectedTsconfigShape("root is not an object"))?;

    let options = root
        .entry("compilerOptions")
        .or_insert_with(|| json!({}))
        .as_object_mut()
        .ok_or(PatchError::UnexpectedTsconfigShape(
            "compilerOptions is not an object",
        ))?;

    options.insert("baseUrl".to_string(), json!("."));
    options.insert("paths".to_string(), json!({ "@/*": ["./src/*"] }));

    // preserve_order keeps the user's key order stable across rewrites
    Ok(serde_json::to_string_pretty(&doc).map_err(PatchError::MalformedTsconfig)?)
}

/// Patch `tsconfig.json` under the project root; absence is a skip
pub async fn patch_tsconfig(project_root: &Path) -> Result<()> {
    let path = project_root.join(TSCONFIG_FILE);
    if !path.exists() {
        return Ok(());
    }

    let content = fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let patched = inject_path_aliases(&content)?;

    fs::write(&path, patched)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
