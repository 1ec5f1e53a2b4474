//! components.json manifest generation

use crate::config::Language;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tokio::fs;

/// Manifest filename written at the project root
pub const MANIFEST_FILE: &str = "components.json";

/// shadcn/ui manifest document (components.json)
#[derive(Debug, Clone, Serialize)]
pub struct ComponentsManifest {
    #[serde(rename = "$schema")]
    pub schema: &'static str,
    pub style: &'static str,
    pub rsc: bool,
    pub tsx: bool,
    pub tailwind: TailwindConfig,
    pub aliases: Aliases,
}

#[derive(Debug, Clone, Serialize)]
pub struct TailwindConfig {
    pub config: &'static str,
    pub css: &'static str,
    #[serde(rename = "baseColor")]
    pub base_color: &'static str,
    #[serde(rename = "cssVariables")]
    pub css_variables: bool,
    pub prefix: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Aliases {
    pub components: &'static str,
    pub utils: &'static str,
}

/// Build the shadcn/ui manifest document.
///
/// The content depends only on the language variant (the `tsx` flag).
pub fn components_manifest(language: Language) -> ComponentsManifest {
    ComponentsManifest {
        schema: "https://ui.shadcn.com/schema.json",
        style: "default",
        rsc: false,
        tsx: language.is_typescript(),
        tailwind: TailwindConfig {
            config: "tailwind.config.js",
            css: "src/index.css",
            base_color: "slate",
            css_variables: true,
            prefix: "",
        },
        aliases: Aliases {
            components: "@/components",
            utils: "@/lib/utils",
        },
    }
}

/// Write the manifest to the project root.
///
/// Always overwrites: the manifest is wholly owned by the tool, so rerunning
/// a scaffolding flow refreshes it rather than checking a marker.
pub async fn write_manifest(project_root: &Path, language: Language) -> Result<()> {
    let content = serde_json::to_string_pretty(&components_manifest(language))?;
    let path = project_root.join(MANIFEST_FILE);
    fs::write(&path, content)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tsx_flag_mirrors_language() {
        assert!(components_manifest(Language::TypeScript).tsx);
        assert!(!components_manifest(Language::JavaScript).tsx);
    }

    #[test]
    fn test_manifest_is_pure_in_language() {
        let ts = serde_json::to_value(components_manifest(Language::TypeScript)).unwrap();
        let js = serde_json::to_value(components_manifest(Language::JavaScript)).unwrap();

        // Everything but the tsx flag is identical across variants.
        let mut ts = ts;
        ts["tsx"] = json!(false);
        assert_eq!(ts, js);
    }

    #[test]
    fn test_manifest_serialization_shape() {
        let doc = serde_json::to_value(components_manifest(Language::TypeScript)).unwrap();
        assert_eq!(doc["$schema"], json!("https://ui.shadcn.com/schema.json"));
        assert_eq!(doc["rsc"], json!(false));
        assert_eq!(doc["tailwind"]["baseColor"], json!("slate"));
        assert_eq!(doc["aliases"]["components"], json!("@/components"));
        assert_eq!(doc["aliases"]["utils"], json!("@/lib/utils"));
    }

    #[tokio::test]
    async fn test_write_manifest_overwrites() {
        let project = tempfile::tempdir().unwrap();
        std::fs::write(project.path().join(MANIFEST_FILE), "stale").unwrap();

        write_manifest(project.path(), Language::JavaScript)
            .await
            .unwrap();

        let content = std::fs::read_to_string(project.path().join(MANIFEST_FILE)).unwrap();
        assert!(content.contains("\"$schema\""));
        assert!(content.contains("\"tsx\": false"));
        assert!(!content.contains("stale"));
    }
}
