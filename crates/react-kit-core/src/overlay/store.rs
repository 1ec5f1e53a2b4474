//! Overlay application - copy a content pack over the generated tree
//!
//! Local packs are plain directories copied recursively; remote packs are
//! zip archives whose entries are prefixed with the overlay name. Both paths
//! silently overwrite colliding files from the base generator - overlays own
//! those files by design.

use super::source::OverlaySource;
use anyhow::{Context, Result};
use std::io::{Cursor, Read};
use std::path::Path;
use tokio::fs;
use url::Url;
use zip::ZipArchive;

/// Applies overlay packs from a configured source
pub struct OverlayStore {
    source: OverlaySource,
    client: reqwest::Client,
}

impl OverlayStore {
    pub fn new(source: OverlaySource, user_agent: &str) -> Self {
        Self {
            source,
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Build a URL by appending a path segment, preserving query parameters
    fn build_url(base: &Url, path_segment: &str) -> Result<Url> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("URL cannot have path segments: {}", base))?
            .pop_if_empty()
            .push(path_segment);
        Ok(url)
    }

    /// Copy the named overlay on top of `project_root`.
    ///
    /// Returns the relative paths of the files written. A missing overlay
    /// (absent directory, HTTP 404) returns an empty list without error.
    pub async fn apply(&self, overlay_name: &str, project_root: &Path) -> Result<Vec<String>> {
        match &self.source {
            OverlaySource::Local(root) => {
                apply_local(&root.join(overlay_name), project_root).await
            }
            OverlaySource::Remote(base_url) => {
                let zip_url = Self::build_url(base_url, &format!("{}.zip", overlay_name))?;
                let response = self
                    .client
                    .get(zip_url.clone())
                    .send()
                    .await
                    .with_context(|| format!("Failed to fetch overlay pack from {}", zip_url))?;

                // Overlays are optional content packs
                if response.status() == reqwest::StatusCode::NOT_FOUND {
                    return Ok(Vec::new());
                }

                if !response.status().is_success() {
                    anyhow::bail!(
                        "Failed to fetch overlay '{}' from {}: HTTP {}",
                        overlay_name,
                        zip_url,
                        response.status()
                    );
                }

                let zip_bytes = response.bytes().await?.to_vec();
                extract_pack(&zip_bytes, overlay_name, project_root).await
            }
        }
    }
}

/// Recursively copy a local overlay directory over the project root
async fn apply_local(overlay_dir: &Path, project_root: &Path) -> Result<Vec<String>> {
    if !overlay_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut copied_files = Vec::new();

    for entry in walkdir::WalkDir::new(overlay_dir) {
        let entry = entry.with_context(|| {
            format!("Failed to walk overlay directory {}", overlay_dir.display())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(overlay_dir)
            .expect("walkdir yields paths under its root");
        let target_path = project_root.join(relative);

        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content = fs::read(entry.path())
            .await
            .with_context(|| format!("Failed to read overlay file: {}", entry.path().display()))?;
        fs::write(&target_path, &content)
            .await
            .with_context(|| format!("Failed to write file: {}", target_path.display()))?;

        copied_files.push(relative.to_string_lossy().replace('\\', "/"));
    }

    Ok(copied_files)
}

/// Extract a remote overlay zip over the project root.
///
/// Archive entries are prefixed with the overlay name
/// (`typescript-redux/src/...`); the prefix is stripped before writing.
async fn extract_pack(
    zip_bytes: &[u8],
    overlay_name: &str,
    project_root: &Path,
) -> Result<Vec<String>> {
    let cursor = Cursor::new(zip_bytes);
    let mut archive = ZipArchive::new(cursor)
        .with_context(|| format!("Failed to read zip archive for overlay '{}'", overlay_name))?;

    let prefix = format!("{}/", overlay_name);
    let mut copied_files = Vec::new();

    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        if file.is_dir() {
            continue;
        }

        let full_path = file.name().to_string();
        let relative_path = full_path
            .strip_prefix(&prefix)
            .unwrap_or(&full_path)
            .to_string();

        let mut contents = Vec::new();
        file.read_to_end(&mut contents)?;

        let target_path = project_root.join(&relative_path);
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&target_path, &contents)
            .await
            .with_context(|| format!("Failed to write file: {}", target_path.display()))?;

        copied_files.push(relative_path);
    }

    Ok(copied_files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    #[tokio::test]
    async fn test_missing_local_overlay_is_a_no_op() {
        let project = tempfile::tempdir().unwrap();
        let overlays = tempfile::tempdir().unwrap();

        let copied = apply_local(&overlays.path().join("typescript"), project.path())
            .await
            .unwrap();
        assert!(copied.is_empty());
    }

    #[tokio::test]
    async fn test_local_overlay_copies_and_overwrites() {
        let project = tempfile::tempdir().unwrap();
        let overlays = tempfile::tempdir().unwrap();

        let overlay_dir = overlays.path().join("typescript");
        std::fs::create_dir_all(overlay_dir.join("src/components")).unwrap();
        std::fs::write(overlay_dir.join("src/App.tsx"), "overlay app").unwrap();
        std::fs::write(overlay_dir.join("src/components/Navbar.tsx"), "navbar").unwrap();

        // Pre-existing file from the base generator gets replaced
        std::fs::create_dir_all(project.path().join("src")).unwrap();
        std::fs::write(project.path().join("src/App.tsx"), "generated app").unwrap();

        let mut copied = apply_local(&overlay_dir, project.path()).await.unwrap();
        copied.sort();
        assert_eq!(copied, vec!["src/App.tsx", "src/components/Navbar.tsx"]);

        let app = std::fs::read_to_string(project.path().join("src/App.tsx")).unwrap();
        assert_eq!(app, "overlay app");
        assert!(project.path().join("src/components/Navbar.tsx").exists());
    }

    #[tokio::test]
    async fn test_shipped_overlay_packs_apply() {
        let overlays = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates");
        let project = tempfile::tempdir().unwrap();

        let store = OverlayStore::new(OverlaySource::local(overlays), "react-kit-test");
        let copied = store.apply("typescript", project.path()).await.unwrap();

        assert!(copied.contains(&"src/libs/utils.ts".to_string()));
        assert!(copied.contains(&"src/App.tsx".to_string()));
    }

    #[tokio::test]
    async fn test_extract_pack_strips_overlay_prefix() {
        let project = tempfile::tempdir().unwrap();

        let mut zip_buffer = Vec::new();
        {
            let mut zip = ZipWriter::new(Cursor::new(&mut zip_buffer));
            let options =
                SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
            zip.start_file("javascript-redux/src/redux/store/store.js", options)
                .unwrap();
            zip.write_all(b"export const store = {};").unwrap();
            zip.start_file("javascript-redux/package.json", options).unwrap();
            zip.write_all(b"{}").unwrap();
            zip.finish().unwrap();
        }

        let mut copied = extract_pack(&zip_buffer, "javascript-redux", project.path())
            .await
            .unwrap();
        copied.sort();
        assert_eq!(copied, vec!["package.json", "src/redux/store/store.js"]);
        assert!(project.path().join("src/redux/store/store.js").exists());
    }
}
