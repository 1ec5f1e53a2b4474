//! Overlay source resolution - remote URL or local directory

use crate::{DEFAULT_TEMPLATE_URL, TEMPLATE_URL_ENV};
use anyhow::{Context, Result};
use std::path::PathBuf;
use url::Url;

/// Where overlay packs are fetched from
#[derive(Debug, Clone)]
pub enum OverlaySource {
    Remote(Url),
    Local(PathBuf),
}

impl OverlaySource {
    /// Resolve the default remote source, honoring the env override
    pub fn default_remote() -> Result<Self> {
        let url_str = std::env::var(TEMPLATE_URL_ENV)
            .unwrap_or_else(|_| DEFAULT_TEMPLATE_URL.to_string());
        let url =
            Url::parse(&url_str).with_context(|| format!("Invalid overlay URL: {}", url_str))?;
        Ok(Self::Remote(url))
    }

    /// Use a local overlay directory
    pub fn local(path: PathBuf) -> Self {
        Self::Local(path)
    }

    /// Resolve from an optional `--template-dir` flag, falling back to the
    /// default remote source
    pub fn resolve(template_dir: Option<PathBuf>) -> Result<Self> {
        match template_dir {
            Some(path) => Ok(Self::local(path)),
            None => Self::default_remote(),
        }
    }
}
