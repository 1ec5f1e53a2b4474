//! React Kit Core - Library for scaffolding React projects
//!
//! This library drives the `react-kit` CLI: it collects a project
//! configuration, delegates base generation to `npm create vite`, copies an
//! overlay of opinionated template files on top of the generated tree,
//! installs a fixed dependency set, and (when the shadcn/ui add-on is
//! selected) patches the generated configuration files to wire in path
//! aliases and the `cn` helper.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Overlay copying (`overlay`), config
//!   patching (`patcher`), dependency sets (`deps`)
//! - **Layer 2: Collaborators** - Runtime detection and npm invocations
//!   (`runtime`)
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts
//!   (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt module

pub mod config;
pub mod deps;
pub mod overlay;
pub mod patcher;
pub mod runtime;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{AddOn, Language, ProjectConfig};
pub use overlay::{OverlaySource, OverlayStore};
pub use patcher::setup_shadcn;

#[cfg(feature = "tui")]
pub use tui::run;

/// Default remote URL for overlay content packs
pub const DEFAULT_TEMPLATE_URL: &str =
    "https://raw.githubusercontent.com/react-kit/react-kit/main/templates";

/// Environment variable that overrides the overlay pack URL
pub const TEMPLATE_URL_ENV: &str = "REACT_KIT_TEMPLATE_URL";

/// User agent for remote overlay pack requests
pub const USER_AGENT: &str = "react-kit";
