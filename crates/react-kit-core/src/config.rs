//! Project configuration model
//!
//! A [`ProjectConfig`] describes one scaffolding run. It is produced once by
//! the prompt flow (or CLI flags) and never mutated afterwards; every
//! downstream step reads from it rather than re-deriving state.

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// Sentinel project name meaning "scaffold into the current directory"
pub const CURRENT_DIR: &str = ".";

/// Language variant for the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    TypeScript,
}

impl Language {
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
        }
    }

    /// Overlay directory / identifier name
    pub fn id(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
        }
    }

    /// Template name passed to `npm create vite`
    pub fn vite_template(&self) -> &'static str {
        match self {
            Language::JavaScript => "react",
            Language::TypeScript => "react-ts",
        }
    }

    /// Filename of the vite config produced by the generator
    pub fn vite_config_file(&self) -> &'static str {
        match self {
            Language::JavaScript => "vite.config.js",
            Language::TypeScript => "vite.config.ts",
        }
    }

    /// Filename of the shared utilities module inside `src/libs/`
    pub fn utils_file(&self) -> &'static str {
        match self {
            Language::JavaScript => "utils.js",
            Language::TypeScript => "utils.ts",
        }
    }

    pub fn is_typescript(&self) -> bool {
        matches!(self, Language::TypeScript)
    }

    /// Parse a language string as given on the command line
    pub fn parse(s: &str) -> Option<Language> {
        match s.to_lowercase().as_str() {
            "typescript" | "ts" => Some(Language::TypeScript),
            "javascript" | "js" => Some(Language::JavaScript),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Optional add-on selected during configuration collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AddOn {
    /// Redux Toolkit state management
    Redux,
    /// shadcn/ui components
    Shadcn,
}

impl AddOn {
    pub fn display_name(&self) -> &'static str {
        match self {
            AddOn::Redux => "Redux Toolkit",
            AddOn::Shadcn => "shadcn/ui",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            AddOn::Redux => "State management",
            AddOn::Shadcn => "UI components",
        }
    }

    /// Parse an add-on string as given on the command line
    pub fn parse(s: &str) -> Option<AddOn> {
        match s.to_lowercase().as_str() {
            "redux" => Some(AddOn::Redux),
            "shadcn" | "shadcn-ui" => Some(AddOn::Shadcn),
            _ => None,
        }
    }
}

impl fmt::Display for AddOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Immutable description of a single scaffolding run
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// Project name, or [`CURRENT_DIR`] to scaffold in place
    pub project_name: String,
    pub language: Language,
    /// Selected add-ons; a set, so duplicates are impossible by construction
    pub add_ons: BTreeSet<AddOn>,
}

impl ProjectConfig {
    pub fn new(
        project_name: impl Into<String>,
        language: Language,
        add_ons: impl IntoIterator<Item = AddOn>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            language,
            add_ons: add_ons.into_iter().collect(),
        }
    }

    /// Whether the project targets the current working directory
    pub fn is_current_dir(&self) -> bool {
        self.project_name == CURRENT_DIR
    }

    pub fn has(&self, add_on: AddOn) -> bool {
        self.add_ons.contains(&add_on)
    }

    /// Resolve the project root against a working directory captured once
    /// at the start of the run
    pub fn project_root(&self, cwd: &Path) -> PathBuf {
        if self.is_current_dir() {
            cwd.to_path_buf()
        } else {
            cwd.join(&self.project_name)
        }
    }

    /// Name of the overlay directory for this configuration.
    ///
    /// Redux projects use the pre-combined `<language>-redux` overlay; only
    /// one overlay is ever applied per run.
    pub fn overlay_name(&self) -> String {
        if self.has(AddOn::Redux) {
            format!("{}-redux", self.language.id())
        } else {
            self.language.id().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_name_is_pure_in_language_and_add_ons() {
        let plain_ts = ProjectConfig::new("demo", Language::TypeScript, []);
        assert_eq!(plain_ts.overlay_name(), "typescript");

        let redux_ts = ProjectConfig::new("demo", Language::TypeScript, [AddOn::Redux]);
        assert_eq!(redux_ts.overlay_name(), "typescript-redux");

        let plain_js = ProjectConfig::new("demo", Language::JavaScript, []);
        assert_eq!(plain_js.overlay_name(), "javascript");

        let redux_js = ProjectConfig::new("demo", Language::JavaScript, [AddOn::Redux]);
        assert_eq!(redux_js.overlay_name(), "javascript-redux");

        // Shadcn alone does not change the overlay selection
        let shadcn_js = ProjectConfig::new("demo", Language::JavaScript, [AddOn::Shadcn]);
        assert_eq!(shadcn_js.overlay_name(), "javascript");
    }

    #[test]
    fn test_project_root_resolution() {
        let cwd = Path::new("/work");

        let named = ProjectConfig::new("demo", Language::TypeScript, []);
        assert!(!named.is_current_dir());
        assert_eq!(named.project_root(cwd), PathBuf::from("/work/demo"));

        let in_place = ProjectConfig::new(CURRENT_DIR, Language::TypeScript, []);
        assert!(in_place.is_current_dir());
        assert_eq!(in_place.project_root(cwd), PathBuf::from("/work"));
    }

    #[test]
    fn test_duplicate_add_ons_collapse() {
        let config = ProjectConfig::new(
            "demo",
            Language::JavaScript,
            [AddOn::Redux, AddOn::Redux, AddOn::Shadcn],
        );
        assert_eq!(config.add_ons.len(), 2);
        assert!(config.has(AddOn::Redux));
        assert!(config.has(AddOn::Shadcn));
    }

    #[test]
    fn test_parse_language() {
        assert_eq!(Language::parse("ts"), Some(Language::TypeScript));
        assert_eq!(Language::parse("TypeScript"), Some(Language::TypeScript));
        assert_eq!(Language::parse("js"), Some(Language::JavaScript));
        assert_eq!(Language::parse("python"), None);
    }

    #[test]
    fn test_parse_add_on() {
        assert_eq!(AddOn::parse("redux"), Some(AddOn::Redux));
        assert_eq!(AddOn::parse("shadcn"), Some(AddOn::Shadcn));
        assert_eq!(AddOn::parse("shadcn-ui"), Some(AddOn::Shadcn));
        assert_eq!(AddOn::parse("mobx"), None);
    }

    #[test]
    fn test_language_file_names() {
        assert_eq!(Language::TypeScript.vite_config_file(), "vite.config.ts");
        assert_eq!(Language::JavaScript.vite_config_file(), "vite.config.js");
        assert_eq!(Language::TypeScript.utils_file(), "utils.ts");
        assert_eq!(Language::JavaScript.utils_file(), "utils.js");
        assert_eq!(Language::TypeScript.vite_template(), "react-ts");
        assert_eq!(Language::JavaScript.vite_template(), "react");
    }
}
