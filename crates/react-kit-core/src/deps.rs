//! Fixed dependency sets installed into every generated project

use crate::config::{AddOn, ProjectConfig};

/// Packages installed for every project regardless of add-on selection
pub const DEFAULT_DEPENDENCIES: &[&str] = &[
    "tailwindcss@^4.1.12",
    "@tailwindcss/vite@^4.1.12",
    "react-router-dom@^7.0.0",
    "axios",
    "react-hook-form",
    "@tanstack/react-query",
    "lucide-react",
];

/// Packages required by the Redux Toolkit add-on
pub const REDUX_DEPENDENCIES: &[&str] = &["@reduxjs/toolkit", "react-redux"];

/// Packages required by the shadcn/ui add-on
pub const SHADCN_DEPENDENCIES: &[&str] = &[
    "@radix-ui/react-slot",
    "class-variance-authority",
    "clsx",
    "tailwind-merge",
];

/// Conditional packages for the selected add-ons, in a stable order
pub fn add_on_dependencies(config: &ProjectConfig) -> Vec<&'static str> {
    let mut packages = Vec::new();

    if config.has(AddOn::Redux) {
        packages.extend_from_slice(REDUX_DEPENDENCIES);
    }
    if config.has(AddOn::Shadcn) {
        packages.extend_from_slice(SHADCN_DEPENDENCIES);
    }

    packages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Language;

    #[test]
    fn test_no_add_ons_means_no_conditional_packages() {
        let config = ProjectConfig::new("demo", Language::TypeScript, []);
        assert!(add_on_dependencies(&config).is_empty());
    }

    #[test]
    fn test_redux_packages() {
        let config = ProjectConfig::new("demo", Language::TypeScript, [AddOn::Redux]);
        assert_eq!(
            add_on_dependencies(&config),
            vec!["@reduxjs/toolkit", "react-redux"]
        );
    }

    #[test]
    fn test_all_add_ons_stack() {
        let config = ProjectConfig::new(
            "demo",
            Language::JavaScript,
            [AddOn::Shadcn, AddOn::Redux],
        );
        let packages = add_on_dependencies(&config);
        assert_eq!(packages.len(), REDUX_DEPENDENCIES.len() + SHADCN_DEPENDENCIES.len());
        assert!(packages.contains(&"clsx"));
        assert!(packages.contains(&"react-redux"));
    }
}
