//! Node.js version advisory

use semver::Version;

/// Oldest Node.js major supported by the vite templates
pub const MIN_NODE_MAJOR: u64 = 18;

/// Compare a detected Node.js version against the supported floor.
///
/// Returns a warning message when the runtime is too old. Unparseable
/// versions produce no warning - this is an advisory, not a gate.
pub fn node_version_warning(version_str: &str) -> Option<String> {
    let cleaned = version_str.trim();
    let cleaned = cleaned.strip_prefix('v').unwrap_or(cleaned);

    let version = Version::parse(cleaned).ok()?;

    if version.major < MIN_NODE_MAJOR {
        Some(format!(
            "Node.js {} detected; the generated project expects Node.js {} or newer.",
            version_str.trim(),
            MIN_NODE_MAJOR
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_old_node_warns() {
        let warning = node_version_warning("v16.20.0");
        assert!(warning.is_some());
        assert!(warning.unwrap().contains("18"));
    }

    #[test]
    fn test_supported_node_is_quiet() {
        assert!(node_version_warning("v18.0.0").is_none());
        assert!(node_version_warning("v22.11.0").is_none());
    }

    #[test]
    fn test_missing_v_prefix_still_parses() {
        assert!(node_version_warning("20.1.0").is_none());
        assert!(node_version_warning("17.9.1").is_some());
    }

    #[test]
    fn test_unparseable_version_is_quiet() {
        assert!(node_version_warning("not-a-version").is_none());
        assert!(node_version_warning("").is_none());
    }
}
