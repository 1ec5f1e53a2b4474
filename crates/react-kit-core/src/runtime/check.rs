//! Runtime detection for Node.js and npm

use anyhow::Result;
use std::process::Command;

/// Where to point users when Node.js is missing
pub const NODE_DOCS_URL: &str = "https://nodejs.org";

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

fn probe(name: &'static str, binary: &str) -> RuntimeInfo {
    let output = Command::new(binary).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    probe("Node.js", "node")
}

/// Check if npm is available
pub fn check_npm() -> RuntimeInfo {
    probe("npm", "npm")
}

/// Check that both Node.js and npm are installed.
///
/// Both the base generator (`npm create vite`) and the dependency installer
/// go through npm, so either one missing is fatal.
pub fn check_runtimes() -> Result<Vec<RuntimeInfo>> {
    let mut results = Vec::new();
    let mut missing = Vec::new();

    let node = check_node();
    if node.available {
        results.push(node);
    } else {
        missing.push(format!("Node.js (install from {})", NODE_DOCS_URL));
    }

    let npm = check_npm();
    if npm.available {
        results.push(npm);
    } else {
        missing.push(format!("npm (bundled with Node.js, see {})", NODE_DOCS_URL));
    }

    if !missing.is_empty() {
        anyhow::bail!(
            "Missing required runtimes:\n{}",
            missing
                .iter()
                .map(|m| format!("  - {}", m))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    Ok(results)
}
