//! Collaborator boundary: runtime detection and npm invocations
//!
//! Everything that shells out lives here. The base generator and the
//! dependency installer are single blocking external invocations; the core
//! propagates their failures unchanged and never retries.

pub mod check;
pub mod npm;
pub mod version;

pub use check::{check_runtimes, RuntimeInfo};
pub use npm::{create_vite_project, install_packages};
pub use version::node_version_warning;
