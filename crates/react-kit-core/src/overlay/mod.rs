//! Overlay content packs
//!
//! An overlay is a directory of pre-authored files copied on top of the
//! freshly generated project tree, selected by language variant and add-on
//! set. Overlays are optional content packs: a missing overlay is a silent
//! no-op, never an error.
//!
//! Packs come from either a local directory or a remote URL serving
//! `<overlay>.zip` archives.

pub mod source;
pub mod store;

pub use source::OverlaySource;
pub use store::OverlayStore;
