// src/config/mod.rs

//! Manifest loading for kiln.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Render the manifest template to a TOML document (`render.rs`).
//! - Load a manifest file from disk (`loader.rs`).
//!
//! Whether the targets in a manifest actually resolve is decided later, per
//! request, by [`crate::dag::Resolver`].

pub mod loader;
pub mod model;
pub mod render;

pub use loader::{default_manifest_path, load_manifest};
pub use model::{Command, Manifest, TargetConfig, TriggerKind, IGNORE_ERROR_PREFIX};
pub use render::render_manifest;
