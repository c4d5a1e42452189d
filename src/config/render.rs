// src/config/render.rs

//! Template rendering for manifest documents.
//!
//! A manifest is a Jinja-style template that renders to TOML, so
//! conditionals and variables can shape any part of the document before it
//! is parsed. The render context exposes one object, `kiln`:
//!
//! - `kiln.file`: the manifest path as given on the command line.
//! - `kiln.file_dir`: the directory containing the manifest.
//!
//! A plain TOML document contains no template syntax and renders to itself.

use std::path::Path;

use minijinja::{context, Environment};

use crate::errors::{KilnError, Result};

/// Render the manifest template `source` read from `path`.
///
/// Both template syntax errors and evaluation errors surface as
/// [`KilnError::ManifestRender`] carrying the manifest path.
pub fn render_manifest(source: &str, path: &Path) -> Result<String> {
    // An empty parent means the path was a bare file name; the manifest
    // then lives in the current directory.
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    Environment::new()
        .render_str(
            source,
            context! {
                kiln => context! {
                    file => path.display().to_string(),
                    file_dir => dir.display().to_string(),
                },
            },
        )
        .map_err(|source| KilnError::ManifestRender {
            path: path.to_path_buf(),
            source,
        })
}
