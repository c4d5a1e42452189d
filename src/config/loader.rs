// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::Manifest;
use crate::config::render::render_manifest;
use crate::errors::{KilnError, Result};

/// Load a manifest from the given path.
///
/// The document is rendered as a template first (see
/// [`render_manifest`]) and the result deserialized from TOML. This does
/// **not** check semantic problems (missing dependencies, cycles, unknown
/// target types). Those surface from the resolver and the runner, which
/// know which request hit them. Failures here carry the manifest path for
/// context.
pub fn load_manifest(path: impl AsRef<Path>) -> Result<Manifest> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| KilnError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;

    let rendered = render_manifest(&contents, path)?;

    let manifest: Manifest =
        toml::from_str(&rendered).map_err(|source| KilnError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(manifest)
}

/// Helper to resolve a default manifest path.
///
/// Currently this just returns `Kiln.toml` in the current working
/// directory, but this function exists so you can later:
///
/// - Respect an env var (e.g. `KILN_FILE`).
/// - Look for multiple default locations.
/// - Support project-local manifest discovery.
pub fn default_manifest_path() -> PathBuf {
    PathBuf::from("Kiln.toml")
}
