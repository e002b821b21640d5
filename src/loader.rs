//! Theme loading from TOML files.
//!
//! Theme files carry `[themes.<name>]` tables of string properties:
//!
//! ```toml
//! [themes.greenonwhite]
//! backgroundStyle = "#ffffff"
//! editorTextColor = "#0a7a05"
//!
//! [themes.greenonwhitezebra]
//! base = "greenonwhite"
//! zebraStripeColor = "#eeeeee"
//! ```
//!
//! A table with the reserved `base` key derives from an existing theme
//! (clone, then apply the remaining keys as overrides); without it the
//! table defines a theme from scratch. Files are startup configuration:
//! any error aborts the load rather than silently overwriting or skipping.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{ThemeError, ThemeFileError};
use crate::registry::ThemeRegistry;

/// Reserved table key marking a derivation of an existing theme.
pub const BASE_KEY: &str = "base";

#[derive(Debug, Default, Deserialize)]
struct ThemeFileConfig {
    #[serde(default)]
    themes: BTreeMap<String, BTreeMap<String, String>>,
}

/// Parse the `[themes.<name>]` tables out of TOML text.
pub fn parse_theme_file(
    text: &str,
) -> Result<BTreeMap<String, BTreeMap<String, String>>, ThemeFileError> {
    let parsed: ThemeFileConfig = toml::from_str(text)?;
    Ok(parsed.themes)
}

/// Register parsed theme tables.
///
/// Definitions register before derivations, so `base` may name a theme
/// defined anywhere in the same set, including another derivation (chains
/// resolve in dependency order). A base that is neither already registered
/// nor part of the set fails with `NotFound`; a name collision fails with
/// `Duplicate`. On error, tables registered earlier in the load remain;
/// callers treat any error as a startup configuration bug and abort.
pub fn register_theme_tables(
    registry: &mut ThemeRegistry,
    tables: BTreeMap<String, BTreeMap<String, String>>,
) -> Result<(), ThemeFileError> {
    let mut derivations = Vec::new();
    for (name, mut fields) in tables {
        if name.trim().is_empty() {
            return Err(ThemeFileError::Invalid(
                "theme name cannot be empty".to_string(),
            ));
        }
        match fields.remove(BASE_KEY) {
            Some(base) => derivations.push((name, base, fields)),
            None => registry.define(&name, fields)?,
        }
    }

    while !derivations.is_empty() {
        let before = derivations.len();
        let mut pending = Vec::new();
        for (name, base, overrides) in derivations {
            if registry.contains(&base) {
                registry.derive(&name, &base, overrides)?;
            } else {
                pending.push((name, base, overrides));
            }
        }
        if pending.len() == before {
            // No progress: remaining bases are missing or cyclic.
            let (_, base, _) = &pending[0];
            return Err(ThemeError::NotFound(base.clone()).into());
        }
        derivations = pending;
    }
    Ok(())
}

/// Load one theme file into the registry.
pub fn load_theme_file(registry: &mut ThemeRegistry, path: &Path) -> Result<(), ThemeFileError> {
    let text = fs::read_to_string(path)?;
    let tables = parse_theme_file(&text)?;
    debug!("loading {} theme(s) from {}", tables.len(), path.display());
    register_theme_tables(registry, tables)
}

/// Load every `*.toml` file in a directory, in sorted filename order.
///
/// A missing directory is not an error; any failing file aborts the load
/// with its error.
pub fn load_theme_dir(registry: &mut ThemeRegistry, dir: &Path) -> Result<(), ThemeFileError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("no theme directory at {}", dir.display());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    paths.sort();

    for path in &paths {
        load_theme_file(registry, path)?;
    }
    Ok(())
}

/// Per-user theme directory (`~/.config/vellum/themes`).
pub fn default_theme_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vellum").join("themes"))
}

/// Load the per-user theme directory, when the platform has one.
pub fn load_user_themes(registry: &mut ThemeRegistry) -> Result<(), ThemeFileError> {
    let Some(dir) = default_theme_dir() else {
        return Ok(());
    };
    load_theme_dir(registry, &dir)
}
