//! Named theme registry.
//!
//! All editor styling resolves through a [`Theme`]: a named mapping from
//! style-property name (`backgroundStyle`, `cursorType`, syntax-token keys,
//! ...) to string value. Themes are registered once at startup, either from
//! scratch or derived from an existing theme, and are read-only afterwards.

use std::collections::BTreeMap;
use std::sync::{OnceLock, RwLock};

use tracing::debug;

use crate::builtin::install_builtin_themes;
use crate::error::ThemeError;

/// Named, immutable-once-published style record.
///
/// Values are stored verbatim; the registry performs no validation of color
/// or font syntax. Parsing into drawing primitives is the consumer's job
/// (see [`crate::value`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: String,
    fields: BTreeMap<String, String>,
}

impl Theme {
    pub(crate) fn new(name: impl Into<String>, fields: BTreeMap<String, String>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Theme name as registered.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up one style property. Missing keys are a consumer-side policy
    /// decision; the registry never fills defaults.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// All properties in stable key order.
    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Registry mapping theme name to [`Theme`].
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    themes: BTreeMap<String, Theme>,
}

impl ThemeRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the built-in themes.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        // Installing into an empty registry cannot collide.
        let _ = install_builtin_themes(&mut registry);
        registry
    }

    /// Register a theme from scratch, storing `fields` verbatim.
    ///
    /// Fails with [`ThemeError::Duplicate`] when `name` is already taken;
    /// the existing entry is left untouched.
    pub fn define(
        &mut self,
        name: &str,
        fields: BTreeMap<String, String>,
    ) -> Result<(), ThemeError> {
        if self.themes.contains_key(name) {
            return Err(ThemeError::Duplicate(name.to_string()));
        }
        debug!("defined theme `{name}` ({} fields)", fields.len());
        self.themes.insert(name.to_string(), Theme::new(name, fields));
        Ok(())
    }

    /// Register a theme as an independent copy of `base` with `overrides`
    /// applied on top.
    ///
    /// Each override key replaces or adds that key in the new record only;
    /// the base theme is left byte-for-byte unchanged. Fails with
    /// [`ThemeError::Duplicate`] when `name` is taken and
    /// [`ThemeError::NotFound`] when `base` is absent; in both cases the
    /// registry is unchanged.
    pub fn derive(
        &mut self,
        name: &str,
        base: &str,
        overrides: BTreeMap<String, String>,
    ) -> Result<(), ThemeError> {
        if self.themes.contains_key(name) {
            return Err(ThemeError::Duplicate(name.to_string()));
        }
        let base_theme = self
            .themes
            .get(base)
            .ok_or_else(|| ThemeError::NotFound(base.to_string()))?;
        let mut fields = base_theme.fields.clone();
        for (key, value) in overrides {
            fields.insert(key, value);
        }
        debug!("derived theme `{name}` from `{base}` ({} fields)", fields.len());
        self.themes.insert(name.to_string(), Theme::new(name, fields));
        Ok(())
    }

    /// Resolve one theme by name.
    pub fn get(&self, name: &str) -> Result<&Theme, ThemeError> {
        self.themes
            .get(name)
            .ok_or_else(|| ThemeError::NotFound(name.to_string()))
    }

    /// Stable ordered names.
    pub fn names(&self) -> Vec<String> {
        self.themes.keys().cloned().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

fn registry_state() -> &'static RwLock<ThemeRegistry> {
    static STATE: OnceLock<RwLock<ThemeRegistry>> = OnceLock::new();
    STATE.get_or_init(|| RwLock::new(ThemeRegistry::with_builtins()))
}

/// Register a theme in the process-wide registry.
///
/// Startup-only write path; concurrent registration is serialized through a
/// write lock. See [`ThemeRegistry::define`].
pub fn define_theme(name: &str, fields: BTreeMap<String, String>) -> Result<(), ThemeError> {
    let mut registry = registry_state()
        .write()
        .map_err(|_| ThemeError::RegistryPoisoned)?;
    registry.define(name, fields)
}

/// Derive a theme in the process-wide registry. See [`ThemeRegistry::derive`].
pub fn derive_theme(
    name: &str,
    base: &str,
    overrides: BTreeMap<String, String>,
) -> Result<(), ThemeError> {
    let mut registry = registry_state()
        .write()
        .map_err(|_| ThemeError::RegistryPoisoned)?;
    registry.derive(name, base, overrides)
}

/// Resolve a theme from the process-wide registry.
///
/// Returns an owned copy so consumers never hold the registry lock while
/// rendering.
pub fn get_theme(name: &str) -> Result<Theme, ThemeError> {
    let registry = registry_state()
        .read()
        .map_err(|_| ThemeError::RegistryPoisoned)?;
    registry.get(name).cloned()
}

/// Names available in the process-wide registry.
pub fn theme_names() -> Vec<String> {
    registry_state()
        .read()
        .ok()
        .map(|registry| registry.names())
        .unwrap_or_default()
}
