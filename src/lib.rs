//! Vellum theme — named visual themes for a code editor.
//!
//! A [`registry::Theme`] is a named, immutable mapping from style-property
//! name to string value: colors, font shorthands, and enumerated tokens such
//! as `cursorType`. Themes are registered once at startup and are read-only
//! afterwards; variants can be derived from an existing theme or loaded from
//! per-user TOML files. The registry stores values verbatim; parsing them
//! into drawing primitives is the renderer's job (see [`value`]).
//!
//! # Quick start
//!
//! ```
//! use std::collections::BTreeMap;
//! use vellum_theme::registry::ThemeRegistry;
//!
//! let mut registry = ThemeRegistry::with_builtins();
//! registry
//!     .derive(
//!         "greenonblack-underline",
//!         "greenonblack",
//!         BTreeMap::from([("cursorType".to_string(), "underline".to_string())]),
//!     )
//!     .unwrap();
//!
//! let theme = registry.get("greenonblack-underline").unwrap();
//! assert_eq!(theme.get("cursorType"), Some("underline"));
//! assert_eq!(theme.get("backgroundStyle"), Some("#000000"));
//! ```

pub mod builtin;
pub mod error;
pub mod loader;
pub mod registry;
pub mod value;
