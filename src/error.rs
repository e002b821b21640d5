//! Unified error types for the theme system.

use std::fmt;

// ---------------------------------------------------------------------------
// ThemeError
// ---------------------------------------------------------------------------

/// Errors from theme registration and lookup.
#[derive(Debug)]
pub enum ThemeError {
    /// A theme with this name is already registered.
    ///
    /// Theme tables are static startup configuration, so a name collision is
    /// a configuration bug; the existing entry is left untouched.
    Duplicate(String),
    /// No theme with this name is registered.
    NotFound(String),
    /// The process-wide registry lock was poisoned by a panicking writer.
    RegistryPoisoned,
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate(name) => write!(f, "theme `{name}` is already defined"),
            Self::NotFound(name) => write!(f, "unknown theme `{name}`"),
            Self::RegistryPoisoned => write!(f, "theme registry lock poisoned"),
        }
    }
}

impl std::error::Error for ThemeError {}

// ---------------------------------------------------------------------------
// ThemeFileError
// ---------------------------------------------------------------------------

/// Errors when loading theme definitions from TOML files.
#[derive(Debug)]
pub enum ThemeFileError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Theme(ThemeError),
    Invalid(String),
}

impl fmt::Display for ThemeFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Theme(e) => write!(f, "theme: {e}"),
            Self::Invalid(msg) => write!(f, "invalid theme file: {msg}"),
        }
    }
}

impl std::error::Error for ThemeFileError {}

impl From<std::io::Error> for ThemeFileError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ThemeFileError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

impl From<ThemeError> for ThemeFileError {
    fn from(e: ThemeError) -> Self {
        Self::Theme(e)
    }
}
