// crates/object-storage-settings/src/env.rs
// ============================================================================
// Module: Environment Source
// Description: Environment lookup abstraction for settings resolution.
// Purpose: Centralize env access with strict UTF-8 validation.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Settings resolution reads from an [`EnvSource`] rather than the ambient
//! process environment. The `Process` variant reads live environment state
//! with strict UTF-8 enforcement; the `Map` variant is an explicit key/value
//! map for deterministic lookups. Invalid UTF-8 fails closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Settings resolution or validation errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Environment value is not valid UTF-8.
    #[error("environment value for {0} must be valid UTF-8")]
    NotUtf8(String),
    /// Boolean-string value outside the accepted vocabulary.
    #[error("invalid boolean {value:?} for {name}: expected true/false, 1/0, or yes/no")]
    InvalidBoolean {
        /// Environment variable that carried the value.
        name: String,
        /// Offending raw value.
        value: String,
    },
    /// Invalid settings data.
    #[error("invalid settings: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Environment Source
// ============================================================================

/// Source of environment lookups for settings resolution.
///
/// # Invariants
/// - `Map` lookups never touch the process environment.
/// - Absent keys resolve to `None`; present keys resolve verbatim, empty
///   values included.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EnvSource {
    /// Live process environment with strict UTF-8 enforcement.
    #[default]
    Process,
    /// Explicit key/value map used for deterministic lookups.
    Map(BTreeMap<String, String>),
}

impl EnvSource {
    /// Builds a map-backed source from key/value pairs.
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let map = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        Self::Map(map)
    }

    /// Looks up one variable, enforcing UTF-8 validity for process reads.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NotUtf8`] when the process value contains
    /// invalid UTF-8.
    pub fn get(&self, name: &str) -> Result<Option<String>, SettingsError> {
        match self {
            Self::Process => std::env::var_os(name).map_or(Ok(None), |raw| {
                raw.into_string().map(Some).map_err(|_| SettingsError::NotUtf8(name.to_string()))
            }),
            Self::Map(map) => Ok(map.get(name).cloned()),
        }
    }
}
