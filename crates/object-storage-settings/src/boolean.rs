// crates/object-storage-settings/src/boolean.rs
// ============================================================================
// Module: Boolean Coercion
// Description: Boolean-string parsing for environment toggles.
// Purpose: Enforce a fixed vocabulary with fail-fast errors.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Environment toggles are parsed against a fixed vocabulary: `true`, `1`,
//! and `yes` are true; `false`, `0`, and `no` are false. Matching is ASCII
//! case-insensitive and ignores surrounding whitespace. Anything else is a
//! configuration error carrying the variable name and the offending value,
//! surfaced at startup rather than silently defaulted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::env::SettingsError;

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Parses a boolean-string environment value.
///
/// # Errors
///
/// Returns [`SettingsError::InvalidBoolean`] when the value is not a
/// recognized boolean spelling.
pub fn parse_bool(name: &str, raw: &str) -> Result<bool, SettingsError> {
    let trimmed = raw.trim();
    if trimmed == "1" || trimmed.eq_ignore_ascii_case("true") || trimmed.eq_ignore_ascii_case("yes")
    {
        return Ok(true);
    }
    if trimmed == "0"
        || trimmed.eq_ignore_ascii_case("false")
        || trimmed.eq_ignore_ascii_case("no")
    {
        return Ok(false);
    }
    Err(SettingsError::InvalidBoolean {
        name: name.to_string(),
        value: raw.to_string(),
    })
}
