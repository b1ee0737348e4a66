// crates/object-storage-settings/src/examples.rs
// ============================================================================
// Module: Settings Examples
// Description: Canonical example environment payloads.
// Purpose: Deterministic examples for docs and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical example environment file for object-storage settings. Output is
//! deterministic and kept in sync with schema and docs.

/// Returns a canonical example environment file for local development.
#[must_use]
pub fn settings_env_example() -> String {
    String::from(
        r"# Object storage connection (local MinIO defaults).
DEBUG=true
OBJECT_STORAGE_ENDPOINT=http://localhost:19000
OBJECT_STORAGE_ACCESS_KEY_ID=object_storage_root_user
OBJECT_STORAGE_SECRET_ACCESS_KEY=object_storage_root_password
OBJECT_STORAGE_ENABLED=true
OBJECT_STORAGE_BUCKET=posthog
OBJECT_STORAGE_SESSION_RECORDING_FOLDER=session_recordings
",
    )
}
