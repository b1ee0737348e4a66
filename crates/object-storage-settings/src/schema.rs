// crates/object-storage-settings/src/schema.rs
// ============================================================================
// Module: Settings Schema
// Description: JSON schema builder for resolved object-storage settings.
// Purpose: Provide canonical validation schema for settings artifacts.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! This module defines the JSON Schema for resolved object-storage settings.
//! The schema describes the resolved value, not the raw environment: every
//! field is required because resolution always populates all six, and
//! unknown fields are rejected. Docs and tooling render from this schema.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;

use crate::object_storage::DEFAULT_BUCKET;
use crate::object_storage::DEFAULT_SESSION_RECORDING_FOLDER;

// ============================================================================
// SECTION: Schema Builder
// ============================================================================

/// Returns the JSON schema for resolved object-storage settings.
#[must_use]
pub fn settings_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": "object-storage-settings://schemas/settings.schema.json",
        "title": "Object Storage Settings",
        "description": "Resolved object-storage connection settings.",
        "type": "object",
        "properties": {
            "endpoint": {
                "type": "string",
                "description": "Object-store endpoint URL. Defaults to the local MinIO endpoint in debug/test runs and to an empty string otherwise."
            },
            "access_key_id": {
                "type": "string",
                "description": "Credential identifier. Defaults to the local MinIO root user in debug/test runs and to an empty string otherwise."
            },
            "secret_access_key": {
                "type": "string",
                "description": "Credential secret. Defaults to the local MinIO root password in debug/test runs and to an empty string otherwise."
            },
            "enabled": {
                "type": "boolean",
                "description": "Whether storage-dependent features are enabled. Defaults to the debug flag; explicit values are boolean-coerced."
            },
            "bucket": {
                "type": "string",
                "default": DEFAULT_BUCKET,
                "description": "Bucket/container name. The default ignores mode."
            },
            "session_recording_folder": {
                "type": "string",
                "default": DEFAULT_SESSION_RECORDING_FOLDER,
                "description": "Key-prefix folder for session recordings. The default ignores mode."
            }
        },
        "required": [
            "endpoint",
            "access_key_id",
            "secret_access_key",
            "enabled",
            "bucket",
            "session_recording_folder"
        ],
        "additionalProperties": false
    })
}
