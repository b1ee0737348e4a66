// crates/object-storage-settings/src/docs.rs
// ============================================================================
// Module: Settings Docs Generator
// Description: Markdown generator for object-storage settings documentation.
// Purpose: Keep settings docs in sync with schema and resolution rules.
// Dependencies: serde_json, std
// ============================================================================

//! ## Overview
//! Generates `Docs/configuration/object-storage.md` from the canonical
//! settings schema. This output is deterministic; every schema property must
//! be documented and every documented variable must exist in the schema, so
//! drift between the model and the reference fails generation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::fmt::Write;
use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::object_storage::ObjectStorageEnv;
use crate::schema::settings_schema;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default output path for generated settings docs.
const DOCS_PATH: &str = "Docs/configuration/object-storage.md";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when generating or verifying settings docs.
#[derive(Debug, Error)]
pub enum DocsError {
    /// IO failure while writing docs.
    #[error("docs io error: {0}")]
    Io(String),
    /// Schema traversal or rendering error.
    #[error("docs schema error: {0}")]
    Schema(String),
    /// Generated docs do not match the committed file.
    #[error("docs drift: {0}")]
    Drift(String),
}

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Generates the settings markdown documentation.
///
/// # Errors
///
/// Returns [`DocsError`] when schema traversal fails.
pub fn settings_docs_markdown() -> Result<String, DocsError> {
    let schema = settings_schema();
    let mut out = String::new();

    out.push_str("<!--\n");
    out.push_str("Docs/configuration/object-storage.md\n");
    out.push_str("============================================================================\n");
    out.push_str("Document: Object Storage Settings\n");
    out.push_str("Description: Reference for OBJECT_STORAGE_* environment variables.\n");
    out.push_str("Purpose: Document endpoint, credential, bucket, and toggle settings.\n");
    out.push_str("Generated: This file is auto-generated; do not edit manually.\n");
    out.push_str("============================================================================\n");
    out.push_str("-->\n\n");

    out.push_str("# Object Storage Settings\n\n");
    out.push_str("## Overview\n\n");
    out.push_str("Object-storage settings are resolved once at startup from environment\n");
    out.push_str("variables. Missing variables fall back to the documented defaults; a\n");
    out.push_str("variable that is present wins verbatim, empty strings included. Boolean\n");
    out.push_str("values outside the accepted vocabulary fail resolution.\n\n");

    out.push_str("## Environment Variables\n\n");
    let table = render_table(&schema).map_err(DocsError::Schema)?;
    out.push_str(&table);
    out.push('\n');

    out.push_str("## Runtime Mode\n\n");
    out.push_str("`DEBUG` and `TEST` are boolean-string flags (absent means false). Either\n");
    out.push_str("flag selects the debug/test defaults for endpoint and credentials; only\n");
    out.push_str("`DEBUG` selects the enabled-by-default toggle.\n\n");
    out.push_str("Accepted boolean spellings, ASCII case-insensitive: `true`, `1`, `yes`;\n");
    out.push_str("`false`, `0`, `no`.\n");

    Ok(out)
}

/// Writes the generated docs to the standard location.
///
/// # Errors
///
/// Returns [`DocsError`] when file output fails.
pub fn write_settings_docs(path: Option<&Path>) -> Result<(), DocsError> {
    let path = path.unwrap_or_else(|| Path::new(DOCS_PATH));
    let content = settings_docs_markdown()?;
    fs::write(path, content.as_bytes()).map_err(|err| DocsError::Io(err.to_string()))
}

/// Verifies the on-disk docs match the generated output.
///
/// # Errors
///
/// Returns [`DocsError`] when the docs drift.
pub fn verify_settings_docs(path: Option<&Path>) -> Result<(), DocsError> {
    let path = path.unwrap_or_else(|| Path::new(DOCS_PATH));
    let content = settings_docs_markdown()?;
    let existing = fs::read_to_string(path).map_err(|err| DocsError::Io(err.to_string()))?;
    if existing != content {
        return Err(DocsError::Drift(format!("docs mismatch: {}", path.display())));
    }
    Ok(())
}

// ============================================================================
// SECTION: Variable Registry
// ============================================================================

/// Specification for one documented environment variable.
#[derive(Clone, Copy)]
struct VariableSpec {
    /// Environment key backing the field.
    env: ObjectStorageEnv,
    /// Schema property holding type and description.
    field: &'static str,
    /// Default applied in debug/test runs.
    dev_default: &'static str,
    /// Default applied in production-like runs.
    prod_default: &'static str,
}

/// Builds the ordered list of documented variables.
fn variable_specs() -> Vec<VariableSpec> {
    vec![
        VariableSpec {
            env: ObjectStorageEnv::Endpoint,
            field: "endpoint",
            dev_default: "`http://localhost:19000`",
            prod_default: "(empty)",
        },
        VariableSpec {
            env: ObjectStorageEnv::AccessKeyId,
            field: "access_key_id",
            dev_default: "`object_storage_root_user`",
            prod_default: "(empty)",
        },
        VariableSpec {
            env: ObjectStorageEnv::SecretAccessKey,
            field: "secret_access_key",
            dev_default: "`object_storage_root_password`",
            prod_default: "(empty)",
        },
        VariableSpec {
            env: ObjectStorageEnv::Enabled,
            field: "enabled",
            dev_default: "tracks `DEBUG`",
            prod_default: "false",
        },
        VariableSpec {
            env: ObjectStorageEnv::Bucket,
            field: "bucket",
            dev_default: "`posthog`",
            prod_default: "`posthog`",
        },
        VariableSpec {
            env: ObjectStorageEnv::SessionRecordingFolder,
            field: "session_recording_folder",
            dev_default: "`session_recordings`",
            prod_default: "`session_recordings`",
        },
    ]
}

// ============================================================================
// SECTION: Rendering Helpers
// ============================================================================

/// Renders the markdown table for the settings variables.
fn render_table(schema: &Value) -> Result<String, String> {
    let props = schema
        .get("properties")
        .and_then(Value::as_object)
        .ok_or_else(|| "schema properties missing".to_string())?;

    let specs = variable_specs();
    let mut seen = BTreeSet::new();
    for spec in &specs {
        if !props.contains_key(spec.field) {
            return Err(format!("missing field in schema: {}", spec.field));
        }
        seen.insert(spec.field);
    }
    for key in props.keys() {
        if !seen.contains(key.as_str()) {
            return Err(format!("field not documented: {key}"));
        }
    }

    let mut table = String::new();
    table.push_str("| Variable | Type | Debug/Test default | Production default | Notes |\n");
    table.push_str("| --- | --- | --- | --- | --- |\n");
    for spec in &specs {
        let prop_schema =
            props.get(spec.field).ok_or_else(|| format!("missing field schema: {}", spec.field))?;
        let field_type = format_schema_type(prop_schema);
        let notes = prop_schema.get("description").and_then(Value::as_str).unwrap_or("");
        let _ = writeln!(
            &mut table,
            "| `{}` | {} | {} | {} | {} |",
            spec.env.as_str(),
            field_type,
            spec.dev_default,
            spec.prod_default,
            notes
        );
    }
    Ok(table)
}

/// Formats a schema type for markdown tables.
fn format_schema_type(schema: &Value) -> String {
    schema.get("type").and_then(Value::as_str).map_or_else(
        || "unknown".to_string(),
        |type_str| match type_str {
            "boolean" => "bool".to_string(),
            other => other.to_string(),
        },
    )
}
