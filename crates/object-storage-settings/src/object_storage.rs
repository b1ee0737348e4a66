// crates/object-storage-settings/src/object_storage.rs
// ============================================================================
// Module: Object Storage Settings
// Description: Environment-derived object-storage connection settings.
// Purpose: Resolve endpoint, credentials, bucket, and toggle state once.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Object-storage settings are resolved once at startup from a fixed set of
//! `OBJECT_STORAGE_*` environment variables. Debug and test runs fall back
//! to local MinIO defaults; production-like runs fall back to inert empty
//! values and a disabled toggle. A key that is present wins verbatim, empty
//! strings included. Resolution is deterministic for a fixed source and
//! mode, and the resolved value is immutable.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::boolean::parse_bool;
use crate::env::EnvSource;
use crate::env::SettingsError;
use crate::mode::RuntimeMode;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Endpoint default applied in debug/test runs (local MinIO).
pub const DEV_ENDPOINT: &str = "http://localhost:19000";
/// Access key default applied in debug/test runs.
pub const DEV_ACCESS_KEY_ID: &str = "object_storage_root_user";
/// Secret key default applied in debug/test runs.
pub const DEV_SECRET_ACCESS_KEY: &str = "object_storage_root_password";
/// Bucket default applied in every mode.
pub const DEFAULT_BUCKET: &str = "posthog";
/// Session recording folder default applied in every mode.
pub const DEFAULT_SESSION_RECORDING_FOLDER: &str = "session_recordings";

// ============================================================================
// SECTION: Environment Contract
// ============================================================================

/// Environment keys consumed by object-storage settings resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectStorageEnv {
    /// Object-store endpoint URL.
    Endpoint,
    /// Credential identifier.
    AccessKeyId,
    /// Credential secret.
    SecretAccessKey,
    /// Feature toggle, boolean-string.
    Enabled,
    /// Bucket/container name.
    Bucket,
    /// Key-prefix folder for session recordings.
    SessionRecordingFolder,
}

impl ObjectStorageEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Endpoint => "OBJECT_STORAGE_ENDPOINT",
            Self::AccessKeyId => "OBJECT_STORAGE_ACCESS_KEY_ID",
            Self::SecretAccessKey => "OBJECT_STORAGE_SECRET_ACCESS_KEY",
            Self::Enabled => "OBJECT_STORAGE_ENABLED",
            Self::Bucket => "OBJECT_STORAGE_BUCKET",
            Self::SessionRecordingFolder => "OBJECT_STORAGE_SESSION_RECORDING_FOLDER",
        }
    }
}

// ============================================================================
// SECTION: Settings Type
// ============================================================================

/// Resolved object-storage connection settings.
///
/// # Invariants
/// - All fields are populated after resolution; no field is ever unset.
/// - The value is immutable once resolved and safe to share across threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectStorageSettings {
    /// Object-store endpoint URL; empty in production-like runs when unset.
    pub endpoint: String,
    /// Credential identifier; empty in production-like runs when unset.
    pub access_key_id: String,
    /// Credential secret; empty in production-like runs when unset.
    pub secret_access_key: String,
    /// Whether storage-dependent features are enabled.
    pub enabled: bool,
    /// Bucket/container name.
    pub bucket: String,
    /// Key-prefix folder for session recordings.
    pub session_recording_folder: String,
}

impl ObjectStorageSettings {
    /// Resolves settings from the given source and runtime mode.
    ///
    /// Missing keys fall back to the documented defaults: endpoint and
    /// credentials track dev-like mode (`debug || test`), the enabled toggle
    /// tracks `debug` alone, and bucket and folder defaults ignore mode.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when a value is not valid UTF-8 or the
    /// enabled toggle is not a recognized boolean spelling.
    pub fn resolve(env: &EnvSource, mode: RuntimeMode) -> Result<Self, SettingsError> {
        let dev_like = mode.is_dev_like();
        let endpoint =
            resolve_string(env, ObjectStorageEnv::Endpoint, if dev_like { DEV_ENDPOINT } else { "" })?;
        let access_key_id = resolve_string(
            env,
            ObjectStorageEnv::AccessKeyId,
            if dev_like { DEV_ACCESS_KEY_ID } else { "" },
        )?;
        let secret_access_key = resolve_string(
            env,
            ObjectStorageEnv::SecretAccessKey,
            if dev_like { DEV_SECRET_ACCESS_KEY } else { "" },
        )?;
        let enabled = match env.get(ObjectStorageEnv::Enabled.as_str())? {
            Some(raw) => parse_bool(ObjectStorageEnv::Enabled.as_str(), &raw)?,
            None => mode.debug,
        };
        let bucket = resolve_string(env, ObjectStorageEnv::Bucket, DEFAULT_BUCKET)?;
        let session_recording_folder = resolve_string(
            env,
            ObjectStorageEnv::SessionRecordingFolder,
            DEFAULT_SESSION_RECORDING_FOLDER,
        )?;
        Ok(Self {
            endpoint,
            access_key_id,
            secret_access_key,
            enabled,
            bucket,
            session_recording_folder,
        })
    }

    /// Validates resolved settings for structural consistency.
    ///
    /// Empty endpoint and credentials are valid inert state; whether they
    /// are acceptable when the toggle is enabled is the storage client's
    /// decision, not this crate's.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when a non-empty endpoint lacks an
    /// `http://`/`https://` scheme, the bucket is empty, or the session
    /// recording folder is not a relative, traversal-free prefix.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let endpoint = self.endpoint.trim();
        if !endpoint.is_empty()
            && !(endpoint.starts_with("https://") || endpoint.starts_with("http://"))
        {
            return Err(SettingsError::Invalid(
                "endpoint must include http:// or https://".to_string(),
            ));
        }
        if self.bucket.trim().is_empty() {
            return Err(SettingsError::Invalid("bucket must be non-empty".to_string()));
        }
        validate_folder(&self.session_recording_folder)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves one string field with a present-wins, default-on-absent rule.
fn resolve_string(
    env: &EnvSource,
    key: ObjectStorageEnv,
    default: &str,
) -> Result<String, SettingsError> {
    Ok(env.get(key.as_str())?.unwrap_or_else(|| default.to_string()))
}

/// Validates the session recording folder as a relative, traversal-free
/// prefix.
fn validate_folder(value: &str) -> Result<(), SettingsError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SettingsError::Invalid(
            "session_recording_folder must be non-empty".to_string(),
        ));
    }
    if trimmed.contains('\\') {
        return Err(SettingsError::Invalid(
            "session_recording_folder must not contain backslashes".to_string(),
        ));
    }
    if trimmed.starts_with('/') {
        return Err(SettingsError::Invalid(
            "session_recording_folder must be relative".to_string(),
        ));
    }
    let normalized = trimmed.strip_suffix('/').unwrap_or(trimmed);
    for segment in normalized.split('/') {
        if segment.is_empty() || segment == "." || segment == ".." {
            return Err(SettingsError::Invalid(
                "session_recording_folder segment invalid".to_string(),
            ));
        }
    }
    Ok(())
}
