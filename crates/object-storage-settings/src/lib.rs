// crates/object-storage-settings/src/lib.rs
// ============================================================================
// Module: Object Storage Settings Library
// Description: Environment-derived object-storage settings and artifacts.
// Purpose: Single source of truth for OBJECT_STORAGE_* semantics.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! `object-storage-settings` resolves object-storage connection settings
//! (endpoint, credentials, bucket, session recording folder, enabled flag)
//! from environment variables. Debug and test runs get permissive local
//! defaults; production-like runs get inert empty values and a disabled
//! toggle. Resolution is deterministic and fail-fast: unrecognized boolean
//! spellings and non-UTF-8 values are configuration errors, never silent
//! fallbacks. The crate supplies configuration only; the object-storage
//! client that consumes it lives elsewhere.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod boolean;
pub mod docs;
pub mod env;
pub mod examples;
pub mod mode;
pub mod object_storage;
pub mod schema;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use boolean::parse_bool;
pub use docs::DocsError;
pub use docs::settings_docs_markdown;
pub use docs::verify_settings_docs;
pub use docs::write_settings_docs;
pub use env::EnvSource;
pub use env::SettingsError;
pub use examples::settings_env_example;
pub use mode::RuntimeMode;
pub use object_storage::*;
pub use schema::settings_schema;
