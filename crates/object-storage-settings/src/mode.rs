// crates/object-storage-settings/src/mode.rs
// ============================================================================
// Module: Runtime Mode
// Description: Debug/test mode flags supplied to settings resolution.
// Purpose: Carry process-wide mode state as an explicit value.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The runtime mode is a pair of independent flags: `debug` for local
//! development runs and `test` for automated-test runs. Either flag selects
//! the development-like defaults for endpoint and credentials; only `debug`
//! selects the enabled-by-default toggle. The flags are inputs to settings
//! resolution, constructed directly by the host or resolved from the
//! `DEBUG`/`TEST` environment variables.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::boolean::parse_bool;
use crate::env::EnvSource;
use crate::env::SettingsError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable carrying the debug flag.
const DEBUG_ENV_VAR: &str = "DEBUG";
/// Environment variable carrying the test flag.
const TEST_ENV_VAR: &str = "TEST";

// ============================================================================
// SECTION: Mode Type
// ============================================================================

/// Process-wide runtime mode flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuntimeMode {
    /// Local/development execution with permissive defaults.
    pub debug: bool,
    /// Automated-test execution sharing development-like defaults.
    pub test: bool,
}

impl RuntimeMode {
    /// Creates a mode value from explicit flags.
    #[must_use]
    pub const fn new(debug: bool, test: bool) -> Self {
        Self {
            debug,
            test,
        }
    }

    /// Returns whether development-like defaults apply.
    #[must_use]
    pub const fn is_dev_like(self) -> bool {
        self.debug || self.test
    }

    /// Resolves mode flags from the `DEBUG` and `TEST` environment variables.
    ///
    /// Absent variables default to `false`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when a flag value is not valid UTF-8 or not
    /// a recognized boolean spelling.
    pub fn resolve(env: &EnvSource) -> Result<Self, SettingsError> {
        let debug = resolve_flag(env, DEBUG_ENV_VAR)?;
        let test = resolve_flag(env, TEST_ENV_VAR)?;
        Ok(Self {
            debug,
            test,
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves one boolean mode flag, defaulting to false when absent.
fn resolve_flag(env: &EnvSource, name: &str) -> Result<bool, SettingsError> {
    env.get(name)?.map_or(Ok(false), |raw| parse_bool(name, &raw))
}
