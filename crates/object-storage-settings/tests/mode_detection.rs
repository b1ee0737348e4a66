//! Runtime mode resolution tests.
// crates/object-storage-settings/tests/mode_detection.rs
// ============================================================================
// Module: Mode Detection Tests
// Description: Validate DEBUG/TEST flag resolution and dev-like logic.
// Purpose: Ensure mode flags parse strictly and default to false.
// ============================================================================

use object_storage_settings::EnvSource;
use object_storage_settings::RuntimeMode;

type TestResult = Result<(), String>;

#[test]
fn absent_flags_default_to_false() -> TestResult {
    let mode =
        RuntimeMode::resolve(&EnvSource::from_pairs(&[])).map_err(|err| err.to_string())?;
    if mode != RuntimeMode::new(false, false) {
        return Err("absent flags should default to false".to_string());
    }
    Ok(())
}

#[test]
fn flags_parse_through_the_boolean_vocabulary() -> TestResult {
    let mode = RuntimeMode::resolve(&EnvSource::from_pairs(&[("DEBUG", "1"), ("TEST", "no")]))
        .map_err(|err| err.to_string())?;
    if mode != RuntimeMode::new(true, false) {
        return Err("DEBUG=1 TEST=no should resolve to debug-only".to_string());
    }
    Ok(())
}

#[test]
fn test_flag_alone_is_dev_like() -> TestResult {
    let mode = RuntimeMode::resolve(&EnvSource::from_pairs(&[("TEST", "true")]))
        .map_err(|err| err.to_string())?;
    if !mode.is_dev_like() || mode.debug {
        return Err("TEST=true should be dev-like without debug".to_string());
    }
    Ok(())
}

#[test]
fn unrecognized_flag_value_is_an_error() -> TestResult {
    match RuntimeMode::resolve(&EnvSource::from_pairs(&[("DEBUG", "maybe")])) {
        Err(error) => {
            let message = error.to_string();
            if !message.contains("DEBUG") {
                return Err(format!("error should name the flag: {message}"));
            }
            Ok(())
        }
        Ok(_) => Err("unrecognized DEBUG value should fail".to_string()),
    }
}

#[test]
fn dev_like_covers_either_flag() -> TestResult {
    if RuntimeMode::new(false, false).is_dev_like() {
        return Err("neither flag should not be dev-like".to_string());
    }
    for (debug, test) in [(true, false), (false, true), (true, true)] {
        if !RuntimeMode::new(debug, test).is_dev_like() {
            return Err(format!("debug={debug} test={test} should be dev-like"));
        }
    }
    Ok(())
}
