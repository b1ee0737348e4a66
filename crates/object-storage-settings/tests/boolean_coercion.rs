//! Boolean vocabulary tests for settings coercion.
// crates/object-storage-settings/tests/boolean_coercion.rs
// ============================================================================
// Module: Boolean Coercion Tests
// Description: Validate the accepted boolean vocabulary and fail-fast errors.
// Purpose: Ensure toggle parsing never silently defaults.
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and proptest macros are permitted."
)]

use object_storage_settings::EnvSource;
use object_storage_settings::ObjectStorageSettings;
use object_storage_settings::RuntimeMode;
use object_storage_settings::parse_bool;
use proptest::prelude::*;

type TestResult = Result<(), String>;

/// Accepted spellings paired with their parsed value.
const VOCABULARY: &[(&str, bool)] =
    &[("true", true), ("yes", true), ("1", true), ("false", false), ("no", false), ("0", false)];

#[test]
fn vocabulary_parses_to_expected_values() -> TestResult {
    for (word, expected) in VOCABULARY {
        let parsed =
            parse_bool("OBJECT_STORAGE_ENABLED", word).map_err(|err| err.to_string())?;
        if parsed != *expected {
            return Err(format!("{word} should parse to {expected}"));
        }
    }
    Ok(())
}

#[test]
fn parsing_ignores_surrounding_whitespace() -> TestResult {
    let parsed =
        parse_bool("OBJECT_STORAGE_ENABLED", "  true\t").map_err(|err| err.to_string())?;
    if !parsed {
        return Err("whitespace-wrapped true should parse".to_string());
    }
    Ok(())
}

#[test]
fn unrecognized_value_names_the_variable_and_value() -> TestResult {
    match parse_bool("OBJECT_STORAGE_ENABLED", "maybe") {
        Err(error) => {
            let message = error.to_string();
            if !message.contains("OBJECT_STORAGE_ENABLED") || !message.contains("maybe") {
                return Err(format!("error should name variable and value: {message}"));
            }
            Ok(())
        }
        Ok(_) => Err("unrecognized boolean should fail".to_string()),
    }
}

#[test]
fn empty_string_is_rejected() -> TestResult {
    if parse_bool("OBJECT_STORAGE_ENABLED", "").is_ok() {
        return Err("empty boolean string should fail".to_string());
    }
    Ok(())
}

#[test]
fn unrecognized_enabled_value_fails_resolution() -> TestResult {
    let env = EnvSource::from_pairs(&[("OBJECT_STORAGE_ENABLED", "maybe")]);
    if ObjectStorageSettings::resolve(&env, RuntimeMode::new(true, false)).is_ok() {
        return Err("resolution should fail on an unrecognized toggle".to_string());
    }
    Ok(())
}

/// Applies an uppercase mask to a vocabulary word.
fn mixed_case(word: &str, mask: &[bool]) -> String {
    word.chars()
        .enumerate()
        .map(|(index, ch)| {
            if mask.get(index).copied().unwrap_or(false) {
                ch.to_ascii_uppercase()
            } else {
                ch
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn accepted_words_parse_under_any_casing(
        index in 0usize .. VOCABULARY.len(),
        mask in prop::collection::vec(any::<bool>(), 0 .. 8),
    ) {
        let (word, expected) = VOCABULARY[index];
        let value = mixed_case(word, &mask);
        let parsed = parse_bool("OBJECT_STORAGE_ENABLED", &value);
        prop_assert_eq!(parsed.ok(), Some(expected));
    }

    #[test]
    fn values_outside_the_vocabulary_fail(raw in "\\PC*") {
        let normalized = raw.trim().to_ascii_lowercase();
        prop_assume!(
            !matches!(normalized.as_str(), "true" | "yes" | "1" | "false" | "no" | "0")
        );
        prop_assert!(parse_bool("OBJECT_STORAGE_ENABLED", &raw).is_err());
    }
}
