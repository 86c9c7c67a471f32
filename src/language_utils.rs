use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for the supported bilingual corpus languages
///
/// The aligner works with a fixed set of ISO 639-1 codes. This module
/// validates user-supplied codes against that set and resolves display
/// names through the isolang registry.
/// Language codes accepted for either side of an alignment run
pub const SUPPORTED_LANGUAGE_CODES: [&str; 6] = ["fr", "en", "es", "de", "it", "pt"];

/// Check whether a code belongs to the supported set
pub fn is_supported(code: &str) -> bool {
    let normalized = code.trim().to_lowercase();
    SUPPORTED_LANGUAGE_CODES.contains(&normalized.as_str())
}

/// Validate a language code and return it in normalized (lowercase) form
pub fn validate_language_code(code: &str) -> Result<String> {
    let normalized = code.trim().to_lowercase();

    if SUPPORTED_LANGUAGE_CODES.contains(&normalized.as_str()) {
        return Ok(normalized);
    }

    Err(anyhow!(
        "Unsupported language code: '{}' (supported: {})",
        code,
        SUPPORTED_LANGUAGE_CODES.join(", ")
    ))
}

/// Get the English language name for a supported code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized = validate_language_code(code)?;
    let lang = Language::from_639_1(&normalized)
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", normalized))?;

    Ok(lang.to_name().to_string())
}

/// Check if two language codes refer to the same supported language
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    match (validate_language_code(code1), validate_language_code(code2)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
