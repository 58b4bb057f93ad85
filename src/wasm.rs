use std::time::Duration;

use crate::dictionary::Dictionary;
use crate::digits::{FilterMode, PhoneNumber};
use crate::errors::EncodingError;
use crate::log::init_logger;
use crate::translator::{translate, TimeBudget};
use wasm_bindgen::prelude::*;

use serde_wasm_bindgen::to_value;

// Per-number cap for browser callers, so one pathological number can't freeze the page
const WASM_TIME_BUDGET: Duration = Duration::from_secs(10);

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "E002", "WASM001")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<Box<EncodingError>> for WasmError {
    fn from(e: Box<EncodingError>) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(ToString::to_string),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }

        js_sys::Error::new(&msg).into()
    }
}

fn string_array_error(param: &str, e: &serde_wasm_bindgen::Error) -> WasmError {
    WasmError {
        code: "WASM001".to_string(),
        message: format!("{param} must be string[]: {e}"),
        description: "Invalid list format".to_string(),
        details: format!("The {param} parameter must be a JavaScript array of strings."),
        help: Some("Pass a plain string array, e.g., ['an', 'blau', 'Bo\"'].".to_string()),
    }
}

fn serialization_error(what: &str, e: &serde_wasm_bindgen::Error) -> WasmError {
    WasmError {
        code: "WASM002".to_string(),
        message: format!("serialization failed: {e}"),
        description: format!("Failed to serialize {what}"),
        details: format!("The {what} could not be converted to JavaScript format."),
        help: Some("This is an internal error. Please report this issue.".to_string()),
    }
}

/// Initialize phonecode logging with the specified debug setting.
///
/// # Arguments
/// * `debug_enabled` - If true, use Debug log level; if false, use Info log level
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);

    log::info!("WASM module initialized");
    if !debug_enabled {
        log::info!("Debug logging disabled");
    }
}

#[derive(serde::Serialize)]
struct WasmTranslation {
    number: String,
    segments: Vec<String>,
}

#[derive(serde::Serialize)]
struct WasmTranslateResult {
    translations: Vec<WasmTranslation>,
    /// Numbers whose search hit the time budget before finishing
    timed_out: Vec<String>,
}

/// JS entry: (words: string[], numbers: string[], max_per_number: number)
/// returns `{ translations: {number, segments}[], timed_out: string[] }`.
///
/// Numbers are taken as typed, letters included (`1-800-FLOWERS`), and every
/// number gets at most `max_per_number` translations (0 means no cap).
#[wasm_bindgen]
pub fn translate_numbers_wasm(
    words: JsValue,
    numbers: JsValue,
    max_per_number: usize,
) -> Result<JsValue, JsValue> {
    let words: Vec<String> =
        serde_wasm_bindgen::from_value(words).map_err(|e| string_array_error("words", &e))?;
    let numbers: Vec<String> =
        serde_wasm_bindgen::from_value(numbers).map_err(|e| string_array_error("numbers", &e))?;

    let dict = Dictionary::build(words);
    let cap = if max_per_number == 0 { usize::MAX } else { max_per_number };

    let mut result = WasmTranslateResult { translations: Vec::new(), timed_out: Vec::new() };
    for raw in numbers.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        let number = PhoneNumber::new(raw, FilterMode::MapLetters);
        let mut translations =
            translate(&number.digits, &dict).with_budget(TimeBudget::new(WASM_TIME_BUDGET));

        result.translations.extend(translations.by_ref().take(cap).map(|solution| WasmTranslation {
            number: number.raw.clone(),
            segments: solution.iter().map(ToString::to_string).collect(),
        }));
        if translations.timed_out() {
            log::warn!("{raw}: time budget expired");
            result.timed_out.push(number.raw.clone());
        }
    }

    to_value(&result).map_err(|e| serialization_error("translation result", &e).into())
}

/// Check that `number` is made of decimal digits only, reporting the first
/// offending character the way the CLI would.
///
/// # Errors
/// Returns a `JsValue` error carrying the `E002` details.
#[wasm_bindgen]
pub fn validate_digits(number: &str) -> Result<String, JsValue> {
    let digits: crate::digits::DigitString = number.parse().map_err(WasmError::from)?;
    Ok(digits.to_string())
}

/// Parse a newline-separated word list string.
///
/// Lines are trimmed and blank lines dropped; the surviving words come back
/// as a `JsValue` array of strings, in file order.
///
/// # Errors
/// Returns a `JsValue` error if the words can't be serialized.
#[wasm_bindgen]
pub fn parse_word_list(text: &str) -> Result<JsValue, JsValue> {
    let words: Vec<&str> = text.lines().map(str::trim).filter(|line| !line.is_empty()).collect();
    let dict = Dictionary::build(words.iter().copied());
    log::debug!("parsed {} words ({} encodings)", dict.num_words(), dict.num_encodings());

    to_value(&words).map_err(|e| serialization_error("word list", &e).into())
}

/// Generate a debug report for troubleshooting.
///
/// Users can copy/paste it when reporting issues. It includes the error message,
/// the size of the inputs, and environment information.
#[wasm_bindgen]
pub fn get_debug_info(
    error_message: &str,
    word_count: usize,
    number_count: usize,
    max_per_number: usize,
) -> String {
    use std::fmt::Write;
    let mut report = String::new();

    // NB: writing to a String never fails
    let _ = writeln!(&mut report, "=== PHONECODE DEBUG REPORT ===");
    let _ = writeln!(&mut report, "Version: {} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"));
    let _ = writeln!(&mut report, "Generated: {}", js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_else(|| "unknown".to_string()));
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Error");
    let _ = writeln!(&mut report, "{error_message}");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Input");
    let _ = writeln!(&mut report, "Words: {word_count}");
    let _ = writeln!(&mut report, "Numbers: {number_count}");
    let _ = writeln!(&mut report, "Max Per Number: {max_per_number}");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Environment");
    if let Some(window) = web_sys::window() {
        if let Ok(user_agent) = window.navigator().user_agent() {
            let _ = writeln!(&mut report, "User Agent: {user_agent}");
        }
        let _ = writeln!(&mut report, "Location: {}", window.location().href().unwrap_or_else(|_| "unknown".to_string()));
    }
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "=== END DEBUG REPORT ===");

    report
}
