//! Generate error code documentation from the error enum itself.
//!
//! Codes, descriptions, details, and help text are read straight from
//! `EncodingError` through its `code()`, `description()`, `details()`, and
//! `help()` methods, so the document can't drift from the code.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::fmt::Write;

use phonecode::errors::EncodingError;

/// Append one section per error, for any type with `code()`, `description()`,
/// `details()`, `help()`, and `display_detailed()` methods
macro_rules! write_error_docs {
    ($out:expr, $errors:expr) => {
        for error in $errors {
            let _ = writeln!($out, "### {}: {}\n", error.code(), error.description());
            let _ = writeln!($out, "**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                let _ = writeln!($out, "**How to fix:**");
                let _ = writeln!($out, "```\n{help_text}\n```\n");
            }

            let _ = writeln!($out, "**Example error message:**");
            let _ = writeln!($out, "```\n{error}\n```\n");

            let _ = writeln!($out, "**Detailed format:**");
            let _ = writeln!($out, "```\n{}\n```\n", error.display_detailed());

            let _ = writeln!($out, "---\n");
        }
    };
}

/// One representative of every `EncodingError` variant
fn all_encoding_error_variants() -> Vec<EncodingError> {
    vec![
        EncodingError::InvalidLetter { invalid_char: 'ä' },
        EncodingError::InvalidDigit { invalid_char: '/', position: 4 },
    ]
}

// NB: writing to a String never fails, hence the ignored results
fn render_docs() -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# Error Code Reference\n");
    let _ = writeln!(out, "**This document is generated from the source code. Do not edit manually.**\n");

    let _ = writeln!(out, "## Encoding Errors\n");
    let _ = writeln!(out, "Raised only by the strict encoders. Reading word lists and phone number files never fails on content; characters that produce no digit are skipped.\n");
    write_error_docs!(out, all_encoding_error_variants());

    let _ = writeln!(out, "## Error Display Formats\n");
    let _ = writeln!(out, "### Simple Format");
    let _ = writeln!(out, "```\nError: <message>\n```\n");
    let _ = writeln!(out, "### Detailed Format (via `display_detailed()`)");
    let _ = writeln!(out, "```\n<message> (<code>)\n<help text if available>\n```");

    out
}

fn main() {
    print!("{}", render_docs());
}
