//! Response normalization for model output.
//!
//! Models are instructed to return a bare SQL statement, but they routinely
//! wrap it in markdown fences anyway. This module deterministically recovers
//! an executable statement from whatever text came back.

use std::sync::OnceLock;

use regex::Regex;

/// Matches an opening fence: three backticks, an optional `sql` language tag,
/// and any trailing whitespace. Applied everywhere in the string, not just at
/// the start.
fn opening_fence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)```(?:sql)?\s*").expect("static pattern compiles"))
}

/// Matches a closing fence: optional leading whitespace followed by three
/// backticks.
fn closing_fence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*```").expect("static pattern compiles"))
}

/// Normalizes raw model output into a single executable SQL statement.
///
/// Strips all fence markers (case-insensitive, wherever they occur), trims
/// surrounding whitespace, and guarantees the result ends with exactly one
/// semicolon. Empty or whitespace-only input yields an empty string with no
/// semicolon appended.
///
/// The function is pure and idempotent: normalizing an already-normalized
/// statement returns it unchanged.
pub fn normalize_sql(raw: &str) -> String {
    let without_open = opening_fence().replace_all(raw, "");
    let without_close = closing_fence().replace_all(&without_open, "");
    let trimmed = without_close.trim();

    if trimmed.is_empty() {
        return String::new();
    }

    if trimmed.ends_with(';') {
        trimmed.to_string()
    } else {
        format!("{trimmed};")
    }
}
