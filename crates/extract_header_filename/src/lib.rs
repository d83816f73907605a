// crates/extract_header_filename/src/lib.rs

use once_cell::sync::Lazy;
use regex::Regex;

// Matches `// <name>.<ext> : <description>` with the name restricted to
// alphanumerics, underscore and hyphen. Anchored at the start of the line.
static HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^// ([A-Za-z0-9_-]+\.[A-Za-z0-9_-]+) :").unwrap());

/// Extracts the declared output filename from a block's header line.
///
/// The header line is the first line inside a fenced block and is expected to
/// be a line comment naming the file the block represents, e.g.
/// `// 02-height.cpp : reading a height in metres`.
///
/// Returns `None` when the line is not such a comment. Callers must treat an
/// absent filename as "skip this block" — never as an empty filename.
pub fn extract_header_filename(line: &str) -> Option<String> {
    HEADER_RE.captures(line).map(|caps| caps[1].to_string())
}
