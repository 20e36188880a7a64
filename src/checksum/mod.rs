// SPDX-FileCopyrightText: The release-checksums authors
// SPDX-License-Identifier: MPL-2.0

//! Checksums near file names

use std::sync::LazyLock;

use regex::Regex;

/// Placeholder for files without a checksum in the release notes.
pub const CHECKSUM_NOT_FOUND: &str = "Checksum not found";

/// Number of lines before and after a file name that are searched.
pub const WINDOW_RADIUS: usize = 4;

/// Number of hex digits in a SHA-256 digest.
pub const SHA256_HEX_LEN: usize = 64;

const SHA256_HEX_REGEX_STR: &str = r"[A-Fa-f0-9]{64}";

// Also covers `sha256`, `sha-256` and `SHA256SUM`.
const KEYWORD_REGEX_STR: &str = r"(?i)sha|file\s*hash";

static SHA256_HEX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| SHA256_HEX_REGEX_STR.parse().unwrap());

static KEYWORD_REGEX: LazyLock<Regex> = LazyLock::new(|| KEYWORD_REGEX_STR.parse().unwrap());

/// A single search pass over the lines of a window.
type Pass = for<'a> fn(&[&'a str]) -> Option<&'a str>;

/// Search passes in order of preference.
///
/// Hashes on lines with a checksum keyword are preferred over bare
/// hashes, e.g. commit ids.
const PASSES: [Pass; 2] = [find_labeled_hex, find_any_hex];

fn find_hex(line: &str) -> Option<&str> {
    SHA256_HEX_REGEX.find(line).map(|m| m.as_str())
}

fn find_labeled_hex<'a>(window: &[&'a str]) -> Option<&'a str> {
    window
        .iter()
        .filter(|&&line| KEYWORD_REGEX.is_match(line))
        .find_map(|&line| find_hex(line))
}

fn find_any_hex<'a>(window: &[&'a str]) -> Option<&'a str> {
    window.iter().find_map(|&line| find_hex(line))
}

/// The lines within [`WINDOW_RADIUS`] of `line_index`, clamped to the bounds.
#[must_use]
pub fn window<'a, 'l>(lines: &'l [&'a str], line_index: usize) -> &'l [&'a str] {
    let start = line_index.saturating_sub(WINDOW_RADIUS);
    let end = line_index
        .saturating_add(WINDOW_RADIUS)
        .saturating_add(1)
        .min(lines.len());
    lines.get(start..end).unwrap_or_default()
}

/// Find the most plausible SHA-256 hex digest around a line.
///
/// `lines` are the raw, untrimmed lines of a chunk and `line_index`
/// is the line on which a file name has been found.
///
/// Returns `None` if no 64-digit hex string exists within the window.
/// Several files that share a window may end up with the same checksum.
#[must_use]
pub fn locate<'a>(lines: &[&'a str], line_index: usize) -> Option<&'a str> {
    let lines = window(lines, line_index);
    PASSES.iter().find_map(|pass| pass(lines))
}

#[cfg(test)]
mod tests;
