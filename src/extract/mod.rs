// SPDX-FileCopyrightText: The release-checksums authors
// SPDX-License-Identifier: MPL-2.0

//! File names and their checksums within a chunk

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

use crate::{
    checksum::{self, CHECKSUM_NOT_FOUND},
    header::Chunk,
};

// `File name: x`, `Filename - x`, `FILE: x`, ...
const FILE_LABEL_REGEX_STR: &str = r"(?i)(File name|Filename|File):?[\s\x{00A0}\-]*([^\r\n]+)";

const FILE_PATTERN_REGEX_STR: &str = r"(?i)[A-Za-z0-9_.\-]+\.(?:zip|img|bin|tar|gz|7z|apk)";

static FILE_LABEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| FILE_LABEL_REGEX_STR.parse().unwrap());

static FILE_PATTERN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| FILE_PATTERN_REGEX_STR.parse().unwrap());

/// A file name found in a chunk, not yet attributed to a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// The file name
    pub file_name: &'a str,

    /// Index of the raw line that mentions the file
    pub line_index: usize,
}

/// A strategy for finding file names in the text and raw lines of a chunk.
type Strategy = for<'a> fn(&'a str, &[&'a str]) -> Vec<Candidate<'a>>;

/// Strategies in order of preference.
///
/// The first strategy that finds anything wins. Explicitly labeled file
/// names suppress the pattern matching of bare file names entirely.
const STRATEGIES: [Strategy; 2] = [find_labeled, find_by_pattern];

fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'' | '`')
}

/// Find file names on labeled lines.
///
/// Labels without a file name, e.g. `File: ""`, are ignored and do not
/// count as a result of this strategy. A chunk with only empty labels
/// falls back to pattern matching.
fn find_labeled<'a>(_text: &'a str, lines: &[&'a str]) -> Vec<Candidate<'a>> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(line_index, &line)| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            let captures = FILE_LABEL_REGEX.captures(line)?;
            let file_name = captures
                .get(2)?
                .as_str()
                .trim()
                .trim_matches(is_quote)
                .trim();
            if file_name.is_empty() {
                return None;
            }
            Some(Candidate {
                file_name,
                line_index,
            })
        })
        .collect()
}

fn find_by_pattern<'a>(text: &'a str, _lines: &[&'a str]) -> Vec<Candidate<'a>> {
    let mut seen = HashSet::new();
    FILE_PATTERN_REGEX
        .find_iter(text)
        .filter(|m| seen.insert(m.as_str()))
        .map(|m| Candidate {
            file_name: m.as_str(),
            line_index: line_index_at(text, m.start()),
        })
        .collect()
}

/// Index of the line that contains the byte at `offset`.
#[must_use]
pub fn line_index_at(text: &str, offset: usize) -> usize {
    text.as_bytes()[..offset.min(text.len())]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
}

/// Find file names in the raw lines of a text.
///
/// Applies the labeled strategy and falls back to matching bare file
/// names with well-known archive and image extensions.
#[must_use]
pub fn find_candidates<'a>(text: &'a str, lines: &[&'a str]) -> Vec<Candidate<'a>> {
    STRATEGIES
        .iter()
        .map(|strategy| strategy(text, lines))
        .find(|candidates| !candidates.is_empty())
        .unwrap_or_default()
}

/// A file attributed to a device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// The sanitized device name
    pub device_name: String,

    /// The file name as written in the release notes
    pub file_name: String,

    /// The SHA-256 hex digest or [`CHECKSUM_NOT_FOUND`]
    pub checksum: String,
}

impl FileEntry {
    /// Check if a checksum has been found.
    #[must_use]
    pub fn has_checksum(&self) -> bool {
        self.checksum != CHECKSUM_NOT_FOUND
    }
}

/// Extract all file entries from a chunk.
#[must_use]
pub fn extract_entries(chunk: &Chunk<'_>) -> Vec<FileEntry> {
    let device_name = chunk.device_name();
    let lines: Vec<&str> = chunk.text.lines().collect();
    find_candidates(chunk.text, &lines)
        .into_iter()
        .map(|Candidate { file_name, line_index }| {
            let checksum = checksum::locate(&lines, line_index).unwrap_or_else(|| {
                tracing::debug!(%file_name, %device_name, "no checksum near file name");
                CHECKSUM_NOT_FOUND
            });
            FileEntry {
                device_name: device_name.clone(),
                file_name: file_name.to_owned(),
                checksum: checksum.to_owned(),
            }
        })
        .collect()
}
