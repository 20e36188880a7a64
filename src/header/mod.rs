// SPDX-FileCopyrightText: The release-checksums authors
// SPDX-License-Identifier: MPL-2.0

//! Device headers and per-device chunks

use std::sync::LazyLock;

use itertools::Itertools as _;
use regex::Regex;

use crate::device::{UNKNOWN_DEVICE, sanitize_name};

// A line that ends with a parenthesized codename, e.g. `Pixel 8 (shiba)`.
const HEADER_REGEX_STR: &str = r"(?m)^(.+?)\s*\(([^)]+)\)\s*$";

static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| HEADER_REGEX_STR.parse().unwrap());

/// A device header found in a release body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceHeader<'a> {
    /// Byte offset of the header line in the release body
    pub offset: usize,

    /// The label in front of the codename, unsanitized
    pub raw_label: &'a str,

    /// The parenthesized codename
    pub codename: &'a str,
}

impl DeviceHeader<'_> {
    /// The sanitized device name.
    #[must_use]
    pub fn device_name(&self) -> String {
        sanitize_name(Some(self.raw_label))
    }
}

/// A contiguous part of a release body attributed to a single device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// The header that starts the chunk
    ///
    /// `None` for the implicit chunk that covers a whole body
    /// without any headers.
    pub header: Option<DeviceHeader<'a>>,

    /// The text, including the header line
    pub text: &'a str,
}

impl Chunk<'_> {
    /// The device name that all files in this chunk are attributed to.
    #[must_use]
    pub fn device_name(&self) -> String {
        self.header
            .as_ref()
            .map_or_else(|| UNKNOWN_DEVICE.to_owned(), DeviceHeader::device_name)
    }
}

/// Find all device headers in document order.
#[must_use]
pub fn find_headers(body: &str) -> Vec<DeviceHeader<'_>> {
    HEADER_REGEX
        .captures_iter(body)
        .filter_map(|captures| {
            let line = captures.get(0)?;
            let raw_label = captures.get(1)?.as_str();
            let codename = captures.get(2)?.as_str();
            Some(DeviceHeader {
                offset: line.start(),
                raw_label,
                codename,
            })
        })
        .collect()
}

/// Split a release body into per-device chunks.
///
/// Each chunk extends from its header up to the next header or the
/// end of the body. Text in front of the first header is not part of
/// any chunk. Without headers the whole body becomes a single chunk
/// with no header.
#[must_use]
pub fn segment<'a>(body: &'a str, headers: &[DeviceHeader<'a>]) -> Vec<Chunk<'a>> {
    if headers.is_empty() {
        return vec![Chunk { header: None, text: body }];
    }
    headers
        .iter()
        .map(Some)
        .chain(std::iter::once(None))
        .tuple_windows()
        .filter_map(|(header, next)| {
            let header = header?;
            let end = next.map_or(body.len(), |next| next.offset);
            Some(Chunk {
                header: Some(*header),
                text: &body[header.offset..end],
            })
        })
        .collect()
}

#[cfg(test)]
mod tests;
