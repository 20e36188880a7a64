// SPDX-FileCopyrightText: The release-checksums authors
// SPDX-License-Identifier: MPL-2.0

#![cfg_attr(not(test), deny(clippy::panic_in_result_fn))]
#![cfg_attr(not(debug_assertions), deny(clippy::used_underscore_binding))]

//! Extracts per-device file names and SHA-256 checksums from the
//! free-form notes of a published release.
//!
//! Refer to [`docs`] for more information about the recognized formats.

pub mod checksum;
pub mod device;
pub mod docs;
pub mod extract;
pub mod header;
pub mod lookup;
pub mod release;

pub use self::{
    checksum::CHECKSUM_NOT_FOUND,
    device::UNKNOWN_DEVICE,
    extract::FileEntry,
    lookup::{ChecksumLookup, FileInfo},
};

/// Parse the notes of a single release.
///
/// Never fails. File names that are not attributed to a device and
/// checksums that are not found are represented by the placeholders
/// [`UNKNOWN_DEVICE`] and [`CHECKSUM_NOT_FOUND`] respectively.
///
/// The resulting lookup must not be merged with the lookups of other
/// releases.
#[must_use]
pub fn parse_release_body(body: &str) -> ChecksumLookup {
    let headers = header::find_headers(body);
    if headers.is_empty() {
        tracing::debug!("no device headers found");
    } else {
        tracing::debug!(count = headers.len(), "found device headers");
    }
    let lookup: ChecksumLookup = header::segment(body, &headers)
        .iter()
        .flat_map(extract::extract_entries)
        .collect();
    tracing::trace!(keys = lookup.len(), "parsed release body");
    lookup
}

/// Parse the notes of a single release that might be missing.
///
/// A missing body is treated like an empty one.
#[must_use]
pub fn parse_optional_release_body(body: Option<&str>) -> ChecksumLookup {
    parse_release_body(body.unwrap_or_default())
}
