// SPDX-FileCopyrightText: The release-checksums authors
// SPDX-License-Identifier: MPL-2.0

//! Checksum lookup by file name

use std::{borrow::Cow, collections::BTreeMap};

use serde::Serialize;

use crate::{CHECKSUM_NOT_FOUND, UNKNOWN_DEVICE, extract::FileEntry};

/// Device and checksum of a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    /// The device name or [`UNKNOWN_DEVICE`]
    pub device_name: String,

    /// The SHA-256 hex digest or [`CHECKSUM_NOT_FOUND`]
    pub checksum: String,
}

impl FileInfo {
    /// Info for a file that is not mentioned in the release notes.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            device_name: UNKNOWN_DEVICE.to_owned(),
            checksum: CHECKSUM_NOT_FOUND.to_owned(),
        }
    }

    /// Check if a checksum has been found.
    #[must_use]
    pub fn has_checksum(&self) -> bool {
        self.checksum != CHECKSUM_NOT_FOUND
    }
}

impl Default for FileInfo {
    fn default() -> Self {
        Self::unknown()
    }
}

impl From<FileEntry> for FileInfo {
    fn from(from: FileEntry) -> Self {
        let FileEntry {
            device_name,
            file_name: _,
            checksum,
        } = from;
        Self {
            device_name,
            checksum,
        }
    }
}

/// Maps the file names of a single release to their [`FileInfo`].
///
/// Every file is stored twice, with its original and its lower-case name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChecksumLookup {
    entries: BTreeMap<String, FileInfo>,
}

impl ChecksumLookup {
    /// Create an empty lookup.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Insert an entry under both its original and lower-case file name.
    ///
    /// Replaces existing entries for the same keys.
    pub fn insert(&mut self, entry: FileEntry) {
        let lower_case_file_name = entry.file_name.to_lowercase();
        let file_name = entry.file_name.clone();
        let info = FileInfo::from(entry);
        if lower_case_file_name != file_name {
            self.entries.insert(lower_case_file_name, info.clone());
        }
        self.entries.insert(file_name, info);
    }

    /// Number of keys, counting original and lower-case names separately.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no files have been found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all keys and their infos, ordered by key.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &FileInfo)> {
        self.entries
            .iter()
            .map(|(file_name, info)| (file_name.as_str(), info))
    }

    /// Exact lookup by key.
    #[must_use]
    pub fn get(&self, file_name: &str) -> Option<&FileInfo> {
        self.entries.get(file_name)
    }

    /// Find the info for a file name, ignoring case if needed.
    ///
    /// Tries the exact name, then the lower-case name, and finally
    /// compares the lower-case forms of all keys.
    #[must_use]
    pub fn find(&self, file_name: &str) -> Option<&FileInfo> {
        if let Some(info) = self.get(file_name) {
            return Some(info);
        }
        let lower_case_file_name = file_name.to_lowercase();
        if let Some(info) = self.get(&lower_case_file_name) {
            return Some(info);
        }
        self.entries
            .iter()
            .find(|(key, _)| key.to_lowercase() == lower_case_file_name)
            .map(|(_, info)| info)
    }

    /// Resolve the info for a file name.
    ///
    /// Falls back to [`FileInfo::unknown()`] if [`Self::find()`] fails.
    #[must_use]
    pub fn resolve(&self, file_name: &str) -> Cow<'_, FileInfo> {
        self.find(file_name)
            .map_or_else(|| Cow::Owned(FileInfo::unknown()), Cow::Borrowed)
    }
}

impl Extend<FileEntry> for ChecksumLookup {
    fn extend<T: IntoIterator<Item = FileEntry>>(&mut self, iter: T) {
        for entry in iter {
            self.insert(entry);
        }
    }
}

impl FromIterator<FileEntry> for ChecksumLookup {
    fn from_iter<T: IntoIterator<Item = FileEntry>>(iter: T) -> Self {
        let mut lookup = Self::new();
        lookup.extend(iter);
        lookup
    }
}

#[cfg(test)]
mod tests;
