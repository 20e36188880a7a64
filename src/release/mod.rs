// SPDX-FileCopyrightText: The release-checksums authors
// SPDX-License-Identifier: MPL-2.0

//! Published releases and their downloadable assets
//!
//! The types in this module deserialize the JSON documents of a releases
//! listing API. Fetching these documents is up to the caller.

use std::{borrow::Cow, cmp::Reverse};

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};
use url::Url;

use crate::{ChecksumLookup, parse_optional_release_body};

mod source;

pub use self::source::{
    Channel, DEFAULT_SOURCES, MAX_RELEASE_PAGES, RELEASES_PER_PAGE, ReleaseSource,
    SourceParseError, default_sources, has_next_page,
};

/// Title of releases without both a tag and a name.
pub const UNTITLED: &str = "Untitled";

/// A downloadable file of a release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Asset {
    /// The file name
    #[serde(default)]
    pub name: Option<String>,

    /// Number of downloads
    #[serde(default)]
    pub download_count: u64,

    /// Where to download the file from
    #[serde(default)]
    pub browser_download_url: Option<Url>,
}

impl Asset {
    /// The file name of the asset.
    ///
    /// Falls back to the last path segment of the download URL
    /// if the name is missing.
    #[must_use]
    pub fn file_name(&self) -> Cow<'_, str> {
        if let Some(name) = self.name.as_deref().filter(|name| !name.is_empty()) {
            return Cow::Borrowed(name);
        }
        self.browser_download_url
            .as_ref()
            .and_then(|url| url.path_segments()?.next_back())
            .map(|segment| percent_decode_str(segment).decode_utf8_lossy())
            .unwrap_or_default()
    }
}

/// A published release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Release {
    /// The tag
    #[serde(default)]
    pub tag_name: Option<String>,

    /// The display name
    #[serde(default)]
    pub name: Option<String>,

    /// The free-form release notes
    #[serde(default)]
    pub body: Option<String>,

    /// Unpublished draft
    #[serde(default)]
    pub draft: bool,

    /// Marked as pre-release
    #[serde(default)]
    pub prerelease: bool,

    /// Publication time
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub published_at: Option<OffsetDateTime>,

    /// Creation time
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,

    /// The downloadable files
    #[serde(default)]
    pub assets: Vec<Asset>,
}

/// An asset annotated with the info from the release notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedAsset {
    /// The file name
    pub file_name: String,

    /// Number of downloads
    pub download_count: u64,

    /// Where to download the file from
    pub download_url: Option<Url>,

    /// The device name or [`crate::UNKNOWN_DEVICE`]
    pub device_name: String,

    /// The SHA-256 hex digest or [`crate::CHECKSUM_NOT_FOUND`]
    pub checksum: String,
}

impl Release {
    /// The tag name, the display name or [`UNTITLED`].
    #[must_use]
    pub fn title(&self) -> &str {
        [self.tag_name.as_deref(), self.name.as_deref()]
            .into_iter()
            .flatten()
            .find(|title| !title.is_empty())
            .unwrap_or(UNTITLED)
    }

    /// Publication time with a fallback to the creation time.
    #[must_use]
    pub fn published(&self) -> Option<OffsetDateTime> {
        self.published_at.or(self.created_at)
    }

    /// Sum of all asset downloads.
    #[must_use]
    pub fn total_downloads(&self) -> u64 {
        self.assets.iter().map(|asset| asset.download_count).sum()
    }

    /// Parse the release notes.
    #[must_use]
    pub fn checksum_lookup(&self) -> ChecksumLookup {
        parse_optional_release_body(self.body.as_deref())
    }

    /// Annotate all assets in order.
    #[must_use]
    pub fn annotate_assets(&self) -> Vec<AnnotatedAsset> {
        let lookup = self.checksum_lookup();
        self.assets
            .iter()
            .map(|asset| {
                let file_name = asset.file_name();
                let info = lookup.resolve(&file_name).into_owned();
                AnnotatedAsset {
                    file_name: file_name.into_owned(),
                    download_count: asset.download_count,
                    download_url: asset.browser_download_url.clone(),
                    device_name: info.device_name,
                    checksum: info.checksum,
                }
            })
            .collect()
    }
}

/// Sort releases by publication time, newest first.
///
/// Releases without any timestamp come last.
pub fn sort_newest_first(releases: &mut [&Release]) {
    releases.sort_by_key(|release| Reverse(release.published()));
}

/// Select the most recently published release, ignoring drafts.
#[must_use]
pub fn latest_release(releases: &[Release]) -> Option<&Release> {
    releases
        .iter()
        .filter(|release| !release.draft)
        .min_by_key(|release| Reverse(release.published()))
}

/// The latest release of a source.
#[derive(Debug, Clone, Copy)]
pub struct LatestRelease<'a> {
    /// Where the release has been published
    pub source: &'a ReleaseSource,

    /// The release
    pub release: &'a Release,
}

/// Select the latest release of each source, newest first.
///
/// Sources without any published release are omitted.
#[must_use]
pub fn latest_per_source<'a>(
    releases_per_source: impl IntoIterator<Item = (&'a ReleaseSource, &'a [Release])>,
) -> Vec<LatestRelease<'a>> {
    let mut latest: Vec<_> = releases_per_source
        .into_iter()
        .filter_map(|(source, releases)| {
            let release = latest_release(releases)?;
            Some(LatestRelease { source, release })
        })
        .collect();
    latest.sort_by_key(|latest| Reverse(latest.release.published()));
    latest
}

/// Downloads of the latest release of a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceDownloads {
    /// The maintainer label
    pub label: String,

    /// The repository owner
    pub owner: String,

    /// The repository name
    pub repo: String,

    /// Sum of all asset downloads
    pub total: u64,
}

/// Download counts of the latest releases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadsSummary {
    /// Per source, newest release first
    pub per_repo: Vec<SourceDownloads>,

    /// Sum over all sources
    pub total: u64,
}

impl DownloadsSummary {
    /// Summarize the output of [`latest_per_source()`].
    #[must_use]
    pub fn from_latest(latest: &[LatestRelease<'_>]) -> Self {
        let per_repo: Vec<_> = latest
            .iter()
            .map(|LatestRelease { source, release }| SourceDownloads {
                label: source.label.clone(),
                owner: source.owner.clone(),
                repo: source.repo.clone(),
                total: release.total_downloads(),
            })
            .collect();
        let total = per_repo.iter().map(|downloads| downloads.total).sum();
        Self { per_repo, total }
    }
}

const RELEASE_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[day] [month repr:long] [year]");

/// Format a publication time as a date, e.g. `05 March 2025`.
///
/// # Errors
///
/// Returns an error if formatting of the given `published` time fails.
pub fn format_release_date(published: OffsetDateTime) -> Result<String, time::error::Format> {
    published.format(RELEASE_DATE_FORMAT)
}
