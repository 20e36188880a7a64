// SPDX-FileCopyrightText: The release-checksums authors
// SPDX-License-Identifier: MPL-2.0

//! Repositories that publish releases

use std::{fmt, str::FromStr, sync::LazyLock};

use derive_more::{Display, Error};
use serde::Serialize;
use url::Url;

/// Page size of the releases listing.
pub const RELEASES_PER_PAGE: usize = 100;

/// Maximum number of pages a paginator should request per source.
pub const MAX_RELEASE_PAGES: usize = 10;

static API_BASE_URL: LazyLock<Url> =
    LazyLock::new(|| "https://api.github.com/".parse().unwrap());

static WEB_BASE_URL: LazyLock<Url> = LazyLock::new(|| "https://github.com/".parse().unwrap());

/// Release channel of a source.
#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Regular releases
    #[default]
    #[display("stable")]
    Stable,

    /// Beta releases
    #[display("beta")]
    Beta,
}

impl FromStr for Channel {
    type Err = SourceParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "stable" => Ok(Self::Stable),
            "beta" => Ok(Self::Beta),
            _ => Err(SourceParseError::UnknownChannel(input.to_owned())),
        }
    }
}

/// A repository that publishes releases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseSource {
    /// The repository owner
    pub owner: String,

    /// The repository name
    pub repo: String,

    /// The maintainer shown next to the releases
    pub label: String,

    /// The release channel
    pub channel: Channel,
}

/// The built-in sources as `(owner, repo, label, channel)`.
pub const DEFAULT_SOURCES: [(&str, &str, &str, Channel); 2] = [
    ("Pixel-Props", "build.prop", "0x11DFE", Channel::Stable),
    ("Elcapitanoe", "Build-Prop-BETA", "Elcapitanoe", Channel::Beta),
];

/// Create the built-in sources.
#[must_use]
pub fn default_sources() -> Vec<ReleaseSource> {
    DEFAULT_SOURCES
        .iter()
        .map(|&(owner, repo, label, channel)| ReleaseSource {
            owner: owner.to_owned(),
            repo: repo.to_owned(),
            label: label.to_owned(),
            channel,
        })
        .collect()
}

impl ReleaseSource {
    /// URL of a single page of the releases listing.
    ///
    /// Pages are numbered from 1.
    #[must_use]
    pub fn releases_url(&self, page: usize) -> Url {
        let mut url = API_BASE_URL.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["repos", self.owner.as_str(), self.repo.as_str(), "releases"]);
        }
        url.query_pairs_mut()
            .append_pair("per_page", &RELEASES_PER_PAGE.to_string())
            .append_pair("page", &page.to_string());
        url
    }

    /// URL of the maintainer's profile.
    #[must_use]
    pub fn maintainer_url(&self) -> Url {
        let mut url = WEB_BASE_URL.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&self.label);
        }
        url
    }
}

impl fmt::Display for ReleaseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            owner,
            repo,
            label,
            channel,
        } = self;
        write!(f, "{owner}/{repo}={label}@{channel}")
    }
}

/// Invalid source specification.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum SourceParseError {
    /// No `/` between owner and repository.
    #[display("missing repository in '{_0}', expected 'owner/repo'")]
    MissingRepo(#[error(not(source))] String),

    /// Empty owner, repository or label.
    #[display("empty component in '{_0}'")]
    EmptyComponent(#[error(not(source))] String),

    /// Neither `stable` nor `beta`.
    #[display("unknown release channel '{_0}'")]
    UnknownChannel(#[error(not(source))] String),
}

impl FromStr for ReleaseSource {
    type Err = SourceParseError;

    /// Parse `owner/repo[=label][@channel]`.
    ///
    /// The label defaults to the owner and the channel to [`Channel::Stable`].
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let spec = input.trim();
        let (spec, channel) = match spec.rsplit_once('@') {
            Some((spec, channel)) => (spec, channel.parse()?),
            None => (spec, Channel::default()),
        };
        let (spec, label) = match spec.split_once('=') {
            Some((spec, label)) => (spec, Some(label.trim())),
            None => (spec, None),
        };
        let Some((owner, repo)) = spec.split_once('/') else {
            return Err(SourceParseError::MissingRepo(input.to_owned()));
        };
        let owner = owner.trim();
        let repo = repo.trim();
        let label = label.unwrap_or(owner);
        if [owner, repo, label].iter().any(|component| component.is_empty()) {
            return Err(SourceParseError::EmptyComponent(input.to_owned()));
        }
        Ok(Self {
            owner: owner.to_owned(),
            repo: repo.to_owned(),
            label: label.to_owned(),
            channel,
        })
    }
}

/// Check a `Link` response header for a next page.
#[must_use]
pub fn has_next_page(link_header: &str) -> bool {
    link_header.contains(r#"rel="next""#)
}
