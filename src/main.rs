// SPDX-FileCopyrightText: The release-checksums authors
// SPDX-License-Identifier: MPL-2.0

//! Command-line front end

use std::{
    fs,
    io::{self, Read as _, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use release_checksums::{
    ChecksumLookup, parse_release_body,
    release::{
        AnnotatedAsset, MAX_RELEASE_PAGES, Release, ReleaseSource, default_sources,
        format_release_date, latest_release, sort_newest_first,
    },
};

#[derive(Debug, Parser)]
#[command(name = "release-checksums", version)]
#[command(about = "Extract device names and SHA-256 checksums from release notes")]
struct Args {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, env = "RELEASE_CHECKSUMS_FORMAT")]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the checksum lookup of a release body
    Parse {
        /// Text file with the release notes, `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
    },

    /// Annotate the assets of releases from a releases listing (JSON)
    Annotate {
        /// JSON file with an array of releases, `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Annotate all non-draft releases instead of only the latest
        #[arg(long)]
        all: bool,
    },

    /// Print the release sources and their URLs
    Sources {
        /// Source as `owner/repo[=label][@channel]`, replaces the defaults
        #[arg(long = "source", env = "RELEASE_CHECKSUMS_SOURCES", value_delimiter = ',')]
        sources: Vec<ReleaseSource>,
    },
}

fn main() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let Args { format, command } = Args::parse();
    let mut stdout = io::stdout().lock();
    match command {
        Command::Parse { input } => {
            let body = read_input(&input)?;
            let lookup = parse_release_body(&body);
            tracing::info!(keys = lookup.len(), "parsed release body");
            write_lookup(&mut stdout, format, &lookup)
        }
        Command::Annotate { input, all } => {
            let json = read_input(&input)?;
            let releases: Vec<Release> = serde_json::from_str(&json)
                .with_context(|| format!("invalid releases listing in {}", input.display()))?;
            let selected = select_releases(&releases, all);
            if selected.is_empty() {
                tracing::warn!("no published releases");
            }
            write_releases(&mut stdout, format, &selected)
        }
        Command::Sources { sources } => {
            let sources = if sources.is_empty() {
                default_sources()
            } else {
                sources
            };
            write_sources(&mut stdout, format, &sources)
        }
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        return Ok(input);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_lookup(out: &mut impl Write, format: Format, lookup: &ChecksumLookup) -> Result<()> {
    if format == Format::Json {
        return write_json(out, lookup);
    }
    for (file_name, info) in lookup.entries() {
        writeln!(
            out,
            "{file_name}\t{device}\t{checksum}",
            device = info.device_name,
            checksum = info.checksum
        )?;
    }
    Ok(())
}

/// Either all non-draft releases or only the latest one, newest first.
fn select_releases(releases: &[Release], all: bool) -> Vec<&Release> {
    let mut selected: Vec<&Release> = if all {
        releases.iter().filter(|release| !release.draft).collect()
    } else {
        latest_release(releases).into_iter().collect()
    };
    sort_newest_first(&mut selected);
    selected
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnnotatedRelease<'a> {
    title: &'a str,
    published: Option<String>,
    total_downloads: u64,
    assets: Vec<AnnotatedAsset>,
}

impl<'a> AnnotatedRelease<'a> {
    fn new(release: &'a Release) -> Self {
        let published = release.published().and_then(|published| {
            format_release_date(published)
                .inspect_err(|err| tracing::warn!("failed to format release date: {err}"))
                .ok()
        });
        Self {
            title: release.title(),
            published,
            total_downloads: release.total_downloads(),
            assets: release.annotate_assets(),
        }
    }
}

fn write_releases(out: &mut impl Write, format: Format, releases: &[&Release]) -> Result<()> {
    let annotated: Vec<_> = releases
        .iter()
        .copied()
        .map(AnnotatedRelease::new)
        .collect();
    if format == Format::Json {
        return write_json(out, &annotated);
    }
    for release in annotated {
        let AnnotatedRelease {
            title,
            published,
            total_downloads,
            assets,
        } = release;
        writeln!(
            out,
            "{title} ({published}, {total_downloads} downloads)",
            published = published.as_deref().unwrap_or("unpublished")
        )?;
        if assets.is_empty() {
            writeln!(out, "  no assets")?;
        }
        for asset in assets {
            writeln!(
                out,
                "  {file_name}\t[{device}]\t{count}x\t{checksum}",
                file_name = asset.file_name,
                device = asset.device_name,
                count = asset.download_count,
                checksum = asset.checksum
            )?;
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct SourceUrls<'a> {
    #[serde(flatten)]
    source: &'a ReleaseSource,
    releases_url: String,
    maintainer_url: String,
    max_pages: usize,
}

impl<'a> SourceUrls<'a> {
    fn new(source: &'a ReleaseSource) -> Self {
        Self {
            source,
            releases_url: source.releases_url(1).into(),
            maintainer_url: source.maintainer_url().into(),
            max_pages: MAX_RELEASE_PAGES,
        }
    }
}

fn write_sources(out: &mut impl Write, format: Format, sources: &[ReleaseSource]) -> Result<()> {
    let sources: Vec<_> = sources.iter().map(SourceUrls::new).collect();
    if format == Format::Json {
        return write_json(out, &sources);
    }
    for SourceUrls {
        source,
        releases_url,
        maintainer_url,
        max_pages,
    } in sources
    {
        writeln!(out, "{source}")?;
        writeln!(out, "  releases:   {releases_url} (up to {max_pages} pages)")?;
        writeln!(out, "  maintainer: {maintainer_url}")?;
    }
    Ok(())
}
