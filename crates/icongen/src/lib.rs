// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use cli_utils as _;
#[cfg(test)]
use glyphs_icon as _;

pub mod archive;
pub mod cli;
pub mod config;
pub mod download;
pub mod ident;
pub mod svg;
pub mod template;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use config::{Config, ARCHIVE_FILE_NAME};
use git_version::git_version;
use glyphs_base::util::{ensure_dir_exists, ScratchDir};
use thiserror::Error;
use zip::result::ZipError;

pub use archive::{generate_from_archive, Report};
pub use download::download_archive;

// This tests rust code in the README with doc-tests.
// Though, It will not appear in the generated documentation.
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

pub const VERSION: &str = git_version!(cargo_prefix = "", fallback = "unknown");

/// Problems that abort a whole generator run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot create directory '{}': {source}", dir.display())]
    CreateDir { dir: PathBuf, source: io::Error },

    #[error("Invalid archive URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("Failed to download the archive: {0}")]
    Download(#[from] reqwest::Error),

    #[error("Failed to download the archive from '{url}': server responded with {status}")]
    DownloadStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to write the downloaded archive to '{}': {source}", file.display())]
    WriteDownload { file: PathBuf, source: io::Error },

    #[error("Failed to open the archive: {0}")]
    ArchiveOpen(ZipError),

    #[error("Failed to write the index file '{}': {source}", file.display())]
    WriteIndex { file: PathBuf, source: io::Error },
}

fn ensure_dir(dir: &std::path::Path) -> Result<(), Error> {
    ensure_dir_exists(dir)
        .map(|_created| ())
        .map_err(|source| Error::CreateDir {
            dir: dir.to_path_buf(),
            source,
        })
}

/// Downloads the icon archive and generates one Rust source file per icon,
/// plus an index file declaring them all.
///
/// The scratch directory used for the download
/// is removed again before returning,
/// whether successful or not.
///
/// # Errors
///
/// - the output or scratch directory can not be created
/// - the archive can not be downloaded
/// - the archive can not be opened
/// - the index file can not be written
///
/// Problems with single icons are logged and skipped.
pub fn generate(config: &Config) -> Result<Report, Error> {
    ensure_dir(&config.out_dir)?;
    let scratch = ScratchDir::create(&config.temp_dir).map_err(|source| Error::CreateDir {
        dir: config.temp_dir.clone(),
        source,
    })?;

    let archive_file = scratch.join(ARCHIVE_FILE_NAME);
    download_archive(&config.archive_url, &archive_file)?;

    tracing::info!("Extracting icons from archive...");
    let reader = File::open(&archive_file)
        .map(BufReader::new)
        .map_err(|err| Error::ArchiveOpen(err.into()))?;
    generate_from_archive(reader, config)
}
