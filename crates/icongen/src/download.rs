// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use url::Url;

use crate::Error;

fn user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), crate::VERSION)
}

/// Downloads `url` into the file `destination`,
/// blocking until done.
/// There are no retries.
/// Returns the number of bytes written.
///
/// # Errors
///
/// - `url` is not a valid URL
/// - the request fails, or the server responds with a non-success status
/// - the destination file can not be written
pub fn download_archive(url: &str, destination: &Path) -> Result<u64, Error> {
    let parsed_url = Url::parse(url).map_err(|source| Error::InvalidUrl {
        url: url.to_owned(),
        source,
    })?;
    tracing::info!("Downloading '{parsed_url}' ...");
    let client = reqwest::blocking::Client::builder()
        .user_agent(user_agent())
        .build()?;
    let mut response = client.get(parsed_url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::DownloadStatus {
            url: url.to_owned(),
            status,
        });
    }
    let write_err = |source| Error::WriteDownload {
        file: destination.to_path_buf(),
        source,
    };
    let mut out = BufWriter::new(File::create(destination).map_err(write_err)?);
    let num_bytes = response.copy_to(&mut out)?;
    out.into_inner()
        .map_err(|err| write_err(err.into_error()))?
        .sync_all()
        .map_err(write_err)?;
    tracing::debug!(
        "Downloaded {num_bytes} bytes to '{}'",
        destination.display()
    );
    Ok(num_bytes)
}
