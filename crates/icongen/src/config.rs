// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::PathBuf;

/// The Lucide repository, main branch, as a ZIP archive.
pub const DEFAULT_ARCHIVE_URL: &str =
    "https://github.com/lucide-icons/lucide/archive/refs/heads/main.zip";
pub const DEFAULT_OUT_DIR: &str = "./icon/icons";
pub const DEFAULT_TEMP_DIR: &str = "./temp";
pub const DEFAULT_CRATE_PATH: &str = "glyphs_icon";
/// Name of the downloaded archive within the scratch directory.
pub const ARCHIVE_FILE_NAME: &str = "lucide.zip";
/// File extension of the generated source files.
pub const OUT_FILE_EXT: &str = "rs";
/// Name of the generated file that declares all the icon modules.
pub const INDEX_FILE_NAME: &str = "mod.rs";

#[derive(Clone, Debug)]
pub struct Config {
    /**
     * Where to download the ZIP archive of the icon set from.
     */
    pub archive_url: String,
    /**
     * Where to write the output Rust source files to.
     */
    pub out_dir: PathBuf,
    /**
     * Scratch space for the download;
     * removed again at the end of the run.
     */
    pub temp_dir: PathBuf,
    /**
     * The text to insert on top of all output files
     * (generated Rust source code).
     */
    pub header: Option<String>,
    /**
     * The path under which the generated code reaches the `glyphs-icon` crate,
     * e.g. `glyphs_icon` or `crate::icon`.
     */
    pub crate_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            archive_url: DEFAULT_ARCHIVE_URL.to_owned(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            temp_dir: PathBuf::from(DEFAULT_TEMP_DIR),
            header: None,
            crate_path: DEFAULT_CRATE_PATH.to_owned(),
        }
    }
}
