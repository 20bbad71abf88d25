// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The batch driver, generating one source file per icon in an archive.

use std::collections::HashSet;
use std::io::{self, Read, Seek};
use std::path::PathBuf;

use glyphs_base::util::{last_path_segment, write_or_clean};
use zip::result::ZipError;
use zip::ZipArchive;

use crate::config::{Config, INDEX_FILE_NAME, OUT_FILE_EXT};
use crate::ident::{IconNames, SVG_SUFFIX};
use crate::{svg, template, Error};

/// Archive entries within a directory with this name are icons.
pub const ICONS_DIR_SEGMENT: &str = "/icons/";

const INDEX_FILE_STEM: &str = "mod";

/// Log progress every so many generated icons.
const PROGRESS_INTERVAL: usize = 50;

/// A problem with a single archive entry;
/// the entry gets skipped, the batch continues.
#[derive(thiserror::Error, Debug)]
pub enum EntryError {
    #[error("Error opening '{name}' in the archive: {source}")]
    Open { name: String, source: ZipError },

    #[error("Error reading '{name}': {source}")]
    Read { name: String, source: io::Error },

    #[error("'{name}' does not result in a usable identifier")]
    NoIdentifier { name: String },

    #[error("'{name}' results in the output file '{file_stem}.rs', which is already taken")]
    Duplicate { name: String, file_stem: String },

    #[error("Failed to write generated file '{}': {source}", file.display())]
    Write { file: PathBuf, source: io::Error },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub names: IconNames,
    pub file: PathBuf,
}

/// What a batch run produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    /// The icons written, in processing order.
    pub generated: Vec<GeneratedIcon>,
    /// Number of icon entries skipped because of an [`EntryError`].
    pub skipped: usize,
    /// Number of archive entries that are not icons.
    pub ignored: usize,
    /// The written `mod.rs`.
    pub index_file: PathBuf,
}

impl Report {
    /// Number of generated icon source files.
    #[must_use]
    pub fn count(&self) -> usize {
        self.generated.len()
    }
}

/// Whether the archive entry with this name is an icon source file.
#[must_use]
pub fn is_icon_entry(name: &str) -> bool {
    name.contains(ICONS_DIR_SEGMENT) && name.ends_with(SVG_SUFFIX)
}

/// Whether the entry is directly within the icons directory
/// at the root of the archive (`<root>/icons/<file>.svg`).
fn is_top_level_icon(name: &str) -> bool {
    let mut segments = name.split('/');
    matches!(
        (segments.next(), segments.next(), segments.next(), segments.next()),
        (Some(_), Some("icons"), Some(_), None)
    )
}

/// The order in which entries get processed:
/// the top-level icons first, so they win name clashes,
/// then everything else; each by name.
fn processing_order(name: &str) -> (bool, &str) {
    (!is_top_level_icon(name), name)
}

struct Batch<'a> {
    config: &'a Config,
    taken_stems: HashSet<String>,
}

impl Batch<'_> {
    fn process_entry<R: Read + Seek>(
        &mut self,
        archive: &mut ZipArchive<R>,
        name: &str,
    ) -> Result<GeneratedIcon, EntryError> {
        let file_name = last_path_segment(name);

        let svg_src = {
            let mut entry = archive.by_name(name).map_err(|source| EntryError::Open {
                name: file_name.to_owned(),
                source,
            })?;
            let mut svg_src = String::new();
            entry
                .read_to_string(&mut svg_src)
                .map_err(|source| EntryError::Read {
                    name: file_name.to_owned(),
                    source,
                })?;
            svg_src
        };

        let names = IconNames::from_file_name(file_name);
        if names.identifier.is_empty() {
            return Err(EntryError::NoIdentifier {
                name: file_name.to_owned(),
            });
        }
        if self.taken_stems.contains(&names.file_stem) {
            return Err(EntryError::Duplicate {
                name: file_name.to_owned(),
                file_stem: names.file_stem,
            });
        }

        let inner_markup = svg::process(&svg_src);
        let src = template::artifact(&names, &inner_markup, self.config);
        let file = self
            .config
            .out_dir
            .join(format!("{}.{OUT_FILE_EXT}", names.file_stem));
        write_or_clean(&file, src).map_err(|source| EntryError::Write {
            file: file.clone(),
            source,
        })?;

        self.taken_stems.insert(names.file_stem.clone());
        Ok(GeneratedIcon { names, file })
    }
}

/// Generates one source file per icon found in the ZIP archive `reader`,
/// plus an index file (`mod.rs`) declaring all of them,
/// into `config.out_dir`.
///
/// Entries directly within `<root>/icons/` are processed first,
/// then all other matching entries; each group in name order.
/// Of entries resulting in the same file, the first one processed wins.
/// Entries that fail to be processed are logged and skipped.
///
/// # Errors
///
/// - the archive can not be opened
/// - the index file can not be written
pub fn generate_from_archive<R: Read + Seek>(reader: R, config: &Config) -> Result<Report, Error> {
    let mut archive = ZipArchive::new(reader).map_err(Error::ArchiveOpen)?;

    let mut entry_names: Vec<String> = archive.file_names().map(str::to_owned).collect();
    entry_names.sort_by(|lhs, rhs| processing_order(lhs).cmp(&processing_order(rhs)));

    let mut batch = Batch {
        config,
        // taken by the index file (`mod.rs`)
        taken_stems: HashSet::from([INDEX_FILE_STEM.to_owned()]),
    };
    let mut report = Report::default();
    for name in &entry_names {
        if !is_icon_entry(name) {
            report.ignored += 1;
            continue;
        }
        match batch.process_entry(&mut archive, name) {
            Ok(icon) => {
                tracing::debug!(
                    "Generated '{}' from '{name}'",
                    icon.file.display()
                );
                report.generated.push(icon);
                if report.count() % PROGRESS_INTERVAL == 0 {
                    tracing::info!("Processed {} icons...", report.count());
                }
            }
            Err(err) => {
                tracing::warn!("{err}");
                report.skipped += 1;
            }
        }
    }

    let names: Vec<IconNames> = report
        .generated
        .iter()
        .map(|icon| icon.names.clone())
        .collect();
    let index_file = config.out_dir.join(INDEX_FILE_NAME);
    write_or_clean(&index_file, template::index(&names, config)).map_err(|source| {
        Error::WriteIndex {
            file: index_file.clone(),
            source,
        }
    })?;
    report.index_file = index_file;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_entry_matching() {
        assert!(is_icon_entry("lucide-main/icons/arrow-right.svg"));
        assert!(!is_icon_entry("lucide-main/icons/arrow-right.json"));
        assert!(!is_icon_entry("lucide-main/icons/"));
        assert!(!is_icon_entry("icons/arrow-right.svg"));
        assert!(!is_icon_entry("lucide-main/docs/logo.svg"));
        assert!(is_icon_entry("lucide-main/packages/x/icons/y.svg"));
    }

    #[test]
    fn top_level_icons_come_first() {
        assert!(is_top_level_icon("lucide-main/icons/a.svg"));
        assert!(!is_top_level_icon("lucide-main/docs/icons/a.svg"));
        assert!(!is_top_level_icon("lucide-main/icons/sub/a.svg"));

        let mut names = vec![
            "lucide-main/docs/icons/b.svg",
            "lucide-main/icons/z.svg",
            "lucide-main/a/icons/c.svg",
            "lucide-main/icons/a.svg",
        ];
        names.sort_by(|lhs, rhs| processing_order(lhs).cmp(&processing_order(rhs)));
        assert_eq!(
            names,
            [
                "lucide-main/icons/a.svg",
                "lucide-main/icons/z.svg",
                "lucide-main/a/icons/c.svg",
                "lucide-main/docs/icons/b.svg",
            ]
        );
    }

    #[test]
    fn entry_error_messages() {
        let err = EntryError::Duplicate {
            name: "circle_dot.svg".to_owned(),
            file_stem: "circledot".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "'circle_dot.svg' results in the output file 'circledot.rs', which is already taken"
        );
    }

    #[test]
    fn report_count() {
        let mut report = Report::default();
        assert_eq!(report.count(), 0);
        report.generated.push(GeneratedIcon {
            names: IconNames::from_file_name("x.svg"),
            file: PathBuf::from("x.rs"),
        });
        assert_eq!(report.count(), 1);
    }
}
