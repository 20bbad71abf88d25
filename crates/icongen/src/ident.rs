// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Turns icon file names into Rust identifiers.

use convert_case::{Boundary, Case, Casing};
use once_cell::sync::Lazy;
use regex::Regex;

pub const SVG_SUFFIX: &str = ".svg";

static NON_BASIC_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9_-]").unwrap());

const WORD_BOUNDARIES: [Boundary; 2] = [Boundary::Hyphen, Boundary::Underscore];

/// Keywords that can not be used as module names,
/// not even as raw identifiers.
const NON_RAW_KEYWORDS: &[&str] = &["crate", "self", "super", "Self", "_"];

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield", "Self",
];

/// Strips the `.svg` suffix and replaces everything
/// that may not be part of an identifier by a hyphen.
fn clean_stem(file_base_name: &str) -> String {
    let stem = file_base_name
        .strip_suffix(SVG_SUFFIX)
        .unwrap_or(file_base_name);
    NON_BASIC_CHARS.replace_all(stem, "-").into_owned()
}

fn to_case(file_base_name: &str, case: Case) -> String {
    clean_stem(file_base_name)
        .with_boundaries(&WORD_BOUNDARIES)
        .to_case(case)
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn starts_with_digit(ident: &str) -> bool {
    ident.chars().next().is_some_and(|chr| chr.is_ascii_digit())
}

/// Converts a hyphen or underscore delimited file name
/// into an upper camel case identifier.
/// Only the first character of each word is upper-cased;
/// the rest is kept as is (`"arrowUp-x"` -> `"ArrowUpX"`).
///
/// # Examples
///
/// - `"arrow-right.svg"` -> \
///   `"ArrowRight"`
/// - `"check_circle"` -> \
///   `"CheckCircle"`
/// - `"grid-2x2.svg"` -> \
///   `"Grid2x2"`
#[must_use]
pub fn sanitize(file_base_name: &str) -> String {
    let ident: String = clean_stem(file_base_name)
        .split(['-', '_'])
        .map(upper_first)
        .collect();
    if starts_with_digit(&ident) {
        format!("Icon{ident}")
    } else {
        ident
    }
}

/// Name of the `static` holding the process-wide instance of an icon,
/// e.g. `"arrow-right.svg"` -> `"ARROW_RIGHT"`.
#[must_use]
pub fn const_name(file_base_name: &str) -> String {
    let ident = to_case(file_base_name, Case::UpperSnake);
    if starts_with_digit(&ident) {
        format!("ICON_{ident}")
    } else {
        ident
    }
}

/// Name of the render function,
/// e.g. `"arrow-right.svg"` -> `"arrow_right_component"`.
#[must_use]
pub fn fn_name(file_base_name: &str) -> String {
    let ident = to_case(file_base_name, Case::Snake);
    if starts_with_digit(&ident) {
        format!("icon_{ident}_component")
    } else {
        format!("{ident}_component")
    }
}

/// The file stem of the generated source file for an icon:
/// the lower-cased identifier.
#[must_use]
pub fn file_stem(identifier: &str) -> String {
    identifier.to_lowercase()
}

/// How to refer to the module stored in the file with the given stem.
///
/// Keywords are turned into raw identifiers (`type` -> `r#type`);
/// those that can not be raw get an `_icon` suffix,
/// and need a `#[path]` attribute on their declaration.
#[must_use]
pub fn module_ident(file_stem: &str) -> String {
    if NON_RAW_KEYWORDS.contains(&file_stem) {
        format!("{file_stem}_icon")
    } else if KEYWORDS.contains(&file_stem) {
        format!("r#{file_stem}")
    } else {
        file_stem.to_owned()
    }
}

/// All the names generated code uses for one icon.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IconNames {
    /// Upper camel case, e.g. `ArrowRight`;
    /// the key of the icon in the generated registry.
    pub identifier: String,
    /// e.g. `ARROW_RIGHT`
    pub const_name: String,
    /// e.g. `arrow_right_component`
    pub fn_name: String,
    /// e.g. `arrowright`
    pub file_stem: String,
    /// e.g. `arrowright`, or `r#type` for the file stem `type`
    pub module_ident: String,
}

impl IconNames {
    #[must_use]
    pub fn from_file_name(file_base_name: &str) -> Self {
        let identifier = sanitize(file_base_name);
        let file_stem = file_stem(&identifier);
        let module_ident = module_ident(&file_stem);
        Self {
            const_name: const_name(file_base_name),
            fn_name: fn_name(file_base_name),
            identifier,
            file_stem,
            module_ident,
        }
    }

    /// Whether the module declaration needs a `#[path]` attribute,
    /// because the module identifier does not match the file stem.
    #[must_use]
    pub fn needs_path_attr(&self) -> bool {
        self.module_ident.trim_start_matches("r#") != self.file_stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_examples() {
        assert_eq!(sanitize("arrow-right.svg"), "ArrowRight");
        assert_eq!(sanitize("arrow-right"), "ArrowRight");
        assert_eq!(sanitize("check_circle.svg"), "CheckCircle");
        assert_eq!(sanitize("a-arrow-down.svg"), "AArrowDown");
        assert_eq!(sanitize("grid-2x2.svg"), "Grid2x2");
        assert_eq!(sanitize("user.svg"), "User");
    }

    #[test]
    fn sanitize_odd_input() {
        assert_eq!(sanitize("arrow right.svg"), "ArrowRight");
        assert_eq!(sanitize("3d-box.svg"), "Icon3dBox");
        assert_eq!(sanitize(".svg"), "");
        assert_eq!(sanitize("arrowUp-x.svg"), "ArrowUpX");
        assert_eq!(sanitize("--x__y-"), "XY");
    }

    #[test]
    fn derived_names() {
        assert_eq!(const_name("arrow-right.svg"), "ARROW_RIGHT");
        assert_eq!(fn_name("arrow-right.svg"), "arrow_right_component");
        assert_eq!(const_name("grid-2x2.svg"), "GRID_2X2");
        assert_eq!(fn_name("3d-box.svg"), "icon_3d_box_component");
        assert_eq!(file_stem(&sanitize("arrow-right.svg")), "arrowright");
    }

    #[test]
    fn module_idents() {
        assert_eq!(module_ident("arrowright"), "arrowright");
        assert_eq!(module_ident("type"), "r#type");
        assert_eq!(module_ident("box"), "r#box");
        assert_eq!(module_ident("self"), "self_icon");
    }

    #[test]
    fn icon_names() {
        let names = IconNames::from_file_name("circle-check.svg");
        assert_eq!(names.identifier, "CircleCheck");
        assert_eq!(names.const_name, "CIRCLE_CHECK");
        assert_eq!(names.fn_name, "circle_check_component");
        assert_eq!(names.file_stem, "circlecheck");
        assert_eq!(names.module_ident, "circlecheck");
        assert!(!names.needs_path_attr());

        let keyword = IconNames::from_file_name("type.svg");
        assert_eq!(keyword.module_ident, "r#type");
        assert!(!keyword.needs_path_attr());
        assert!(IconNames::from_file_name("self.svg").needs_path_attr());
    }
}
