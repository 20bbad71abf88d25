// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Textual processing of SVG sources.
//! Nothing here parses XML; malformed input passes through unharmed.

use once_cell::sync::Lazy;
use regex::Regex;

const SVG_OPEN: &str = "<svg";
const SVG_CLOSE: &str = "</svg>";

/// Elements that never have children in icon sources.
pub const VOID_ELEMENTS: [&str; 5] = ["path", "polyline", "circle", "rect", "line"];

/// One matcher per void element, paired with its replacement.
/// Matches both `<tag attrs/>` and `<tag attrs></tag>`.
static VOID_ELEMENT_RES: Lazy<Vec<(Regex, String)>> = Lazy::new(|| {
    VOID_ELEMENTS
        .iter()
        .map(|tag| {
            let re = Regex::new(&format!(
                r"<{tag}(\s[^<>]*?)?\s*(?:/>|>\s*</{tag}\s*>)"
            ))
            .unwrap();
            (re, format!("<{tag}${{1}} />"))
        })
        .collect()
});

/// Extracts what is between the opening `<svg ...>` tag
/// and the last closing `</svg>` tag, trimmed.
///
/// If either of the two is missing
/// (or they are in the wrong order),
/// the input is returned as-is.
///
/// # Examples
///
/// - `<svg foo="1">A<path/></svg>` -> \
///   `A<path/>`
/// - `<g/>` -> \
///   `<g/>`
#[must_use]
pub fn extract_inner_markup(svg: &str) -> &str {
    let Some(start) = svg.find(SVG_OPEN) else {
        return svg;
    };
    let Some(open_end) = svg
        .get(start..)
        .and_then(|from_open| from_open.find('>'))
        .map(|gt_pos| start + gt_pos + 1)
    else {
        return svg;
    };
    let Some(close_start) = svg.rfind(SVG_CLOSE) else {
        return svg;
    };
    if close_start < open_end {
        return svg;
    }
    svg.get(open_end..close_start).map_or(svg, str::trim)
}

/// Rewrites the [`VOID_ELEMENTS`] into self-closing form (`<tag attrs />`),
/// whether they were written self-closing already or with an explicit,
/// empty closing tag.
///
/// Elements with content, or with a `<` or `>` within their attributes,
/// are left untouched.
#[must_use]
pub fn normalize_void_elements(markup: &str) -> String {
    let mut normalized = markup.to_owned();
    for (re, replacement) in VOID_ELEMENT_RES.iter() {
        let replaced = re
            .replace_all(&normalized, replacement.as_str())
            .into_owned();
        normalized = replaced;
    }
    normalized
}

/// The full pipeline from an icon source file
/// to the markup that goes into the body of the generated `<svg>`.
#[must_use]
pub fn process(svg: &str) -> String {
    normalize_void_elements(extract_inner_markup(svg))
}
