// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Render-time configuration of SVG icons.
//!
//! An [`IconConfig`] holds the presentation of one icon
//! (size, stroke, fill, extra attributes)
//! and the function that turns it into [`Markup`].
//! Icon modules generated by `glyphs-gen`
//! declare one `static` [`SharedIcon`] per icon,
//! the process-wide instance whose defaults may be changed in place,
//! plus a `static` [`Registry`] referring to all of them.

pub mod attrs;
pub mod config;
pub mod markup;
pub mod registry;
pub mod shared;
pub mod size;

pub use attrs::{AttrValue, Attributes};
pub use config::{IconConfig, RenderFn};
pub use markup::{escape_attr, Markup};
pub use registry::Registry;
pub use shared::SharedIcon;
pub use size::Size;

use git_version::git_version;
#[cfg(test)]
use serde_json as _;

// This tests rust code in the README with doc-tests.
// Though, It will not appear in the generated documentation.
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

pub const VERSION: &str = git_version!(cargo_prefix = "", fallback = "unknown");

/// The XML namespace every generated `<svg>` root declares.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
