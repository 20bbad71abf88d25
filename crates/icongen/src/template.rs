// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Rust source emitted for the icons.
//!
//! Generated modules declare nothing but the items of the icons themselves,
//! and refer to everything else by its full path,
//! so no icon name can clash with a helper item or an import.

use crate::config::Config;
use crate::ident::IconNames;

const GENERATED_NOTE: &str = "Generated by glyphs-gen; do not edit.";

/// Wraps `text` into a raw string literal,
/// with enough `#`s to not be terminated early by its content.
#[must_use]
pub fn raw_str_literal(text: &str) -> String {
    let mut longest_run = 0;
    let mut current_run = None;
    for chr in text.chars() {
        current_run = match (chr, current_run) {
            ('"', _) => Some(0),
            ('#', Some(run)) => {
                longest_run = longest_run.max(run + 1);
                Some(run + 1)
            }
            _ => None,
        };
    }
    let hashes = "#".repeat(longest_run + 1);
    format!("r{hashes}\"{text}\"{hashes}")
}

/// The configured header text, followed by an empty line.
fn header(config: &Config) -> String {
    match &config.header {
        Some(header) if header.ends_with('\n') => format!("{header}\n"),
        Some(header) => format!("{header}\n\n"),
        None => String::new(),
    }
}

/// The source of the module for one icon.
///
/// It declares the process-wide instance of the icon as a `static`,
/// and the function rendering the icon from any configuration.
/// The root attributes of the `<svg>` are read from the configuration
/// passed to the function,
/// in this order: width, height, viewBox, fill, stroke, stroke-width,
/// stroke-linecap, stroke-linejoin, and then the extra attributes.
#[must_use]
pub fn artifact(names: &IconNames, inner_markup: &str, config: &Config) -> String {
    let IconNames {
        identifier,
        const_name,
        fn_name,
        ..
    } = names;
    let krate = &config.crate_path;
    let inner = raw_str_literal(inner_markup);
    format!(
        r###"{header}//! The `{identifier}` icon.
//!
//! {GENERATED_NOTE}

/// The process-wide instance of the `{identifier}` icon.
pub static {const_name}: {krate}::SharedIcon = {krate}::SharedIcon::new({fn_name});

/// Renders the `{identifier}` icon.
#[must_use]
pub fn {fn_name}(i: &{krate}::IconConfig) -> {krate}::Markup {{
    {krate}::Markup::from(format!(
        concat!(
            "<svg",
            r#" xmlns="{{xmlns}}""#,
            r#" width="{{width}}""#,
            r#" height="{{height}}""#,
            r#" viewBox="{{view_box}}""#,
            r#" fill="{{fill}}""#,
            r#" stroke="{{stroke}}""#,
            r#" stroke-width="{{stroke_width}}""#,
            r#" stroke-linecap="{{stroke_line_cap}}""#,
            r#" stroke-linejoin="{{stroke_line_join}}""#,
            "{{attributes}}>",
            "{{inner}}",
            "</svg>",
        ),
        xmlns = {krate}::SVG_NAMESPACE,
        width = {krate}::escape_attr(&i.width),
        height = {krate}::escape_attr(&i.height),
        view_box = {krate}::escape_attr(&i.view_box),
        fill = {krate}::escape_attr(&i.fill),
        stroke = {krate}::escape_attr(&i.stroke),
        stroke_width = {krate}::escape_attr(&i.stroke_width),
        stroke_line_cap = {krate}::escape_attr(&i.stroke_line_cap),
        stroke_line_join = {krate}::escape_attr(&i.stroke_line_join),
        attributes = i.attributes,
        inner = {inner},
    ))
}}
"###,
        header = header(config),
    )
}

fn module_decl(icon: &IconNames) -> String {
    let module = &icon.module_ident;
    if icon.needs_path_attr() {
        format!("#[path = \"{}.rs\"]\npub mod {module};\n", icon.file_stem)
    } else {
        format!("pub mod {module};\n")
    }
}

/// The source of the module that declares all the icon modules
/// (`mod.rs`), re-exports their items,
/// and provides the registry of all of them.
#[must_use]
pub fn index(icons: &[IconNames], config: &Config) -> String {
    let krate = &config.crate_path;
    let modules = icons.iter().map(module_decl).collect::<Vec<_>>().concat();
    let reexports = icons
        .iter()
        .map(|icon| {
            format!(
                "pub use {}::{{{}, {}}};\n",
                icon.module_ident, icon.const_name, icon.fn_name
            )
        })
        .collect::<Vec<_>>()
        .concat();
    let entries = icons
        .iter()
        .map(|icon| {
            format!(
                "        (\"{}\", &{}::{}),\n",
                icon.identifier, icon.module_ident, icon.const_name
            )
        })
        .collect::<Vec<_>>()
        .concat();
    format!(
        r"{header}//! All generated icons.
//!
//! {GENERATED_NOTE}

{modules}
{reexports}
/// The process-wide instance of every icon,
/// by identifier (e.g. `ArrowRight`).
#[must_use]
pub fn registry() -> &'static {krate}::Registry {{
    static ICONS: [(&str, &{krate}::SharedIcon); {count}] = [
{entries}    ];
    static REGISTRY: {krate}::Registry = {krate}::Registry::new(&ICONS);
    &REGISTRY
}}
",
        header = header(config),
        count = icons.len(),
    )
}
