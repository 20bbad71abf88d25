// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

#![allow(unused_crate_dependencies)]

//! Compiles generated icon modules and uses them.

#[path = "fixtures/icons/mod.rs"]
mod icons;

use glyphs_gen::config::Config;
use glyphs_gen::ident::IconNames;
use glyphs_gen::{svg, template};

const LUCIDE_ARROW_RIGHT: &str = r#"<svg
  xmlns="http://www.w3.org/2000/svg"
  width="24"
  height="24"
  viewBox="0 0 24 24"
  fill="none"
  stroke="currentColor"
  stroke-width="2"
  stroke-linecap="round"
  stroke-linejoin="round"
>
  <path d="M5 12h14" />
  <path d="m12 5 7 7-7 7" />
</svg>
"#;

// results in `INNER`, so generated modules must not declare that name themselves
const INNER_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">
  <rect x="2" y="2" width="20" height="20"></rect>
</svg>"#;

const DEFAULT_ROOT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#;

fn names() -> [IconNames; 2] {
    [
        IconNames::from_file_name("arrow-right.svg"),
        IconNames::from_file_name("inner.svg"),
    ]
}

#[test]
fn template_output_is_the_compiled_fixture() {
    let config = Config::default();
    let [arrow_right, inner] = names();
    assert_eq!(
        template::artifact(&arrow_right, &svg::process(LUCIDE_ARROW_RIGHT), &config),
        include_str!("fixtures/icons/arrowright.rs")
    );
    assert_eq!(
        template::artifact(&inner, &svg::process(INNER_SVG), &config),
        include_str!("fixtures/icons/inner.rs")
    );
    assert_eq!(
        template::index(&names(), &config),
        include_str!("fixtures/icons/mod.rs")
    );
}

#[test]
fn renders_with_defaults() {
    let markup = icons::ARROW_RIGHT.render();
    let expected = format!(
        "{DEFAULT_ROOT}<path d=\"M5 12h14\" />\n  <path d=\"m12 5 7 7-7 7\" /></svg>"
    );
    assert_eq!(markup.as_str(), expected);
    assert_eq!(icons::arrow_right_component(&icons::ARROW_RIGHT.defaults()), markup);
}

#[test]
fn renders_local_customization() {
    let icon = icons::ARROW_RIGHT
        .with_size("lg")
        .with_stroke("#f00")
        .with_class("icon")
        .with_class("spin")
        .with_attributes([("aria-hidden", true)]);
    let html = icon.render().into_string();
    assert!(html.contains(r#" width="24" height="24""#));
    assert!(html.contains(r##" stroke="#f00""##));
    assert!(html.contains(r#" stroke-linejoin="round" aria-hidden class="icon spin">"#));

    // the shared instance stays as it was
    assert!(icons::ARROW_RIGHT.render().as_str().starts_with(DEFAULT_ROOT));
}

#[test]
fn attribute_values_are_escaped() {
    let icon = icons::ARROW_RIGHT
        .with_stroke(r#"red" onload="alert(1)"#)
        .with_attributes([("title", "<b>")]);
    let html = icon.render().into_string();
    assert!(html.contains(r#" stroke="red&quot; onload=&quot;alert(1)""#));
    assert!(html.contains(r#" title="&lt;b&gt;">"#));
}

/// The only test changing a shared instance.
#[test]
fn global_overrides_apply_to_every_later_use() {
    icons::INNER.set_size_global("xs").add_class_global("nav");

    let looked_up = icons::registry().render("Inner").unwrap_or_default();
    let direct = icons::INNER.render();
    let other_lookup = icons::registry()
        .get("Inner")
        .map(glyphs_icon::SharedIcon::render)
        .unwrap_or_default();
    assert_eq!(looked_up, direct);
    assert_eq!(looked_up, other_lookup);
    assert!(direct.as_str().contains(r#" width="12" height="12""#));
    assert!(direct.as_str().contains(r#" class="nav">"#));
    assert!(direct.as_str().ends_with(r#"<rect x="2" y="2" width="20" height="20" /></svg>"#));

    assert!(std::ptr::eq(icons::registry(), icons::registry()));
    assert_eq!(icons::registry().names().collect::<Vec<_>>(), ["ArrowRight", "Inner"]);
}
