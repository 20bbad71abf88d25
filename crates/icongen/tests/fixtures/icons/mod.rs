//! All generated icons.
//!
//! Generated by glyphs-gen; do not edit.

pub mod arrowright;
pub mod inner;

pub use arrowright::{ARROW_RIGHT, arrow_right_component};
pub use inner::{INNER, inner_component};

/// The process-wide instance of every icon,
/// by identifier (e.g. `ArrowRight`).
#[must_use]
pub fn registry() -> &'static glyphs_icon::Registry {
    static ICONS: [(&str, &glyphs_icon::SharedIcon); 2] = [
        ("ArrowRight", &arrowright::ARROW_RIGHT),
        ("Inner", &inner::INNER),
    ];
    static REGISTRY: glyphs_icon::Registry = glyphs_icon::Registry::new(&ICONS);
    &REGISTRY
}
