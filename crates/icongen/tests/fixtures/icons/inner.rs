//! The `Inner` icon.
//!
//! Generated by glyphs-gen; do not edit.

/// The process-wide instance of the `Inner` icon.
pub static INNER: glyphs_icon::SharedIcon = glyphs_icon::SharedIcon::new(inner_component);

/// Renders the `Inner` icon.
#[must_use]
pub fn inner_component(i: &glyphs_icon::IconConfig) -> glyphs_icon::Markup {
    glyphs_icon::Markup::from(format!(
        concat!(
            "<svg",
            r#" xmlns="{xmlns}""#,
            r#" width="{width}""#,
            r#" height="{height}""#,
            r#" viewBox="{view_box}""#,
            r#" fill="{fill}""#,
            r#" stroke="{stroke}""#,
            r#" stroke-width="{stroke_width}""#,
            r#" stroke-linecap="{stroke_line_cap}""#,
            r#" stroke-linejoin="{stroke_line_join}""#,
            "{attributes}>",
            "{inner}",
            "</svg>",
        ),
        xmlns = glyphs_icon::SVG_NAMESPACE,
        width = glyphs_icon::escape_attr(&i.width),
        height = glyphs_icon::escape_attr(&i.height),
        view_box = glyphs_icon::escape_attr(&i.view_box),
        fill = glyphs_icon::escape_attr(&i.fill),
        stroke = glyphs_icon::escape_attr(&i.stroke),
        stroke_width = glyphs_icon::escape_attr(&i.stroke_width),
        stroke_line_cap = glyphs_icon::escape_attr(&i.stroke_line_cap),
        stroke_line_join = glyphs_icon::escape_attr(&i.stroke_line_join),
        attributes = i.attributes,
        inner = r#"<rect x="2" y="2" width="20" height="20" />"#,
    ))
}
