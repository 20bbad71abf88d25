// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::borrow::Cow;

use crate::attrs::Attributes;
use crate::markup::Markup;
use crate::size::Size;

/// Produces the markup of one icon,
/// reading the presentation from the given configuration.
pub type RenderFn = fn(&IconConfig) -> Markup;

pub const DEFAULT_SIZE: &str = "16";
pub const DEFAULT_VIEW_BOX: &str = "0 0 24 24";
pub const DEFAULT_FILL: &str = "none";
pub const DEFAULT_STROKE: &str = "currentColor";
pub const DEFAULT_STROKE_WIDTH: &str = "2";
pub const DEFAULT_STROKE_LINE_CAP: &str = "round";
pub const DEFAULT_STROKE_LINE_JOIN: &str = "round";

/// The render-time presentation of one icon.
///
/// There are two families of builder methods:
///
/// - `with_*` leave `self` untouched and return a modified copy.
///   Use these for one-off customization of a shared instance.
/// - `set_*_global`, `merge_attributes_global` and `add_class_global`
///   modify `self` in place and return it for chaining.
///   Use these to change the defaults of an icon for everybody using that instance.
///
/// ```
/// use glyphs_icon::{IconConfig, Markup};
///
/// fn dot(i: &IconConfig) -> Markup {
///     Markup::from(format!(r#"<svg width="{}"></svg>"#, i.width))
/// }
///
/// let mut shared = IconConfig::new(dot);
/// let big = shared.with_size("xl");
/// assert_eq!(big.width, "32");
/// assert_eq!(shared.width, "16");
///
/// shared.set_size_global("xs").set_stroke_global("red");
/// assert_eq!(shared.render().as_str(), r#"<svg width="12"></svg>"#);
/// ```
#[derive(Clone, Debug)]
pub struct IconConfig {
    pub width: Cow<'static, str>,
    pub height: Cow<'static, str>,
    pub view_box: Cow<'static, str>,
    pub fill: Cow<'static, str>,
    pub stroke: Cow<'static, str>,
    pub stroke_width: Cow<'static, str>,
    pub stroke_line_cap: Cow<'static, str>,
    pub stroke_line_join: Cow<'static, str>,
    pub attributes: Attributes,
    render: Option<RenderFn>,
}

impl Default for IconConfig {
    /// All defaults, but without a render function;
    /// [`IconConfig::render`] produces empty markup for it.
    fn default() -> Self {
        Self::with_render(None)
    }
}

impl IconConfig {
    /// Creates a configuration with the default presentation,
    /// bound to `render`.
    #[must_use]
    pub const fn new(render: RenderFn) -> Self {
        Self::with_render(Some(render))
    }

    const fn with_render(render: Option<RenderFn>) -> Self {
        Self {
            width: Cow::Borrowed(DEFAULT_SIZE),
            height: Cow::Borrowed(DEFAULT_SIZE),
            view_box: Cow::Borrowed(DEFAULT_VIEW_BOX),
            fill: Cow::Borrowed(DEFAULT_FILL),
            stroke: Cow::Borrowed(DEFAULT_STROKE),
            stroke_width: Cow::Borrowed(DEFAULT_STROKE_WIDTH),
            stroke_line_cap: Cow::Borrowed(DEFAULT_STROKE_LINE_CAP),
            stroke_line_join: Cow::Borrowed(DEFAULT_STROKE_LINE_JOIN),
            attributes: Attributes::new(),
            render,
        }
    }

    /// An independent deep copy, same as [`Clone::clone`].
    ///
    /// The render function is shared.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    #[must_use]
    pub const fn render_fn(&self) -> Option<RenderFn> {
        self.render
    }

    #[must_use]
    pub const fn is_bound(&self) -> bool {
        self.render.is_some()
    }

    /// Renders the icon with the current presentation.
    /// Without a bound render function, this is empty markup.
    #[must_use]
    pub fn render(&self) -> Markup {
        self.render.map_or_else(Markup::empty, |render| render(self))
    }

    fn apply_size(&mut self, token: &str) {
        let (width, height) = Size::dimensions_for(token);
        self.width = Cow::Borrowed(width);
        self.height = Cow::Borrowed(height);
    }

    fn apply_stroke(&mut self, stroke: Cow<'static, str>) {
        self.stroke = stroke;
    }

    fn apply_stroke_width(&mut self, stroke_width: Cow<'static, str>) {
        self.stroke_width = stroke_width;
    }

    fn apply_attributes(&mut self, attributes: Attributes) {
        self.attributes.merge(attributes);
    }

    fn apply_class(&mut self, name: &str) {
        self.attributes.append_class(name);
    }

    fn modified(&self, apply: impl FnOnce(&mut Self)) -> Self {
        let mut copy = self.clone();
        apply(&mut copy);
        copy
    }

    /// A copy with width and height set from a size token
    /// (see [`Size`]); unknown tokens result in `24` by `24`.
    #[must_use]
    pub fn with_size(&self, token: &str) -> Self {
        self.modified(|copy| copy.apply_size(token))
    }

    /// Sets width and height from a size token, like [`Self::with_size`],
    /// but in place.
    pub fn set_size_global(&mut self, token: &str) -> &mut Self {
        self.apply_size(token);
        self
    }

    #[must_use]
    pub fn with_stroke<S: Into<Cow<'static, str>>>(&self, stroke: S) -> Self {
        self.modified(|copy| copy.apply_stroke(stroke.into()))
    }

    pub fn set_stroke_global<S: Into<Cow<'static, str>>>(&mut self, stroke: S) -> &mut Self {
        self.apply_stroke(stroke.into());
        self
    }

    #[must_use]
    pub fn with_stroke_width<S: Into<Cow<'static, str>>>(&self, stroke_width: S) -> Self {
        self.modified(|copy| copy.apply_stroke_width(stroke_width.into()))
    }

    pub fn set_stroke_width_global<S: Into<Cow<'static, str>>>(
        &mut self,
        stroke_width: S,
    ) -> &mut Self {
        self.apply_stroke_width(stroke_width.into());
        self
    }

    /// A copy with `attributes` merged into the extra attributes;
    /// given keys overwrite existing ones.
    #[must_use]
    pub fn with_attributes<A: Into<Attributes>>(&self, attributes: A) -> Self {
        self.modified(|copy| copy.apply_attributes(attributes.into()))
    }

    /// Merges `attributes` into the extra attributes in place;
    /// given keys overwrite existing ones, all others are kept.
    pub fn merge_attributes_global<A: Into<Attributes>>(&mut self, attributes: A) -> &mut Self {
        self.apply_attributes(attributes.into());
        self
    }

    /// A copy with `name` appended to the `class` attribute.
    #[must_use]
    pub fn with_class(&self, name: &str) -> Self {
        self.modified(|copy| copy.apply_class(name))
    }

    pub fn add_class_global(&mut self, name: &str) -> &mut Self {
        self.apply_class(name);
        self
    }
}
