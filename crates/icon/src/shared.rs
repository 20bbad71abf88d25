// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::borrow::Cow;
use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use crate::attrs::Attributes;
use crate::config::{IconConfig, RenderFn};
use crate::markup::Markup;

/// The process-wide instance of one icon,
/// meant to be declared as a `static`.
///
/// Changes made through the `*_global` methods
/// are seen by every later use of the same instance,
/// while the `with_*` methods return a customized copy
/// of the current configuration.
///
/// ```
/// use glyphs_icon::{IconConfig, Markup, SharedIcon};
///
/// fn dot(i: &IconConfig) -> Markup {
///     Markup::from(format!(r#"<svg width="{}"></svg>"#, i.width))
/// }
///
/// static DOT: SharedIcon = SharedIcon::new(dot);
///
/// DOT.set_size_global("xl");
/// assert_eq!(DOT.render().as_str(), r#"<svg width="32"></svg>"#);
/// assert_eq!(DOT.with_size("xs").width, "12");
/// assert_eq!(DOT.get().width, "32");
/// ```
#[derive(Debug)]
pub struct SharedIcon {
    render: RenderFn,
    config: RwLock<IconConfig>,
}

impl SharedIcon {
    /// Creates the shared instance with the default presentation,
    /// bound to `render`.
    #[must_use]
    pub const fn new(render: RenderFn) -> Self {
        Self {
            render,
            config: RwLock::new(IconConfig::new(render)),
        }
    }

    /// A fresh configuration with the defaults this instance started with.
    #[must_use]
    pub const fn defaults(&self) -> IconConfig {
        IconConfig::new(self.render)
    }

    /// Read access to the current configuration.
    ///
    /// Do not call the `*_global` methods of this instance
    /// while holding on to the returned guard.
    #[must_use]
    pub fn read(&self) -> RwLockReadGuard<'_, IconConfig> {
        // every state of the configuration is valid, even after a panic
        self.config.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// A copy of the current configuration.
    #[must_use]
    pub fn get(&self) -> IconConfig {
        self.read().copy()
    }

    /// Modifies the configuration in place, for all users of this instance.
    pub fn update<R>(&self, modify: impl FnOnce(&mut IconConfig) -> R) -> R {
        let mut config = self.config.write().unwrap_or_else(PoisonError::into_inner);
        modify(&mut config)
    }

    /// Goes back to the default presentation.
    pub fn reset(&self) -> &Self {
        self.update(|config| *config = self.defaults());
        self
    }

    /// Renders the icon with the current configuration.
    #[must_use]
    pub fn render(&self) -> Markup {
        self.read().render()
    }

    pub fn set_size_global(&self, token: &str) -> &Self {
        self.update(|config| {
            config.set_size_global(token);
        });
        self
    }

    pub fn set_stroke_global<S: Into<Cow<'static, str>>>(&self, stroke: S) -> &Self {
        self.update(|config| {
            config.set_stroke_global(stroke);
        });
        self
    }

    pub fn set_stroke_width_global<S: Into<Cow<'static, str>>>(&self, stroke_width: S) -> &Self {
        self.update(|config| {
            config.set_stroke_width_global(stroke_width);
        });
        self
    }

    pub fn merge_attributes_global<A: Into<Attributes>>(&self, attributes: A) -> &Self {
        self.update(|config| {
            config.merge_attributes_global(attributes);
        });
        self
    }

    pub fn add_class_global(&self, name: &str) -> &Self {
        self.update(|config| {
            config.add_class_global(name);
        });
        self
    }

    #[must_use]
    pub fn with_size(&self, token: &str) -> IconConfig {
        self.read().with_size(token)
    }

    #[must_use]
    pub fn with_stroke<S: Into<Cow<'static, str>>>(&self, stroke: S) -> IconConfig {
        self.read().with_stroke(stroke)
    }

    #[must_use]
    pub fn with_stroke_width<S: Into<Cow<'static, str>>>(&self, stroke_width: S) -> IconConfig {
        self.read().with_stroke_width(stroke_width)
    }

    #[must_use]
    pub fn with_attributes<A: Into<Attributes>>(&self, attributes: A) -> IconConfig {
        self.read().with_attributes(attributes)
    }

    #[must_use]
    pub fn with_class(&self, name: &str) -> IconConfig {
        self.read().with_class(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(i: &IconConfig) -> Markup {
        Markup::from(format!("square {} {}{}", i.width, i.stroke, i.attributes))
    }

    #[test]
    fn global_changes_are_seen_by_later_uses() {
        static SQUARE: SharedIcon = SharedIcon::new(square);

        SQUARE.set_size_global("lg").set_stroke_global("blue");
        SQUARE.add_class_global("a");

        let later: &'static SharedIcon = &SQUARE;
        assert_eq!(later.render().as_str(), r#"square 24 blue class="a""#);
        assert_eq!(later.get().height, "24");
    }

    #[test]
    fn local_copies_leave_the_shared_instance_alone() {
        static SQUARE: SharedIcon = SharedIcon::new(square);

        let local = SQUARE
            .with_size("xl")
            .with_stroke("red")
            .with_stroke_width("3")
            .with_class("x")
            .with_attributes([("id", "s")]);
        assert_eq!(local.width, "32");
        assert_eq!(local.stroke_width, "3");
        assert_eq!(local.render().as_str(), r#"square 32 red class="x" id="s""#);
        assert_eq!(SQUARE.render().as_str(), "square 16 currentColor");
    }

    #[test]
    fn update_and_reset() {
        static SQUARE: SharedIcon = SharedIcon::new(square);

        SQUARE
            .set_stroke_width_global("1.5")
            .merge_attributes_global([("role", "img")]);
        let width = SQUARE.update(|config| {
            config.set_size_global("xxs");
            config.width.clone()
        });
        assert_eq!(width, "6");
        assert_eq!(SQUARE.get().stroke_width, "1.5");
        assert!(SQUARE.read().attributes.contains_key("role"));

        SQUARE.reset();
        let config = SQUARE.get();
        assert_eq!(config.width, "16");
        assert_eq!(config.stroke_width, "2");
        assert!(config.attributes.is_empty());
        assert!(config.is_bound());
    }
}
