// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::markup::Markup;
use crate::shared::SharedIcon;

/// The process-wide instances of a set of icons, by icon name.
///
/// It only refers to the `static` [`SharedIcon`]s,
/// so a `static` registry (as returned by the generated `registry()`)
/// is constructed once, and changing an icon through it
/// changes that icon for every user, whether it looks the icon up here
/// or uses its `static` directly.
#[derive(Clone, Copy, Debug)]
pub struct Registry {
    icons: &'static [(&'static str, &'static SharedIcon)],
}

impl Registry {
    #[must_use]
    pub const fn new(icons: &'static [(&'static str, &'static SharedIcon)]) -> Self {
        Self { icons }
    }

    /// The shared instance of the icon registered as `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static SharedIcon> {
        self.icons
            .iter()
            .find(|(icon_name, _)| *icon_name == name)
            .map(|(_, icon)| *icon)
    }

    /// Renders the shared instance of an icon,
    /// or returns `None` if there is no icon registered under `name`.
    #[must_use]
    pub fn render(&self, name: &str) -> Option<Markup> {
        let icon = self.get(name);
        if icon.is_none() {
            tracing::debug!("No icon registered as '{name}'");
        }
        icon.map(SharedIcon::render)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.icons.iter().map(|(name, _)| *name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static SharedIcon)> {
        self.icons.iter().copied()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.icons.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}
