// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::{btree_map, BTreeMap};
use std::fmt::{self, Display, Write};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::markup::escape_attr;

pub const CLASS: &str = "class";

/// A value of an extra (HTML/SVG) attribute.
///
/// Besides scalars, values may nest lists and maps,
/// for example to carry data meant for client side scripts.
/// Cloning a value copies the whole tree,
/// so a clone never shares any part with its original.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<AttrValue>),
    Map(BTreeMap<String, AttrValue>),
}

impl AttrValue {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        if let Self::Str(value) = self {
            Some(value)
        } else {
            None
        }
    }

    /// The text this value has when written as an attribute value,
    /// or `None` if it has no such form.
    ///
    /// Lists render their scalar items separated by a single space,
    /// nested lists and maps within them are left out.
    #[must_use]
    pub fn attr_text(&self) -> Option<String> {
        match self {
            Self::Bool(value) => Some(value.to_string()),
            Self::Int(value) => Some(value.to_string()),
            Self::Float(value) => Some(value.to_string()),
            Self::Str(value) => Some(value.clone()),
            Self::List(items) => Some(
                items
                    .iter()
                    .filter(|item| !matches!(item, Self::List(_) | Self::Map(_)))
                    .filter_map(Self::attr_text)
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            Self::Map(_) => None,
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl<V: Into<AttrValue>> From<Vec<V>> for AttrValue {
    fn from(items: Vec<V>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, AttrValue>> for AttrValue {
    fn from(map: BTreeMap<String, AttrValue>) -> Self {
        Self::Map(map)
    }
}

impl From<Attributes> for AttrValue {
    fn from(attributes: Attributes) -> Self {
        Self::Map(attributes.0)
    }
}

/// Whether `key` can be written as an attribute name as-is.
fn is_valid_attr_name(key: &str) -> bool {
    !key.is_empty()
        && !key.chars().any(|chr| {
            chr.is_whitespace()
                || chr.is_control()
                || matches!(chr, '"' | '\'' | '>' | '<' | '/' | '=')
        })
}

/// Extra attributes of an icon, keyed by attribute name.
///
/// Written out (see [`Attributes::to_html`]) in key order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Attributes(BTreeMap<String, AttrValue>);

impl Attributes {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0.get(key)
    }

    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut AttrValue> {
        self.0.get_mut(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<AttrValue>
    where
        K: Into<String>,
        V: Into<AttrValue>,
    {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.0.remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, AttrValue> {
        self.0.iter()
    }

    /// Union-merges `other` into `self`;
    /// keys present in both end up with the value from `other`.
    pub fn merge(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Appends a class name to the `class` attribute.
    ///
    /// If there is a textual `class` already,
    /// a single space and `name` are appended to it,
    /// otherwise `class` is set to `name`.
    /// Names already present are appended again.
    pub fn append_class(&mut self, name: &str) {
        match self.0.get_mut(CLASS) {
            Some(AttrValue::Str(classes)) => {
                classes.push(' ');
                classes.push_str(name);
            }
            _ => {
                self.0.insert(CLASS.to_owned(), AttrValue::Str(name.to_owned()));
            }
        }
    }

    /// Writes all attributes as they appear inside an opening tag,
    /// each one preceded by a single space,
    /// e.g. ` class="a b" data-x="1" hidden`.
    ///
    /// `true` results in the bare attribute name, `false` omits the attribute.
    /// Maps, and attributes with names that can not be written, are skipped.
    ///
    /// # Errors
    ///
    /// If `out` fails to be written to.
    pub fn write_html<W: Write>(&self, out: &mut W) -> fmt::Result {
        for (key, value) in &self.0 {
            if !is_valid_attr_name(key) {
                tracing::warn!("Skipping attribute with invalid name '{key}'");
                continue;
            }
            match value {
                AttrValue::Bool(true) => write!(out, " {key}")?,
                AttrValue::Bool(false) => {}
                other => {
                    if let Some(text) = other.attr_text() {
                        write!(out, r#" {key}="{}""#, escape_attr(&text))?;
                    } else {
                        tracing::debug!("Skipping attribute '{key}'; its value has no textual form");
                    }
                }
            }
        }
        Ok(())
    }

    /// The attributes as written by [`Self::write_html`].
    #[must_use]
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_html(f)
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl IntoIterator for Attributes {
    type Item = (String, AttrValue);
    type IntoIter = btree_map::IntoIter<String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a AttrValue);
    type IntoIter = btree_map::Iter<'a, String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
