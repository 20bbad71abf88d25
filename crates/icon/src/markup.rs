// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::borrow::Cow;
use std::fmt::Display;

/// A rendered piece of markup, ready to be embedded into an HTML document.
///
/// This is what render functions produce.
/// The contained text is trusted; it is not escaped again.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Markup(String);

impl Markup {
    /// The markup that renders nothing at all.
    #[must_use]
    pub const fn empty() -> Self {
        Self(String::new())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Markup {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Markup {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl AsRef<str> for Markup {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for Markup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escapes text for use inside a double- or single-quoted HTML attribute value.
///
/// Returns the input as-is (borrowed) if nothing needs escaping.
///
/// # Examples
///
/// - `currentColor` -> \
///   `currentColor`
/// - `a "b" & <c>` -> \
///   `a &quot;b&quot; &amp; &lt;c&gt;`
#[must_use]
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for chr in value.chars() {
        match chr {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_passes_plain_text_through() {
        assert!(matches!(escape_attr("0 0 24 24"), Cow::Borrowed("0 0 24 24")));
    }

    #[test]
    fn escape_special_chars() {
        assert_eq!(
            escape_attr(r#"a "b" & <c> 'd'"#),
            "a &quot;b&quot; &amp; &lt;c&gt; &#39;d&#39;"
        );
    }

    #[test]
    fn empty_markup() {
        assert!(Markup::empty().is_empty());
        assert_eq!(Markup::default(), Markup::empty());
        assert_eq!(Markup::from("<g/>").to_string(), "<g/>");
    }
}
