// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt::Display;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Width and height used for size tokens that are not one of [`Size`].
pub const FALLBACK_DIMENSIONS: (&str, &str) = ("24", "24");

/// The closed set of named icon sizes.
///
/// Tokens are lower-case: `xxs`, `xs`, `sm`, `md`, `lg`, `xl`, `xxl`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Size {
    Xxs,
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown icon size token '{0}'; expected one of: xxs, xs, sm, md, lg, xl, xxl")]
pub struct UnknownSize(pub String);

impl Size {
    pub const ALL: [Self; 7] = [
        Self::Xxs,
        Self::Xs,
        Self::Sm,
        Self::Md,
        Self::Lg,
        Self::Xl,
        Self::Xxl,
    ];

    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xxs => "xxs",
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "xxl",
        }
    }

    /// The `(width, height)` pair this size stands for,
    /// in unit-less pixels.
    #[must_use]
    pub const fn dimensions(self) -> (&'static str, &'static str) {
        match self {
            Self::Xxs => ("6", "6"),
            Self::Xs => ("12", "12"),
            Self::Sm => ("16", "16"),
            Self::Md => ("20", "20"),
            Self::Lg => ("24", "24"),
            Self::Xl => ("32", "32"),
            Self::Xxl => ("46", "46"),
        }
    }

    /// Looks up the dimensions for a size token.
    /// Unknown tokens resolve to [`FALLBACK_DIMENSIONS`].
    #[must_use]
    pub fn dimensions_for(token: &str) -> (&'static str, &'static str) {
        token.parse::<Self>().map_or_else(
            |err| {
                tracing::debug!("{err}; falling back to {FALLBACK_DIMENSIONS:?}");
                FALLBACK_DIMENSIONS
            },
            Self::dimensions,
        )
    }
}

impl FromStr for Size {
    type Err = UnknownSize;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.token() == token)
            .ok_or_else(|| UnknownSize(token.to_owned()))
    }
}

impl Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}
