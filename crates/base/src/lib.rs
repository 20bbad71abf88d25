// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

pub mod util;

use git_version::git_version;

pub const VERSION: &str = git_version!(cargo_prefix = "", fallback = "unknown");
