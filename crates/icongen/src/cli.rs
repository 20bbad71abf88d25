// SPDX-FileCopyrightText: 2021 - 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::PathBuf;

use clap::{command, value_parser, Arg, ArgAction, Command, ValueHint};
use const_format::formatcp;

use crate::config::{
    Config, DEFAULT_ARCHIVE_URL, DEFAULT_CRATE_PATH, DEFAULT_OUT_DIR, DEFAULT_TEMP_DIR,
};

pub const A_S_VERSION: char = 'V';
pub const A_L_VERSION: &str = "version";
pub const A_S_QUIET: char = 'q';
pub const A_L_QUIET: &str = "quiet";
pub const A_S_VERBOSE: char = 'v';
pub const A_L_VERBOSE: &str = "verbose";
pub const A_S_HEADER: char = 'H';
pub const A_L_HEADER: &str = "header";
pub const A_S_OUT_DIR: char = 'O';
pub const A_L_OUT_DIR: &str = "output-directory";
pub const A_S_TEMP_DIR: char = 'T';
pub const A_L_TEMP_DIR: &str = "temp-directory";
pub const A_S_URL: char = 'u';
pub const A_L_URL: &str = "url";
pub const A_L_CRATE_PATH: &str = "crate-path";

fn arg_version() -> Arg {
    Arg::new(A_L_VERSION)
        .help(formatcp!(
            "Print version information and exit. \
May be combined with -{A_S_QUIET},--{A_L_QUIET}, \
to really only output the version string."
        ))
        .short(A_S_VERSION)
        .long(A_L_VERSION)
        .action(ArgAction::SetTrue)
}

fn arg_quiet() -> Arg {
    Arg::new(A_L_QUIET)
        .help("Minimize or suppress output to stderr")
        .long_help("Minimize or suppress output to stderr; stdout only receives the final summary.")
        .action(ArgAction::SetTrue)
        .short(A_S_QUIET)
        .long(A_L_QUIET)
        .conflicts_with(A_L_VERBOSE)
}

fn arg_verbose() -> Arg {
    Arg::new(A_L_VERBOSE)
        .help("more verbose output (useful for debugging)")
        .short(A_S_VERBOSE)
        .long(A_L_VERBOSE)
        .action(ArgAction::SetTrue)
}

fn arg_header() -> Arg {
    Arg::new(A_L_HEADER)
        .help("The text to insert on top of all output files (generated Rust source code)")
        .short(A_S_HEADER)
        .long(A_L_HEADER)
        .action(ArgAction::Set)
        .value_hint(ValueHint::Other)
        .value_name("TEXT")
}

fn arg_out_dir() -> Arg {
    Arg::new(A_L_OUT_DIR)
        .help("The output directory, where Rust source files get written to")
        .short(A_S_OUT_DIR)
        .long(A_L_OUT_DIR)
        .action(ArgAction::Set)
        .value_parser(value_parser!(std::path::PathBuf))
        .value_hint(ValueHint::DirPath)
        .value_name("OUT_DIR")
        .default_value(DEFAULT_OUT_DIR)
}

fn arg_temp_dir() -> Arg {
    Arg::new(A_L_TEMP_DIR)
        .help("Scratch directory for the download; it gets removed at the end of the run")
        .short(A_S_TEMP_DIR)
        .long(A_L_TEMP_DIR)
        .action(ArgAction::Set)
        .value_parser(value_parser!(std::path::PathBuf))
        .value_hint(ValueHint::DirPath)
        .value_name("TEMP_DIR")
        .default_value(DEFAULT_TEMP_DIR)
}

fn arg_url() -> Arg {
    Arg::new(A_L_URL)
        .help("Where to download the ZIP archive of the icon set from")
        .short(A_S_URL)
        .long(A_L_URL)
        .action(ArgAction::Set)
        .value_hint(ValueHint::Url)
        .value_name("URL")
        .default_value(DEFAULT_ARCHIVE_URL)
}

fn arg_crate_path() -> Arg {
    Arg::new(A_L_CRATE_PATH)
        .help("The path through which generated code refers to the glyphs-icon crate")
        .long(A_L_CRATE_PATH)
        .action(ArgAction::Set)
        .value_hint(ValueHint::Other)
        .value_name("PATH")
        .default_value(DEFAULT_CRATE_PATH)
}

#[must_use]
pub fn args_matcher() -> Command {
    command!()
        .about(clap::crate_description!())
        .bin_name(clap::crate_name!())
        .help_expected(true)
        .disable_version_flag(true)
        .arg(arg_version())
        .arg(arg_quiet())
        .arg(arg_verbose())
        .arg(arg_header())
        .arg(arg_out_dir())
        .arg(arg_temp_dir())
        .arg(arg_url())
        .arg(arg_crate_path())
}

#[allow(clippy::print_stdout)]
fn print_version_and_exit(quiet: bool) {
    if !quiet {
        print!("{} ", clap::crate_name!());
    }
    println!("{}", crate::VERSION);
    std::process::exit(0);
}

#[derive(Clone, Debug)]
pub struct Args {
    pub quiet: bool,
    pub verbose: bool,
    pub config: Config,
}

fn args_to_config(args: &clap::ArgMatches) -> Config {
    let defaults = Config::default();
    Config {
        archive_url: args
            .get_one::<String>(A_L_URL)
            .cloned()
            .unwrap_or(defaults.archive_url),
        out_dir: args
            .get_one::<PathBuf>(A_L_OUT_DIR)
            .cloned()
            .unwrap_or(defaults.out_dir),
        temp_dir: args
            .get_one::<PathBuf>(A_L_TEMP_DIR)
            .cloned()
            .unwrap_or(defaults.temp_dir),
        header: args.get_one::<String>(A_L_HEADER).cloned(),
        crate_path: args
            .get_one::<String>(A_L_CRATE_PATH)
            .cloned()
            .unwrap_or(defaults.crate_path),
    }
}

/// Parses the command line arguments.
/// All of them are optional.
#[must_use]
pub fn parse() -> Args {
    let args = args_matcher().get_matches();

    let quiet = args.get_flag(A_L_QUIET);
    let version = args.get_flag(A_L_VERSION);
    if version {
        print_version_and_exit(quiet);
    }

    let verbose = args.get_flag(A_L_VERBOSE);
    let config = args_to_config(&args);

    Args {
        quiet,
        verbose,
        config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_consistent() {
        args_matcher().debug_assert();
    }

    #[test]
    fn no_arguments_means_defaults() {
        let args = args_matcher().get_matches_from(["glyphs-gen"]);
        let config = args_to_config(&args);
        assert_eq!(config.out_dir, PathBuf::from("./icon/icons"));
        assert_eq!(config.temp_dir, PathBuf::from("./temp"));
        assert_eq!(config.archive_url, DEFAULT_ARCHIVE_URL);
        assert_eq!(config.crate_path, "glyphs_icon");
        assert!(config.header.is_none());
        assert!(!args.get_flag(A_L_VERBOSE));
    }

    #[test]
    fn overrides() {
        let args = args_matcher().get_matches_from([
            "glyphs-gen",
            "-O",
            "src/icons",
            "--temp-directory",
            "/tmp/glyphs",
            "-H",
            "// generated",
            "--crate-path",
            "crate::icon",
            "-v",
        ]);
        let config = args_to_config(&args);
        assert_eq!(config.out_dir, PathBuf::from("src/icons"));
        assert_eq!(config.temp_dir, PathBuf::from("/tmp/glyphs"));
        assert_eq!(config.header.as_deref(), Some("// generated"));
        assert_eq!(config.crate_path, "crate::icon");
        assert!(args.get_flag(A_L_VERBOSE));
    }
}
