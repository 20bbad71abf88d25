// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

#![allow(unused_crate_dependencies)]

use cli_utils::logging;
use cli_utils::BoxResult;
pub use glyphs_gen as icongen;
use icongen::cli;
use tracing::metadata::LevelFilter;

#[allow(clippy::print_stdout)]
fn print_summary(report: &icongen::Report, config: &icongen::config::Config) {
    println!(
        "Successfully generated {} icon components in {}",
        report.count(),
        config.out_dir.display()
    );
    println!(
        "Include '{}' as a module in your crate and run 'cargo build' to compile them",
        report.index_file.display()
    );
}

fn main() -> BoxResult<()> {
    let log_reload_handle = logging::setup(clap::crate_name!())?;

    let cli_args = cli::parse();

    let log_level = if cli_args.verbose {
        LevelFilter::DEBUG
    } else if cli_args.quiet {
        LevelFilter::WARN
    } else {
        LevelFilter::INFO
    };
    logging::set_log_level_tracing(&log_reload_handle, log_level)?;

    let report = icongen::generate(&cli_args.config)?;
    if report.skipped > 0 {
        tracing::warn!("Skipped {} icons; see above for details", report.skipped);
    }
    print_summary(&report, &cli_args.config);

    Ok(())
}
