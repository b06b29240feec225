// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod ui;

use diag_table::paths::BaseDirResolver;
use diag_table::{Formatter, config, input};
use log::debug;
use std::io::{self, IsTerminal, Write};

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(2);
    }

    // Resolve configuration once; the renderer never reads the environment
    let mut configuration = config::from_process(&args.formatter_args);
    configuration.color = args.color_enabled(configuration.color, io::stdout().is_terminal());

    let results = match input::load_results(args.input.as_deref()) {
        Ok(r) => r,
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(2);
        }
    };

    let resolver = match BaseDirResolver::from_current_dir() {
        Ok(r) => r,
        Err(e) => {
            ui::print_error(&format!("Cannot determine working directory: {}", e));
            std::process::exit(2);
        }
    };

    let formatter = Formatter::new(configuration, resolver);
    let report = formatter.format(&results);
    debug!("Rendered report of {} bytes", report.len());

    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(report.as_bytes()).and_then(|_| stdout.flush()) {
        // A closed pipe (e.g. `| head`) is not worth an error message
        if e.kind() != io::ErrorKind::BrokenPipe {
            ui::print_error(&format!("Failed to write report: {}", e));
            std::process::exit(2);
        }
    }
}
