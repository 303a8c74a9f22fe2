//! Lexis CLI binary.

use std::io::{self, Write};
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use lexis::cli::args::LexisArgs;
use lexis::cli::commands::{execute_command, report_error};

fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

fn main() {
    let args = LexisArgs::parse();

    Builder::new()
        .filter_level(log_level(args.verbosity()))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = execute_command(args) {
        // stderr is the last resort; nothing to do if writing it fails
        let _ = report_error(&e, &mut io::stderr().lock());
        process::exit(1);
    }
}
