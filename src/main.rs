// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use line_views::{app, cli::Args, config::Config, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);
    logging::init(config.verbosity);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match app::run(&config, stdin.lock(), &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = out.flush();
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
