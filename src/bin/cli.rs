// src/bin/cli.rs
use std::process::ExitCode;

use clap::Parser;
use contrarian_plays::{cli, log};

fn main() -> ExitCode {
    if let Err(e) = color_eyre::install() {
        eprintln!("Warning: {e}");
    }
    let args = cli::Args::parse();
    let _guard = log::init(log::LogTarget::Stderr);

    match cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = e.exit_code();
            eprintln!("Error: {:?}", color_eyre::Report::new(e));
            ExitCode::from(code)
        }
    }
}
