// src/main.rs

use std::process::ExitCode;

use clap::Parser;
use tss_config::cli::CliArgs;
use tss_config::logging::init_logging;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    let result = init_logging(args.log_level).and_then(|()| tss_config::run(args));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tss-config error: {err:?}");
            ExitCode::FAILURE
        }
    }
}
