use clap::Parser;
use dirtree_cli::args::Args;
use dirtree_cli::config::Config;
use dirtree_cli::presentation;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let config = Config::from(args);

    match presentation::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
