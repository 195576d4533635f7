use std::process::ExitCode;

use clap::Parser;

use doorfacet_cli::args::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    doorfacet_cli::init_logging(cli.verbose);
    match doorfacet_cli::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
