mod address;
pub mod args;
mod logging;
pub mod shell;
mod util;

use std::process::ExitCode;

use args::Cli;
use clap::Parser;
use shell::Shell;

fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init(&cli.log_level);

    let mut shell = Shell::new(cli.offset, !cli.unsigned);

    let result = if cli.command.is_empty() {
        shell.command_loop()
    } else {
        shell.run_once(cli.command)
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
