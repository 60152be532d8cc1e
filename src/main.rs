mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    cli::parse_cli()
}
