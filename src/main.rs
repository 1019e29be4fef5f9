use clap::Parser;
use clap::error::ErrorKind;

use check_wmi::cli::{Cli, parse_error_summary};
use check_wmi::{EXIT_UNKNOWN, commands, logging};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                println!("UNKNOWN - Parser arguments error: {}", parse_error_summary(&e));
                std::process::exit(EXIT_UNKNOWN);
            }
        },
    };

    logging::init(cli.debug);

    let status = commands::run(&cli);
    println!("{}", status.line());
    std::process::exit(status.exit_code());
}
